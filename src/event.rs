//! Typed IRC events.
//!
//! Server lines are decoded into [`Event`] once, at the transport boundary.
//! Each variant carries exactly the fields its handler needs, so the router
//! never indexes into raw parameter arrays.

use crate::proto::{Message, Prefix, numeric};

/// The user behind an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub nick: String,
    pub user: String,
    pub host: String,
}

impl Source {
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    /// Connection identity (`user@host`), matched by connection rules.
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Full hostmask (`nick!user@host`), matched by admin rules.
    pub fn mask(&self) -> String {
        format!("{}!{}@{}", self.nick, self.user, self.host)
    }

    fn from_prefix(prefix: Option<&Prefix>) -> Option<Self> {
        match prefix? {
            Prefix::Nickname(nick, user, host) if !nick.is_empty() => {
                Some(Self::new(nick.as_str(), user.as_str(), host.as_str()))
            }
            _ => None,
        }
    }
}

/// An IRC event the router has a policy for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// RPL_WELCOME: registration complete.
    Welcome,
    /// RPL_NAMREPLY: one batch of raw name tokens (may carry `@`/`+` markers).
    NamesReply { channel: String, names: Vec<String> },
    /// RPL_ENDOFNAMES.
    EndOfNames { channel: String },
    Join { channel: String, source: Source },
    Part { channel: String, source: Source },
    Kick { channel: String, nick: String, source: Source },
    Quit { source: Source },
    NickChange { source: Source, new_nick: String },
    /// PRIVMSG to a channel or to the warden itself.
    Message { target: String, text: String, source: Source },
}

impl Event {
    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Welcome => "welcome",
            Event::NamesReply { .. } => "names",
            Event::EndOfNames { .. } => "end_of_names",
            Event::Join { .. } => "join",
            Event::Part { .. } => "part",
            Event::Kick { .. } => "kick",
            Event::Quit { .. } => "quit",
            Event::NickChange { .. } => "nick",
            Event::Message { .. } => "message",
        }
    }

    /// Decode a parsed message. Returns `None` for anything the warden
    /// ignores or for messages missing required parameters.
    pub fn from_message(msg: &Message) -> Option<Self> {
        let source = || Source::from_prefix(msg.prefix.as_ref());

        let event = match msg.command.as_str() {
            numeric::WELCOME => Event::Welcome,
            numeric::NAMREPLY => {
                // <me> [<symbol>] <channel> :<names>
                let n = msg.params.len();
                if n < 3 {
                    return None;
                }
                Event::NamesReply {
                    channel: msg.params[n - 2].clone(),
                    names: msg.params[n - 1]
                        .split_whitespace()
                        .map(str::to_string)
                        .collect(),
                }
            }
            numeric::ENDOFNAMES => Event::EndOfNames {
                channel: msg.arg(1)?.to_string(),
            },
            "JOIN" => Event::Join {
                channel: msg.arg(0)?.to_string(),
                source: source()?,
            },
            "PART" => Event::Part {
                channel: msg.arg(0)?.to_string(),
                source: source()?,
            },
            "KICK" => Event::Kick {
                channel: msg.arg(0)?.to_string(),
                nick: msg.arg(1)?.to_string(),
                source: source()?,
            },
            "QUIT" => Event::Quit { source: source()? },
            "NICK" => Event::NickChange {
                new_nick: msg.arg(0)?.to_string(),
                source: source()?,
            },
            "PRIVMSG" => Event::Message {
                target: msg.arg(0)?.to_string(),
                text: msg.arg(1)?.to_string(),
                source: source()?,
            },
            _ => return None,
        };

        Some(event)
    }
}
