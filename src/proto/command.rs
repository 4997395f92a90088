//! Outbound IRC commands.
//!
//! Everything the warden ever sends to the server. `Display` renders the
//! wire line without the trailing CRLF; the line codec appends the
//! terminator.

use std::fmt;

/// A command sent by the warden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// PASS <password>
    Pass(String),
    /// NICK <nick>
    Nick(String),
    /// USER <user> 0 * :<realname>
    User(String, String),
    /// JOIN <channel>
    Join(String),
    /// MODE <target> <modes> [args...]
    Mode {
        target: String,
        modes: String,
        args: Vec<String>,
    },
    /// NOTICE <target> :<text>
    Notice(String, String),
    /// PRIVMSG <target> :<text>
    Privmsg(String, String),
    /// PONG :<token>
    Pong(String),
}

impl Command {
    /// MODE with any number of mask arguments.
    pub fn mode<I, S>(target: impl Into<String>, modes: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Command::Mode {
            target: target.into(),
            modes: modes.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pass(password) => write!(f, "PASS {password}"),
            Command::Nick(nick) => write!(f, "NICK {nick}"),
            Command::User(user, realname) => write!(f, "USER {user} 0 * :{realname}"),
            Command::Join(channel) => write!(f, "JOIN {channel}"),
            Command::Mode {
                target,
                modes,
                args,
            } => {
                write!(f, "MODE {target} {modes}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            Command::Notice(target, text) => write!(f, "NOTICE {target} :{text}"),
            Command::Privmsg(target, text) => write!(f, "PRIVMSG {target} :{text}"),
            Command::Pong(token) => write!(f, "PONG :{token}"),
        }
    }
}
