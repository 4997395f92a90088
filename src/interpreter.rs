//! Directed-message interpreter.
//!
//! Channel lines addressed to the warden look like `warden: add carol`.
//! The address prefix (optional whitespace, the bot nick, any punctuation,
//! then whitespace) is stripped and the rest is classified against the
//! `add <nick>` / `remove <nick>` grammar. Anything else is plain chat.

use crate::error::RouterError;
use regex::Regex;

/// Characters legal in a nickname token: letters, digits and ``_-\[]{}^`|``.
pub fn is_nick_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-\\[]{}^`|".contains(c)
}

/// Whether `s` is a non-empty run of nickname characters.
pub fn is_valid_nick(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_nick_char)
}

const NICK_TOKEN: &str = r"([a-zA-Z0-9_\-\\\[\]\{\}\^`|]+)";

/// A recognized inline command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Add(String),
    Remove(String),
}

/// Compiled grammar for one bot nickname.
#[derive(Debug, Clone)]
pub struct Interpreter {
    nick: String,
    address: Regex,
    add: Regex,
    remove: Regex,
}

impl Interpreter {
    pub fn new(nick: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            nick: nick.to_string(),
            address: Regex::new(&format!(r"^\s*{}[[:punct:]]*\s+", regex::escape(nick)))?,
            add: Regex::new(&format!(r"^add\s+{NICK_TOKEN}\s*$"))?,
            remove: Regex::new(&format!(r"^remove\s+{NICK_TOKEN}\s*$"))?,
        })
    }

    /// Whether a channel line starts with the bot's nick.
    pub fn is_addressed(&self, text: &str) -> bool {
        text.starts_with(&self.nick)
    }

    /// Remove the leading address, if any.
    pub fn strip_address<'a>(&self, text: &'a str) -> &'a str {
        match self.address.find(text) {
            Some(m) => &text[m.end()..],
            None => text,
        }
    }

    /// Strip the address and classify the remainder.
    pub fn interpret(&self, text: &str) -> Result<Directive, RouterError> {
        let body = self.strip_address(text);

        if let Some(caps) = self.add.captures(body) {
            return Ok(Directive::Add(caps[1].to_string()));
        }
        if let Some(caps) = self.remove.captures(body) {
            return Ok(Directive::Remove(caps[1].to_string()));
        }
        Err(RouterError::MalformedCommandToken(body.to_string()))
    }
}
