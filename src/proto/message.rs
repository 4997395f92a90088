//! Nom-based IRC message parser.
//!
//! Parses a single server line into prefix, command and parameters. Tags
//! are accepted and discarded; the warden has no use for them.

use super::Prefix;
use nom::{
    IResult,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    error::ErrorKind,
    sequence::preceded,
};
use std::str::FromStr;
use thiserror::Error;

/// RFC 2812 caps a message at 15 parameters.
const MAX_PARAMS: usize = 15;

/// Line parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageParseError {
    #[error("empty message")]
    Empty,
    #[error("invalid message at position {position}: {kind:?}")]
    Invalid { position: usize, kind: ErrorKind },
}

/// An owned IRC message received from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub prefix: Option<Prefix>,
    /// Command name or three-digit numeric, uppercased.
    pub command: String,
    pub params: Vec<String>,
}

impl Message {
    /// Get parameter `n` as a string slice.
    pub fn arg(&self, n: usize) -> Option<&str> {
        self.params.get(n).map(String::as_str)
    }
}

fn parse_tags(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_until(" "))(input)
}

fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command name (1*letter or 3digit).
fn parse_command(input: &str) -> IResult<&str, &str> {
    let (rest, cmd) = take_while1(|c: char| c.is_ascii_alphanumeric())(input)?;

    let is_all_letters = cmd.chars().all(|c| c.is_ascii_alphabetic());
    let is_three_digits = cmd.len() == 3 && cmd.chars().all(|c| c.is_ascii_digit());

    if is_all_letters || is_three_digits {
        Ok((rest, cmd))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::AlphaNumeric,
        )))
    }
}

/// Split the remainder after the command into middle and trailing params.
fn parse_params(input: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut rest = input;

    while rest.starts_with(' ') && params.len() < MAX_PARAMS {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing.to_string());
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(rest[..end].to_string());
        rest = &rest[end..];
    }

    params
}

fn parse_message(input: &str) -> IResult<&str, (Option<&str>, &str)> {
    let (input, _tags) = opt(parse_tags)(input)?;
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (input, command) = parse_command(input)?;
    Ok((input, (prefix, command)))
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(MessageParseError::Empty);
        }

        match parse_message(line) {
            Ok((rest, (prefix, command))) => Ok(Message {
                prefix: prefix.map(Prefix::from),
                command: command.to_ascii_uppercase(),
                params: parse_params(rest),
            }),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                Err(MessageParseError::Invalid {
                    position: line.len() - e.input.len(),
                    kind: e.code,
                })
            }
            Err(nom::Err::Incomplete(_)) => Err(MessageParseError::Invalid {
                position: line.len(),
                kind: ErrorKind::Eof,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join() {
        let msg: Message = ":alice!al@host.example.com JOIN #test".parse().unwrap();
        assert_eq!(msg.prefix, Some(Prefix::new("alice", "al", "host.example.com")));
        assert_eq!(msg.command, "JOIN");
        assert_eq!(msg.params, vec!["#test"]);
    }

    #[test]
    fn test_parse_trailing_with_spaces() {
        let msg: Message = ":srv 353 warden = #test :@alice +bob carol\r\n".parse().unwrap();
        assert_eq!(msg.command, "353");
        assert_eq!(msg.arg(2), Some("#test"));
        assert_eq!(msg.arg(3), Some("@alice +bob carol"));
    }

    #[test]
    fn test_parse_tags_and_lowercase_command() {
        let msg: Message = "@time=2024-01-01T00:00:00Z :bob!b@h privmsg warden :hi there"
            .parse()
            .unwrap();
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.params, vec!["warden", "hi there"]);
    }

    #[test]
    fn test_parse_no_prefix() {
        let msg: Message = "PING :irc.example.net".parse().unwrap();
        assert!(msg.prefix.is_none());
        assert_eq!(msg.arg(0), Some("irc.example.net"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Message>(), Err(MessageParseError::Empty));
        assert!(":only.a.prefix".parse::<Message>().is_err());
        assert!("12 foo".parse::<Message>().is_err());
    }

    #[test]
    fn test_empty_trailing_is_kept() {
        let msg: Message = ":bob!b@h PART #test :".parse().unwrap();
        assert_eq!(msg.params, vec!["#test", ""]);
    }
}
