//! IRC message prefix.
//!
//! Identifies the origin of a message: a server name, or a user's
//! `nick!user@host`.

/// IRC message prefix.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Prefix {
    /// Server name (e.g., "irc.example.com")
    ServerName(String),
    /// User prefix: (nickname, username, hostname)
    Nickname(String, String, String),
}

impl Prefix {
    /// Parse a prefix string. Lenient: components are not validated.
    pub fn new_from_str(s: &str) -> Self {
        match s.split_once('!') {
            Some((nick, rest)) => {
                let (user, host) = rest.split_once('@').unwrap_or((rest, ""));
                Prefix::Nickname(nick.to_string(), user.to_string(), host.to_string())
            }
            None => match s.split_once('@') {
                Some((nick, host)) => {
                    Prefix::Nickname(nick.to_string(), String::new(), host.to_string())
                }
                // A bare name with a dot is a server; anything else is a nick.
                None if s.contains('.') => Prefix::ServerName(s.to_string()),
                None => Prefix::Nickname(s.to_string(), String::new(), String::new()),
            },
        }
    }

    /// Create a user prefix from nick, user, and host components.
    #[cfg(test)]
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Prefix::Nickname(nick.into(), user.into(), host.into())
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Prefix::new_from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_user_prefix() {
        assert_eq!(
            Prefix::from("alice!al@host.example.com"),
            Prefix::new("alice", "al", "host.example.com")
        );
    }

    #[test]
    fn test_server_prefix() {
        assert_eq!(
            Prefix::from("irc.example.net"),
            Prefix::ServerName("irc.example.net".into())
        );
    }

    #[test]
    fn test_bare_nick_prefix() {
        assert_eq!(Prefix::from("NickServ"), Prefix::new("NickServ", "", ""));
        assert_eq!(Prefix::from("bob@host"), Prefix::new("bob", "", "host"));
    }
}
