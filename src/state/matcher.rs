//! Identity matching.
//!
//! Decides whether a nickname or connection identity is protected in a
//! channel, and whether a sender is an administrator. Matching is
//! case-sensitive: `*` matches any run of characters (including none) and
//! `?` matches exactly one. There are no escapes or character classes, so
//! nickname punctuation like `[` and `]` matches literally.

use crate::config::{ChannelConfig, Config};

/// Glob-match `text` against `pattern`.
///
/// # Examples
///
/// ```
/// use slirc_warden::state::wildcard_match;
///
/// assert!(wildcard_match("*@example.com", "user@example.com"));
/// assert!(!wildcard_match("*@example.com", "user@evil.com"));
/// assert!(wildcard_match("te?t", "test"));
/// assert!(!wildcard_match("TEST", "test"));
/// ```
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut p = 0; // pattern index
    let mut t = 0; // text index
    let mut star_p = None; // position of last '*' in pattern
    let mut star_t = 0; // text position when we matched '*'

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star_p = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star_p {
            // Backtrack: let the last '*' swallow one more character.
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }

    p == pattern.len()
}

impl ChannelConfig {
    /// Exact match against the allow-listed nicknames.
    pub fn is_protected_nick(&self, nick: &str) -> bool {
        self.whitelist_nicks.iter().any(|n| n == nick)
    }

    /// Glob match of a `user@host` identity against the connection rules.
    pub fn is_protected_connection(&self, identity: &str) -> bool {
        self.whitelist_connections
            .iter()
            .any(|pattern| wildcard_match(pattern, identity))
    }

    /// Protected by either rule.
    pub fn is_protected(&self, nick: &str, identity: &str) -> bool {
        self.is_protected_nick(nick) || self.is_protected_connection(identity)
    }
}

impl Config {
    /// Whether a `nick!user@host` mask matches any admin pattern.
    pub fn is_admin(&self, mask: &str) -> bool {
        self.admins.iter().any(|pattern| wildcard_match(pattern, mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_basics() {
        assert!(wildcard_match("*", ""));
        assert!(wildcard_match("*", "anything"));
        assert!(wildcard_match("test*", "testing"));
        assert!(wildcard_match("*test", "unittest"));
        assert!(wildcard_match("*test*", "unittesting"));
        assert!(wildcard_match("a*b*c", "aXXbYYc"));
        assert!(!wildcard_match("a*b*c", "aXXbYY"));
        assert!(!wildcard_match("", "x"));
        assert!(wildcard_match("", ""));
    }

    #[test]
    fn test_question_mark_is_exactly_one() {
        assert!(wildcard_match("te?t", "test"));
        assert!(!wildcard_match("te?t", "tet"));
        assert!(!wildcard_match("te?t", "teest"));
    }

    #[test]
    fn test_case_sensitive_and_literal_brackets() {
        assert!(!wildcard_match("*@Example.com", "user@example.com"));
        assert!(wildcard_match("[away]*", "[away]bob"));
        assert!(!wildcard_match("[away]*", "abob"));
    }

    #[test]
    fn test_connection_rules_must_match_whole_identity() {
        let mut channel = ChannelConfig::new("#test");
        assert!(!channel.is_protected_connection("user@example.com"));

        channel.whitelist_connections.push("*@example.com".into());
        assert!(channel.is_protected_connection("user@example.com"));
        assert!(!channel.is_protected_connection("user@evil.com"));
        assert!(!channel.is_protected_connection("user@example.com.evil.net"));
    }

    #[test]
    fn test_nick_rule_is_exact() {
        let mut channel = ChannelConfig::new("#test");
        channel.whitelist_nicks.push("alice".into());
        assert!(channel.is_protected_nick("alice"));
        assert!(!channel.is_protected_nick("Alice"));
        assert!(!channel.is_protected_nick("alice_"));
        assert!(channel.is_protected("alice", "x@y"));
        assert!(!channel.is_protected("bob", "x@y"));
    }
}
