//! IRC case-mapping functions.
//!
//! Channel names are compared with the `rfc1459` mapping, where `[]\~` are
//! the uppercase forms of `{}|^`.

/// Convert a single character to IRC lowercase.
#[inline]
const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => (c as u8 + 32) as char,
        _ => c,
    }
}

/// Convert a string to IRC lowercase.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irc_to_lower() {
        assert_eq!(irc_to_lower("#Lobby"), "#lobby");
        assert_eq!(irc_to_lower("#Channel[1]"), "#channel{1}");
        assert_eq!(irc_to_lower("#a\\b~c"), "#a|b^c");
    }
}
