//! URI encoding for values embedded in request templates.
//!
//! The external providers accept a handful of punctuation characters
//! literally; strict percent-encoding of those breaks their query matching,
//! so they are restored after encoding.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Standard form-encoding set: everything except alphanumerics and `. - _ *`.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'*');

/// Characters restored to their literal form after percent-encoding.
const RESTORED: [(&str, &str); 7] = [
    ("%20", "+"),
    ("%2C", ","),
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%7E", "~"),
];

/// Percent-encode a value for safe embedding in a URL path or query.
///
/// Spaces render as `+`, and `,` `!` `'` `(` `)` `~` stay literal.
pub fn uri_encode(raw: &str) -> String {
    let mut encoded = percent_encode(raw.as_bytes(), ENCODE_SET).to_string();
    for (escaped, literal) in RESTORED {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, literal);
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_becomes_plus() {
        assert_eq!(uri_encode("new york"), "new+york");
        assert!(!uri_encode("a b c").contains(' '));
    }

    #[test]
    fn test_allow_listed_punctuation_round_trips() {
        assert_eq!(uri_encode("a,b c!"), "a,b+c!");
        assert_eq!(uri_encode("it's (fine)~"), "it's+(fine)~");
    }

    #[test]
    fn test_reserved_characters_stay_encoded() {
        assert_eq!(uri_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(uri_encode("50%"), "50%25");
        assert_eq!(uri_encode("path/segment"), "path%2Fsegment");
    }

    #[test]
    fn test_alphanumerics_pass_through() {
        assert_eq!(uri_encode("Seattle98101"), "Seattle98101");
    }

    #[test]
    fn test_coordinates_stay_literal() {
        assert_eq!(uri_encode("47.6062,-122.3321"), "47.6062,-122.3321");
    }

    #[test]
    fn test_utf8_is_percent_encoded() {
        assert_eq!(uri_encode("münchen"), "m%C3%BCnchen");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(uri_encode(""), "");
    }
}
