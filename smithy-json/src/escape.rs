/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EscapeErrorKind {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    UnpairedSurrogate(u16),
    UnexpectedEndOfString,
}

/// A JSON string contained an escape sequence that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeError {
    kind: EscapeErrorKind,
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            UnpairedSurrogate(word) => write!(f, "unpaired UTF-16 surrogate: \\u{:04X}", word),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

fn needs_escape(chr: char) -> bool {
    matches!(chr, '"' | '\\' | '\u{00}'..='\u{1F}')
}

/// Escapes a string for embedding in a JSON string value.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    if !value.chars().any(needs_escape) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for chr in value.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
            _ => escaped.push(chr),
        }
    }
    Cow::Owned(escaped)
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !value.contains('\\') {
        return Ok(Cow::Borrowed(value));
    }
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(chr) = chars.next() {
        if chr != '\\' {
            unescaped.push(chr);
            continue;
        }
        let decoded = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{08}',
            Some('f') => '\u{0C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => read_unicode_escape(&mut chars)?,
            Some(other) => return Err(EscapeErrorKind::InvalidEscapeCharacter(other).into()),
            None => return Err(EscapeErrorKind::UnexpectedEndOfString.into()),
        };
        unescaped.push(decoded);
    }
    Ok(Cow::Owned(unescaped))
}

fn is_utf16_low_surrogate(word: u16) -> bool {
    word & 0xFC00 == 0xDC00
}

fn is_utf16_high_surrogate(word: u16) -> bool {
    word & 0xFC00 == 0xD800
}

/// Reads the four hex digits following a `\u`
fn read_utf16_word(chars: &mut Chars<'_>) -> Result<u16, EscapeError> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.chars().count() < 4 {
        return Err(EscapeErrorKind::UnexpectedEndOfString.into());
    }
    // `from_str_radix` would otherwise accept a leading `+`
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(digits).into());
    }
    u16::from_str_radix(&digits, 16)
        .map_err(|_| EscapeErrorKind::InvalidUnicodeEscape(digits).into())
}

/// Reads a `\u` escape (the `\u` already consumed), pulling in the low word when the first word
/// opens a surrogate pair.
fn read_unicode_escape(chars: &mut Chars<'_>) -> Result<char, EscapeError> {
    let high = read_utf16_word(chars)?;
    if !is_utf16_high_surrogate(high) {
        return std::char::from_u32(high as u32)
            .ok_or_else(|| EscapeErrorKind::UnpairedSurrogate(high).into());
    }
    match (chars.next(), chars.next()) {
        (Some('\\'), Some('u')) => {}
        (None, _) | (_, None) => return Err(EscapeErrorKind::UnexpectedEndOfString.into()),
        (Some(first), Some(second)) => {
            let mut found = String::new();
            found.push(first);
            found.push(second);
            found.extend(chars.by_ref().take(4));
            return Err(EscapeErrorKind::ExpectedSurrogatePair(found).into());
        }
    }
    let low = read_utf16_word(chars)?;
    if !is_utf16_low_surrogate(low) {
        return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
    }
    let codepoint = 0x10000 + (((high - 0xD800) as u32) << 10) + (low - 0xDC00) as u32;
    std::char::from_u32(codepoint).ok_or_else(|| EscapeErrorKind::InvalidSurrogatePair(high, low).into())
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, EscapeErrorKind};
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(r#"\\foobar"#, escape_string(r#"\foobar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("arn:aws:iam::123:role/x", escape_string("arn:aws:iam::123:role/x").as_ref());
    }

    #[test]
    fn unescape_no_escapes_borrows() {
        assert!(matches!(unescape_string("foo"), Ok(Cow::Borrowed("foo"))));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\u{08}f\u{0C}o\to\r\n",
            unescape_string(r#"\bf\fo\to\r\n"#).unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("/", unescape_string(r#"\/"#).unwrap());
        assert_eq!("\u{0}", unescape_string("\\u0000").unwrap());
        assert_eq!("\u{00AD}", unescape_string("\\u00AD").unwrap());
        assert_eq!("\u{D7FF}", unescape_string("\\uD7FF").unwrap());
        assert_eq!("\u{1F600}", unescape_string("\\uD83D\\uDE00").unwrap());
        assert_eq!("a\u{1F600}b", unescape_string("a\\ud83d\\ude00b").unwrap());
    }

    #[test]
    fn unescape_failures() {
        let kind = |input: &str| unescape_string(input).unwrap_err().kind;
        assert_eq!(EscapeErrorKind::UnexpectedEndOfString, kind("\\"));
        assert_eq!(EscapeErrorKind::UnexpectedEndOfString, kind("\\u00"));
        assert_eq!(EscapeErrorKind::UnexpectedEndOfString, kind("\\uD83D"));
        assert_eq!(EscapeErrorKind::InvalidEscapeCharacter('z'), kind("\\z"));
        assert_eq!(
            EscapeErrorKind::InvalidUnicodeEscape("+00A".into()),
            kind("\\u+00A")
        );
        assert_eq!(
            EscapeErrorKind::ExpectedSurrogatePair("abcdef".into()),
            kind("\\uD83Dabcdef")
        );
        assert_eq!(
            EscapeErrorKind::InvalidSurrogatePair(0xD83D, 0x0041),
            kind("\\uD83D\\u0041")
        );
        assert_eq!(EscapeErrorKind::UnpairedSurrogate(0xDE00), kind("\\uDE00"));
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s: String) {
            let serde_escaped = serde_json::to_string(&s).unwrap();
            let serde_escaped = &serde_escaped[1..(serde_escaped.len() - 1)];
            assert_eq!(serde_escaped, escape_string(&s))
        }

        #[test]
        fn round_trip(chr in proptest::char::any()) {
            let mut original = String::new();
            original.push(chr);

            let escaped = escape_string(&original);
            let unescaped = unescape_string(&escaped).unwrap();
            assert_eq!(original, unescaped);
        }
    }
}
