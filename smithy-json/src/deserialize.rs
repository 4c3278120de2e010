/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::ErrorReason;
use smithy_types::Number;

mod error;
pub mod token;

pub use error::Error;
pub use token::{EscapedStr, Offset, Token};

/// Creates a JSON token iterator over the given input.
///
/// The iterator yields tokens lazily and never allocates for string values: strings come back
/// escaped and are only unescaped when the caller asks via [`EscapedStr::to_unescaped`].
/// Consecutive top-level values are allowed; the iterator ends once the input is exhausted
/// between values. After the first error the iterator yields `None`.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, Error> {
        self.peek_byte()
            .ok_or_else(|| self.error(ErrorReason::UnexpectedEos))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn error_at(&self, offset: usize, reason: ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    fn error(&self, reason: ErrorReason) -> Error {
        self.error_at(self.index, reason)
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn replace_state(&mut self, state: State) {
        if let Some(top) = self.state_stack.last_mut() {
            *top = state;
        }
    }

    fn start_object(&mut self) -> Token<'a> {
        let offset = Offset(self.index);
        self.advance();
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject { offset }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = Offset(self.index);
        self.advance();
        self.state_stack.pop();
        Token::EndObject { offset }
    }

    fn start_array(&mut self) -> Token<'a> {
        let offset = Offset(self.index);
        self.advance();
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray { offset }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = Offset(self.index);
        self.advance();
        self.state_stack.pop();
        Token::EndArray { offset }
    }

    /// Reads a string starting at the opening quote, returning its escaped contents.
    fn read_string(&mut self) -> Result<&'a str, Error> {
        let input = self.input;
        self.advance();
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&input[start..self.index])
                        .map_err(|_| self.error_at(start, ErrorReason::InvalidUtf8))?;
                    self.advance();
                    return Ok(value);
                }
                b'\\' => {
                    self.advance();
                    match self.peek_expect()? {
                        b'\\' | b'/' | b'"' | b'b' | b'f' | b'n' | b'r' | b't' | b'u' => {
                            self.advance()
                        }
                        byte => return Err(self.error(ErrorReason::InvalidEscape(byte.into()))),
                    }
                }
                byte @ 0x00..=0x1F => {
                    return Err(self.error(ErrorReason::UnexpectedControlCharacter(byte)))
                }
                _ => self.advance(),
            }
        }
    }

    fn expect_literal(&mut self, literal: &'static [u8]) -> Result<(), Error> {
        let start = self.index;
        let end = start + literal.len();
        if self.input.get(start..end) != Some(literal) {
            return Err(self.error_at(
                start,
                ErrorReason::ExpectedLiteral(String::from_utf8_lossy(literal).into()),
            ));
        }
        self.index = end;
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token<'a>, Error> {
        let input = self.input;
        let start = self.index;
        while let Some(b'-') | Some(b'+') | Some(b'.') | Some(b'e') | Some(b'E') | Some(b'0'..=b'9') =
            self.peek_byte()
        {
            self.advance();
        }
        let text = std::str::from_utf8(&input[start..self.index])
            .map_err(|_| self.error_at(start, ErrorReason::InvalidUtf8))?;
        let value =
            parse_number(text).ok_or_else(|| self.error_at(start, ErrorReason::InvalidNumber))?;
        Ok(Token::ValueNumber {
            offset: Offset(start),
            value,
        })
    }

    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => Ok(Token::ValueString {
                offset,
                value: EscapedStr::new(self.read_string()?),
            }),
            b'n' => {
                self.expect_literal(b"null")?;
                Ok(Token::ValueNull { offset })
            }
            b't' => {
                self.expect_literal(b"true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            b'f' => {
                self.expect_literal(b"false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            b'-' | b'0'..=b'9' => self.read_number(),
            byte => Err(self.error(ErrorReason::UnexpectedToken(
                byte.into(),
                "'{', '[', '\"', 'null', 'true', 'false', <number>",
            ))),
        }
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'"' => {}
            byte => return Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'\"'"))),
        }
        let key = EscapedStr::new(self.read_string()?);
        self.discard_whitespace();
        match self.peek_expect()? {
            b':' => self.advance(),
            byte => return Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "':'"))),
        }
        Ok(Token::ObjectKey { offset, key })
    }

    fn read_next(&mut self, state: State) -> Result<Token<'a>, Error> {
        match state {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => match self.peek_expect()? {
                b']' => Ok(self.end_array()),
                _ => {
                    self.replace_state(State::ArrayNextValueOrEnd);
                    self.read_value()
                }
            },
            State::ArrayNextValueOrEnd => match self.peek_expect()? {
                b']' => Ok(self.end_array()),
                b',' => {
                    self.advance();
                    self.read_value()
                }
                byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "']', ','"))),
            },
            State::ObjectFirstKeyOrEnd => match self.peek_expect()? {
                b'}' => Ok(self.end_object()),
                _ => {
                    self.replace_state(State::ObjectFieldValue);
                    self.read_object_key()
                }
            },
            State::ObjectNextKeyOrEnd => match self.peek_expect()? {
                b'}' => Ok(self.end_object()),
                b',' => {
                    self.advance();
                    self.replace_state(State::ObjectFieldValue);
                    self.read_object_key()
                }
                byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'}', ','"))),
            },
            State::ObjectFieldValue => {
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.discard_whitespace();
        let state = *self.state_stack.last()?;
        if state == State::Initial && self.index == self.input.len() {
            return None;
        }
        let result = self.read_next(state);
        if result.is_err() {
            self.state_stack.clear();
        }
        Some(result)
    }
}

/// Integers that fit are kept exact, everything else becomes a float.
fn parse_number(text: &str) -> Option<Number> {
    let is_float = text.contains(|chr| matches!(chr, '.' | 'e' | 'E'));
    if !is_float {
        if let Some(negative) = text.strip_prefix('-') {
            if !negative.starts_with('+') {
                if let Ok(value) = text.parse::<i64>() {
                    return Some(Number::NegInt(value));
                }
            }
        } else if !text.starts_with('+') {
            if let Ok(value) = text.parse::<u64>() {
                return Some(Number::PosInt(value));
            }
        }
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Number::Float)
}

#[cfg(test)]
mod tests {
    use super::error::{Error, ErrorReason};
    use super::json_token_iter;
    use super::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert_eq!(None, json_token_iter(b"").next());
        assert_eq!(None, json_token_iter(b" ").next());
        assert_eq!(None, json_token_iter(b"\t").next());
    }

    #[test]
    fn test_empty_string() {
        let mut iter = json_token_iter(b"\"\"");
        assert_eq!(value_string(0, ""), iter.next());
        assert_eq!(None, iter.next());

        let mut iter = json_token_iter(b" \r\n\t \"\"  ");
        assert_eq!(value_string(5, ""), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_empty_array() {
        let mut iter = json_token_iter(b"[]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(end_array(1), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_empty_object() {
        let mut iter = json_token_iter(b"{}");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(end_object(1), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_literals() {
        let mut iter = json_token_iter(b"true false null");
        assert_eq!(value_bool(0, true), iter.next());
        assert_eq!(value_bool(5, false), iter.next());
        assert_eq!(value_null(11), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_numbers() {
        let mut iter = json_token_iter(b"5 -5 1.5 -1.5e3 1E2 18446744073709551615 18446744073709551616");
        assert_eq!(value_number(0, Number::PosInt(5)), iter.next());
        assert_eq!(value_number(2, Number::NegInt(-5)), iter.next());
        assert_eq!(value_number(5, Number::Float(1.5)), iter.next());
        assert_eq!(value_number(9, Number::Float(-1500.0)), iter.next());
        assert_eq!(value_number(16, Number::Float(100.0)), iter.next());
        assert_eq!(value_number(20, Number::PosInt(u64::MAX)), iter.next());
        assert_eq!(
            value_number(41, Number::Float(18446744073709551616.0)),
            iter.next()
        );
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidNumber, Some(0)))),
            json_token_iter(b"-").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidNumber, Some(0)))),
            json_token_iter(b"1-2").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidNumber, Some(0)))),
            json_token_iter(b"-+5").next()
        );
    }

    #[test]
    fn test_object_with_values() {
        let mut iter = json_token_iter(
            br#"{ "resourceArn": "arn:aws:s3:::bucket", "isPublic" : true,
                 "sharedVia": ["a", null], "error": null, "count": -3 }"#,
        );
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(2, "resourceArn"), iter.next());
        assert_eq!(value_string(17, "arn:aws:s3:::bucket"), iter.next());
        assert_eq!(object_key(40, "isPublic"), iter.next());
        assert_eq!(value_bool(53, true), iter.next());
        assert_eq!(object_key(76, "sharedVia"), iter.next());
        assert_eq!(start_array(89), iter.next());
        assert_eq!(value_string(90, "a"), iter.next());
        assert_eq!(value_null(95), iter.next());
        assert_eq!(end_array(99), iter.next());
        assert_eq!(object_key(102, "error"), iter.next());
        assert_eq!(value_null(111), iter.next());
        assert_eq!(object_key(117, "count"), iter.next());
        assert_eq!(value_number(126, Number::NegInt(-3)), iter.next());
        assert_eq!(end_object(129), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_nested() {
        let mut iter = json_token_iter(br#"[{"a":[{}]},[]]"#);
        assert_eq!(start_array(0), iter.next());
        assert_eq!(start_object(1), iter.next());
        assert_eq!(object_key(2, "a"), iter.next());
        assert_eq!(start_array(6), iter.next());
        assert_eq!(start_object(7), iter.next());
        assert_eq!(end_object(8), iter.next());
        assert_eq!(end_array(9), iter.next());
        assert_eq!(end_object(10), iter.next());
        assert_eq!(start_array(12), iter.next());
        assert_eq!(end_array(13), iter.next());
        assert_eq!(end_array(14), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_escaped_strings_are_left_escaped() {
        let mut iter = json_token_iter(r#""a\"b\\cé""#.as_bytes());
        assert_eq!(value_string(0, r#"a\"b\\cé"#), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            Some(Err(Error::new(ErrorReason::UnexpectedEos, Some(4)))),
            json_token_iter(b"\"abc").next()
        );
        let mut iter = json_token_iter(b"{\"a\": 1");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "a"), iter.next());
        assert_eq!(value_number(6, Number::PosInt(1)), iter.next());
        assert_eq!(
            Some(Err(Error::new(ErrorReason::UnexpectedEos, Some(7)))),
            iter.next()
        );
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::ExpectedLiteral("true".into()),
                Some(0)
            ))),
            json_token_iter(b"truth").next()
        );
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken(
                    'x',
                    "'{', '[', '\"', 'null', 'true', 'false', <number>"
                ),
                Some(0)
            ))),
            json_token_iter(b"x").next()
        );
        let mut iter = json_token_iter(b"{5: 1}");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken('5', "'\"'"),
                Some(1)
            ))),
            iter.next()
        );
        let mut iter = json_token_iter(b"{\"a\" 1}");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken('1', "':'"),
                Some(5)
            ))),
            iter.next()
        );
    }

    #[test]
    fn test_invalid_string_contents() {
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedControlCharacter(b'\n'),
                Some(2)
            ))),
            json_token_iter(b"\"a\nb\"").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidEscape('q'), Some(3)))),
            json_token_iter(b"\"a\\q\"").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidUtf8, Some(1)))),
            json_token_iter(b"\"\xff\"").next()
        );
    }
}
