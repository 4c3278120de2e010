/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as URI path labels

use crate::operation::SerializationError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use smithy_types::instant::Format;
use smithy_types::Instant;

/// Characters percent-encoded in path segments and query values
pub(crate) const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

// Greedy labels (`{key+}`) span several segments and keep their slashes.
const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> Result<String, SerializationError> {
    Ok(fmt_string(t.fmt(format)?, false))
}

#[cfg(test)]
mod test {
    use crate::label::{fmt_string, fmt_timestamp};
    use percent_encoding::percent_decode_str;
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn greedy_params_are_correctly_encoded() {
        assert_eq!(fmt_string("a/b/c", true), "a/b/c");
        assert_eq!(fmt_string("a/b/c", false), "a%2Fb%2Fc");
    }

    #[test]
    fn arns_are_encoded() {
        assert_eq!(
            fmt_string("arn:aws:s3:::my bucket", false),
            "arn%3Aaws%3As3%3A%3A%3Amy%20bucket"
        );
        assert_eq!(fmt_string("plain-id_1.2~x", false), "plain-id_1.2~x");
        assert_eq!(fmt_string("ünïcode", false), "%C3%BCn%C3%AFcode");
        assert_eq!(fmt_string("", false), "");
    }

    #[test]
    fn timestamps_are_encoded() {
        assert_eq!(
            fmt_timestamp(&Instant::from_epoch_seconds(1576540098), Format::DateTime).unwrap(),
            "2019-12-16T23%3A48%3A18Z"
        );
    }

    proptest! {
        #[test]
        fn label_encoding_round_trips(value: String) {
            let encoded = fmt_string(&value, false);
            assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)));
            assert_eq!(percent_decode_str(&encoded).decode_utf8().unwrap(), value);
        }

        #[test]
        fn greedy_labels_keep_segments(value: String) {
            let encoded = fmt_string(&value, true);
            assert_eq!(encoded.matches('/').count(), value.matches('/').count());
            assert_eq!(percent_decode_str(&encoded).decode_utf8().unwrap(), value);
        }
    }
}
