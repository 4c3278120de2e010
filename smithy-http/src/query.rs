/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values and writing them as URI query parameters

use crate::label::BASE_SET;
use crate::operation::SerializationError;
use percent_encoding::utf8_percent_encode;
use smithy_types::instant::Format;
use smithy_types::Instant;
use std::fmt::Display;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Numbers and booleans need no escaping
pub fn fmt_default<T: Display>(t: T) -> String {
    t.to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> Result<String, SerializationError> {
    Ok(fmt_string(t.fmt(format)?))
}

/// Appends `key=value` pairs to a URI, starting the query string on the first pair
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    /// `key` and `value` must already be encoded
    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(key);
        self.out.push('=');
        self.out.push_str(value);
        self.prefix = '&';
    }

    /// Writes a key with no value
    pub fn push_v(&mut self, key: &str) {
        self.out.push(self.prefix);
        self.out.push_str(key);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_default, fmt_string, Writer};
    use percent_encoding::percent_decode_str;
    use proptest::proptest;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
        assert_eq!(fmt_default(25).as_str(), "25");
        assert_eq!(fmt_default(true).as_str(), "true");
    }

    #[test]
    fn writer_repeats_keys() {
        let mut uri = String::from("/tags/arn");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("tagKeys", "a");
        writer.push_kv("tagKeys", "b");
        writer.push_v("flag");
        assert_eq!(uri, "/tags/arn?tagKeys=a&tagKeys=b&flag");
    }

    #[test]
    fn writer_appends_to_existing_query() {
        let mut uri = String::from("/finding?x=1");
        Writer::new(&mut uri).push_kv("analyzerArn", "arn");
        assert_eq!(uri, "/finding?x=1&analyzerArn=arn");
    }

    proptest! {
        #[test]
        fn query_values_never_break_the_query_string(value: String) {
            let encoded = fmt_string(&value);
            assert!(!encoded.contains(&['&', '=', '#', '+', ' '][..]));
            assert_eq!(percent_decode_str(&encoded).decode_utf8().unwrap(), value);
        }
    }
}
