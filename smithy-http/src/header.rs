/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing HTTP request headers

use http::header::HeaderName;
use http::HeaderValue;

/// Sets `key` on the builder unless a value is already present
pub fn set_request_header_if_absent(
    request: http::request::Builder,
    key: HeaderName,
    value: HeaderValue,
) -> http::request::Builder {
    let present = request
        .headers_ref()
        .map(|headers| headers.contains_key(&key))
        .unwrap_or(false);
    if present {
        request
    } else {
        request.header(key, value)
    }
}

#[cfg(test)]
mod test {
    use crate::header::set_request_header_if_absent;
    use http::header::CONTENT_TYPE;
    use http::HeaderValue;

    #[test]
    fn header_is_only_set_when_absent() {
        let builder = http::Request::builder().header(CONTENT_TYPE, "application/json");
        let builder = set_request_header_if_absent(
            builder,
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-amz-json-1.1"),
        );
        let request = builder.body(()).unwrap();
        assert_eq!(
            request.headers().get_all(CONTENT_TYPE).iter().count(),
            1
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");

        let request = set_request_header_if_absent(
            http::Request::builder(),
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-amz-json-1.1"),
        )
        .body(())
        .unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "application/x-amz-json-1.1");
    }
}
