/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::{HeaderMap, HeaderValue};
use smithy_types::Error as GenericError;

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl RequestId for GenericError {
    fn request_id(&self) -> Option<&str> {
        GenericError::request_id(self)
    }
}

impl<B> RequestId for http::Response<B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.headers())
    }
}

/// Extracts a request ID from HTTP response headers
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use crate::request_id::{extract_request_id, RequestId};
    use http::HeaderValue;

    #[test]
    fn request_id_headers() {
        let mut response = http::Response::new(());
        assert_eq!(response.request_id(), None);

        response
            .headers_mut()
            .insert("x-amz-request-id", HeaderValue::from_static("fallback"));
        assert_eq!(response.request_id(), Some("fallback"));

        response
            .headers_mut()
            .insert("x-amzn-requestid", HeaderValue::from_static("preferred"));
        assert_eq!(extract_request_id(response.headers()), Some("preferred"));
    }
}
