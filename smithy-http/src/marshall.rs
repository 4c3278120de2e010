/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request side of an operation: turning a modeled input into an HTTP request

use crate::body::SdkBody;
use crate::operation::BuildError;
use http::header::CONTENT_LENGTH;
use http::HeaderValue;

/// Converts an operation input into a complete HTTP request.
///
/// `input` is an `Option` because callers may reach an operation without having built an input;
/// implementations must fail with [`BuildError::MissingInput`] rather than sending a request.
pub trait MarshallRequest {
    type Input;

    fn marshall(input: Option<&Self::Input>) -> Result<http::Request<SdkBody>, BuildError>;
}

/// Attaches `body` to `builder`, setting `Content-Length` from the body's byte length.
///
/// An explicit `Content-Length` already present on the builder is replaced. Requests without a
/// body carry no `Content-Length`.
pub fn assemble(
    builder: http::request::Builder,
    body: SdkBody,
) -> Result<http::Request<SdkBody>, BuildError> {
    let content_length = body.content_length();
    let mut request = builder.body(body)?;
    if let Some(content_length) = content_length.filter(|len| *len > 0) {
        request
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from(content_length));
    }
    Ok(request)
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::marshall::{assemble, MarshallRequest};
    use crate::operation::BuildError;
    use http::header::CONTENT_LENGTH;

    struct Echo;

    impl MarshallRequest for Echo {
        type Input = String;

        fn marshall(input: Option<&String>) -> Result<http::Request<SdkBody>, BuildError> {
            let input = input.ok_or(BuildError::MissingInput { operation: "Echo" })?;
            assemble(
                http::Request::builder().method("POST").uri("/echo"),
                SdkBody::from(input.clone()),
            )
        }
    }

    #[test]
    fn content_length_is_byte_length() {
        let request = Echo::marshall(Some(&"héllo".to_string())).unwrap();
        assert_eq!(request.headers()[CONTENT_LENGTH], "6");
        assert_eq!(request.body().bytes(), Some("héllo".as_bytes()));
    }

    #[test]
    fn empty_body_has_no_length() {
        let request = assemble(http::Request::builder(), SdkBody::empty()).unwrap();
        assert!(request.headers().get(CONTENT_LENGTH).is_none());
    }

    #[test]
    fn content_length_replaces_existing() {
        let request = assemble(
            http::Request::builder().header(CONTENT_LENGTH, "100"),
            SdkBody::from("{}"),
        )
        .unwrap();
        assert_eq!(request.headers().get_all(CONTENT_LENGTH).iter().count(), 1);
        assert_eq!(request.headers()[CONTENT_LENGTH], "2");
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = Echo::marshall(None).unwrap_err();
        assert!(matches!(err, BuildError::MissingInput { operation: "Echo" }));
    }
}
