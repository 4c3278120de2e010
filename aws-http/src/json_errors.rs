/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error metadata for the AWS JSON protocols
//!
//! Both AWS JSON 1.1 and REST-JSON report an error code either in the `x-amzn-errortype` header or
//! in the `__type` (or `code`) member of the body, optionally qualified with a namespace and a
//! trailing documentation URL.

use crate::request_id::extract_request_id;
use bytes::Bytes;
use http::HeaderMap;
use smithy_json::deserialize::token::skip_value;
use smithy_json::deserialize::{json_token_iter, Error as DeserializeError, Token};
use smithy_types::Error as GenericError;

/// Strips the namespace and documentation URL from an error code
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

fn parse_error_body(bytes: &[u8]) -> Result<ErrorBody, DeserializeError> {
    let mut tokens = json_token_iter(bytes).peekable();
    let (mut typ, mut code, mut message) = (None, None, None);
    if let Some(Token::StartObject { .. }) = tokens.next().transpose()? {
        loop {
            match tokens.next().transpose()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    if let Some(Ok(Token::ValueString { value, .. })) = tokens.peek() {
                        match key.as_escaped_str() {
                            "code" => code = Some(value.to_unescaped()?.into_owned()),
                            "__type" => typ = Some(value.to_unescaped()?.into_owned()),
                            "message" | "Message" | "errorMessage" => {
                                message = Some(value.to_unescaped()?.into_owned())
                            }
                            _ => {}
                        }
                    }
                    skip_value(&mut tokens)?;
                }
                _ => return Err(DeserializeError::custom("expected object key or end object")),
            }
        }
        if tokens.next().is_some() {
            return Err(DeserializeError::custom(
                "found more JSON tokens after completing parsing",
            ));
        }
    }
    Ok(ErrorBody {
        code: code.or(typ),
        message,
    })
}

/// Reads the raw error code from the `x-amzn-errortype` header
pub fn error_type_from_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
}

/// Parses the error metadata of an AWS JSON error response
///
/// The header code takes precedence over the body. An empty body yields metadata without a code
/// or message.
pub fn parse_generic_error(
    response: &http::Response<Bytes>,
) -> Result<GenericError, DeserializeError> {
    let ErrorBody { code, message } = parse_error_body(response.body().as_ref())?;

    let mut err_builder = GenericError::builder();
    if let Some(code) = error_type_from_header(response.headers())
        .or_else(|| code.as_deref())
        .map(sanitize_error_code)
    {
        err_builder = err_builder.code(code);
    }
    if let Some(message) = message {
        err_builder = err_builder.message(message);
    }
    if let Some(request_id) = extract_request_id(response.headers()) {
        err_builder = err_builder.request_id(request_id);
    }
    let err = err_builder.build();
    tracing::debug!(
        status = %response.status(),
        code = ?err.code(),
        request_id = ?err.request_id(),
        "parsed error metadata"
    );
    Ok(err)
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_error_body, parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .status(400)
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).expect("valid error body");
        assert_eq!(err.code(), Some("FooError"));
        assert_eq!(err.message(), Some("Go to foo"));
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn error_type() {
        assert_eq!(
            Some("FooError".to_string()),
            parse_error_body(br#"{ "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn code_takes_priority() {
        assert_eq!(
            Some("BarError".to_string()),
            parse_error_body(br#"{ "code": "BarError", "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn header_takes_priority() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/")
            .body(Bytes::from_static(br#"{ "__type": "FooError" }"#))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
    }

    #[test]
    fn capitalized_message_and_unknown_fields() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type":"com.amazonaws.logs#LimitExceededException","extra":{"nested":[1,2]},"Message":"too many"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("LimitExceededException"));
        assert_eq!(err.message(), Some("too many"));
    }

    #[test]
    fn empty_body() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn malformed_body() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(br#"{"__type": "#))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
