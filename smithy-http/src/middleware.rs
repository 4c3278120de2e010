/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response side of an operation: turning a loaded HTTP response into a typed result

use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;

/// Parse a loaded response using `handler`.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub fn parse_response<O, T, E>(
    mut response: http::Response<Bytes>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    O: ParseHttpResponse<Bytes, Output = Result<T, E>>,
{
    let parsed = match handler.parse_unloaded(&mut response) {
        Some(parsed) => parsed,
        None => handler.parse_loaded(&response),
    };
    tracing::trace!(status = %response.status(), success = parsed.is_ok(), "parsed response");
    match parsed {
        Ok(parsed) => Ok(SdkSuccess {
            raw: response,
            parsed,
        }),
        Err(err) => Err(SdkError::ServiceError { raw: response, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::parse_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct TeapotError;

    impl fmt::Display for TeapotError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "I'm a teapot")
        }
    }

    impl Error for TeapotError {}

    #[derive(Clone)]
    struct BodyLength;

    impl ParseStrictResponse for BodyLength {
        type Output = Result<usize, TeapotError>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status() == 418 {
                Err(TeapotError)
            } else {
                Ok(response.body().len())
            }
        }
    }

    #[test]
    fn success_keeps_raw_response() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        let success = parse_response(response, &BodyLength).unwrap();
        assert_eq!(success.parsed, 2);
        assert_eq!(success.raw.body().as_ref(), b"{}");
    }

    #[test]
    fn failure_is_a_service_error() {
        let response = http::Response::builder()
            .status(418)
            .body(Bytes::new())
            .unwrap();
        let err = parse_response(response, &BodyLength).unwrap_err();
        assert!(err.service_error().is_some());
        assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(418));
        assert_eq!(format!("{}", err), "service error: I'm a teapot");
        assert!(matches!(err, SdkError::ServiceError { .. }));
        assert!(err.source().is_some());
    }
}
