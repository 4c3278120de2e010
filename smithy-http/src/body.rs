/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Request bodies produced by the
/// marshallers are always fully in memory, so the length is known up front and the body can be
/// cloned until it has been polled.
pub struct SdkBody {
    inner: Inner,
}

enum Inner {
    Once(Option<Bytes>),
    Taken,
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Once(Some(bytes)) => f
                .debug_tuple("SdkBody")
                .field(&String::from_utf8_lossy(bytes))
                .finish(),
            Inner::Once(None) => f.write_str("SdkBody(empty)"),
            Inner::Taken => f.write_str("SdkBody(taken)"),
        }
    }
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody {
            inner: Inner::Once(None),
        }
    }

    /// A body whose contents have already been read. Cannot be cloned or read again.
    pub fn taken() -> Self {
        SdkBody { inner: Inner::Taken }
    }

    /// The in-memory contents of this body, if they have not been polled yet.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Once(Some(bytes)) => Some(bytes.as_ref()),
            Inner::Once(None) => Some(&[][..]),
            Inner::Taken => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|bytes| bytes.len() as u64)
    }

    pub fn try_clone(&self) -> Option<Self> {
        match &self.inner {
            Inner::Once(bytes) => Some(SdkBody {
                inner: Inner::Once(bytes.clone()),
            }),
            Inner::Taken => None,
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match std::mem::replace(&mut self.inner, Inner::Taken) {
            Inner::Once(Some(bytes)) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
            Inner::Once(_) => Poll::Ready(None),
            Inner::Taken => Poll::Ready(Some(Err("body has already been read".into()))),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes)),
        }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        !matches!(&self.inner, Inner::Once(Some(bytes)) if !bytes.is_empty())
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.content_length() {
            Some(length) => http_body::SizeHint::with_exact(length),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[test]
    fn in_memory_bodies() {
        let body = SdkBody::from("{\"analyzerName\":\"a\"}");
        assert_eq!(body.bytes(), Some("{\"analyzerName\":\"a\"}".as_bytes()));
        assert_eq!(body.content_length(), Some(20));
        assert_eq!(body.size_hint().exact(), Some(20));
        assert!(!body.is_end_stream());

        let empty = SdkBody::empty();
        assert_eq!(empty.bytes(), Some(&b""[..]));
        assert_eq!(empty.content_length(), Some(0));
        assert!(empty.is_end_stream());
    }

    #[test]
    fn clone_until_taken() {
        let body = SdkBody::from(String::from("hello"));
        let cloned = body.try_clone().expect("in-memory bodies are cloneable");
        assert_eq!(cloned.bytes(), Some("hello".as_bytes()));
        assert!(SdkBody::taken().try_clone().is_none());
        assert_eq!(SdkBody::taken().bytes(), None);
    }

    #[test]
    fn debug_shows_contents() {
        assert_eq!(format!("{:?}", SdkBody::from("hi")), "SdkBody(\"hi\")");
        assert_eq!(format!("{:?}", SdkBody::empty()), "SdkBody(empty)");
    }
}
