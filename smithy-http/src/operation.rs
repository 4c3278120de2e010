/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use smithy_types::instant::DateTimeFormatError;
use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// A request ready for the signing and dispatch stages, paired with the handler that will parse
/// its response.
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn properties(&self) -> Ref<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.request.properties_mut()
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Later stages read and write the property bag and use its contents to augment the request
    /// (see `Request::augment`). Clones of a request share one bag.
    properties: Rc<RefCell<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Rc::new(RefCell::new(PropertyBag::new())),
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut self.properties.as_ref().borrow_mut();
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn properties_mut(&self) -> RefMut<'_, PropertyBag> {
        self.properties.as_ref().borrow_mut()
    }

    pub fn properties(&self) -> Ref<'_, PropertyBag> {
        self.properties.as_ref().borrow()
    }

    /// Clones the request, sharing the property bag. Fails when the body has already been read.
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method().clone())
            .version(self.inner.version())
            .body(cloned_body)
            .ok()?;
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Rc<RefCell<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

/// A model value could not be written to the wire
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializationError {
    #[error("failed to format timestamp")]
    DateTimeFormat(#[from] DateTimeFormatError),
}

/// An input could not be turned into an HTTP request
///
/// These are caller errors: the request was never sent and retrying cannot help.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("{operation} was called without an input")]
    MissingInput { operation: &'static str },

    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    #[error("invalid field in input: {field} (details: {details})")]
    InvalidField { field: &'static str, details: String },

    #[error("failed to serialize input")]
    SerializationError(#[from] SerializationError),

    #[error("generated URI was invalid")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("value for header `{header}` was invalid")]
    InvalidHeader {
        header: &'static str,
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::Other(err.into())
    }
}

#[cfg(test)]
mod test {
    use super::{BuildError, Metadata, Operation, Request, SerializationError};
    use crate::body::SdkBody;
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;
    use smithy_types::instant::Format;
    use smithy_types::Instant;
    use std::error::Error;

    #[test]
    fn try_clone_clones_all_data() {
        let request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("/analyzer/my-analyzer"))
                .method("GET")
                .header(CONTENT_LENGTH, 2)
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .body(SdkBody::from("{}"))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, properties) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("/analyzer/my-analyzer"));
        assert_eq!(request.method(), "GET");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "2");
        assert_eq!(request.body().bytes().unwrap(), "{}".as_bytes());
        assert_eq!(properties.as_ref().borrow().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn augment_shares_properties() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        request.properties_mut().insert(5_u32);
        let request = request
            .augment(|mut req, props| {
                let count = props.get::<u32>().copied().unwrap_or_default();
                req.headers_mut()
                    .insert("x-count", count.to_string().parse().unwrap());
                props.insert(count + 1);
                Ok::<_, std::convert::Infallible>(req)
            })
            .unwrap();
        assert_eq!(request.http().headers().get("x-count").unwrap(), "5");
        assert_eq!(request.properties().get::<u32>(), Some(&6));
    }

    #[test]
    fn operation_carries_metadata() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), ())
            .with_metadata(Metadata::new("GetAnalyzer", "accessanalyzer"));
        assert_eq!(op.metadata().map(|m| m.name()), Some("GetAnalyzer"));
        assert_eq!(op.metadata().map(|m| m.service()), Some("accessanalyzer"));
    }

    #[test]
    fn build_error_sources() {
        let err = Instant::from_epoch_seconds(i64::MAX / 2)
            .fmt(Format::DateTime)
            .unwrap_err();
        let err = BuildError::from(SerializationError::from(err));
        assert_eq!(format!("{}", err), "failed to serialize input");
        assert!(err.source().is_some());

        let err = BuildError::MissingInput {
            operation: "GetFinding",
        };
        assert_eq!(format!("{}", err), "GetFinding was called without an input");
    }
}
