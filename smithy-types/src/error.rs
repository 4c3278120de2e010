/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata attached to every service error

use std::collections::HashMap;
use std::fmt;

/// Accessors for the error metadata of a service error
pub trait ProvideErrorMetadata {
    fn meta(&self) -> &Error;

    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

/// Generic Error type
///
/// Services only partially model their errors. Whatever the response carried about an error
/// (`code`, `message`, `request_id`, protocol specific extras) ends up here, whether or not the
/// code matched a modeled error.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a protocol specific field, read back with [`Error::extra`]
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|value| value.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        let mut extras: Vec<_> = self.extras.iter().collect();
        extras.sort();
        for (key, value) in extras {
            fmt.field(key, value);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display_includes_set_fields() {
        let err = Error::builder()
            .code("ResourceNotFoundException")
            .message("analyzer not found")
            .request_id("abc-123")
            .custom("resource", "my-analyzer")
            .build();
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "ResourceNotFoundException", message: "analyzer not found", request_id: "abc-123", resource: "my-analyzer" }"#
        );
        assert_eq!(err.extra("resource"), Some("my-analyzer"));
        assert_eq!(err.extra("missing"), None);
    }

    #[test]
    fn empty_error() {
        let err = Error::builder().build();
        assert_eq!(err.code(), None);
        assert_eq!(format!("{}", err), "Error");
    }
}
