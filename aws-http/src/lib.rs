/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS JSON protocol behaviors shared by every service client

pub mod json_errors;
pub mod request_id;

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::HeaderValue;
use smithy_http::operation::BuildError;
use smithy_http::property_bag::PropertyBag;

/// Content type of AWS JSON 1.1 bodies. REST-JSON services are sent the same value.
pub const AWS_JSON_1_1: &str = "application/x-amz-json-1.1";

/// Header naming the operation for AWS JSON protocols
pub const X_AMZ_TARGET: &str = "x-amz-target";

/// Builds the `X-Amz-Target` value `<prefix>.<operation>`
pub fn target_header(prefix: &str, operation: &str) -> Result<HeaderValue, BuildError> {
    HeaderValue::from_str(&format!("{}.{}", prefix, operation)).map_err(|err| {
        BuildError::InvalidHeader {
            header: X_AMZ_TARGET,
            source: err,
        }
    })
}

/// Records where and how a request should be signed for the signing and endpoint stages
///
/// The signing region defaults to the request region.
pub fn set_signing_properties(
    properties: &mut PropertyBag,
    region: Option<&Region>,
    signing_service: SigningService,
) {
    if let Some(region) = region {
        properties.insert(region.clone());
        properties.insert(SigningRegion::from(region.clone()));
    }
    properties.insert(signing_service);
}

#[cfg(test)]
mod test {
    use crate::{set_signing_properties, target_header};
    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use smithy_http::operation::BuildError;
    use smithy_http::property_bag::PropertyBag;

    #[test]
    fn target_header_joins_prefix_and_operation() {
        assert_eq!(
            target_header("Logs_20140328", "PutLogEvents").unwrap(),
            "Logs_20140328.PutLogEvents"
        );
        assert!(matches!(
            target_header("Logs\n", "PutLogEvents"),
            Err(BuildError::InvalidHeader { header: "x-amz-target", .. })
        ));
    }

    #[test]
    fn signing_properties() {
        let mut properties = PropertyBag::new();
        set_signing_properties(
            &mut properties,
            Some(&Region::new("us-east-1")),
            SigningService::from_static("logs"),
        );
        assert_eq!(properties.get::<Region>(), Some(&Region::new("us-east-1")));
        assert_eq!(
            properties.get::<SigningRegion>().map(|r| r.as_ref()),
            Some("us-east-1")
        );
        assert_eq!(
            properties.get::<SigningService>().map(|s| s.as_ref()),
            Some("logs")
        );

        let mut properties = PropertyBag::new();
        set_signing_properties(&mut properties, None, SigningService::from_static("logs"));
        assert!(properties.get::<Region>().is_none());
        assert!(properties.get::<SigningRegion>().is_none());
    }
}
