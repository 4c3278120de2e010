/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]

//! AWS IAM Access Analyzer
//!
//! Identifies resources in your organization and accounts that are shared with an external
//! entity. Access Analyzer speaks the REST-JSON protocol: operations bind their input to the URI
//! path, the query string and a JSON body.
//!
//! This crate builds requests ready for signing and parses responses; it does not send them.
//!
//! ```rust
//! use accessanalyzer::input::GetFindingInput;
//! use aws_types::region::Region;
//!
//! let config = accessanalyzer::Config::builder()
//!     .region(Region::new("us-east-1"))
//!     .build();
//! let operation = GetFindingInput::builder()
//!     .id("finding-1")
//!     .analyzer_arn("arn:aws:access-analyzer:us-east-1:123456789012:analyzer/a")
//!     .build()
//!     .unwrap()
//!     .make_operation(&config)
//!     .unwrap();
//! assert_eq!(operation.request().http().method(), "GET");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod json_deser;
pub mod json_ser;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;

pub use config::Config;

pub(crate) const SIGNING_SERVICE: aws_types::SigningService =
    aws_types::SigningService::from_static("access-analyzer");
