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

//! Amazon CloudWatch Logs
//!
//! CloudWatch Logs speaks AWS JSON 1.1: every operation is a `POST /` whose `X-Amz-Target`
//! header names the operation and whose body is the whole input.

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
    aws_types::SigningService::from_static("logs");
