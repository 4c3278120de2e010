/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod error;
pub mod instant;
mod number;

pub use crate::error::{Error, ProvideErrorMetadata};
pub use crate::instant::Instant;
pub use crate::number::{Number, TryFromNumberError};
