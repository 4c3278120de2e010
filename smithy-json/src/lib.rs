/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON Abstractions for Smithy

pub mod deserialize;
mod escape;
pub mod serialize;

pub use escape::EscapeError;
