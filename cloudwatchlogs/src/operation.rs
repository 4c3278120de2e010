/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Operation shape for `CreateLogGroup`.
///
/// Build the input with [`CreateLogGroup::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::CreateLogGroupInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateLogGroup {
    _private: (),
}
impl CreateLogGroup {
    /// Creates a new builder-style object to manufacture [`CreateLogGroupInput`](crate::input::CreateLogGroupInput)
    pub fn builder() -> crate::input::create_log_group_input::Builder {
        crate::input::create_log_group_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateLogGroup {
    type Output = std::result::Result<crate::output::CreateLogGroupOutput, crate::error::CreateLogGroupError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_log_group_error(response)
        } else {
            crate::operation_deser::parse_create_log_group_response(response)
        }
    }
}

/// Operation shape for `DescribeLogGroups`.
///
/// Build the input with [`DescribeLogGroups::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::DescribeLogGroupsInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeLogGroups {
    _private: (),
}
impl DescribeLogGroups {
    /// Creates a new builder-style object to manufacture [`DescribeLogGroupsInput`](crate::input::DescribeLogGroupsInput)
    pub fn builder() -> crate::input::describe_log_groups_input::Builder {
        crate::input::describe_log_groups_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeLogGroups {
    type Output = std::result::Result<crate::output::DescribeLogGroupsOutput, crate::error::DescribeLogGroupsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_log_groups_error(response)
        } else {
            crate::operation_deser::parse_describe_log_groups_response(response)
        }
    }
}

/// Operation shape for `PutLogEvents`.
///
/// Build the input with [`PutLogEvents::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::PutLogEventsInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct PutLogEvents {
    _private: (),
}
impl PutLogEvents {
    /// Creates a new builder-style object to manufacture [`PutLogEventsInput`](crate::input::PutLogEventsInput)
    pub fn builder() -> crate::input::put_log_events_input::Builder {
        crate::input::put_log_events_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for PutLogEvents {
    type Output = std::result::Result<crate::output::PutLogEventsOutput, crate::error::PutLogEventsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_put_log_events_error(response)
        } else {
            crate::operation_deser::parse_put_log_events_response(response)
        }
    }
}

/// Operation shape for `GetLogEvents`.
///
/// Build the input with [`GetLogEvents::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::GetLogEventsInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetLogEvents {
    _private: (),
}
impl GetLogEvents {
    /// Creates a new builder-style object to manufacture [`GetLogEventsInput`](crate::input::GetLogEventsInput)
    pub fn builder() -> crate::input::get_log_events_input::Builder {
        crate::input::get_log_events_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetLogEvents {
    type Output = std::result::Result<crate::output::GetLogEventsOutput, crate::error::GetLogEventsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_log_events_error(response)
        } else {
            crate::operation_deser::parse_get_log_events_response(response)
        }
    }
}

/// Operation shape for `PutMetricFilter`.
///
/// Build the input with [`PutMetricFilter::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::PutMetricFilterInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct PutMetricFilter {
    _private: (),
}
impl PutMetricFilter {
    /// Creates a new builder-style object to manufacture [`PutMetricFilterInput`](crate::input::PutMetricFilterInput)
    pub fn builder() -> crate::input::put_metric_filter_input::Builder {
        crate::input::put_metric_filter_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for PutMetricFilter {
    type Output = std::result::Result<crate::output::PutMetricFilterOutput, crate::error::PutMetricFilterError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_put_metric_filter_error(response)
        } else {
            crate::operation_deser::parse_put_metric_filter_response(response)
        }
    }
}
