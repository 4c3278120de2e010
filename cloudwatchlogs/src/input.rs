/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Creates a log group with the specified name.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateLogGroupInput {
    pub log_group_name: std::option::Option<std::string::String>,
    pub kms_key_id: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}

/// See [`CreateLogGroupInput`](crate::input::CreateLogGroupInput)
pub mod create_log_group_input {
    /// A builder for [`CreateLogGroupInput`](crate::input::CreateLogGroupInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) log_group_name: std::option::Option<std::string::String>,
        pub(crate) kms_key_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn log_group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_group_name = Some(input.into());
            self
        }
        pub fn set_log_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_group_name = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateLogGroupInput`](crate::input::CreateLogGroupInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateLogGroupInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateLogGroupInput {
                log_group_name: self.log_group_name,
                kms_key_id: self.kms_key_id,
                tags: self.tags,
            })
        }
    }
}
impl CreateLogGroupInput {
    /// Creates a new builder-style object to manufacture [`CreateLogGroupInput`](crate::input::CreateLogGroupInput)
    pub fn builder() -> crate::input::create_log_group_input::Builder {
        crate::input::create_log_group_input::Builder::default()
    }
}

impl CreateLogGroupInput {
    /// Builds the HTTP request for [`CreateLogGroup`](crate::operation::CreateLogGroup) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateLogGroup, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::CreateLogGroup as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::CreateLogGroup::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "CreateLogGroup",
                    "cloudwatchlogs",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::CreateLogGroup {
    type Input = crate::input::CreateLogGroupInput;

    fn marshall(
        input: std::option::Option<&crate::input::CreateLogGroupInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "CreateLogGroup",
        })?;
        tracing::debug!(operation = "CreateLogGroup", method = "POST", uri = "/", "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(http::Uri::from_static("/"))
            .header(
                aws_http::X_AMZ_TARGET,
                aws_http::target_header("Logs_20140328", "CreateLogGroup")?,
            );
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_create_log_group(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeLogGroupsInput {
    pub log_group_name_prefix: std::option::Option<std::string::String>,
    pub next_token: std::option::Option<std::string::String>,
    pub limit: std::option::Option<i32>,
}

/// See [`DescribeLogGroupsInput`](crate::input::DescribeLogGroupsInput)
pub mod describe_log_groups_input {
    /// A builder for [`DescribeLogGroupsInput`](crate::input::DescribeLogGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) log_group_name_prefix: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) limit: std::option::Option<i32>,
    }
    impl Builder {
        pub fn log_group_name_prefix(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_group_name_prefix = Some(input.into());
            self
        }
        pub fn set_log_group_name_prefix(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_group_name_prefix = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLogGroupsInput`](crate::input::DescribeLogGroupsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeLogGroupsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeLogGroupsInput {
                log_group_name_prefix: self.log_group_name_prefix,
                next_token: self.next_token,
                limit: self.limit,
            })
        }
    }
}
impl DescribeLogGroupsInput {
    /// Creates a new builder-style object to manufacture [`DescribeLogGroupsInput`](crate::input::DescribeLogGroupsInput)
    pub fn builder() -> crate::input::describe_log_groups_input::Builder {
        crate::input::describe_log_groups_input::Builder::default()
    }
}

impl DescribeLogGroupsInput {
    /// Builds the HTTP request for [`DescribeLogGroups`](crate::operation::DescribeLogGroups) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeLogGroups, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::DescribeLogGroups as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::DescribeLogGroups::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "DescribeLogGroups",
                    "cloudwatchlogs",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::DescribeLogGroups {
    type Input = crate::input::DescribeLogGroupsInput;

    fn marshall(
        input: std::option::Option<&crate::input::DescribeLogGroupsInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "DescribeLogGroups",
        })?;
        tracing::debug!(operation = "DescribeLogGroups", method = "POST", uri = "/", "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(http::Uri::from_static("/"))
            .header(
                aws_http::X_AMZ_TARGET,
                aws_http::target_header("Logs_20140328", "DescribeLogGroups")?,
            );
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_describe_log_groups(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

/// Uploads a batch of log events to the specified log stream.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutLogEventsInput {
    pub log_group_name: std::option::Option<std::string::String>,
    pub log_stream_name: std::option::Option<std::string::String>,
    pub log_events: std::option::Option<std::vec::Vec<crate::model::InputLogEvent>>,
    pub sequence_token: std::option::Option<std::string::String>,
}

/// See [`PutLogEventsInput`](crate::input::PutLogEventsInput)
pub mod put_log_events_input {
    /// A builder for [`PutLogEventsInput`](crate::input::PutLogEventsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) log_group_name: std::option::Option<std::string::String>,
        pub(crate) log_stream_name: std::option::Option<std::string::String>,
        pub(crate) log_events: std::option::Option<std::vec::Vec<crate::model::InputLogEvent>>,
        pub(crate) sequence_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn log_group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_group_name = Some(input.into());
            self
        }
        pub fn set_log_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_group_name = input;
            self
        }
        pub fn log_stream_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_stream_name = Some(input.into());
            self
        }
        pub fn set_log_stream_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_stream_name = input;
            self
        }
        /// Appends an item to `log_events`.
        ///
        /// To override the contents of this collection use [`set_log_events`](Self::set_log_events).
        pub fn log_events(mut self, input: impl Into<crate::model::InputLogEvent>) -> Self {
            let mut v = self.log_events.unwrap_or_default();
            v.push(input.into());
            self.log_events = Some(v);
            self
        }
        pub fn set_log_events(mut self, input: std::option::Option<std::vec::Vec<crate::model::InputLogEvent>>) -> Self {
            self.log_events = input;
            self
        }
        pub fn sequence_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.sequence_token = Some(input.into());
            self
        }
        pub fn set_sequence_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sequence_token = input;
            self
        }
        /// Consumes the builder and constructs a [`PutLogEventsInput`](crate::input::PutLogEventsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutLogEventsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutLogEventsInput {
                log_group_name: self.log_group_name,
                log_stream_name: self.log_stream_name,
                log_events: self.log_events,
                sequence_token: self.sequence_token,
            })
        }
    }
}
impl PutLogEventsInput {
    /// Creates a new builder-style object to manufacture [`PutLogEventsInput`](crate::input::PutLogEventsInput)
    pub fn builder() -> crate::input::put_log_events_input::Builder {
        crate::input::put_log_events_input::Builder::default()
    }
}

impl PutLogEventsInput {
    /// Builds the HTTP request for [`PutLogEvents`](crate::operation::PutLogEvents) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutLogEvents, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::PutLogEvents as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::PutLogEvents::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "PutLogEvents",
                    "cloudwatchlogs",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::PutLogEvents {
    type Input = crate::input::PutLogEventsInput;

    fn marshall(
        input: std::option::Option<&crate::input::PutLogEventsInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "PutLogEvents",
        })?;
        tracing::debug!(operation = "PutLogEvents", method = "POST", uri = "/", "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(http::Uri::from_static("/"))
            .header(
                aws_http::X_AMZ_TARGET,
                aws_http::target_header("Logs_20140328", "PutLogEvents")?,
            );
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_put_log_events(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetLogEventsInput {
    pub log_group_name: std::option::Option<std::string::String>,
    pub log_stream_name: std::option::Option<std::string::String>,
    pub start_time: std::option::Option<i64>,
    pub end_time: std::option::Option<i64>,
    pub next_token: std::option::Option<std::string::String>,
    pub limit: std::option::Option<i32>,
    pub start_from_head: std::option::Option<bool>,
}

/// See [`GetLogEventsInput`](crate::input::GetLogEventsInput)
pub mod get_log_events_input {
    /// A builder for [`GetLogEventsInput`](crate::input::GetLogEventsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) log_group_name: std::option::Option<std::string::String>,
        pub(crate) log_stream_name: std::option::Option<std::string::String>,
        pub(crate) start_time: std::option::Option<i64>,
        pub(crate) end_time: std::option::Option<i64>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) limit: std::option::Option<i32>,
        pub(crate) start_from_head: std::option::Option<bool>,
    }
    impl Builder {
        pub fn log_group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_group_name = Some(input.into());
            self
        }
        pub fn set_log_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_group_name = input;
            self
        }
        pub fn log_stream_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_stream_name = Some(input.into());
            self
        }
        pub fn set_log_stream_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_stream_name = input;
            self
        }
        pub fn start_time(mut self, input: i64) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<i64>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: i64) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<i64>) -> Self {
            self.end_time = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.limit = input;
            self
        }
        pub fn start_from_head(mut self, input: bool) -> Self {
            self.start_from_head = Some(input);
            self
        }
        pub fn set_start_from_head(mut self, input: std::option::Option<bool>) -> Self {
            self.start_from_head = input;
            self
        }
        /// Consumes the builder and constructs a [`GetLogEventsInput`](crate::input::GetLogEventsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetLogEventsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetLogEventsInput {
                log_group_name: self.log_group_name,
                log_stream_name: self.log_stream_name,
                start_time: self.start_time,
                end_time: self.end_time,
                next_token: self.next_token,
                limit: self.limit,
                start_from_head: self.start_from_head,
            })
        }
    }
}
impl GetLogEventsInput {
    /// Creates a new builder-style object to manufacture [`GetLogEventsInput`](crate::input::GetLogEventsInput)
    pub fn builder() -> crate::input::get_log_events_input::Builder {
        crate::input::get_log_events_input::Builder::default()
    }
}

impl GetLogEventsInput {
    /// Builds the HTTP request for [`GetLogEvents`](crate::operation::GetLogEvents) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetLogEvents, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::GetLogEvents as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::GetLogEvents::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "GetLogEvents",
                    "cloudwatchlogs",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::GetLogEvents {
    type Input = crate::input::GetLogEventsInput;

    fn marshall(
        input: std::option::Option<&crate::input::GetLogEventsInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "GetLogEvents",
        })?;
        tracing::debug!(operation = "GetLogEvents", method = "POST", uri = "/", "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(http::Uri::from_static("/"))
            .header(
                aws_http::X_AMZ_TARGET,
                aws_http::target_header("Logs_20140328", "GetLogEvents")?,
            );
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_get_log_events(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutMetricFilterInput {
    pub log_group_name: std::option::Option<std::string::String>,
    pub filter_name: std::option::Option<std::string::String>,
    pub filter_pattern: std::option::Option<std::string::String>,
    pub metric_transformations: std::option::Option<std::vec::Vec<crate::model::MetricTransformation>>,
}

/// See [`PutMetricFilterInput`](crate::input::PutMetricFilterInput)
pub mod put_metric_filter_input {
    /// A builder for [`PutMetricFilterInput`](crate::input::PutMetricFilterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) log_group_name: std::option::Option<std::string::String>,
        pub(crate) filter_name: std::option::Option<std::string::String>,
        pub(crate) filter_pattern: std::option::Option<std::string::String>,
        pub(crate) metric_transformations: std::option::Option<std::vec::Vec<crate::model::MetricTransformation>>,
    }
    impl Builder {
        pub fn log_group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_group_name = Some(input.into());
            self
        }
        pub fn set_log_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_group_name = input;
            self
        }
        pub fn filter_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.filter_name = Some(input.into());
            self
        }
        pub fn set_filter_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.filter_name = input;
            self
        }
        pub fn filter_pattern(mut self, input: impl Into<std::string::String>) -> Self {
            self.filter_pattern = Some(input.into());
            self
        }
        pub fn set_filter_pattern(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.filter_pattern = input;
            self
        }
        /// Appends an item to `metric_transformations`.
        ///
        /// To override the contents of this collection use [`set_metric_transformations`](Self::set_metric_transformations).
        pub fn metric_transformations(mut self, input: impl Into<crate::model::MetricTransformation>) -> Self {
            let mut v = self.metric_transformations.unwrap_or_default();
            v.push(input.into());
            self.metric_transformations = Some(v);
            self
        }
        pub fn set_metric_transformations(mut self, input: std::option::Option<std::vec::Vec<crate::model::MetricTransformation>>) -> Self {
            self.metric_transformations = input;
            self
        }
        /// Consumes the builder and constructs a [`PutMetricFilterInput`](crate::input::PutMetricFilterInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutMetricFilterInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutMetricFilterInput {
                log_group_name: self.log_group_name,
                filter_name: self.filter_name,
                filter_pattern: self.filter_pattern,
                metric_transformations: self.metric_transformations,
            })
        }
    }
}
impl PutMetricFilterInput {
    /// Creates a new builder-style object to manufacture [`PutMetricFilterInput`](crate::input::PutMetricFilterInput)
    pub fn builder() -> crate::input::put_metric_filter_input::Builder {
        crate::input::put_metric_filter_input::Builder::default()
    }
}

impl PutMetricFilterInput {
    /// Builds the HTTP request for [`PutMetricFilter`](crate::operation::PutMetricFilter) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutMetricFilter, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::PutMetricFilter as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::PutMetricFilter::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "PutMetricFilter",
                    "cloudwatchlogs",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::PutMetricFilter {
    type Input = crate::input::PutMetricFilterInput;

    fn marshall(
        input: std::option::Option<&crate::input::PutMetricFilterInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "PutMetricFilter",
        })?;
        tracing::debug!(operation = "PutMetricFilter", method = "POST", uri = "/", "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(http::Uri::from_static("/"))
            .header(
                aws_http::X_AMZ_TARGET,
                aws_http::target_header("Logs_20140328", "PutMetricFilter")?,
            );
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_put_metric_filter(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}
