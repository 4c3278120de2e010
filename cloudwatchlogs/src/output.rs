/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateLogGroupOutput {
}

/// See [`CreateLogGroupOutput`](crate::output::CreateLogGroupOutput)
pub mod create_log_group_output {
    /// A builder for [`CreateLogGroupOutput`](crate::output::CreateLogGroupOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`CreateLogGroupOutput`](crate::output::CreateLogGroupOutput)
        pub fn build(self) -> crate::output::CreateLogGroupOutput {
            crate::output::CreateLogGroupOutput {}
        }
    }
}
impl CreateLogGroupOutput {
    /// Creates a new builder-style object to manufacture [`CreateLogGroupOutput`](crate::output::CreateLogGroupOutput)
    pub fn builder() -> crate::output::create_log_group_output::Builder {
        crate::output::create_log_group_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeLogGroupsOutput {
    pub log_groups: std::option::Option<std::vec::Vec<crate::model::LogGroup>>,
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`DescribeLogGroupsOutput`](crate::output::DescribeLogGroupsOutput)
pub mod describe_log_groups_output {
    /// A builder for [`DescribeLogGroupsOutput`](crate::output::DescribeLogGroupsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) log_groups: std::option::Option<std::vec::Vec<crate::model::LogGroup>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `log_groups`.
        ///
        /// To override the contents of this collection use [`set_log_groups`](Self::set_log_groups).
        pub fn log_groups(mut self, input: impl Into<crate::model::LogGroup>) -> Self {
            let mut v = self.log_groups.unwrap_or_default();
            v.push(input.into());
            self.log_groups = Some(v);
            self
        }
        pub fn set_log_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::LogGroup>>) -> Self {
            self.log_groups = input;
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
        /// Consumes the builder and constructs a [`DescribeLogGroupsOutput`](crate::output::DescribeLogGroupsOutput)
        pub fn build(self) -> crate::output::DescribeLogGroupsOutput {
            crate::output::DescribeLogGroupsOutput {
                log_groups: self.log_groups,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeLogGroupsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeLogGroupsOutput`](crate::output::DescribeLogGroupsOutput)
    pub fn builder() -> crate::output::describe_log_groups_output::Builder {
        crate::output::describe_log_groups_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutLogEventsOutput {
    pub next_sequence_token: std::option::Option<std::string::String>,
    pub rejected_log_events_info: std::option::Option<crate::model::RejectedLogEventsInfo>,
}

/// See [`PutLogEventsOutput`](crate::output::PutLogEventsOutput)
pub mod put_log_events_output {
    /// A builder for [`PutLogEventsOutput`](crate::output::PutLogEventsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_sequence_token: std::option::Option<std::string::String>,
        pub(crate) rejected_log_events_info: std::option::Option<crate::model::RejectedLogEventsInfo>,
    }
    impl Builder {
        pub fn next_sequence_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_sequence_token = Some(input.into());
            self
        }
        pub fn set_next_sequence_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_sequence_token = input;
            self
        }
        pub fn rejected_log_events_info(mut self, input: crate::model::RejectedLogEventsInfo) -> Self {
            self.rejected_log_events_info = Some(input);
            self
        }
        pub fn set_rejected_log_events_info(mut self, input: std::option::Option<crate::model::RejectedLogEventsInfo>) -> Self {
            self.rejected_log_events_info = input;
            self
        }
        /// Consumes the builder and constructs a [`PutLogEventsOutput`](crate::output::PutLogEventsOutput)
        pub fn build(self) -> crate::output::PutLogEventsOutput {
            crate::output::PutLogEventsOutput {
                next_sequence_token: self.next_sequence_token,
                rejected_log_events_info: self.rejected_log_events_info,
            }
        }
    }
}
impl PutLogEventsOutput {
    /// Creates a new builder-style object to manufacture [`PutLogEventsOutput`](crate::output::PutLogEventsOutput)
    pub fn builder() -> crate::output::put_log_events_output::Builder {
        crate::output::put_log_events_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetLogEventsOutput {
    pub events: std::option::Option<std::vec::Vec<crate::model::OutputLogEvent>>,
    pub next_forward_token: std::option::Option<std::string::String>,
    pub next_backward_token: std::option::Option<std::string::String>,
}

/// See [`GetLogEventsOutput`](crate::output::GetLogEventsOutput)
pub mod get_log_events_output {
    /// A builder for [`GetLogEventsOutput`](crate::output::GetLogEventsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) events: std::option::Option<std::vec::Vec<crate::model::OutputLogEvent>>,
        pub(crate) next_forward_token: std::option::Option<std::string::String>,
        pub(crate) next_backward_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `events`.
        ///
        /// To override the contents of this collection use [`set_events`](Self::set_events).
        pub fn events(mut self, input: impl Into<crate::model::OutputLogEvent>) -> Self {
            let mut v = self.events.unwrap_or_default();
            v.push(input.into());
            self.events = Some(v);
            self
        }
        pub fn set_events(mut self, input: std::option::Option<std::vec::Vec<crate::model::OutputLogEvent>>) -> Self {
            self.events = input;
            self
        }
        pub fn next_forward_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_forward_token = Some(input.into());
            self
        }
        pub fn set_next_forward_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_forward_token = input;
            self
        }
        pub fn next_backward_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_backward_token = Some(input.into());
            self
        }
        pub fn set_next_backward_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_backward_token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetLogEventsOutput`](crate::output::GetLogEventsOutput)
        pub fn build(self) -> crate::output::GetLogEventsOutput {
            crate::output::GetLogEventsOutput {
                events: self.events,
                next_forward_token: self.next_forward_token,
                next_backward_token: self.next_backward_token,
            }
        }
    }
}
impl GetLogEventsOutput {
    /// Creates a new builder-style object to manufacture [`GetLogEventsOutput`](crate::output::GetLogEventsOutput)
    pub fn builder() -> crate::output::get_log_events_output::Builder {
        crate::output::get_log_events_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutMetricFilterOutput {
}

/// See [`PutMetricFilterOutput`](crate::output::PutMetricFilterOutput)
pub mod put_metric_filter_output {
    /// A builder for [`PutMetricFilterOutput`](crate::output::PutMetricFilterOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`PutMetricFilterOutput`](crate::output::PutMetricFilterOutput)
        pub fn build(self) -> crate::output::PutMetricFilterOutput {
            crate::output::PutMetricFilterOutput {}
        }
    }
}
impl PutMetricFilterOutput {
    /// Creates a new builder-style object to manufacture [`PutMetricFilterOutput`](crate::output::PutMetricFilterOutput)
    pub fn builder() -> crate::output::put_metric_filter_output::Builder {
        crate::output::put_metric_filter_output::Builder::default()
    }
}
