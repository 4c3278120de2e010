/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Creates an analyzer for your account.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateAnalyzerInput {
    /// The name of the analyzer to create.
    pub analyzer_name: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::Type>,
    pub archive_rules: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
pub mod create_analyzer_input {
    /// A builder for [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::Type>,
        pub(crate) archive_rules: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The name of the analyzer to create.
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        pub fn r#type(mut self, input: crate::model::Type) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::Type>) -> Self {
            self.r#type = input;
            self
        }
        /// Appends an item to `archive_rules`.
        ///
        /// To override the contents of this collection use [`set_archive_rules`](Self::set_archive_rules).
        pub fn archive_rules(mut self, input: impl Into<crate::model::InlineArchiveRule>) -> Self {
            let mut v = self.archive_rules.unwrap_or_default();
            v.push(input.into());
            self.archive_rules = Some(v);
            self
        }
        pub fn set_archive_rules(mut self, input: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>) -> Self {
            self.archive_rules = input;
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
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateAnalyzerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateAnalyzerInput {
                analyzer_name: self.analyzer_name,
                r#type: self.r#type,
                archive_rules: self.archive_rules,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}
impl CreateAnalyzerInput {
    /// Creates a new builder-style object to manufacture [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
    pub fn builder() -> crate::input::create_analyzer_input::Builder {
        crate::input::create_analyzer_input::Builder::default()
    }
}

impl CreateAnalyzerInput {
    /// Builds the HTTP request for [`CreateAnalyzer`](crate::operation::CreateAnalyzer) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateAnalyzer, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::CreateAnalyzer as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::CreateAnalyzer::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "CreateAnalyzer",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::CreateAnalyzer {
    type Input = crate::input::CreateAnalyzerInput;

    fn marshall(
        input: std::option::Option<&crate::input::CreateAnalyzerInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "CreateAnalyzer",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer");
        tracing::debug!(operation = "CreateAnalyzer", method = "PUT", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("PUT")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_create_analyzer(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetAnalyzerInput {
    pub analyzer_name: std::option::Option<std::string::String>,
}

/// See [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
pub mod get_analyzer_input {
    /// A builder for [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        /// Consumes the builder and constructs a [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetAnalyzerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetAnalyzerInput {
                analyzer_name: self.analyzer_name,
            })
        }
    }
}
impl GetAnalyzerInput {
    /// Creates a new builder-style object to manufacture [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
    pub fn builder() -> crate::input::get_analyzer_input::Builder {
        crate::input::get_analyzer_input::Builder::default()
    }
}

impl GetAnalyzerInput {
    /// Builds the HTTP request for [`GetAnalyzer`](crate::operation::GetAnalyzer) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetAnalyzer, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::GetAnalyzer as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::GetAnalyzer::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "GetAnalyzer",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::GetAnalyzer {
    type Input = crate::input::GetAnalyzerInput;

    fn marshall(
        input: std::option::Option<&crate::input::GetAnalyzerInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "GetAnalyzer",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        tracing::debug!(operation = "GetAnalyzer", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteAnalyzerInput {
    pub analyzer_name: std::option::Option<std::string::String>,
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
pub mod delete_analyzer_input {
    /// A builder for [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteAnalyzerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteAnalyzerInput {
                analyzer_name: self.analyzer_name,
                client_token: self.client_token,
            })
        }
    }
}
impl DeleteAnalyzerInput {
    /// Creates a new builder-style object to manufacture [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
    pub fn builder() -> crate::input::delete_analyzer_input::Builder {
        crate::input::delete_analyzer_input::Builder::default()
    }
}

impl DeleteAnalyzerInput {
    /// Builds the HTTP request for [`DeleteAnalyzer`](crate::operation::DeleteAnalyzer) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteAnalyzer, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::DeleteAnalyzer as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::DeleteAnalyzer::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "DeleteAnalyzer",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::DeleteAnalyzer {
    type Input = crate::input::DeleteAnalyzerInput;

    fn marshall(
        input: std::option::Option<&crate::input::DeleteAnalyzerInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "DeleteAnalyzer",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.client_token {
            query.push_kv("clientToken", &smithy_http::query::fmt_string(inner_1));
        }
        tracing::debug!(operation = "DeleteAnalyzer", method = "DELETE", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("DELETE")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListAnalyzersInput {
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub r#type: std::option::Option<crate::model::Type>,
}

/// See [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
pub mod list_analyzers_input {
    /// A builder for [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) r#type: std::option::Option<crate::model::Type>,
    }
    impl Builder {
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn r#type(mut self, input: crate::model::Type) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::Type>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListAnalyzersInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListAnalyzersInput {
                next_token: self.next_token,
                max_results: self.max_results,
                r#type: self.r#type,
            })
        }
    }
}
impl ListAnalyzersInput {
    /// Creates a new builder-style object to manufacture [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
    pub fn builder() -> crate::input::list_analyzers_input::Builder {
        crate::input::list_analyzers_input::Builder::default()
    }
}

impl ListAnalyzersInput {
    /// Builds the HTTP request for [`ListAnalyzers`](crate::operation::ListAnalyzers) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListAnalyzers, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::ListAnalyzers as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::ListAnalyzers::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "ListAnalyzers",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::ListAnalyzers {
    type Input = crate::input::ListAnalyzersInput;

    fn marshall(
        input: std::option::Option<&crate::input::ListAnalyzersInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "ListAnalyzers",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.max_results {
            query.push_kv("maxResults", &smithy_http::query::fmt_default(inner_1));
        }
        if let Some(inner_2) = &input.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(inner_2));
        }
        if let Some(inner_3) = &input.r#type {
            query.push_kv("type", &smithy_http::query::fmt_string(inner_3.as_str()));
        }
        tracing::debug!(operation = "ListAnalyzers", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateArchiveRuleInput {
    pub analyzer_name: std::option::Option<std::string::String>,
    pub rule_name: std::option::Option<std::string::String>,
    pub filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
pub mod create_archive_rule_input {
    /// A builder for [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) rule_name: std::option::Option<std::string::String>,
        pub(crate) filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        pub(crate) client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        pub fn rule_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(input.into());
            self
        }
        pub fn set_rule_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_name = input;
            self
        }
        /// Adds a key-value pair to `filter`.
        ///
        /// To override the contents of this collection use [`set_filter`](Self::set_filter).
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            let mut hash_map = self.filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.filter = Some(hash_map);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>) -> Self {
            self.filter = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
                filter: self.filter,
                client_token: self.client_token,
            })
        }
    }
}
impl CreateArchiveRuleInput {
    /// Creates a new builder-style object to manufacture [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
    pub fn builder() -> crate::input::create_archive_rule_input::Builder {
        crate::input::create_archive_rule_input::Builder::default()
    }
}

impl CreateArchiveRuleInput {
    /// Builds the HTTP request for [`CreateArchiveRule`](crate::operation::CreateArchiveRule) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateArchiveRule, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::CreateArchiveRule as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::CreateArchiveRule::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "CreateArchiveRule",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::CreateArchiveRule {
    type Input = crate::input::CreateArchiveRuleInput;

    fn marshall(
        input: std::option::Option<&crate::input::CreateArchiveRuleInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "CreateArchiveRule",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        uri.push_str("/archive-rule");
        tracing::debug!(operation = "CreateArchiveRule", method = "PUT", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("PUT")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_create_archive_rule(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetArchiveRuleInput {
    pub analyzer_name: std::option::Option<std::string::String>,
    pub rule_name: std::option::Option<std::string::String>,
}

/// See [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
pub mod get_archive_rule_input {
    /// A builder for [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) rule_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        pub fn rule_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(input.into());
            self
        }
        pub fn set_rule_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_name = input;
            self
        }
        /// Consumes the builder and constructs a [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
            })
        }
    }
}
impl GetArchiveRuleInput {
    /// Creates a new builder-style object to manufacture [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
    pub fn builder() -> crate::input::get_archive_rule_input::Builder {
        crate::input::get_archive_rule_input::Builder::default()
    }
}

impl GetArchiveRuleInput {
    /// Builds the HTTP request for [`GetArchiveRule`](crate::operation::GetArchiveRule) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetArchiveRule, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::GetArchiveRule as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::GetArchiveRule::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "GetArchiveRule",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::GetArchiveRule {
    type Input = crate::input::GetArchiveRuleInput;

    fn marshall(
        input: std::option::Option<&crate::input::GetArchiveRuleInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "GetArchiveRule",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        uri.push_str("/archive-rule/");
        let rule_name = input.rule_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(rule_name, false));
        tracing::debug!(operation = "GetArchiveRule", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListArchiveRulesInput {
    pub analyzer_name: std::option::Option<std::string::String>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
}

/// See [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
pub mod list_archive_rules_input {
    /// A builder for [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListArchiveRulesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListArchiveRulesInput {
                analyzer_name: self.analyzer_name,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListArchiveRulesInput {
    /// Creates a new builder-style object to manufacture [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
    pub fn builder() -> crate::input::list_archive_rules_input::Builder {
        crate::input::list_archive_rules_input::Builder::default()
    }
}

impl ListArchiveRulesInput {
    /// Builds the HTTP request for [`ListArchiveRules`](crate::operation::ListArchiveRules) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListArchiveRules, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::ListArchiveRules as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::ListArchiveRules::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "ListArchiveRules",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::ListArchiveRules {
    type Input = crate::input::ListArchiveRulesInput;

    fn marshall(
        input: std::option::Option<&crate::input::ListArchiveRulesInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "ListArchiveRules",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        uri.push_str("/archive-rule");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(inner_1));
        }
        if let Some(inner_2) = &input.max_results {
            query.push_kv("maxResults", &smithy_http::query::fmt_default(inner_2));
        }
        tracing::debug!(operation = "ListArchiveRules", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

/// Replaces the filter of an existing archive rule.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateArchiveRuleInput {
    pub analyzer_name: std::option::Option<std::string::String>,
    pub rule_name: std::option::Option<std::string::String>,
    pub filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
pub mod update_archive_rule_input {
    /// A builder for [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) rule_name: std::option::Option<std::string::String>,
        pub(crate) filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        pub(crate) client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        pub fn rule_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(input.into());
            self
        }
        pub fn set_rule_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_name = input;
            self
        }
        /// Adds a key-value pair to `filter`.
        ///
        /// To override the contents of this collection use [`set_filter`](Self::set_filter).
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            let mut hash_map = self.filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.filter = Some(hash_map);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>) -> Self {
            self.filter = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
                filter: self.filter,
                client_token: self.client_token,
            })
        }
    }
}
impl UpdateArchiveRuleInput {
    /// Creates a new builder-style object to manufacture [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
    pub fn builder() -> crate::input::update_archive_rule_input::Builder {
        crate::input::update_archive_rule_input::Builder::default()
    }
}

impl UpdateArchiveRuleInput {
    /// Builds the HTTP request for [`UpdateArchiveRule`](crate::operation::UpdateArchiveRule) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateArchiveRule, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::UpdateArchiveRule as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::UpdateArchiveRule::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "UpdateArchiveRule",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::UpdateArchiveRule {
    type Input = crate::input::UpdateArchiveRuleInput;

    fn marshall(
        input: std::option::Option<&crate::input::UpdateArchiveRuleInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "UpdateArchiveRule",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        uri.push_str("/archive-rule/");
        let rule_name = input.rule_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(rule_name, false));
        tracing::debug!(operation = "UpdateArchiveRule", method = "PUT", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("PUT")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_update_archive_rule(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteArchiveRuleInput {
    pub analyzer_name: std::option::Option<std::string::String>,
    pub rule_name: std::option::Option<std::string::String>,
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
pub mod delete_archive_rule_input {
    /// A builder for [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_name: std::option::Option<std::string::String>,
        pub(crate) rule_name: std::option::Option<std::string::String>,
        pub(crate) client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(input.into());
            self
        }
        pub fn set_analyzer_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = input;
            self
        }
        pub fn rule_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(input.into());
            self
        }
        pub fn set_rule_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_name = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
                client_token: self.client_token,
            })
        }
    }
}
impl DeleteArchiveRuleInput {
    /// Creates a new builder-style object to manufacture [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
    pub fn builder() -> crate::input::delete_archive_rule_input::Builder {
        crate::input::delete_archive_rule_input::Builder::default()
    }
}

impl DeleteArchiveRuleInput {
    /// Builds the HTTP request for [`DeleteArchiveRule`](crate::operation::DeleteArchiveRule) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteArchiveRule, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::DeleteArchiveRule as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::DeleteArchiveRule::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "DeleteArchiveRule",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::DeleteArchiveRule {
    type Input = crate::input::DeleteArchiveRuleInput;

    fn marshall(
        input: std::option::Option<&crate::input::DeleteArchiveRuleInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "DeleteArchiveRule",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzer/");
        let analyzer_name = input.analyzer_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(analyzer_name, false));
        uri.push_str("/archive-rule/");
        let rule_name = input.rule_name.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(rule_name, false));
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.client_token {
            query.push_kv("clientToken", &smithy_http::query::fmt_string(inner_1));
        }
        tracing::debug!(operation = "DeleteArchiveRule", method = "DELETE", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("DELETE")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetAnalyzedResourceInput {
    pub analyzer_arn: std::option::Option<std::string::String>,
    pub resource_arn: std::option::Option<std::string::String>,
}

/// See [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
pub mod get_analyzed_resource_input {
    /// A builder for [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_arn: std::option::Option<std::string::String>,
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(input.into());
            self
        }
        pub fn set_analyzer_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = input;
            self
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetAnalyzedResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetAnalyzedResourceInput {
                analyzer_arn: self.analyzer_arn,
                resource_arn: self.resource_arn,
            })
        }
    }
}
impl GetAnalyzedResourceInput {
    /// Creates a new builder-style object to manufacture [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
    pub fn builder() -> crate::input::get_analyzed_resource_input::Builder {
        crate::input::get_analyzed_resource_input::Builder::default()
    }
}

impl GetAnalyzedResourceInput {
    /// Builds the HTTP request for [`GetAnalyzedResource`](crate::operation::GetAnalyzedResource) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetAnalyzedResource, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::GetAnalyzedResource as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::GetAnalyzedResource::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "GetAnalyzedResource",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::GetAnalyzedResource {
    type Input = crate::input::GetAnalyzedResourceInput;

    fn marshall(
        input: std::option::Option<&crate::input::GetAnalyzedResourceInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "GetAnalyzedResource",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzed-resource");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.analyzer_arn {
            query.push_kv("analyzerArn", &smithy_http::query::fmt_string(inner_1));
        }
        if let Some(inner_2) = &input.resource_arn {
            query.push_kv("resourceArn", &smithy_http::query::fmt_string(inner_2));
        }
        tracing::debug!(operation = "GetAnalyzedResource", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListAnalyzedResourcesInput {
    pub analyzer_arn: std::option::Option<std::string::String>,
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
}

/// See [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
pub mod list_analyzed_resources_input {
    /// A builder for [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_arn: std::option::Option<std::string::String>,
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(input.into());
            self
        }
        pub fn set_analyzer_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = input;
            self
        }
        pub fn resource_type(mut self, input: crate::model::ResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }
        pub fn set_resource_type(mut self, input: std::option::Option<crate::model::ResourceType>) -> Self {
            self.resource_type = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListAnalyzedResourcesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListAnalyzedResourcesInput {
                analyzer_arn: self.analyzer_arn,
                resource_type: self.resource_type,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListAnalyzedResourcesInput {
    /// Creates a new builder-style object to manufacture [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
    pub fn builder() -> crate::input::list_analyzed_resources_input::Builder {
        crate::input::list_analyzed_resources_input::Builder::default()
    }
}

impl ListAnalyzedResourcesInput {
    /// Builds the HTTP request for [`ListAnalyzedResources`](crate::operation::ListAnalyzedResources) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListAnalyzedResources, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::ListAnalyzedResources as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::ListAnalyzedResources::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "ListAnalyzedResources",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::ListAnalyzedResources {
    type Input = crate::input::ListAnalyzedResourcesInput;

    fn marshall(
        input: std::option::Option<&crate::input::ListAnalyzedResourcesInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "ListAnalyzedResources",
        })?;
        let mut uri = String::new();
        uri.push_str("/analyzed-resource");
        tracing::debug!(operation = "ListAnalyzedResources", method = "POST", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_list_analyzed_resources(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListFindingsInput {
    pub analyzer_arn: std::option::Option<std::string::String>,
    pub filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    pub sort: std::option::Option<crate::model::SortCriteria>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
}

/// See [`ListFindingsInput`](crate::input::ListFindingsInput)
pub mod list_findings_input {
    /// A builder for [`ListFindingsInput`](crate::input::ListFindingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_arn: std::option::Option<std::string::String>,
        pub(crate) filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        pub(crate) sort: std::option::Option<crate::model::SortCriteria>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(input.into());
            self
        }
        pub fn set_analyzer_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = input;
            self
        }
        /// Adds a key-value pair to `filter`.
        ///
        /// To override the contents of this collection use [`set_filter`](Self::set_filter).
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            let mut hash_map = self.filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.filter = Some(hash_map);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>) -> Self {
            self.filter = input;
            self
        }
        pub fn sort(mut self, input: crate::model::SortCriteria) -> Self {
            self.sort = Some(input);
            self
        }
        pub fn set_sort(mut self, input: std::option::Option<crate::model::SortCriteria>) -> Self {
            self.sort = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListFindingsInput`](crate::input::ListFindingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListFindingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListFindingsInput {
                analyzer_arn: self.analyzer_arn,
                filter: self.filter,
                sort: self.sort,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListFindingsInput {
    /// Creates a new builder-style object to manufacture [`ListFindingsInput`](crate::input::ListFindingsInput)
    pub fn builder() -> crate::input::list_findings_input::Builder {
        crate::input::list_findings_input::Builder::default()
    }
}

impl ListFindingsInput {
    /// Builds the HTTP request for [`ListFindings`](crate::operation::ListFindings) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListFindings, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::ListFindings as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::ListFindings::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "ListFindings",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::ListFindings {
    type Input = crate::input::ListFindingsInput;

    fn marshall(
        input: std::option::Option<&crate::input::ListFindingsInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "ListFindings",
        })?;
        let mut uri = String::new();
        uri.push_str("/finding");
        tracing::debug!(operation = "ListFindings", method = "POST", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_list_findings(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetFindingInput {
    pub analyzer_arn: std::option::Option<std::string::String>,
    pub id: std::option::Option<std::string::String>,
}

/// See [`GetFindingInput`](crate::input::GetFindingInput)
pub mod get_finding_input {
    /// A builder for [`GetFindingInput`](crate::input::GetFindingInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_arn: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(input.into());
            self
        }
        pub fn set_analyzer_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetFindingInput`](crate::input::GetFindingInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetFindingInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetFindingInput {
                analyzer_arn: self.analyzer_arn,
                id: self.id,
            })
        }
    }
}
impl GetFindingInput {
    /// Creates a new builder-style object to manufacture [`GetFindingInput`](crate::input::GetFindingInput)
    pub fn builder() -> crate::input::get_finding_input::Builder {
        crate::input::get_finding_input::Builder::default()
    }
}

impl GetFindingInput {
    /// Builds the HTTP request for [`GetFinding`](crate::operation::GetFinding) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetFinding, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::GetFinding as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::GetFinding::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "GetFinding",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::GetFinding {
    type Input = crate::input::GetFindingInput;

    fn marshall(
        input: std::option::Option<&crate::input::GetFindingInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "GetFinding",
        })?;
        let mut uri = String::new();
        uri.push_str("/finding/");
        let id = input.id.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(id, false));
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.analyzer_arn {
            query.push_kv("analyzerArn", &smithy_http::query::fmt_string(inner_1));
        }
        tracing::debug!(operation = "GetFinding", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

/// Updates the status of the given findings, or of every finding for a resource.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateFindingsInput {
    pub analyzer_arn: std::option::Option<std::string::String>,
    pub status: std::option::Option<crate::model::FindingStatusUpdate>,
    pub ids: std::option::Option<std::vec::Vec<std::string::String>>,
    pub resource_arn: std::option::Option<std::string::String>,
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
pub mod update_findings_input {
    /// A builder for [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_arn: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::FindingStatusUpdate>,
        pub(crate) ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(input.into());
            self
        }
        pub fn set_analyzer_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = input;
            self
        }
        pub fn status(mut self, input: crate::model::FindingStatusUpdate) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::FindingStatusUpdate>) -> Self {
            self.status = input;
            self
        }
        /// Appends an item to `ids`.
        ///
        /// To override the contents of this collection use [`set_ids`](Self::set_ids).
        pub fn ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.ids.unwrap_or_default();
            v.push(input.into());
            self.ids = Some(v);
            self
        }
        pub fn set_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.ids = input;
            self
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateFindingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateFindingsInput {
                analyzer_arn: self.analyzer_arn,
                status: self.status,
                ids: self.ids,
                resource_arn: self.resource_arn,
                client_token: self.client_token,
            })
        }
    }
}
impl UpdateFindingsInput {
    /// Creates a new builder-style object to manufacture [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
    pub fn builder() -> crate::input::update_findings_input::Builder {
        crate::input::update_findings_input::Builder::default()
    }
}

impl UpdateFindingsInput {
    /// Builds the HTTP request for [`UpdateFindings`](crate::operation::UpdateFindings) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateFindings, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::UpdateFindings as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::UpdateFindings::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "UpdateFindings",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::UpdateFindings {
    type Input = crate::input::UpdateFindingsInput;

    fn marshall(
        input: std::option::Option<&crate::input::UpdateFindingsInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "UpdateFindings",
        })?;
        let mut uri = String::new();
        uri.push_str("/finding");
        tracing::debug!(operation = "UpdateFindings", method = "PUT", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("PUT")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_update_findings(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListTagsForResourceInput {
    pub resource_arn: std::option::Option<std::string::String>,
}

/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTagsForResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            })
        }
    }
}
impl ListTagsForResourceInput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}

impl ListTagsForResourceInput {
    /// Builds the HTTP request for [`ListTagsForResource`](crate::operation::ListTagsForResource) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTagsForResource, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::ListTagsForResource as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::ListTagsForResource::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "ListTagsForResource",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::ListTagsForResource {
    type Input = crate::input::ListTagsForResourceInput;

    fn marshall(
        input: std::option::Option<&crate::input::ListTagsForResourceInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "ListTagsForResource",
        })?;
        let mut uri = String::new();
        uri.push_str("/tags/");
        let resource_arn = input.resource_arn.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(resource_arn, false));
        tracing::debug!(operation = "ListTagsForResource", method = "GET", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("GET")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct TagResourceInput {
    pub resource_arn: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
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
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TagResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            })
        }
    }
}
impl TagResourceInput {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}

impl TagResourceInput {
    /// Builds the HTTP request for [`TagResource`](crate::operation::TagResource) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::TagResource, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::TagResource as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::TagResource::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "TagResource",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::TagResource {
    type Input = crate::input::TagResourceInput;

    fn marshall(
        input: std::option::Option<&crate::input::TagResourceInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "TagResource",
        })?;
        let mut uri = String::new();
        uri.push_str("/tags/");
        let resource_arn = input.resource_arn.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(resource_arn, false));
        tracing::debug!(operation = "TagResource", method = "POST", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_tag_resource(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UntagResourceInput {
    pub resource_arn: std::option::Option<std::string::String>,
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}

/// See [`UntagResourceInput`](crate::input::UntagResourceInput)
pub mod untag_resource_input {
    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends an item to `tag_keys`.
        ///
        /// To override the contents of this collection use [`set_tag_keys`](Self::set_tag_keys).
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UntagResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            })
        }
    }
}
impl UntagResourceInput {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}

impl UntagResourceInput {
    /// Builds the HTTP request for [`UntagResource`](crate::operation::UntagResource) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UntagResource, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::UntagResource as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::UntagResource::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "UntagResource",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::UntagResource {
    type Input = crate::input::UntagResourceInput;

    fn marshall(
        input: std::option::Option<&crate::input::UntagResourceInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "UntagResource",
        })?;
        let mut uri = String::new();
        uri.push_str("/tags/");
        let resource_arn = input.resource_arn.as_deref().unwrap_or_default();
        uri.push_str(&smithy_http::label::fmt_string(resource_arn, false));
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner_1) = &input.tag_keys {
            for inner_2 in inner_1 {
                query.push_kv("tagKeys", &smithy_http::query::fmt_string(inner_2));
            }
        }
        tracing::debug!(operation = "UntagResource", method = "DELETE", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("DELETE")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = smithy_http::body::SdkBody::empty();
        smithy_http::marshall::assemble(builder, body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StartResourceScanInput {
    pub analyzer_arn: std::option::Option<std::string::String>,
    pub resource_arn: std::option::Option<std::string::String>,
}

/// See [`StartResourceScanInput`](crate::input::StartResourceScanInput)
pub mod start_resource_scan_input {
    /// A builder for [`StartResourceScanInput`](crate::input::StartResourceScanInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) analyzer_arn: std::option::Option<std::string::String>,
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(input.into());
            self
        }
        pub fn set_analyzer_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = input;
            self
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`StartResourceScanInput`](crate::input::StartResourceScanInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StartResourceScanInput, smithy_http::operation::BuildError> {
            Ok(crate::input::StartResourceScanInput {
                analyzer_arn: self.analyzer_arn,
                resource_arn: self.resource_arn,
            })
        }
    }
}
impl StartResourceScanInput {
    /// Creates a new builder-style object to manufacture [`StartResourceScanInput`](crate::input::StartResourceScanInput)
    pub fn builder() -> crate::input::start_resource_scan_input::Builder {
        crate::input::start_resource_scan_input::Builder::default()
    }
}

impl StartResourceScanInput {
    /// Builds the HTTP request for [`StartResourceScan`](crate::operation::StartResourceScan) and attaches its signing
    /// properties.
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StartResourceScan, ()>,
        smithy_http::operation::BuildError,
    > {
        let request =
            <crate::operation::StartResourceScan as smithy_http::marshall::MarshallRequest>::marshall(Some(self))?;
        let request = smithy_http::operation::Request::new(request);
        aws_http::set_signing_properties(
            &mut request.properties_mut(),
            config.region(),
            crate::SIGNING_SERVICE,
        );
        Ok(
            smithy_http::operation::Operation::new(request, crate::operation::StartResourceScan::new())
                .with_metadata(smithy_http::operation::Metadata::new(
                    "StartResourceScan",
                    "accessanalyzer",
                )),
        )
    }
}

impl smithy_http::marshall::MarshallRequest for crate::operation::StartResourceScan {
    type Input = crate::input::StartResourceScanInput;

    fn marshall(
        input: std::option::Option<&crate::input::StartResourceScanInput>,
    ) -> std::result::Result<
        http::Request<smithy_http::body::SdkBody>,
        smithy_http::operation::BuildError,
    > {
        let input = input.ok_or(smithy_http::operation::BuildError::MissingInput {
            operation: "StartResourceScan",
        })?;
        let mut uri = String::new();
        uri.push_str("/resource/scan");
        tracing::debug!(operation = "StartResourceScan", method = "POST", uri = %uri, "marshalled request");
        let builder = http::Request::builder()
            .method("POST")
            .uri(uri.parse::<http::Uri>()?);
        let builder = smithy_http::header::set_request_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(aws_http::AWS_JSON_1_1),
        );
        let body = crate::json_ser::serialize_operation_start_resource_scan(input)?;
        smithy_http::marshall::assemble(builder, body)
    }
}
