/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Operation shape for `CreateAnalyzer`.
///
/// Build the input with [`CreateAnalyzer::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::CreateAnalyzerInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateAnalyzer {
    _private: (),
}
impl CreateAnalyzer {
    /// Creates a new builder-style object to manufacture [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
    pub fn builder() -> crate::input::create_analyzer_input::Builder {
        crate::input::create_analyzer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateAnalyzer {
    type Output = std::result::Result<crate::output::CreateAnalyzerOutput, crate::error::CreateAnalyzerError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_analyzer_error(response)
        } else {
            crate::operation_deser::parse_create_analyzer_response(response)
        }
    }
}

/// Operation shape for `GetAnalyzer`.
///
/// Build the input with [`GetAnalyzer::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::GetAnalyzerInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetAnalyzer {
    _private: (),
}
impl GetAnalyzer {
    /// Creates a new builder-style object to manufacture [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
    pub fn builder() -> crate::input::get_analyzer_input::Builder {
        crate::input::get_analyzer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetAnalyzer {
    type Output = std::result::Result<crate::output::GetAnalyzerOutput, crate::error::GetAnalyzerError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_analyzer_error(response)
        } else {
            crate::operation_deser::parse_get_analyzer_response(response)
        }
    }
}

/// Operation shape for `DeleteAnalyzer`.
///
/// Build the input with [`DeleteAnalyzer::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::DeleteAnalyzerInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteAnalyzer {
    _private: (),
}
impl DeleteAnalyzer {
    /// Creates a new builder-style object to manufacture [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
    pub fn builder() -> crate::input::delete_analyzer_input::Builder {
        crate::input::delete_analyzer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteAnalyzer {
    type Output = std::result::Result<crate::output::DeleteAnalyzerOutput, crate::error::DeleteAnalyzerError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_analyzer_error(response)
        } else {
            crate::operation_deser::parse_delete_analyzer_response(response)
        }
    }
}

/// Operation shape for `ListAnalyzers`.
///
/// Build the input with [`ListAnalyzers::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::ListAnalyzersInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListAnalyzers {
    _private: (),
}
impl ListAnalyzers {
    /// Creates a new builder-style object to manufacture [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
    pub fn builder() -> crate::input::list_analyzers_input::Builder {
        crate::input::list_analyzers_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListAnalyzers {
    type Output = std::result::Result<crate::output::ListAnalyzersOutput, crate::error::ListAnalyzersError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_analyzers_error(response)
        } else {
            crate::operation_deser::parse_list_analyzers_response(response)
        }
    }
}

/// Operation shape for `CreateArchiveRule`.
///
/// Build the input with [`CreateArchiveRule::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::CreateArchiveRuleInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateArchiveRule {
    _private: (),
}
impl CreateArchiveRule {
    /// Creates a new builder-style object to manufacture [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
    pub fn builder() -> crate::input::create_archive_rule_input::Builder {
        crate::input::create_archive_rule_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateArchiveRule {
    type Output = std::result::Result<crate::output::CreateArchiveRuleOutput, crate::error::CreateArchiveRuleError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_archive_rule_error(response)
        } else {
            crate::operation_deser::parse_create_archive_rule_response(response)
        }
    }
}

/// Operation shape for `GetArchiveRule`.
///
/// Build the input with [`GetArchiveRule::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::GetArchiveRuleInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetArchiveRule {
    _private: (),
}
impl GetArchiveRule {
    /// Creates a new builder-style object to manufacture [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
    pub fn builder() -> crate::input::get_archive_rule_input::Builder {
        crate::input::get_archive_rule_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetArchiveRule {
    type Output = std::result::Result<crate::output::GetArchiveRuleOutput, crate::error::GetArchiveRuleError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_archive_rule_error(response)
        } else {
            crate::operation_deser::parse_get_archive_rule_response(response)
        }
    }
}

/// Operation shape for `ListArchiveRules`.
///
/// Build the input with [`ListArchiveRules::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::ListArchiveRulesInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListArchiveRules {
    _private: (),
}
impl ListArchiveRules {
    /// Creates a new builder-style object to manufacture [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
    pub fn builder() -> crate::input::list_archive_rules_input::Builder {
        crate::input::list_archive_rules_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListArchiveRules {
    type Output = std::result::Result<crate::output::ListArchiveRulesOutput, crate::error::ListArchiveRulesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_archive_rules_error(response)
        } else {
            crate::operation_deser::parse_list_archive_rules_response(response)
        }
    }
}

/// Operation shape for `UpdateArchiveRule`.
///
/// Build the input with [`UpdateArchiveRule::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::UpdateArchiveRuleInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateArchiveRule {
    _private: (),
}
impl UpdateArchiveRule {
    /// Creates a new builder-style object to manufacture [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
    pub fn builder() -> crate::input::update_archive_rule_input::Builder {
        crate::input::update_archive_rule_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateArchiveRule {
    type Output = std::result::Result<crate::output::UpdateArchiveRuleOutput, crate::error::UpdateArchiveRuleError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_archive_rule_error(response)
        } else {
            crate::operation_deser::parse_update_archive_rule_response(response)
        }
    }
}

/// Operation shape for `DeleteArchiveRule`.
///
/// Build the input with [`DeleteArchiveRule::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::DeleteArchiveRuleInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteArchiveRule {
    _private: (),
}
impl DeleteArchiveRule {
    /// Creates a new builder-style object to manufacture [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
    pub fn builder() -> crate::input::delete_archive_rule_input::Builder {
        crate::input::delete_archive_rule_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteArchiveRule {
    type Output = std::result::Result<crate::output::DeleteArchiveRuleOutput, crate::error::DeleteArchiveRuleError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_archive_rule_error(response)
        } else {
            crate::operation_deser::parse_delete_archive_rule_response(response)
        }
    }
}

/// Operation shape for `GetAnalyzedResource`.
///
/// Build the input with [`GetAnalyzedResource::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::GetAnalyzedResourceInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetAnalyzedResource {
    _private: (),
}
impl GetAnalyzedResource {
    /// Creates a new builder-style object to manufacture [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
    pub fn builder() -> crate::input::get_analyzed_resource_input::Builder {
        crate::input::get_analyzed_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetAnalyzedResource {
    type Output = std::result::Result<crate::output::GetAnalyzedResourceOutput, crate::error::GetAnalyzedResourceError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_analyzed_resource_error(response)
        } else {
            crate::operation_deser::parse_get_analyzed_resource_response(response)
        }
    }
}

/// Operation shape for `ListAnalyzedResources`.
///
/// Build the input with [`ListAnalyzedResources::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::ListAnalyzedResourcesInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListAnalyzedResources {
    _private: (),
}
impl ListAnalyzedResources {
    /// Creates a new builder-style object to manufacture [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
    pub fn builder() -> crate::input::list_analyzed_resources_input::Builder {
        crate::input::list_analyzed_resources_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListAnalyzedResources {
    type Output = std::result::Result<crate::output::ListAnalyzedResourcesOutput, crate::error::ListAnalyzedResourcesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_analyzed_resources_error(response)
        } else {
            crate::operation_deser::parse_list_analyzed_resources_response(response)
        }
    }
}

/// Operation shape for `ListFindings`.
///
/// Build the input with [`ListFindings::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::ListFindingsInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListFindings {
    _private: (),
}
impl ListFindings {
    /// Creates a new builder-style object to manufacture [`ListFindingsInput`](crate::input::ListFindingsInput)
    pub fn builder() -> crate::input::list_findings_input::Builder {
        crate::input::list_findings_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListFindings {
    type Output = std::result::Result<crate::output::ListFindingsOutput, crate::error::ListFindingsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_findings_error(response)
        } else {
            crate::operation_deser::parse_list_findings_response(response)
        }
    }
}

/// Operation shape for `GetFinding`.
///
/// Build the input with [`GetFinding::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::GetFindingInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetFinding {
    _private: (),
}
impl GetFinding {
    /// Creates a new builder-style object to manufacture [`GetFindingInput`](crate::input::GetFindingInput)
    pub fn builder() -> crate::input::get_finding_input::Builder {
        crate::input::get_finding_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetFinding {
    type Output = std::result::Result<crate::output::GetFindingOutput, crate::error::GetFindingError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_finding_error(response)
        } else {
            crate::operation_deser::parse_get_finding_response(response)
        }
    }
}

/// Operation shape for `UpdateFindings`.
///
/// Build the input with [`UpdateFindings::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::UpdateFindingsInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateFindings {
    _private: (),
}
impl UpdateFindings {
    /// Creates a new builder-style object to manufacture [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
    pub fn builder() -> crate::input::update_findings_input::Builder {
        crate::input::update_findings_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateFindings {
    type Output = std::result::Result<crate::output::UpdateFindingsOutput, crate::error::UpdateFindingsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_findings_error(response)
        } else {
            crate::operation_deser::parse_update_findings_response(response)
        }
    }
}

/// Operation shape for `ListTagsForResource`.
///
/// Build the input with [`ListTagsForResource::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::ListTagsForResourceInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTagsForResource {
    _private: (),
}
impl ListTagsForResource {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTagsForResource {
    type Output = std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_tags_for_resource_error(response)
        } else {
            crate::operation_deser::parse_list_tags_for_resource_response(response)
        }
    }
}

/// Operation shape for `TagResource`.
///
/// Build the input with [`TagResource::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::TagResourceInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct TagResource {
    _private: (),
}
impl TagResource {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for TagResource {
    type Output = std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_tag_resource_error(response)
        } else {
            crate::operation_deser::parse_tag_resource_response(response)
        }
    }
}

/// Operation shape for `UntagResource`.
///
/// Build the input with [`UntagResource::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::UntagResourceInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UntagResource {
    _private: (),
}
impl UntagResource {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UntagResource {
    type Output = std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_untag_resource_error(response)
        } else {
            crate::operation_deser::parse_untag_resource_response(response)
        }
    }
}

/// Operation shape for `StartResourceScan`.
///
/// Build the input with [`StartResourceScan::builder`](Self::builder) and turn it into a request with
/// [`make_operation`](crate::input::StartResourceScanInput::make_operation).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StartResourceScan {
    _private: (),
}
impl StartResourceScan {
    /// Creates a new builder-style object to manufacture [`StartResourceScanInput`](crate::input::StartResourceScanInput)
    pub fn builder() -> crate::input::start_resource_scan_input::Builder {
        crate::input::start_resource_scan_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StartResourceScan {
    type Output = std::result::Result<crate::output::StartResourceScanOutput, crate::error::StartResourceScanError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_start_resource_scan_error(response)
        } else {
            crate::operation_deser::parse_start_resource_scan_response(response)
        }
    }
}
