/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// The zone of trust of an analyzer
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Type {
    Account,
    Organization,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for Type {
    fn from(s: &str) -> Self {
        match s {
            "ACCOUNT" => Type::Account,
            "ORGANIZATION" => Type::Organization,
            other => Type::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Type {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Type::from(s))
    }
}
impl Type {
    pub fn as_str(&self) -> &str {
        match self {
            Type::Account => "ACCOUNT",
            Type::Organization => "ORGANIZATION",
            Type::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ACCOUNT", "ORGANIZATION"]
    }
}
impl AsRef<str> for Type {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AnalyzerStatus {
    Active,
    Creating,
    Disabled,
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for AnalyzerStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => AnalyzerStatus::Active,
            "CREATING" => AnalyzerStatus::Creating,
            "DISABLED" => AnalyzerStatus::Disabled,
            "FAILED" => AnalyzerStatus::Failed,
            other => AnalyzerStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AnalyzerStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AnalyzerStatus::from(s))
    }
}
impl AnalyzerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AnalyzerStatus::Active => "ACTIVE",
            AnalyzerStatus::Creating => "CREATING",
            AnalyzerStatus::Disabled => "DISABLED",
            AnalyzerStatus::Failed => "FAILED",
            AnalyzerStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "CREATING", "DISABLED", "FAILED"]
    }
}
impl AsRef<str> for AnalyzerStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReasonCode {
    AwsServiceAccessDisabled,
    DelegatedAdministratorDeregistered,
    OrganizationDeleted,
    ServiceLinkedRoleCreationFailed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "AWS_SERVICE_ACCESS_DISABLED" => ReasonCode::AwsServiceAccessDisabled,
            "DELEGATED_ADMINISTRATOR_DEREGISTERED" => ReasonCode::DelegatedAdministratorDeregistered,
            "ORGANIZATION_DELETED" => ReasonCode::OrganizationDeleted,
            "SERVICE_LINKED_ROLE_CREATION_FAILED" => ReasonCode::ServiceLinkedRoleCreationFailed,
            other => ReasonCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReasonCode::from(s))
    }
}
impl ReasonCode {
    pub fn as_str(&self) -> &str {
        match self {
            ReasonCode::AwsServiceAccessDisabled => "AWS_SERVICE_ACCESS_DISABLED",
            ReasonCode::DelegatedAdministratorDeregistered => "DELEGATED_ADMINISTRATOR_DEREGISTERED",
            ReasonCode::OrganizationDeleted => "ORGANIZATION_DELETED",
            ReasonCode::ServiceLinkedRoleCreationFailed => "SERVICE_LINKED_ROLE_CREATION_FAILED",
            ReasonCode::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["AWS_SERVICE_ACCESS_DISABLED", "DELEGATED_ADMINISTRATOR_DEREGISTERED", "ORGANIZATION_DELETED", "SERVICE_LINKED_ROLE_CREATION_FAILED"]
    }
}
impl AsRef<str> for ReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Kinds of resources an analyzer reports on
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ResourceType {
    AwsS3Bucket,
    AwsIamRole,
    AwsSqsQueue,
    AwsLambdaFunction,
    AwsLambdaLayerversion,
    AwsKmsKey,
    AwsSecretsmanagerSecret,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        match s {
            "AWS::S3::Bucket" => ResourceType::AwsS3Bucket,
            "AWS::IAM::Role" => ResourceType::AwsIamRole,
            "AWS::SQS::Queue" => ResourceType::AwsSqsQueue,
            "AWS::Lambda::Function" => ResourceType::AwsLambdaFunction,
            "AWS::Lambda::LayerVersion" => ResourceType::AwsLambdaLayerversion,
            "AWS::KMS::Key" => ResourceType::AwsKmsKey,
            "AWS::SecretsManager::Secret" => ResourceType::AwsSecretsmanagerSecret,
            other => ResourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ResourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ResourceType::from(s))
    }
}
impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::AwsS3Bucket => "AWS::S3::Bucket",
            ResourceType::AwsIamRole => "AWS::IAM::Role",
            ResourceType::AwsSqsQueue => "AWS::SQS::Queue",
            ResourceType::AwsLambdaFunction => "AWS::Lambda::Function",
            ResourceType::AwsLambdaLayerversion => "AWS::Lambda::LayerVersion",
            ResourceType::AwsKmsKey => "AWS::KMS::Key",
            ResourceType::AwsSecretsmanagerSecret => "AWS::SecretsManager::Secret",
            ResourceType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["AWS::S3::Bucket", "AWS::IAM::Role", "AWS::SQS::Queue", "AWS::Lambda::Function", "AWS::Lambda::LayerVersion", "AWS::KMS::Key", "AWS::SecretsManager::Secret"]
    }
}
impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FindingStatus {
    Active,
    Archived,
    Resolved,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FindingStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => FindingStatus::Active,
            "ARCHIVED" => FindingStatus::Archived,
            "RESOLVED" => FindingStatus::Resolved,
            other => FindingStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FindingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FindingStatus::from(s))
    }
}
impl FindingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FindingStatus::Active => "ACTIVE",
            FindingStatus::Archived => "ARCHIVED",
            FindingStatus::Resolved => "RESOLVED",
            FindingStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "ARCHIVED", "RESOLVED"]
    }
}
impl AsRef<str> for FindingStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The status a finding can be moved to by `UpdateFindings`
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FindingStatusUpdate {
    Active,
    Archived,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FindingStatusUpdate {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => FindingStatusUpdate::Active,
            "ARCHIVED" => FindingStatusUpdate::Archived,
            other => FindingStatusUpdate::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FindingStatusUpdate {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FindingStatusUpdate::from(s))
    }
}
impl FindingStatusUpdate {
    pub fn as_str(&self) -> &str {
        match self {
            FindingStatusUpdate::Active => "ACTIVE",
            FindingStatusUpdate::Archived => "ARCHIVED",
            FindingStatusUpdate::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "ARCHIVED"]
    }
}
impl AsRef<str> for FindingStatusUpdate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FindingSourceType {
    Policy,
    BucketAcl,
    S3AccessPoint,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FindingSourceType {
    fn from(s: &str) -> Self {
        match s {
            "POLICY" => FindingSourceType::Policy,
            "BUCKET_ACL" => FindingSourceType::BucketAcl,
            "S3_ACCESS_POINT" => FindingSourceType::S3AccessPoint,
            other => FindingSourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FindingSourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FindingSourceType::from(s))
    }
}
impl FindingSourceType {
    pub fn as_str(&self) -> &str {
        match self {
            FindingSourceType::Policy => "POLICY",
            FindingSourceType::BucketAcl => "BUCKET_ACL",
            FindingSourceType::S3AccessPoint => "S3_ACCESS_POINT",
            FindingSourceType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["POLICY", "BUCKET_ACL", "S3_ACCESS_POINT"]
    }
}
impl AsRef<str> for FindingSourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum OrderBy {
    Asc,
    Desc,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for OrderBy {
    fn from(s: &str) -> Self {
        match s {
            "ASC" => OrderBy::Asc,
            "DESC" => OrderBy::Desc,
            other => OrderBy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for OrderBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OrderBy::from(s))
    }
}
impl OrderBy {
    pub fn as_str(&self) -> &str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
            OrderBy::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ASC", "DESC"]
    }
}
impl AsRef<str> for OrderBy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Details about a resource that was analyzed
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct AnalyzedResource {
    /// The ARN of the resource that was analyzed.
    pub resource_arn: std::option::Option<std::string::String>,
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    /// The time at which the finding was created.
    pub created_at: std::option::Option<smithy_types::Instant>,
    pub analyzed_at: std::option::Option<smithy_types::Instant>,
    pub updated_at: std::option::Option<smithy_types::Instant>,
    /// Indicates whether the policy that generated the finding grants public access to the resource.
    pub is_public: std::option::Option<bool>,
    pub actions: std::option::Option<std::vec::Vec<std::string::String>>,
    /// Indicates how the access that generated the finding is granted.
    pub shared_via: std::option::Option<std::vec::Vec<std::string::String>>,
    pub status: std::option::Option<crate::model::FindingStatus>,
    /// The AWS account ID that owns the resource.
    pub resource_owner_account: std::option::Option<std::string::String>,
    pub error: std::option::Option<std::string::String>,
}

/// See [`AnalyzedResource`](crate::model::AnalyzedResource)
pub mod analyzed_resource {
    /// A builder for [`AnalyzedResource`](crate::model::AnalyzedResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) analyzed_at: std::option::Option<smithy_types::Instant>,
        pub(crate) updated_at: std::option::Option<smithy_types::Instant>,
        pub(crate) is_public: std::option::Option<bool>,
        pub(crate) actions: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) shared_via: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) status: std::option::Option<crate::model::FindingStatus>,
        pub(crate) resource_owner_account: std::option::Option<std::string::String>,
        pub(crate) error: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The ARN of the resource that was analyzed.
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
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
        /// The time at which the finding was created.
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        pub fn analyzed_at(mut self, input: smithy_types::Instant) -> Self {
            self.analyzed_at = Some(input);
            self
        }
        pub fn set_analyzed_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.analyzed_at = input;
            self
        }
        pub fn updated_at(mut self, input: smithy_types::Instant) -> Self {
            self.updated_at = Some(input);
            self
        }
        pub fn set_updated_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = input;
            self
        }
        /// Indicates whether the policy that generated the finding grants public access to the resource.
        pub fn is_public(mut self, input: bool) -> Self {
            self.is_public = Some(input);
            self
        }
        pub fn set_is_public(mut self, input: std::option::Option<bool>) -> Self {
            self.is_public = input;
            self
        }
        /// Appends an item to `actions`.
        ///
        /// To override the contents of this collection use [`set_actions`](Self::set_actions).
        pub fn actions(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.actions.unwrap_or_default();
            v.push(input.into());
            self.actions = Some(v);
            self
        }
        pub fn set_actions(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.actions = input;
            self
        }
        /// Appends an item to `shared_via`.
        ///
        /// To override the contents of this collection use [`set_shared_via`](Self::set_shared_via).
        pub fn shared_via(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.shared_via.unwrap_or_default();
            v.push(input.into());
            self.shared_via = Some(v);
            self
        }
        pub fn set_shared_via(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.shared_via = input;
            self
        }
        pub fn status(mut self, input: crate::model::FindingStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::FindingStatus>) -> Self {
            self.status = input;
            self
        }
        /// The AWS account ID that owns the resource.
        pub fn resource_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(input.into());
            self
        }
        pub fn set_resource_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_owner_account = input;
            self
        }
        pub fn error(mut self, input: impl Into<std::string::String>) -> Self {
            self.error = Some(input.into());
            self
        }
        pub fn set_error(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error = input;
            self
        }
        /// Consumes the builder and constructs a [`AnalyzedResource`](crate::model::AnalyzedResource)
        pub fn build(self) -> crate::model::AnalyzedResource {
            crate::model::AnalyzedResource {
                resource_arn: self.resource_arn,
                resource_type: self.resource_type,
                created_at: self.created_at,
                analyzed_at: self.analyzed_at,
                updated_at: self.updated_at,
                is_public: self.is_public,
                actions: self.actions,
                shared_via: self.shared_via,
                status: self.status,
                resource_owner_account: self.resource_owner_account,
                error: self.error,
            }
        }
    }
}
impl AnalyzedResource {
    /// Creates a new builder-style object to manufacture [`AnalyzedResource`](crate::model::AnalyzedResource)
    pub fn builder() -> crate::model::analyzed_resource::Builder {
        crate::model::analyzed_resource::Builder::default()
    }
}

/// Contains information about the analyzer
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct AnalyzerSummary {
    /// The ARN of the analyzer.
    pub arn: std::option::Option<std::string::String>,
    pub name: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::Type>,
    pub created_at: std::option::Option<smithy_types::Instant>,
    /// The resource that was most recently analyzed by the analyzer.
    pub last_resource_analyzed: std::option::Option<std::string::String>,
    pub last_resource_analyzed_at: std::option::Option<smithy_types::Instant>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub status: std::option::Option<crate::model::AnalyzerStatus>,
    /// Set when the analyzer fails to create or is disabled.
    pub status_reason: std::option::Option<crate::model::StatusReason>,
}

/// See [`AnalyzerSummary`](crate::model::AnalyzerSummary)
pub mod analyzer_summary {
    /// A builder for [`AnalyzerSummary`](crate::model::AnalyzerSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::Type>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) last_resource_analyzed: std::option::Option<std::string::String>,
        pub(crate) last_resource_analyzed_at: std::option::Option<smithy_types::Instant>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) status: std::option::Option<crate::model::AnalyzerStatus>,
        pub(crate) status_reason: std::option::Option<crate::model::StatusReason>,
    }
    impl Builder {
        /// The ARN of the analyzer.
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
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
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        /// The resource that was most recently analyzed by the analyzer.
        pub fn last_resource_analyzed(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_resource_analyzed = Some(input.into());
            self
        }
        pub fn set_last_resource_analyzed(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_resource_analyzed = input;
            self
        }
        pub fn last_resource_analyzed_at(mut self, input: smithy_types::Instant) -> Self {
            self.last_resource_analyzed_at = Some(input);
            self
        }
        pub fn set_last_resource_analyzed_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_resource_analyzed_at = input;
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
        pub fn status(mut self, input: crate::model::AnalyzerStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::AnalyzerStatus>) -> Self {
            self.status = input;
            self
        }
        /// Set when the analyzer fails to create or is disabled.
        pub fn status_reason(mut self, input: crate::model::StatusReason) -> Self {
            self.status_reason = Some(input);
            self
        }
        pub fn set_status_reason(mut self, input: std::option::Option<crate::model::StatusReason>) -> Self {
            self.status_reason = input;
            self
        }
        /// Consumes the builder and constructs a [`AnalyzerSummary`](crate::model::AnalyzerSummary)
        pub fn build(self) -> crate::model::AnalyzerSummary {
            crate::model::AnalyzerSummary {
                arn: self.arn,
                name: self.name,
                r#type: self.r#type,
                created_at: self.created_at,
                last_resource_analyzed: self.last_resource_analyzed,
                last_resource_analyzed_at: self.last_resource_analyzed_at,
                tags: self.tags,
                status: self.status,
                status_reason: self.status_reason,
            }
        }
    }
}
impl AnalyzerSummary {
    /// Creates a new builder-style object to manufacture [`AnalyzerSummary`](crate::model::AnalyzerSummary)
    pub fn builder() -> crate::model::analyzer_summary::Builder {
        crate::model::analyzer_summary::Builder::default()
    }
}

/// Why an analyzer is in its current status
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StatusReason {
    pub code: std::option::Option<crate::model::ReasonCode>,
}

/// See [`StatusReason`](crate::model::StatusReason)
pub mod status_reason {
    /// A builder for [`StatusReason`](crate::model::StatusReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::ReasonCode>,
    }
    impl Builder {
        pub fn code(mut self, input: crate::model::ReasonCode) -> Self {
            self.code = Some(input);
            self
        }
        pub fn set_code(mut self, input: std::option::Option<crate::model::ReasonCode>) -> Self {
            self.code = input;
            self
        }
        /// Consumes the builder and constructs a [`StatusReason`](crate::model::StatusReason)
        pub fn build(self) -> crate::model::StatusReason {
            crate::model::StatusReason {
                code: self.code,
            }
        }
    }
}
impl StatusReason {
    /// Creates a new builder-style object to manufacture [`StatusReason`](crate::model::StatusReason)
    pub fn builder() -> crate::model::status_reason::Builder {
        crate::model::status_reason::Builder::default()
    }
}

/// An archive rule created together with an analyzer
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InlineArchiveRule {
    pub rule_name: std::option::Option<std::string::String>,
    /// The condition and values for a criterion.
    pub filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
}

/// See [`InlineArchiveRule`](crate::model::InlineArchiveRule)
pub mod inline_archive_rule {
    /// A builder for [`InlineArchiveRule`](crate::model::InlineArchiveRule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) rule_name: std::option::Option<std::string::String>,
        pub(crate) filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`InlineArchiveRule`](crate::model::InlineArchiveRule)
        pub fn build(self) -> crate::model::InlineArchiveRule {
            crate::model::InlineArchiveRule {
                rule_name: self.rule_name,
                filter: self.filter,
            }
        }
    }
}
impl InlineArchiveRule {
    /// Creates a new builder-style object to manufacture [`InlineArchiveRule`](crate::model::InlineArchiveRule)
    pub fn builder() -> crate::model::inline_archive_rule::Builder {
        crate::model::inline_archive_rule::Builder::default()
    }
}

/// The criteria to use in the filter that defines the archive rule
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Criterion {
    pub eq: std::option::Option<std::vec::Vec<std::string::String>>,
    pub neq: std::option::Option<std::vec::Vec<std::string::String>>,
    pub contains: std::option::Option<std::vec::Vec<std::string::String>>,
    pub exists: std::option::Option<bool>,
}

/// See [`Criterion`](crate::model::Criterion)
pub mod criterion {
    /// A builder for [`Criterion`](crate::model::Criterion)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) eq: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) neq: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) contains: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) exists: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `eq`.
        ///
        /// To override the contents of this collection use [`set_eq`](Self::set_eq).
        pub fn eq(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.eq.unwrap_or_default();
            v.push(input.into());
            self.eq = Some(v);
            self
        }
        pub fn set_eq(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.eq = input;
            self
        }
        /// Appends an item to `neq`.
        ///
        /// To override the contents of this collection use [`set_neq`](Self::set_neq).
        pub fn neq(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.neq.unwrap_or_default();
            v.push(input.into());
            self.neq = Some(v);
            self
        }
        pub fn set_neq(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.neq = input;
            self
        }
        /// Appends an item to `contains`.
        ///
        /// To override the contents of this collection use [`set_contains`](Self::set_contains).
        pub fn contains(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.contains.unwrap_or_default();
            v.push(input.into());
            self.contains = Some(v);
            self
        }
        pub fn set_contains(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.contains = input;
            self
        }
        pub fn exists(mut self, input: bool) -> Self {
            self.exists = Some(input);
            self
        }
        pub fn set_exists(mut self, input: std::option::Option<bool>) -> Self {
            self.exists = input;
            self
        }
        /// Consumes the builder and constructs a [`Criterion`](crate::model::Criterion)
        pub fn build(self) -> crate::model::Criterion {
            crate::model::Criterion {
                eq: self.eq,
                neq: self.neq,
                contains: self.contains,
                exists: self.exists,
            }
        }
    }
}
impl Criterion {
    /// Creates a new builder-style object to manufacture [`Criterion`](crate::model::Criterion)
    pub fn builder() -> crate::model::criterion::Builder {
        crate::model::criterion::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct SortCriteria {
    pub attribute_name: std::option::Option<std::string::String>,
    pub order_by: std::option::Option<crate::model::OrderBy>,
}

/// See [`SortCriteria`](crate::model::SortCriteria)
pub mod sort_criteria {
    /// A builder for [`SortCriteria`](crate::model::SortCriteria)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attribute_name: std::option::Option<std::string::String>,
        pub(crate) order_by: std::option::Option<crate::model::OrderBy>,
    }
    impl Builder {
        pub fn attribute_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.attribute_name = Some(input.into());
            self
        }
        pub fn set_attribute_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.attribute_name = input;
            self
        }
        pub fn order_by(mut self, input: crate::model::OrderBy) -> Self {
            self.order_by = Some(input);
            self
        }
        pub fn set_order_by(mut self, input: std::option::Option<crate::model::OrderBy>) -> Self {
            self.order_by = input;
            self
        }
        /// Consumes the builder and constructs a [`SortCriteria`](crate::model::SortCriteria)
        pub fn build(self) -> crate::model::SortCriteria {
            crate::model::SortCriteria {
                attribute_name: self.attribute_name,
                order_by: self.order_by,
            }
        }
    }
}
impl SortCriteria {
    /// Creates a new builder-style object to manufacture [`SortCriteria`](crate::model::SortCriteria)
    pub fn builder() -> crate::model::sort_criteria::Builder {
        crate::model::sort_criteria::Builder::default()
    }
}

/// Contains information about a finding
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Finding {
    pub id: std::option::Option<std::string::String>,
    /// The external principal that has access to a resource within the zone of trust.
    pub principal: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub action: std::option::Option<std::vec::Vec<std::string::String>>,
    pub resource: std::option::Option<std::string::String>,
    pub is_public: std::option::Option<bool>,
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    pub condition: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub created_at: std::option::Option<smithy_types::Instant>,
    pub analyzed_at: std::option::Option<smithy_types::Instant>,
    pub updated_at: std::option::Option<smithy_types::Instant>,
    pub status: std::option::Option<crate::model::FindingStatus>,
    pub resource_owner_account: std::option::Option<std::string::String>,
    pub error: std::option::Option<std::string::String>,
    /// The sources of the finding.
    pub sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
}

/// See [`Finding`](crate::model::Finding)
pub mod finding {
    /// A builder for [`Finding`](crate::model::Finding)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) principal: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) action: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) resource: std::option::Option<std::string::String>,
        pub(crate) is_public: std::option::Option<bool>,
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) condition: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) analyzed_at: std::option::Option<smithy_types::Instant>,
        pub(crate) updated_at: std::option::Option<smithy_types::Instant>,
        pub(crate) status: std::option::Option<crate::model::FindingStatus>,
        pub(crate) resource_owner_account: std::option::Option<std::string::String>,
        pub(crate) error: std::option::Option<std::string::String>,
        pub(crate) sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// Adds a key-value pair to `principal`.
        ///
        /// To override the contents of this collection use [`set_principal`](Self::set_principal).
        pub fn principal(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.principal.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.principal = Some(hash_map);
            self
        }
        pub fn set_principal(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.principal = input;
            self
        }
        /// Appends an item to `action`.
        ///
        /// To override the contents of this collection use [`set_action`](Self::set_action).
        pub fn action(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.action.unwrap_or_default();
            v.push(input.into());
            self.action = Some(v);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.action = input;
            self
        }
        pub fn resource(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource = Some(input.into());
            self
        }
        pub fn set_resource(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource = input;
            self
        }
        pub fn is_public(mut self, input: bool) -> Self {
            self.is_public = Some(input);
            self
        }
        pub fn set_is_public(mut self, input: std::option::Option<bool>) -> Self {
            self.is_public = input;
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
        /// Adds a key-value pair to `condition`.
        ///
        /// To override the contents of this collection use [`set_condition`](Self::set_condition).
        pub fn condition(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.condition.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.condition = Some(hash_map);
            self
        }
        pub fn set_condition(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.condition = input;
            self
        }
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        pub fn analyzed_at(mut self, input: smithy_types::Instant) -> Self {
            self.analyzed_at = Some(input);
            self
        }
        pub fn set_analyzed_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.analyzed_at = input;
            self
        }
        pub fn updated_at(mut self, input: smithy_types::Instant) -> Self {
            self.updated_at = Some(input);
            self
        }
        pub fn set_updated_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = input;
            self
        }
        pub fn status(mut self, input: crate::model::FindingStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::FindingStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn resource_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(input.into());
            self
        }
        pub fn set_resource_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_owner_account = input;
            self
        }
        pub fn error(mut self, input: impl Into<std::string::String>) -> Self {
            self.error = Some(input.into());
            self
        }
        pub fn set_error(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error = input;
            self
        }
        /// Appends an item to `sources`.
        ///
        /// To override the contents of this collection use [`set_sources`](Self::set_sources).
        pub fn sources(mut self, input: impl Into<crate::model::FindingSource>) -> Self {
            let mut v = self.sources.unwrap_or_default();
            v.push(input.into());
            self.sources = Some(v);
            self
        }
        pub fn set_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::FindingSource>>) -> Self {
            self.sources = input;
            self
        }
        /// Consumes the builder and constructs a [`Finding`](crate::model::Finding)
        pub fn build(self) -> crate::model::Finding {
            crate::model::Finding {
                id: self.id,
                principal: self.principal,
                action: self.action,
                resource: self.resource,
                is_public: self.is_public,
                resource_type: self.resource_type,
                condition: self.condition,
                created_at: self.created_at,
                analyzed_at: self.analyzed_at,
                updated_at: self.updated_at,
                status: self.status,
                resource_owner_account: self.resource_owner_account,
                error: self.error,
                sources: self.sources,
            }
        }
    }
}
impl Finding {
    /// Creates a new builder-style object to manufacture [`Finding`](crate::model::Finding)
    pub fn builder() -> crate::model::finding::Builder {
        crate::model::finding::Builder::default()
    }
}

/// A finding as returned by `ListFindings`
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct FindingSummary {
    pub id: std::option::Option<std::string::String>,
    pub principal: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub action: std::option::Option<std::vec::Vec<std::string::String>>,
    pub resource: std::option::Option<std::string::String>,
    pub is_public: std::option::Option<bool>,
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    pub condition: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub created_at: std::option::Option<smithy_types::Instant>,
    pub analyzed_at: std::option::Option<smithy_types::Instant>,
    pub updated_at: std::option::Option<smithy_types::Instant>,
    pub status: std::option::Option<crate::model::FindingStatus>,
    pub resource_owner_account: std::option::Option<std::string::String>,
    pub error: std::option::Option<std::string::String>,
    pub sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
}

/// See [`FindingSummary`](crate::model::FindingSummary)
pub mod finding_summary {
    /// A builder for [`FindingSummary`](crate::model::FindingSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) principal: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) action: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) resource: std::option::Option<std::string::String>,
        pub(crate) is_public: std::option::Option<bool>,
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) condition: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) analyzed_at: std::option::Option<smithy_types::Instant>,
        pub(crate) updated_at: std::option::Option<smithy_types::Instant>,
        pub(crate) status: std::option::Option<crate::model::FindingStatus>,
        pub(crate) resource_owner_account: std::option::Option<std::string::String>,
        pub(crate) error: std::option::Option<std::string::String>,
        pub(crate) sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// Adds a key-value pair to `principal`.
        ///
        /// To override the contents of this collection use [`set_principal`](Self::set_principal).
        pub fn principal(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.principal.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.principal = Some(hash_map);
            self
        }
        pub fn set_principal(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.principal = input;
            self
        }
        /// Appends an item to `action`.
        ///
        /// To override the contents of this collection use [`set_action`](Self::set_action).
        pub fn action(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.action.unwrap_or_default();
            v.push(input.into());
            self.action = Some(v);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.action = input;
            self
        }
        pub fn resource(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource = Some(input.into());
            self
        }
        pub fn set_resource(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource = input;
            self
        }
        pub fn is_public(mut self, input: bool) -> Self {
            self.is_public = Some(input);
            self
        }
        pub fn set_is_public(mut self, input: std::option::Option<bool>) -> Self {
            self.is_public = input;
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
        /// Adds a key-value pair to `condition`.
        ///
        /// To override the contents of this collection use [`set_condition`](Self::set_condition).
        pub fn condition(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.condition.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.condition = Some(hash_map);
            self
        }
        pub fn set_condition(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.condition = input;
            self
        }
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        pub fn analyzed_at(mut self, input: smithy_types::Instant) -> Self {
            self.analyzed_at = Some(input);
            self
        }
        pub fn set_analyzed_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.analyzed_at = input;
            self
        }
        pub fn updated_at(mut self, input: smithy_types::Instant) -> Self {
            self.updated_at = Some(input);
            self
        }
        pub fn set_updated_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = input;
            self
        }
        pub fn status(mut self, input: crate::model::FindingStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::FindingStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn resource_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(input.into());
            self
        }
        pub fn set_resource_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_owner_account = input;
            self
        }
        pub fn error(mut self, input: impl Into<std::string::String>) -> Self {
            self.error = Some(input.into());
            self
        }
        pub fn set_error(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error = input;
            self
        }
        /// Appends an item to `sources`.
        ///
        /// To override the contents of this collection use [`set_sources`](Self::set_sources).
        pub fn sources(mut self, input: impl Into<crate::model::FindingSource>) -> Self {
            let mut v = self.sources.unwrap_or_default();
            v.push(input.into());
            self.sources = Some(v);
            self
        }
        pub fn set_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::FindingSource>>) -> Self {
            self.sources = input;
            self
        }
        /// Consumes the builder and constructs a [`FindingSummary`](crate::model::FindingSummary)
        pub fn build(self) -> crate::model::FindingSummary {
            crate::model::FindingSummary {
                id: self.id,
                principal: self.principal,
                action: self.action,
                resource: self.resource,
                is_public: self.is_public,
                resource_type: self.resource_type,
                condition: self.condition,
                created_at: self.created_at,
                analyzed_at: self.analyzed_at,
                updated_at: self.updated_at,
                status: self.status,
                resource_owner_account: self.resource_owner_account,
                error: self.error,
                sources: self.sources,
            }
        }
    }
}
impl FindingSummary {
    /// Creates a new builder-style object to manufacture [`FindingSummary`](crate::model::FindingSummary)
    pub fn builder() -> crate::model::finding_summary::Builder {
        crate::model::finding_summary::Builder::default()
    }
}

/// How the access that generated a finding is granted
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct FindingSource {
    pub r#type: std::option::Option<crate::model::FindingSourceType>,
    pub detail: std::option::Option<crate::model::FindingSourceDetail>,
}

/// See [`FindingSource`](crate::model::FindingSource)
pub mod finding_source {
    /// A builder for [`FindingSource`](crate::model::FindingSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::FindingSourceType>,
        pub(crate) detail: std::option::Option<crate::model::FindingSourceDetail>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::FindingSourceType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::FindingSourceType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn detail(mut self, input: crate::model::FindingSourceDetail) -> Self {
            self.detail = Some(input);
            self
        }
        pub fn set_detail(mut self, input: std::option::Option<crate::model::FindingSourceDetail>) -> Self {
            self.detail = input;
            self
        }
        /// Consumes the builder and constructs a [`FindingSource`](crate::model::FindingSource)
        pub fn build(self) -> crate::model::FindingSource {
            crate::model::FindingSource {
                r#type: self.r#type,
                detail: self.detail,
            }
        }
    }
}
impl FindingSource {
    /// Creates a new builder-style object to manufacture [`FindingSource`](crate::model::FindingSource)
    pub fn builder() -> crate::model::finding_source::Builder {
        crate::model::finding_source::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct FindingSourceDetail {
    pub access_point_arn: std::option::Option<std::string::String>,
}

/// See [`FindingSourceDetail`](crate::model::FindingSourceDetail)
pub mod finding_source_detail {
    /// A builder for [`FindingSourceDetail`](crate::model::FindingSourceDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) access_point_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn access_point_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.access_point_arn = Some(input.into());
            self
        }
        pub fn set_access_point_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.access_point_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`FindingSourceDetail`](crate::model::FindingSourceDetail)
        pub fn build(self) -> crate::model::FindingSourceDetail {
            crate::model::FindingSourceDetail {
                access_point_arn: self.access_point_arn,
            }
        }
    }
}
impl FindingSourceDetail {
    /// Creates a new builder-style object to manufacture [`FindingSourceDetail`](crate::model::FindingSourceDetail)
    pub fn builder() -> crate::model::finding_source_detail::Builder {
        crate::model::finding_source_detail::Builder::default()
    }
}

/// Contains information about an archive rule
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ArchiveRuleSummary {
    pub rule_name: std::option::Option<std::string::String>,
    /// A filter used to define the archive rule.
    pub filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    pub created_at: std::option::Option<smithy_types::Instant>,
    pub updated_at: std::option::Option<smithy_types::Instant>,
}

/// See [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
pub mod archive_rule_summary {
    /// A builder for [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) rule_name: std::option::Option<std::string::String>,
        pub(crate) filter: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) updated_at: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
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
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        pub fn updated_at(mut self, input: smithy_types::Instant) -> Self {
            self.updated_at = Some(input);
            self
        }
        pub fn set_updated_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = input;
            self
        }
        /// Consumes the builder and constructs a [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
        pub fn build(self) -> crate::model::ArchiveRuleSummary {
            crate::model::ArchiveRuleSummary {
                rule_name: self.rule_name,
                filter: self.filter,
                created_at: self.created_at,
                updated_at: self.updated_at,
            }
        }
    }
}
impl ArchiveRuleSummary {
    /// Creates a new builder-style object to manufacture [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
    pub fn builder() -> crate::model::archive_rule_summary::Builder {
        crate::model::archive_rule_summary::Builder::default()
    }
}

/// The ARN, owner and type of a resource that was analyzed
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct AnalyzedResourceSummary {
    pub resource_arn: std::option::Option<std::string::String>,
    pub resource_owner_account: std::option::Option<std::string::String>,
    pub resource_type: std::option::Option<crate::model::ResourceType>,
}

/// See [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
pub mod analyzed_resource_summary {
    /// A builder for [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) resource_owner_account: std::option::Option<std::string::String>,
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
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
        pub fn resource_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(input.into());
            self
        }
        pub fn set_resource_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_owner_account = input;
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
        /// Consumes the builder and constructs a [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
        pub fn build(self) -> crate::model::AnalyzedResourceSummary {
            crate::model::AnalyzedResourceSummary {
                resource_arn: self.resource_arn,
                resource_owner_account: self.resource_owner_account,
                resource_type: self.resource_type,
            }
        }
    }
}
impl AnalyzedResourceSummary {
    /// Creates a new builder-style object to manufacture [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
    pub fn builder() -> crate::model::analyzed_resource_summary::Builder {
        crate::model::analyzed_resource_summary::Builder::default()
    }
}
