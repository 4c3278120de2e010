/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::input::{
    CreateAnalyzerInput, CreateArchiveRuleInput, DeleteAnalyzerInput, DeleteArchiveRuleInput,
    GetAnalyzedResourceInput, GetAnalyzerInput, GetArchiveRuleInput, GetFindingInput,
    ListAnalyzedResourcesInput, ListAnalyzersInput, ListArchiveRulesInput, ListFindingsInput,
    ListTagsForResourceInput, StartResourceScanInput, TagResourceInput, UntagResourceInput,
    UpdateArchiveRuleInput, UpdateFindingsInput,
};
use accessanalyzer::model::{
    Criterion, FindingStatusUpdate, InlineArchiveRule, OrderBy, ResourceType, SortCriteria, Type,
};
use accessanalyzer::operation::{
    CreateAnalyzer, GetFinding, ListAnalyzedResources, ListFindings, UpdateArchiveRule,
    UpdateFindings,
};
use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use protocol_test_helpers::{
    assert_ok, forbid_query_params, require_query_params, validate_body, validate_headers,
    validate_query_string, MediaType,
};
use smithy_http::marshall::MarshallRequest;
use smithy_http::operation::BuildError;

const ANALYZER_ARN: &str = "arn:aws:access-analyzer:us-east-1:123456789012:analyzer/a";

fn config() -> accessanalyzer::Config {
    accessanalyzer::Config::builder()
        .region(Region::new("us-east-1"))
        .build()
}

fn body_of(request: &http::Request<smithy_http::body::SdkBody>) -> &str {
    std::str::from_utf8(request.body().bytes().expect("body is in memory")).expect("utf-8 body")
}

#[test]
fn missing_input_is_a_build_error() {
    let err = <GetFinding as MarshallRequest>::marshall(None).expect_err("no input");
    assert!(matches!(
        err,
        BuildError::MissingInput {
            operation: "GetFinding"
        }
    ));
    assert!(<CreateAnalyzer as MarshallRequest>::marshall(None).is_err());
}

#[test]
fn create_analyzer_request() {
    let input = CreateAnalyzerInput::builder()
        .analyzer_name("my-analyzer")
        .r#type(Type::Account)
        .archive_rules(
            InlineArchiveRule::builder()
                .rule_name("public-only")
                .filter("isPublic", Criterion::builder().eq("true").build())
                .build(),
        )
        .tags("team", "security")
        .client_token("token-1")
        .build()
        .unwrap();
    let request = <CreateAnalyzer as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(request.method(), "PUT");
    assert_eq!(request.uri().path(), "/analyzer");
    assert_eq!(request.uri().query(), None);
    assert_ok(validate_headers(
        &request,
        &[("content-type", "application/x-amz-json-1.1")],
    ));
    assert_ok(validate_body(
        body_of(&request),
        r#"{
            "analyzerName": "my-analyzer",
            "type": "ACCOUNT",
            "archiveRules": [{"ruleName": "public-only", "filter": {"isPublic": {"eq": ["true"]}}}],
            "tags": {"team": "security"},
            "clientToken": "token-1"
        }"#,
        MediaType::Json,
    ));
    let length = request.headers()[CONTENT_LENGTH].to_str().unwrap();
    assert_eq!(length, body_of(&request).len().to_string());
}

#[test]
fn archive_rule_label_is_nested_in_path() {
    let input = CreateArchiveRuleInput::builder()
        .analyzer_name("org/analyzer")
        .rule_name("internal")
        .filter("isPublic", Criterion::builder().eq("false").build())
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "PUT");
    assert_eq!(
        request.uri().path(),
        "/analyzer/org%2Fanalyzer/archive-rule"
    );
    assert_ok(validate_body(
        body_of(request),
        r#"{"ruleName":"internal","filter":{"isPublic":{"eq":["false"]}}}"#,
        MediaType::Json,
    ));
    assert_eq!(
        operation.metadata().map(|m| m.name()),
        Some("CreateArchiveRule")
    );
}

#[test]
fn archive_rule_paths_carry_both_labels() {
    let operation = GetArchiveRuleInput::builder()
        .analyzer_name("a")
        .rule_name("rule 1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(request.uri().path(), "/analyzer/a/archive-rule/rule%201");
    assert_eq!(body_of(request), "");

    let operation = ListArchiveRulesInput::builder()
        .analyzer_name("a")
        .max_results(5)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = operation.request().http();
    assert_eq!(request.uri().path(), "/analyzer/a/archive-rule");
    assert_eq!(request.uri().query(), Some("maxResults=5"));

    let operation = DeleteArchiveRuleInput::builder()
        .analyzer_name("a")
        .rule_name("r")
        .client_token("token-2")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(request.uri().path(), "/analyzer/a/archive-rule/r");
    assert_ok(validate_query_string(request, &["clientToken=token-2"]));
}

#[test]
fn update_archive_rule_request() {
    let input = UpdateArchiveRuleInput::builder()
        .analyzer_name("a")
        .rule_name("r")
        .filter("resourceType", Criterion::builder().neq("AWS::KMS::Key").build())
        .build()
        .unwrap();
    let request = <UpdateArchiveRule as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(request.method(), "PUT");
    assert_eq!(request.uri().path(), "/analyzer/a/archive-rule/r");
    assert_eq!(
        body_of(&request),
        r#"{"filter":{"resourceType":{"neq":["AWS::KMS::Key"]}}}"#
    );
}

#[test]
fn update_findings_request() {
    let input = UpdateFindingsInput::builder()
        .analyzer_arn(ANALYZER_ARN)
        .status(FindingStatusUpdate::Archived)
        .ids("f-1")
        .ids("f-2")
        .client_token("token-3")
        .build()
        .unwrap();
    let request = <UpdateFindings as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(request.method(), "PUT");
    assert_eq!(request.uri().path(), "/finding");
    assert_eq!(
        body_of(&request),
        format!(
            r#"{{"analyzerArn":"{}","status":"ARCHIVED","ids":["f-1","f-2"],"clientToken":"token-3"}}"#,
            ANALYZER_ARN
        )
    );
}

#[test]
fn list_analyzed_resources_request() {
    let input = ListAnalyzedResourcesInput::builder()
        .analyzer_arn(ANALYZER_ARN)
        .resource_type(ResourceType::AwsIamRole)
        .max_results(25)
        .build()
        .unwrap();
    let request = <ListAnalyzedResources as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri().path(), "/analyzed-resource");
    assert_ok(validate_body(
        body_of(&request),
        &format!(
            r#"{{"analyzerArn": "{}", "resourceType": "AWS::IAM::Role", "maxResults": 25}}"#,
            ANALYZER_ARN
        ),
        MediaType::Json,
    ));
}

#[test]
fn list_tags_for_resource_request() {
    let operation = ListTagsForResourceInput::builder()
        .resource_arn(ANALYZER_ARN)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri().path(),
        "/tags/arn%3Aaws%3Aaccess-analyzer%3Aus-east-1%3A123456789012%3Aanalyzer%2Fa"
    );
    assert!(request.headers().get(CONTENT_LENGTH).is_none());
}

#[test]
fn content_length_counts_utf8_bytes() {
    let input = TagResourceInput::builder()
        .resource_arn("arn:aws:s3:::bucket")
        .tags("owner", "zoë")
        .build()
        .unwrap();
    let request = input.make_operation(&config()).unwrap();
    let request = request.request().http();
    assert_eq!(body_of(request), r#"{"tags":{"owner":"zoë"}}"#);
    assert_eq!(request.headers()[CONTENT_LENGTH], "25");
}

#[test]
fn path_labels_are_percent_encoded() {
    let input = TagResourceInput::builder()
        .resource_arn("arn:aws:s3:::bucket")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri().path(), "/tags/arn%3Aaws%3As3%3A%3A%3Abucket");
    assert_eq!(body_of(request), "{}");
}

#[test]
fn absent_label_is_an_empty_segment() {
    let input = GetAnalyzerInput::builder().build().unwrap();
    let request = input.make_operation(&config()).unwrap();
    assert_eq!(request.request().http().uri().path(), "/analyzer/");
}

#[test]
fn bodiless_requests_have_no_length() {
    let input = GetAnalyzerInput::builder()
        .analyzer_name("my analyzer")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(request.uri().path(), "/analyzer/my%20analyzer");
    assert_eq!(body_of(request), "");
    assert!(request.headers().get(CONTENT_LENGTH).is_none());
    assert_eq!(
        request.headers()[CONTENT_TYPE],
        "application/x-amz-json-1.1"
    );
}

#[test]
fn query_bound_members() {
    let input = ListAnalyzersInput::builder()
        .max_results(10)
        .next_token("abc/def")
        .r#type(Type::Organization)
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.uri().path(), "/analyzer");
    assert_ok(validate_query_string(
        request,
        &["maxResults=10", "nextToken=abc%2Fdef", "type=ORGANIZATION"],
    ));

    let input = ListAnalyzersInput::builder().build().unwrap();
    let operation = input.make_operation(&config()).unwrap();
    assert_eq!(operation.request().http().uri().query(), None);
}

#[test]
fn label_and_query_together() {
    let input = GetFindingInput::builder()
        .id("finding-1")
        .analyzer_arn(ANALYZER_ARN)
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.uri().path(), "/finding/finding-1");
    assert_ok(validate_query_string(
        request,
        &["analyzerArn=arn%3Aaws%3Aaccess-analyzer%3Aus-east-1%3A123456789012%3Aanalyzer%2Fa"],
    ));

    let input = DeleteAnalyzerInput::builder()
        .analyzer_name("a")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_ok(forbid_query_params(request, &["clientToken"]));
}

#[test]
fn repeated_query_keys() {
    let input = UntagResourceInput::builder()
        .resource_arn("arn:aws:s3:::bucket")
        .tag_keys("team")
        .tag_keys("owner")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(
        request.uri().query(),
        Some("tagKeys=team&tagKeys=owner")
    );
    assert_ok(require_query_params(request, &["tagKeys"]));
}

#[test]
fn analyzed_resource_query() {
    let input = GetAnalyzedResourceInput::builder()
        .analyzer_arn(ANALYZER_ARN)
        .resource_arn("arn:aws:s3:::bucket")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.uri().path(), "/analyzed-resource");
    assert_ok(require_query_params(request, &["analyzerArn", "resourceArn"]));
    assert_ok(validate_query_string(
        request,
        &["resourceArn=arn%3Aaws%3As3%3A%3A%3Abucket"],
    ));
}

#[test]
fn list_findings_body() {
    let input = ListFindingsInput::builder()
        .analyzer_arn(ANALYZER_ARN)
        .filter("status", Criterion::builder().eq("ACTIVE").build())
        .sort(
            SortCriteria::builder()
                .attribute_name("updatedAt")
                .order_by(OrderBy::Desc)
                .build(),
        )
        .max_results(50)
        .build()
        .unwrap();
    let request = <ListFindings as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri().path(), "/finding");
    assert_eq!(
        body_of(&request),
        format!(
            r#"{{"analyzerArn":"{}","filter":{{"status":{{"eq":["ACTIVE"]}}}},"sort":{{"attributeName":"updatedAt","orderBy":"DESC"}},"maxResults":50}}"#,
            ANALYZER_ARN
        )
    );
}

#[test]
fn make_operation_records_signing_properties() {
    let input = StartResourceScanInput::builder()
        .analyzer_arn(ANALYZER_ARN)
        .resource_arn("arn:aws:s3:::bucket")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    assert_eq!(
        operation.metadata().map(|m| (m.name(), m.service())),
        Some(("StartResourceScan", "accessanalyzer"))
    );
    let properties = operation.properties();
    assert_eq!(properties.get::<Region>(), Some(&Region::new("us-east-1")));
    assert_eq!(
        properties.get::<SigningRegion>(),
        Some(&SigningRegion::from_static("us-east-1"))
    );
    assert_eq!(
        properties.get::<SigningService>(),
        Some(&SigningService::from_static("access-analyzer"))
    );
}

#[test]
fn no_region_means_no_region_properties() {
    let config = accessanalyzer::Config::builder().build();
    let operation = GetAnalyzerInput::builder()
        .analyzer_name("a")
        .build()
        .unwrap()
        .make_operation(&config)
        .unwrap();
    let properties = operation.properties();
    assert!(properties.get::<Region>().is_none());
    assert!(properties.get::<SigningRegion>().is_none());
    assert!(properties.get::<SigningService>().is_some());
}

#[test]
fn marshalling_is_logged() {
    use tracing_subscriber::layer::SubscriberExt;

    let sink = aws_logcat::MemorySink::default();
    let subscriber = tracing_subscriber::registry().with(aws_logcat::LogcatLayer::new(sink.clone()));
    tracing::subscriber::with_default(subscriber, || {
        GetAnalyzerInput::builder()
            .analyzer_name("a")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
    });
    let records = sink.records();
    let record = records
        .iter()
        .find(|record| record.message.starts_with("marshalled request"))
        .expect("marshalling emits a debug event");
    assert_eq!(record.priority, aws_logcat::Priority::Debug);
    assert_eq!(record.tag, "input");
    assert!(record.message.contains("operation=\"GetAnalyzer\""));
    assert!(record.message.contains("uri=/analyzer/a"));
}
