/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::error::{
    CreateAnalyzerErrorKind, DeleteAnalyzerError, GetFindingError, GetFindingErrorKind,
};
use accessanalyzer::model::{Criterion, FindingStatus, ResourceType};
use accessanalyzer::operation::{
    CreateAnalyzer, DeleteAnalyzer, GetArchiveRule, GetFinding, ListAnalyzedResources,
    ListAnalyzers, ListArchiveRules, ListTagsForResource, UpdateFindings,
};
use bytes::Bytes;
use smithy_http::middleware::parse_response;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;
use smithy_types::{Instant, ProvideErrorMetadata};
use std::error::Error;

fn response(status: u16, headers: &[(&str, &str)], body: &str) -> http::Response<Bytes> {
    let mut builder = http::Response::builder().status(status);
    for (key, value) in headers {
        builder = builder.header(*key, *value);
    }
    builder
        .body(Bytes::copy_from_slice(body.as_bytes()))
        .expect("valid response")
}

#[test]
fn get_finding_success() {
    let http_response = response(
        200,
        &[("x-amzn-requestid", "req-1")],
        r#"{
            "finding": {
                "id": "f-1",
                "resource": "arn:aws:s3:::bucket",
                "resourceType": "AWS::S3::Bucket",
                "isPublic": true,
                "status": "ARCHIVED",
                "createdAt": "2021-05-24T15:34:50.123Z",
                "updatedAt": "2021-05-24T15:34:50Z",
                "principal": {"AWS": "*"},
                "newlyAddedField": {"ignored": true}
            }
        }"#,
    );
    let output = GetFinding::new().parse(&http_response).unwrap();
    let finding = output.finding.expect("finding present");
    assert_eq!(finding.id.as_deref(), Some("f-1"));
    assert_eq!(finding.resource_type, Some(ResourceType::AwsS3Bucket));
    assert_eq!(finding.is_public, Some(true));
    assert_eq!(finding.status, Some(FindingStatus::Archived));
    assert_eq!(
        finding.created_at,
        Some(Instant::from_secs_and_nanos(1621870490, 123_000_000))
    );
    assert_eq!(
        finding.updated_at,
        Some(Instant::from_epoch_seconds(1621870490))
    );
    assert_eq!(finding.analyzed_at, None);
    assert_eq!(
        finding.principal.and_then(|p| p.get("AWS").cloned()),
        Some("*".to_string())
    );
}

#[test]
fn empty_success_body() {
    let output = DeleteAnalyzer::new()
        .parse(&response(200, &[], ""))
        .unwrap();
    assert_eq!(
        output,
        accessanalyzer::output::DeleteAnalyzerOutput::builder().build()
    );
}

#[test]
fn list_analyzers_page() {
    let output = ListAnalyzers::new()
        .parse(&response(
            200,
            &[],
            r#"{"analyzers":[{"name":"a","status":"ACTIVE"},null,{"name":"b","status":"DISABLED"}],"nextToken":"page-2"}"#,
        ))
        .unwrap();
    let names: Vec<_> = output
        .analyzers
        .unwrap_or_default()
        .into_iter()
        .filter_map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
}

#[test]
fn archive_rule_responses() {
    let output = GetArchiveRule::new()
        .parse(&response(
            200,
            &[],
            r#"{"archiveRule":{"ruleName":"r","filter":{"isPublic":{"eq":["false"]}},"createdAt":"2021-05-24T15:34:50Z","updatedAt":"2021-05-24T15:34:50.5Z"}}"#,
        ))
        .unwrap();
    let rule = output.archive_rule.expect("rule present");
    assert_eq!(rule.rule_name.as_deref(), Some("r"));
    assert_eq!(
        rule.filter.and_then(|f| f.get("isPublic").cloned()),
        Some(Criterion::builder().eq("false").build())
    );
    assert_eq!(rule.created_at, Some(Instant::from_epoch_seconds(1621870490)));
    assert_eq!(
        rule.updated_at,
        Some(Instant::from_secs_and_nanos(1621870490, 500_000_000))
    );

    let output = ListArchiveRules::new()
        .parse(&response(
            200,
            &[],
            r#"{"archiveRules":[{"ruleName":"a"},{"ruleName":"b"}],"nextToken":null}"#,
        ))
        .unwrap();
    assert_eq!(output.archive_rules.map(|rules| rules.len()), Some(2));
    assert_eq!(output.next_token, None);
}

#[test]
fn analyzed_resources_and_tags_responses() {
    let output = ListAnalyzedResources::new()
        .parse(&response(
            200,
            &[],
            r#"{"analyzedResources":[{"resourceArn":"arn:aws:iam::123456789012:role/r","resourceOwnerAccount":"123456789012","resourceType":"AWS::IAM::Role"}]}"#,
        ))
        .unwrap();
    let resources = output.analyzed_resources.unwrap();
    assert_eq!(resources[0].resource_type, Some(ResourceType::AwsIamRole));
    assert_eq!(
        resources[0].resource_owner_account.as_deref(),
        Some("123456789012")
    );

    let output = ListTagsForResource::new()
        .parse(&response(200, &[], r#"{"tags":{"team":"security","owner":null}}"#))
        .unwrap();
    let tags = output.tags.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get("team").map(String::as_str), Some("security"));
}

#[test]
fn update_findings_errors() {
    let err = UpdateFindings::new()
        .parse(&response(
            400,
            &[("x-amzn-errortype", "ValidationException")],
            r#"{"message":"ids or resourceArn is required","reason":"fieldValidationFailed"}"#,
        ))
        .unwrap_err();
    assert!(err.is_validation_exception());
    match err.kind {
        accessanalyzer::error::UpdateFindingsErrorKind::ValidationException(inner) => {
            assert_eq!(inner.reason.as_deref(), Some("fieldValidationFailed"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert!(UpdateFindings::new()
        .parse(&response(200, &[], ""))
        .is_ok());
}

#[test]
fn modeled_error_from_header() {
    let http_response = response(
        404,
        &[
            ("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/"),
            ("x-amzn-requestid", "req-2"),
        ],
        r#"{"message":"Finding f-1 not found","resourceId":"f-1","resourceType":"Finding"}"#,
    );
    let err = GetFinding::new().parse(&http_response).unwrap_err();
    assert!(err.is_resource_not_found_exception());
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("Finding f-1 not found"));
    assert_eq!(err.request_id(), Some("req-2"));
    match &err.kind {
        GetFindingErrorKind::ResourceNotFoundException(inner) => {
            assert_eq!(inner.resource_id.as_deref(), Some("f-1"));
            assert_eq!(inner.resource_type.as_deref(), Some("Finding"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert_eq!(
        format!("{}", err),
        "ResourceNotFoundException: Finding f-1 not found"
    );
    assert!(err.source().is_some());
}

#[test]
fn modeled_error_from_body_type() {
    let http_response = response(
        409,
        &[],
        r#"{"__type":"com.amazonaws.accessanalyzer#ConflictException","Message":"Analyzer exists","resourceId":"a","resourceType":"Analyzer"}"#,
    );
    let err = CreateAnalyzer::new().parse(&http_response).unwrap_err();
    assert!(err.is_conflict_exception());
    match err.kind {
        CreateAnalyzerErrorKind::ConflictException(inner) => {
            assert_eq!(inner.message.as_deref(), Some("Analyzer exists"));
            assert_eq!(inner.resource_id.as_deref(), Some("a"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn unmodeled_code_is_unhandled() {
    let http_response = response(
        409,
        &[("x-amzn-errortype", "ConflictException")],
        r#"{"message":"conflict"}"#,
    );
    let err: GetFindingError = GetFinding::new().parse(&http_response).unwrap_err();
    assert!(matches!(err.kind, GetFindingErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("ConflictException"));
    assert_eq!(err.meta().message(), Some("conflict"));
}

#[test]
fn malformed_error_body_is_unhandled() {
    let err: DeleteAnalyzerError = DeleteAnalyzer::new()
        .parse(&response(500, &[], "<html>oops</html>"))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        accessanalyzer::error::DeleteAnalyzerErrorKind::Unhandled(_)
    ));
    assert_eq!(err.code(), None);
}

#[test]
fn missing_error_code_is_unhandled() {
    let err = GetFinding::new()
        .parse(&response(500, &[], ""))
        .unwrap_err();
    assert!(matches!(err.kind, GetFindingErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

#[test]
fn parse_response_splits_success_and_failure() {
    let success = parse_response(
        response(200, &[], r#"{"finding":{"id":"f-1"}}"#),
        &GetFinding::new(),
    )
    .unwrap();
    assert_eq!(success.raw.status(), 200);
    assert_eq!(
        success.parsed.finding.and_then(|f| f.id),
        Some("f-1".to_string())
    );

    let failure = parse_response(
        response(
            429,
            &[("x-amzn-errortype", "ThrottlingException")],
            r#"{"message":"slow down"}"#,
        ),
        &GetFinding::new(),
    )
    .unwrap_err();
    assert_eq!(
        failure.raw_response().map(|r| r.status().as_u16()),
        Some(429)
    );
    assert!(failure
        .service_error()
        .map(|e| e.is_throttling_exception())
        .unwrap_or(false));
    assert!(matches!(failure, SdkError::ServiceError { .. }));
}

#[test]
fn error_metadata_is_logged() {
    use tracing_subscriber::layer::SubscriberExt;

    let sink = aws_logcat::MemorySink::default();
    let subscriber = tracing_subscriber::registry().with(
        aws_logcat::LogcatLayer::new(sink.clone()).with_min_priority(aws_logcat::Priority::Debug),
    );
    tracing::subscriber::with_default(subscriber, || {
        GetFinding::new()
            .parse(&response(
                404,
                &[
                    ("x-amzn-errortype", "ResourceNotFoundException"),
                    ("x-amzn-requestid", "req-3"),
                ],
                r#"{"message":"gone"}"#,
            ))
            .unwrap_err();
    });
    let record = sink
        .records()
        .into_iter()
        .find(|record| record.tag == "json_errors")
        .expect("error parsing emits a debug event");
    assert_eq!(record.priority, aws_logcat::Priority::Debug);
    assert!(record.message.starts_with("parsed error metadata"));
    assert!(record.message.contains("status=404"));
    assert!(record.message.contains(r#"code=Some("ResourceNotFoundException")"#));
    assert!(record.message.contains(r#"request_id=Some("req-3")"#));
}
