/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::json_deser;
use accessanalyzer::json_ser;
use accessanalyzer::model::{
    AnalyzedResource, AnalyzerStatus, AnalyzerSummary, Criterion, Finding, FindingSource,
    FindingSourceDetail, FindingSourceType, FindingStatus, FindingSummary, InlineArchiveRule,
    OrderBy, ReasonCode, ResourceType, SortCriteria, StatusReason, Type,
};
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_json::serialize::JsonObjectWriter;
use smithy_types::Instant;

macro_rules! encode {
    ($serialize:path, $value:expr) => {{
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        $serialize(&mut object, $value).expect("value is serializable");
        object.finish();
        out
    }};
}

macro_rules! decode {
    ($deser:path, $json:expr) => {{
        let mut tokens = smithy_json::deserialize::json_token_iter($json.as_bytes()).peekable();
        $deser(&mut tokens)
    }};
}

fn shared_bucket() -> AnalyzedResource {
    AnalyzedResource::builder()
        .resource_arn("arn:aws:s3:::bucket")
        .is_public(true)
        .shared_via("a")
        .shared_via("b")
        .build()
}

#[test]
fn analyzed_resource_writes_only_present_fields() {
    let json = encode!(json_ser::serialize_structure_analyzed_resource, &shared_bucket());
    assert_eq!(
        json,
        r#"{"resourceArn":"arn:aws:s3:::bucket","isPublic":true,"sharedVia":["a","b"]}"#
    );
    assert!(!json.contains("status"));

    let parsed = decode!(json_deser::deser_structure_analyzed_resource, json)
        .expect("valid json")
        .expect("an object was present");
    assert_eq!(parsed, shared_bucket());
    assert_eq!(parsed.status, None);
}

#[test]
fn empty_collections_are_not_absent() {
    let resource = AnalyzedResource::builder()
        .set_shared_via(Some(vec![]))
        .build();
    let json = encode!(json_ser::serialize_structure_analyzed_resource, &resource);
    assert_eq!(json, r#"{"sharedVia":[]}"#);
    let parsed = decode!(json_deser::deser_structure_analyzed_resource, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.shared_via, Some(vec![]));
    assert_eq!(parsed.actions, None);
}

#[test]
fn empty_struct_round_trips() {
    let json = encode!(
        json_ser::serialize_structure_finding,
        &Finding::builder().build()
    );
    assert_eq!(json, "{}");
    let parsed = decode!(json_deser::deser_structure_finding, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, Finding::builder().build());
}

#[test]
fn finding_round_trips() {
    let finding = Finding::builder()
        .id("f-1")
        .principal("AWS", "123456789012")
        .action("s3:GetObject")
        .action("s3:ListBucket")
        .resource("arn:aws:s3:::bucket")
        .is_public(false)
        .resource_type(ResourceType::AwsS3Bucket)
        .condition("aws:SourceVpc", "vpc-1")
        .created_at(Instant::from_epoch_seconds(1_600_000_000))
        .analyzed_at(Instant::from_epoch_seconds(1_600_000_060))
        .status(FindingStatus::Active)
        .resource_owner_account("123456789012")
        .sources(
            FindingSource::builder()
                .r#type(FindingSourceType::BucketAcl)
                .detail(
                    FindingSourceDetail::builder()
                        .access_point_arn("arn:aws:s3:us-east-1:123456789012:accesspoint/ap")
                        .build(),
                )
                .build(),
        )
        .build();
    let json = encode!(json_ser::serialize_structure_finding, &finding);
    assert_ok(validate_body(
        &json,
        r#"{
            "id": "f-1",
            "principal": {"AWS": "123456789012"},
            "action": ["s3:GetObject", "s3:ListBucket"],
            "resource": "arn:aws:s3:::bucket",
            "isPublic": false,
            "resourceType": "AWS::S3::Bucket",
            "condition": {"aws:SourceVpc": "vpc-1"},
            "createdAt": "2020-09-13T12:26:40Z",
            "analyzedAt": "2020-09-13T12:27:40Z",
            "status": "ACTIVE",
            "resourceOwnerAccount": "123456789012",
            "sources": [{
                "type": "BUCKET_ACL",
                "detail": {"accessPointArn": "arn:aws:s3:us-east-1:123456789012:accesspoint/ap"}
            }]
        }"#,
        MediaType::Json,
    ));
    let parsed = decode!(json_deser::deser_structure_finding, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, finding);
}

#[test]
fn analyzer_summary_round_trips() {
    let summary = AnalyzerSummary::builder()
        .arn("arn:aws:access-analyzer:us-east-1:123456789012:analyzer/a")
        .name("a")
        .r#type(Type::Organization)
        .created_at(Instant::from_epoch_seconds(1_600_000_000))
        .tags("team", "security")
        .status(AnalyzerStatus::Failed)
        .status_reason(
            StatusReason::builder()
                .code(ReasonCode::AwsServiceAccessDisabled)
                .build(),
        )
        .build();
    let json = encode!(json_ser::serialize_structure_analyzer_summary, &summary);
    assert!(json.contains(r#""statusReason":{"code":"AWS_SERVICE_ACCESS_DISABLED"}"#));
    let parsed = decode!(json_deser::deser_structure_analyzer_summary, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, summary);
}

#[test]
fn archive_rule_filter_round_trips() {
    let rule = InlineArchiveRule::builder()
        .rule_name("ignore-internal")
        .filter(
            "principal.AWS",
            Criterion::builder().eq("123456789012").build(),
        )
        .filter("isPublic", Criterion::builder().exists(true).build())
        .build();
    let json = encode!(json_ser::serialize_structure_inline_archive_rule, &rule);
    assert_ok(validate_body(
        &json,
        r#"{"ruleName":"ignore-internal","filter":{"principal.AWS":{"eq":["123456789012"]},"isPublic":{"exists":true}}}"#,
        MediaType::Json,
    ));
    let parsed = decode!(json_deser::deser_structure_inline_archive_rule, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, rule);
}

#[test]
fn finding_summary_round_trips_with_subsecond_and_pre_epoch_times() {
    let summary = FindingSummary::builder()
        .id("f-2")
        .principal("AWS", "arn:aws:iam::111122223333:root")
        .action("kms:Decrypt")
        .resource("arn:aws:kms:us-east-1:123456789012:key/k")
        .is_public(true)
        .resource_type(ResourceType::AwsKmsKey)
        .condition("kms:ViaService", "s3.us-east-1.amazonaws.com")
        .created_at(Instant::from_secs_and_nanos(1_600_000_000, 123_456_789))
        .analyzed_at(Instant::from_epoch_seconds(-5))
        .updated_at(Instant::from_secs_and_nanos(0, 500_000_000))
        .status(FindingStatus::Resolved)
        .resource_owner_account("123456789012")
        .error("ACCESS_DENIED")
        .sources(
            FindingSource::builder()
                .r#type(FindingSourceType::Policy)
                .build(),
        )
        .build();
    let json = encode!(json_ser::serialize_structure_finding_summary, &summary);
    assert!(json.contains(r#""createdAt":"2020-09-13T12:26:40.123456789Z""#));
    assert!(json.contains(r#""analyzedAt":"1969-12-31T23:59:55Z""#));
    assert!(json.contains(r#""updatedAt":"1970-01-01T00:00:00.5Z""#));
    let parsed = decode!(json_deser::deser_structure_finding_summary, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, summary);
}

#[test]
fn sort_criteria_round_trips() {
    for order in vec![OrderBy::Asc, OrderBy::Unknown("SHUFFLE".to_string())] {
        let sort = SortCriteria::builder()
            .attribute_name("resourceType")
            .order_by(order)
            .build();
        let json = encode!(json_ser::serialize_structure_sort_criteria, &sort);
        let parsed = decode!(json_deser::deser_structure_sort_criteria, json)
            .unwrap()
            .unwrap();
        assert_eq!(parsed, sort);
    }
}

#[test]
fn deeply_nested_unknown_field_is_skipped() {
    let depth = 200_000;
    let json = format!(
        r#"{{"attributeName":"id","x":{}{},"orderBy":"ASC"}}"#,
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let parsed = decode!(json_deser::deser_structure_sort_criteria, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.attribute_name.as_deref(), Some("id"));
    assert_eq!(parsed.order_by, Some(OrderBy::Asc));
}

#[test]
fn unknown_fields_are_skipped() {
    let json = r#"{
        "resourceArn": "arn:aws:s3:::bucket",
        "futureObject": {"nested": [1, 2, {"deep": null}]},
        "futureList": [true, false],
        "isPublic": true,
        "futureNumber": -1.5e3
    }"#;
    let parsed = decode!(json_deser::deser_structure_analyzed_resource, json)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.resource_arn.as_deref(), Some("arn:aws:s3:::bucket"));
    assert_eq!(parsed.is_public, Some(true));
    assert_eq!(parsed.shared_via, None);
}

#[test]
fn unknown_enum_values_are_preserved() {
    let parsed = decode!(
        json_deser::deser_structure_analyzed_resource,
        r#"{"resourceType":"AWS::EFS::FileSystem","status":"ACTIVE"}"#
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        parsed.resource_type,
        Some(ResourceType::Unknown("AWS::EFS::FileSystem".to_string()))
    );
    assert_eq!(parsed.status, Some(FindingStatus::Active));
    let json = encode!(json_ser::serialize_structure_analyzed_resource, &parsed);
    assert_eq!(
        json,
        r#"{"resourceType":"AWS::EFS::FileSystem","status":"ACTIVE"}"#
    );
}

#[test]
fn non_objects_where_objects_are_expected() {
    for json in &["null", "true", "42", r#""a string""#] {
        let parsed = decode!(json_deser::deser_structure_status_reason, json).unwrap();
        assert_eq!(parsed, None, "{} should decode as absent", json);
    }
    assert!(decode!(json_deser::deser_structure_status_reason, "[]").is_err());

    let parsed = decode!(
        json_deser::deser_structure_analyzer_summary,
        r#"{"name":"a","statusReason":"not an object"}"#
    )
    .unwrap()
    .unwrap();
    assert_eq!(parsed.name.as_deref(), Some("a"));
    assert_eq!(parsed.status_reason, None);
}

#[test]
fn nulls_are_dropped_from_collections() {
    let parsed = decode!(
        json_deser::deser_structure_finding,
        r#"{
            "action": ["s3:GetObject", null, "s3:PutObject"],
            "principal": {"AWS": null, "Federated": "cognito-identity.amazonaws.com"},
            "sources": [null, {"type": "POLICY"}],
            "status": null
        }"#
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        parsed.action,
        Some(vec!["s3:GetObject".to_string(), "s3:PutObject".to_string()])
    );
    let principal = parsed.principal.expect("principal present");
    assert_eq!(principal.len(), 1);
    assert_eq!(
        principal.get("Federated").map(|s| s.as_str()),
        Some("cognito-identity.amazonaws.com")
    );
    assert_eq!(
        parsed.sources,
        Some(vec![FindingSource::builder()
            .r#type(FindingSourceType::Policy)
            .build()])
    );
    assert_eq!(parsed.status, None);
}

#[test]
fn wrong_scalar_types_are_errors() {
    assert!(decode!(
        json_deser::deser_structure_analyzed_resource,
        r#"{"isPublic":"yes"}"#
    )
    .is_err());
    assert!(decode!(
        json_deser::deser_structure_analyzed_resource,
        r#"{"createdAt":"yesterday"}"#
    )
    .is_err());
    assert!(decode!(
        json_deser::deser_structure_analyzed_resource,
        r#"{"resourceArn":"a""#
    )
    .is_err());
}

#[test]
fn operation_output_accepts_empty_body() {
    let output = json_deser::deser_operation_get_finding(
        b"",
        accessanalyzer::output::GetFindingOutput::builder(),
    )
    .unwrap()
    .build();
    assert_eq!(output.finding, None);

    assert!(json_deser::deser_operation_get_finding(
        b"{} {}",
        accessanalyzer::output::GetFindingOutput::builder(),
    )
    .is_err());
}
