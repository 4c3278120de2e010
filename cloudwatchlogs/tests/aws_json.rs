/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use cloudwatchlogs::error::{PutLogEventsErrorKind, PutMetricFilterErrorKind};
use cloudwatchlogs::input::{
    CreateLogGroupInput, DescribeLogGroupsInput, GetLogEventsInput, PutLogEventsInput,
    PutMetricFilterInput,
};
use cloudwatchlogs::json_deser;
use cloudwatchlogs::json_ser;
use cloudwatchlogs::model::{
    InputLogEvent, LogGroup, MetricTransformation, OutputLogEvent, RejectedLogEventsInfo,
    StandardUnit,
};
use cloudwatchlogs::operation::{
    CreateLogGroup, DescribeLogGroups, GetLogEvents, PutLogEvents, PutMetricFilter,
};
use http::header::CONTENT_LENGTH;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::marshall::MarshallRequest;
use smithy_http::operation::BuildError;
use smithy_http::response::ParseStrictResponse;
use smithy_json::serialize::JsonObjectWriter;

macro_rules! round_trip {
    ($serialize:path, $deser:path, $value:expr) => {{
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        $serialize(&mut object, $value).expect("value is serializable");
        object.finish();
        let mut tokens = smithy_json::deserialize::json_token_iter(out.as_bytes()).peekable();
        let parsed = $deser(&mut tokens)
            .expect("valid json")
            .expect("an object was present");
        assert!(tokens.next().is_none());
        (out, parsed)
    }};
}

fn config() -> cloudwatchlogs::Config {
    cloudwatchlogs::Config::builder()
        .region(Region::new("eu-west-1"))
        .build()
}

fn body_of(request: &http::Request<smithy_http::body::SdkBody>) -> &str {
    std::str::from_utf8(request.body().bytes().expect("body is in memory")).expect("utf-8 body")
}

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
fn put_log_events_request() {
    let input = PutLogEventsInput::builder()
        .log_group_name("/app/web")
        .log_stream_name("i-1234")
        .log_events(
            InputLogEvent::builder()
                .timestamp(1_621_870_490_123)
                .message("GET /index.html 200")
                .build(),
        )
        .log_events(
            InputLogEvent::builder()
                .timestamp(1_621_870_490_456)
                .message("line with \"quotes\"\n")
                .build(),
        )
        .sequence_token("49590302")
        .build()
        .unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "Logs_20140328.PutLogEvents"),
        ],
    ));
    assert_eq!(
        body_of(request),
        r#"{"logGroupName":"/app/web","logStreamName":"i-1234","logEvents":[{"timestamp":1621870490123,"message":"GET /index.html 200"},{"timestamp":1621870490456,"message":"line with \"quotes\"\n"}],"sequenceToken":"49590302"}"#
    );
    assert_eq!(
        request.headers()[CONTENT_LENGTH],
        body_of(request).len().to_string().as_str()
    );
    assert_eq!(
        operation.properties().get::<SigningService>(),
        Some(&SigningService::from_static("logs"))
    );
    assert_eq!(
        operation.metadata().map(|m| m.service()),
        Some("cloudwatchlogs")
    );
}

#[test]
fn whole_input_is_the_payload() {
    let input = GetLogEventsInput::builder()
        .log_group_name("/app/web")
        .log_stream_name("i-1234")
        .start_time(0)
        .limit(100)
        .start_from_head(true)
        .build()
        .unwrap();
    let request = <GetLogEvents as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(request.uri().query(), None);
    assert_ok(validate_body(
        body_of(&request),
        r#"{"logGroupName":"/app/web","logStreamName":"i-1234","startTime":0,"limit":100,"startFromHead":true}"#,
        MediaType::Json,
    ));

    let input = DescribeLogGroupsInput::builder().build().unwrap();
    let request = <DescribeLogGroups as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(body_of(&request), "{}");
    assert_eq!(request.headers()[CONTENT_LENGTH], "2");
    assert_eq!(
        request.headers()["x-amz-target"],
        "Logs_20140328.DescribeLogGroups"
    );
}

#[test]
fn missing_input() {
    assert!(matches!(
        <CreateLogGroup as MarshallRequest>::marshall(None),
        Err(BuildError::MissingInput {
            operation: "CreateLogGroup"
        })
    ));
}

#[test]
fn create_log_group_tags() {
    let input = CreateLogGroupInput::builder()
        .log_group_name("/app/web")
        .tags("env", "prod")
        .build()
        .unwrap();
    let request = <CreateLogGroup as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_eq!(
        body_of(&request),
        r#"{"logGroupName":"/app/web","tags":{"env":"prod"}}"#
    );
}

#[test]
fn metric_transformation_round_trip() {
    let transformation = MetricTransformation::builder()
        .metric_name("Errors")
        .metric_namespace("App")
        .metric_value("1")
        .default_value(0.5)
        .dimensions("Service", "$.service")
        .unit(StandardUnit::CountSecond)
        .build();
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_metric_transformation(&mut object, &transformation).unwrap();
    object.finish();
    assert_eq!(
        out,
        r#"{"metricName":"Errors","metricNamespace":"App","metricValue":"1","defaultValue":0.5,"dimensions":{"Service":"$.service"},"unit":"Count/Second"}"#
    );

    let mut tokens = smithy_json::deserialize::json_token_iter(out.as_bytes()).peekable();
    let parsed = json_deser::deser_structure_metric_transformation(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, transformation);
}

#[test]
fn integer_default_value_decodes_as_float() {
    let mut tokens =
        smithy_json::deserialize::json_token_iter(br#"{"defaultValue":3,"unit":"Furlongs"}"#)
            .peekable();
    let parsed = json_deser::deser_structure_metric_transformation(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.default_value, Some(3.0));
    assert_eq!(parsed.unit, Some(StandardUnit::Unknown("Furlongs".into())));
}

#[test]
fn log_group_round_trips_extreme_values() {
    let group = LogGroup::builder()
        .log_group_name("/aws/lambda/ünïcode")
        .creation_time(i64::MAX)
        .retention_in_days(i32::MAX)
        .metric_filter_count(i32::MIN)
        .arn("arn:aws:logs:eu-west-1:123456789012:log-group:/aws/lambda/x:*")
        .stored_bytes(i64::MIN)
        .kms_key_id("arn:aws:kms:eu-west-1:123456789012:key/k")
        .build();
    let (json, parsed) = round_trip!(
        json_ser::serialize_structure_log_group,
        json_deser::deser_structure_log_group,
        &group
    );
    assert!(json.contains(r#""creationTime":9223372036854775807"#));
    assert!(json.contains(r#""storedBytes":-9223372036854775808"#));
    assert_eq!(parsed, group);
}

#[test]
fn log_events_round_trip() {
    let input = InputLogEvent::builder()
        .timestamp(-1)
        .message("tab\there \u{1F600} \"quoted\"")
        .build();
    let (json, parsed) = round_trip!(
        json_ser::serialize_structure_input_log_event,
        json_deser::deser_structure_input_log_event,
        &input
    );
    assert!(json.starts_with(r#"{"timestamp":-1,"#));
    assert_eq!(parsed, input);

    let output = OutputLogEvent::builder()
        .timestamp(0)
        .message("")
        .ingestion_time(i64::MAX)
        .build();
    let (json, parsed) = round_trip!(
        json_ser::serialize_structure_output_log_event,
        json_deser::deser_structure_output_log_event,
        &output
    );
    assert_eq!(
        json,
        r#"{"timestamp":0,"message":"","ingestionTime":9223372036854775807}"#
    );
    assert_eq!(parsed, output);
}

#[test]
fn rejected_log_events_info_round_trips() {
    let info = RejectedLogEventsInfo::builder()
        .too_new_log_event_start_index(0)
        .too_old_log_event_end_index(i32::MAX)
        .expired_log_event_end_index(-1)
        .build();
    let (_, parsed) = round_trip!(
        json_ser::serialize_structure_rejected_log_events_info,
        json_deser::deser_structure_rejected_log_events_info,
        &info
    );
    assert_eq!(parsed, info);

    let empty = RejectedLogEventsInfo::builder().build();
    let (json, parsed) = round_trip!(
        json_ser::serialize_structure_rejected_log_events_info,
        json_deser::deser_structure_rejected_log_events_info,
        &empty
    );
    assert_eq!(json, "{}");
    assert_eq!(parsed, empty);
}

#[test]
fn put_metric_filter_request() {
    let input = PutMetricFilterInput::builder()
        .log_group_name("/app/web")
        .filter_name("errors")
        .filter_pattern("ERROR")
        .metric_transformations(
            MetricTransformation::builder()
                .metric_name("Errors")
                .metric_namespace("App")
                .metric_value("1")
                .build(),
        )
        .build()
        .unwrap();
    let request = <PutMetricFilter as MarshallRequest>::marshall(Some(&input)).unwrap();
    assert_ok(validate_body(
        body_of(&request),
        r#"{
            "logGroupName": "/app/web",
            "filterName": "errors",
            "filterPattern": "ERROR",
            "metricTransformations": [{"metricName": "Errors", "metricNamespace": "App", "metricValue": "1"}]
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn describe_log_groups_response() {
    let output = DescribeLogGroups::new()
        .parse(&response(
            200,
            &[],
            r#"{
                "logGroups": [
                    {
                        "logGroupName": "/app/web",
                        "creationTime": 1621870490123,
                        "retentionInDays": 30,
                        "metricFilterCount": 2,
                        "arn": "arn:aws:logs:eu-west-1:123456789012:log-group:/app/web:*",
                        "storedBytes": 9876543210,
                        "dataProtectionStatus": "ACTIVATED"
                    },
                    null
                ],
                "nextToken": "next"
            }"#,
        ))
        .unwrap();
    let groups = output.log_groups.expect("log groups present");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].creation_time, Some(1_621_870_490_123));
    assert_eq!(groups[0].retention_in_days, Some(30));
    assert_eq!(groups[0].stored_bytes, Some(9_876_543_210));
    assert_eq!(groups[0].kms_key_id, None);
    assert_eq!(output.next_token.as_deref(), Some("next"));
}

#[test]
fn out_of_range_integers_are_errors() {
    let err = DescribeLogGroups::new()
        .parse(&response(
            200,
            &[],
            r#"{"logGroups":[{"retentionInDays":3000000000}]}"#,
        ))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        cloudwatchlogs::error::DescribeLogGroupsErrorKind::Unhandled(_)
    ));
}

#[test]
fn get_log_events_response() {
    let output = GetLogEvents::new()
        .parse(&response(
            200,
            &[],
            r#"{"events":[{"timestamp":1,"message":"first","ingestionTime":2}],"nextForwardToken":"f/1","nextBackwardToken":"b/1"}"#,
        ))
        .unwrap();
    let events = output.events.unwrap();
    assert_eq!(events[0].message.as_deref(), Some("first"));
    assert_eq!(events[0].ingestion_time, Some(2));
    assert_eq!(output.next_forward_token.as_deref(), Some("f/1"));
}

#[test]
fn put_log_events_rejections() {
    let output = PutLogEvents::new()
        .parse(&response(
            200,
            &[],
            r#"{"nextSequenceToken":"49590303","rejectedLogEventsInfo":{"tooOldLogEventEndIndex":4}}"#,
        ))
        .unwrap();
    let rejected = output.rejected_log_events_info.unwrap();
    assert_eq!(rejected.too_old_log_event_end_index, Some(4));
    assert_eq!(rejected.too_new_log_event_start_index, None);
}

#[test]
fn error_code_from_type_field() {
    let err = PutLogEvents::new()
        .parse(&response(
            400,
            &[("x-amzn-requestid", "req-9")],
            r#"{"__type":"InvalidSequenceTokenException","expectedSequenceToken":"49590304","message":"The given sequenceToken is invalid."}"#,
        ))
        .unwrap_err();
    assert!(err.is_invalid_sequence_token_exception());
    assert_eq!(err.request_id(), Some("req-9"));
    match err.kind {
        PutLogEventsErrorKind::InvalidSequenceTokenException(inner) => {
            assert_eq!(inner.expected_sequence_token.as_deref(), Some("49590304"));
            assert_eq!(
                inner.message.as_deref(),
                Some("The given sequenceToken is invalid.")
            );
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn namespaced_error_code() {
    let err = PutMetricFilter::new()
        .parse(&response(
            400,
            &[],
            r#"{"__type":"com.amazonaws.logs#LimitExceededException","message":"too many filters"}"#,
        ))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        PutMetricFilterErrorKind::LimitExceededException(_)
    ));
    assert_eq!(
        format!("{}", err),
        "LimitExceededException: too many filters"
    );
}

#[test]
fn protocol_events_reach_the_logcat_layer() {
    use tracing_subscriber::layer::SubscriberExt;

    let sink = aws_logcat::MemorySink::default();
    let subscriber =
        tracing_subscriber::registry().with(aws_logcat::LogcatLayer::new(sink.clone()));
    tracing::subscriber::with_default(subscriber, || {
        DescribeLogGroupsInput::builder()
            .limit(5)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        DescribeLogGroups::new()
            .parse(&response(200, &[], r#"{"logGroups":[],"futureField":{"a":[1]}}"#))
            .unwrap();
        DescribeLogGroups::new()
            .parse(&response(
                400,
                &[],
                r#"{"__type":"UnrecognizedClientException","message":"bad token"}"#,
            ))
            .unwrap_err();
    });
    let records = sink.records();
    let find = |tag: &str| {
        records
            .iter()
            .find(|record| record.tag == tag)
            .unwrap_or_else(|| panic!("no record tagged {}: {:?}", tag, records))
    };

    let marshalled = find("input");
    assert_eq!(marshalled.priority, aws_logcat::Priority::Debug);
    assert!(marshalled
        .message
        .contains("operation=\"DescribeLogGroups\""));

    let skipped = find("json_deser");
    assert_eq!(skipped.priority, aws_logcat::Priority::Verbose);
    assert_eq!(
        skipped.message,
        "skipping unknown field key=\"futureField\""
    );

    let unrecognized = find("operation_deser");
    assert_eq!(unrecognized.priority, aws_logcat::Priority::Verbose);
    assert!(unrecognized
        .message
        .contains("code=\"UnrecognizedClientException\""));
}
