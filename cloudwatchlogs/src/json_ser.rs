/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_create_log_group(
    input: &crate::input::CreateLogGroupInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_log_group_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_create_log_group_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateLogGroupInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.log_group_name {
        object.key("logGroupName").string(var_1);
    }
    if let Some(var_2) = &input.kms_key_id {
        object.key("kmsKeyId").string(var_2);
    }
    if let Some(var_3) = &input.tags {
        let mut object_4 = object.key("tags").start_object();
        for (key_5, value_6) in var_3 {
            object_4.key(key_5).string(value_6);
        }
        object_4.finish();
    }
    Ok(())
}

pub fn serialize_operation_describe_log_groups(
    input: &crate::input::DescribeLogGroupsInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_log_groups_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_describe_log_groups_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeLogGroupsInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.log_group_name_prefix {
        object.key("logGroupNamePrefix").string(var_1);
    }
    if let Some(var_2) = &input.next_token {
        object.key("nextToken").string(var_2);
    }
    if let Some(var_3) = &input.limit {
        object.key("limit").number(smithy_types::Number::NegInt((*var_3).into()));
    }
    Ok(())
}

pub fn serialize_operation_put_log_events(
    input: &crate::input::PutLogEventsInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_put_log_events_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_put_log_events_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::PutLogEventsInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.log_group_name {
        object.key("logGroupName").string(var_1);
    }
    if let Some(var_2) = &input.log_stream_name {
        object.key("logStreamName").string(var_2);
    }
    if let Some(var_3) = &input.log_events {
        let mut array_4 = object.key("logEvents").start_array();
        for item_5 in var_3 {
            {
                let mut object_6 = array_4.value().start_object();
                crate::json_ser::serialize_structure_input_log_event(&mut object_6, item_5)?;
                object_6.finish();
            }
        }
        array_4.finish();
    }
    if let Some(var_7) = &input.sequence_token {
        object.key("sequenceToken").string(var_7);
    }
    Ok(())
}

pub fn serialize_operation_get_log_events(
    input: &crate::input::GetLogEventsInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_get_log_events_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_get_log_events_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::GetLogEventsInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.log_group_name {
        object.key("logGroupName").string(var_1);
    }
    if let Some(var_2) = &input.log_stream_name {
        object.key("logStreamName").string(var_2);
    }
    if let Some(var_3) = &input.start_time {
        object.key("startTime").number(smithy_types::Number::NegInt(*var_3));
    }
    if let Some(var_4) = &input.end_time {
        object.key("endTime").number(smithy_types::Number::NegInt(*var_4));
    }
    if let Some(var_5) = &input.next_token {
        object.key("nextToken").string(var_5);
    }
    if let Some(var_6) = &input.limit {
        object.key("limit").number(smithy_types::Number::NegInt((*var_6).into()));
    }
    if let Some(var_7) = &input.start_from_head {
        object.key("startFromHead").boolean(*var_7);
    }
    Ok(())
}

pub fn serialize_operation_put_metric_filter(
    input: &crate::input::PutMetricFilterInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_put_metric_filter_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_put_metric_filter_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::PutMetricFilterInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.log_group_name {
        object.key("logGroupName").string(var_1);
    }
    if let Some(var_2) = &input.filter_name {
        object.key("filterName").string(var_2);
    }
    if let Some(var_3) = &input.filter_pattern {
        object.key("filterPattern").string(var_3);
    }
    if let Some(var_4) = &input.metric_transformations {
        let mut array_5 = object.key("metricTransformations").start_array();
        for item_6 in var_4 {
            {
                let mut object_7 = array_5.value().start_object();
                crate::json_ser::serialize_structure_metric_transformation(&mut object_7, item_6)?;
                object_7.finish();
            }
        }
        array_5.finish();
    }
    Ok(())
}

pub fn serialize_structure_log_group(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::LogGroup,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.log_group_name {
        object.key("logGroupName").string(var_1);
    }
    if let Some(var_2) = &input.creation_time {
        object.key("creationTime").number(smithy_types::Number::NegInt(*var_2));
    }
    if let Some(var_3) = &input.retention_in_days {
        object.key("retentionInDays").number(smithy_types::Number::NegInt((*var_3).into()));
    }
    if let Some(var_4) = &input.metric_filter_count {
        object.key("metricFilterCount").number(smithy_types::Number::NegInt((*var_4).into()));
    }
    if let Some(var_5) = &input.arn {
        object.key("arn").string(var_5);
    }
    if let Some(var_6) = &input.stored_bytes {
        object.key("storedBytes").number(smithy_types::Number::NegInt(*var_6));
    }
    if let Some(var_7) = &input.kms_key_id {
        object.key("kmsKeyId").string(var_7);
    }
    Ok(())
}

pub fn serialize_structure_input_log_event(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InputLogEvent,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.timestamp {
        object.key("timestamp").number(smithy_types::Number::NegInt(*var_1));
    }
    if let Some(var_2) = &input.message {
        object.key("message").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_output_log_event(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::OutputLogEvent,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.timestamp {
        object.key("timestamp").number(smithy_types::Number::NegInt(*var_1));
    }
    if let Some(var_2) = &input.message {
        object.key("message").string(var_2);
    }
    if let Some(var_3) = &input.ingestion_time {
        object.key("ingestionTime").number(smithy_types::Number::NegInt(*var_3));
    }
    Ok(())
}

pub fn serialize_structure_rejected_log_events_info(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RejectedLogEventsInfo,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.too_new_log_event_start_index {
        object.key("tooNewLogEventStartIndex").number(smithy_types::Number::NegInt((*var_1).into()));
    }
    if let Some(var_2) = &input.too_old_log_event_end_index {
        object.key("tooOldLogEventEndIndex").number(smithy_types::Number::NegInt((*var_2).into()));
    }
    if let Some(var_3) = &input.expired_log_event_end_index {
        object.key("expiredLogEventEndIndex").number(smithy_types::Number::NegInt((*var_3).into()));
    }
    Ok(())
}

pub fn serialize_structure_metric_transformation(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MetricTransformation,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.metric_name {
        object.key("metricName").string(var_1);
    }
    if let Some(var_2) = &input.metric_namespace {
        object.key("metricNamespace").string(var_2);
    }
    if let Some(var_3) = &input.metric_value {
        object.key("metricValue").string(var_3);
    }
    if let Some(var_4) = &input.default_value {
        object.key("defaultValue").number(smithy_types::Number::Float(*var_4));
    }
    if let Some(var_5) = &input.dimensions {
        let mut object_6 = object.key("dimensions").start_object();
        for (key_7, value_8) in var_5 {
            object_6.key(key_7).string(value_8);
        }
        object_6.finish();
    }
    if let Some(var_9) = &input.unit {
        object.key("unit").string(var_9.as_str());
    }
    Ok(())
}
