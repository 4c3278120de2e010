/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_create_analyzer(
    input: &crate::input::CreateAnalyzerInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_analyzer_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_create_analyzer_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateAnalyzerInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.analyzer_name {
        object.key("analyzerName").string(var_1);
    }
    if let Some(var_2) = &input.r#type {
        object.key("type").string(var_2.as_str());
    }
    if let Some(var_3) = &input.archive_rules {
        let mut array_4 = object.key("archiveRules").start_array();
        for item_5 in var_3 {
            {
                let mut object_6 = array_4.value().start_object();
                crate::json_ser::serialize_structure_inline_archive_rule(&mut object_6, item_5)?;
                object_6.finish();
            }
        }
        array_4.finish();
    }
    if let Some(var_7) = &input.tags {
        let mut object_8 = object.key("tags").start_object();
        for (key_9, value_10) in var_7 {
            object_8.key(key_9).string(value_10);
        }
        object_8.finish();
    }
    if let Some(var_11) = &input.client_token {
        object.key("clientToken").string(var_11);
    }
    Ok(())
}

pub fn serialize_operation_create_archive_rule(
    input: &crate::input::CreateArchiveRuleInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_archive_rule_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_create_archive_rule_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateArchiveRuleInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.rule_name {
        object.key("ruleName").string(var_1);
    }
    if let Some(var_2) = &input.filter {
        let mut object_3 = object.key("filter").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut object_6 = object_3.key(key_4).start_object();
                crate::json_ser::serialize_structure_criterion(&mut object_6, value_5)?;
                object_6.finish();
            }
        }
        object_3.finish();
    }
    if let Some(var_7) = &input.client_token {
        object.key("clientToken").string(var_7);
    }
    Ok(())
}

pub fn serialize_operation_update_archive_rule(
    input: &crate::input::UpdateArchiveRuleInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_archive_rule_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_update_archive_rule_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateArchiveRuleInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.filter {
        let mut object_2 = object.key("filter").start_object();
        for (key_3, value_4) in var_1 {
            {
                let mut object_5 = object_2.key(key_3).start_object();
                crate::json_ser::serialize_structure_criterion(&mut object_5, value_4)?;
                object_5.finish();
            }
        }
        object_2.finish();
    }
    if let Some(var_6) = &input.client_token {
        object.key("clientToken").string(var_6);
    }
    Ok(())
}

pub fn serialize_operation_list_analyzed_resources(
    input: &crate::input::ListAnalyzedResourcesInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_analyzed_resources_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_list_analyzed_resources_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListAnalyzedResourcesInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.analyzer_arn {
        object.key("analyzerArn").string(var_1);
    }
    if let Some(var_2) = &input.resource_type {
        object.key("resourceType").string(var_2.as_str());
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::NegInt((*var_4).into()));
    }
    Ok(())
}

pub fn serialize_operation_list_findings(
    input: &crate::input::ListFindingsInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_findings_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_list_findings_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListFindingsInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.analyzer_arn {
        object.key("analyzerArn").string(var_1);
    }
    if let Some(var_2) = &input.filter {
        let mut object_3 = object.key("filter").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut object_6 = object_3.key(key_4).start_object();
                crate::json_ser::serialize_structure_criterion(&mut object_6, value_5)?;
                object_6.finish();
            }
        }
        object_3.finish();
    }
    if let Some(var_7) = &input.sort {
        let mut object_8 = object.key("sort").start_object();
        crate::json_ser::serialize_structure_sort_criteria(&mut object_8, var_7)?;
        object_8.finish();
    }
    if let Some(var_9) = &input.next_token {
        object.key("nextToken").string(var_9);
    }
    if let Some(var_10) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::NegInt((*var_10).into()));
    }
    Ok(())
}

pub fn serialize_operation_update_findings(
    input: &crate::input::UpdateFindingsInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_findings_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_update_findings_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateFindingsInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.analyzer_arn {
        object.key("analyzerArn").string(var_1);
    }
    if let Some(var_2) = &input.status {
        object.key("status").string(var_2.as_str());
    }
    if let Some(var_3) = &input.ids {
        let mut array_4 = object.key("ids").start_array();
        for item_5 in var_3 {
            array_4.value().string(item_5);
        }
        array_4.finish();
    }
    if let Some(var_6) = &input.resource_arn {
        object.key("resourceArn").string(var_6);
    }
    if let Some(var_7) = &input.client_token {
        object.key("clientToken").string(var_7);
    }
    Ok(())
}

pub fn serialize_operation_tag_resource(
    input: &crate::input::TagResourceInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_tag_resource_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_tag_resource_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::TagResourceInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.tags {
        let mut object_2 = object.key("tags").start_object();
        for (key_3, value_4) in var_1 {
            object_2.key(key_3).string(value_4);
        }
        object_2.finish();
    }
    Ok(())
}

pub fn serialize_operation_start_resource_scan(
    input: &crate::input::StartResourceScanInput,
) -> Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_start_resource_scan_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_start_resource_scan_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::StartResourceScanInput,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.analyzer_arn {
        object.key("analyzerArn").string(var_1);
    }
    if let Some(var_2) = &input.resource_arn {
        object.key("resourceArn").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_analyzed_resource(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::AnalyzedResource,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
    if let Some(var_2) = &input.resource_type {
        object.key("resourceType").string(var_2.as_str());
    }
    if let Some(var_3) = &input.created_at {
        object.key("createdAt").instant(var_3, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_4) = &input.analyzed_at {
        object.key("analyzedAt").instant(var_4, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_5) = &input.updated_at {
        object.key("updatedAt").instant(var_5, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_6) = &input.is_public {
        object.key("isPublic").boolean(*var_6);
    }
    if let Some(var_7) = &input.actions {
        let mut array_8 = object.key("actions").start_array();
        for item_9 in var_7 {
            array_8.value().string(item_9);
        }
        array_8.finish();
    }
    if let Some(var_10) = &input.shared_via {
        let mut array_11 = object.key("sharedVia").start_array();
        for item_12 in var_10 {
            array_11.value().string(item_12);
        }
        array_11.finish();
    }
    if let Some(var_13) = &input.status {
        object.key("status").string(var_13.as_str());
    }
    if let Some(var_14) = &input.resource_owner_account {
        object.key("resourceOwnerAccount").string(var_14);
    }
    if let Some(var_15) = &input.error {
        object.key("error").string(var_15);
    }
    Ok(())
}

pub fn serialize_structure_analyzer_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::AnalyzerSummary,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
    if let Some(var_2) = &input.name {
        object.key("name").string(var_2);
    }
    if let Some(var_3) = &input.r#type {
        object.key("type").string(var_3.as_str());
    }
    if let Some(var_4) = &input.created_at {
        object.key("createdAt").instant(var_4, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_5) = &input.last_resource_analyzed {
        object.key("lastResourceAnalyzed").string(var_5);
    }
    if let Some(var_6) = &input.last_resource_analyzed_at {
        object.key("lastResourceAnalyzedAt").instant(var_6, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_7) = &input.tags {
        let mut object_8 = object.key("tags").start_object();
        for (key_9, value_10) in var_7 {
            object_8.key(key_9).string(value_10);
        }
        object_8.finish();
    }
    if let Some(var_11) = &input.status {
        object.key("status").string(var_11.as_str());
    }
    if let Some(var_12) = &input.status_reason {
        let mut object_13 = object.key("statusReason").start_object();
        crate::json_ser::serialize_structure_status_reason(&mut object_13, var_12)?;
        object_13.finish();
    }
    Ok(())
}

pub fn serialize_structure_status_reason(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::StatusReason,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.code {
        object.key("code").string(var_1.as_str());
    }
    Ok(())
}

pub fn serialize_structure_inline_archive_rule(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InlineArchiveRule,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.rule_name {
        object.key("ruleName").string(var_1);
    }
    if let Some(var_2) = &input.filter {
        let mut object_3 = object.key("filter").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut object_6 = object_3.key(key_4).start_object();
                crate::json_ser::serialize_structure_criterion(&mut object_6, value_5)?;
                object_6.finish();
            }
        }
        object_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_criterion(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Criterion,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.eq {
        let mut array_2 = object.key("eq").start_array();
        for item_3 in var_1 {
            array_2.value().string(item_3);
        }
        array_2.finish();
    }
    if let Some(var_4) = &input.neq {
        let mut array_5 = object.key("neq").start_array();
        for item_6 in var_4 {
            array_5.value().string(item_6);
        }
        array_5.finish();
    }
    if let Some(var_7) = &input.contains {
        let mut array_8 = object.key("contains").start_array();
        for item_9 in var_7 {
            array_8.value().string(item_9);
        }
        array_8.finish();
    }
    if let Some(var_10) = &input.exists {
        object.key("exists").boolean(*var_10);
    }
    Ok(())
}

pub fn serialize_structure_sort_criteria(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SortCriteria,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.attribute_name {
        object.key("attributeName").string(var_1);
    }
    if let Some(var_2) = &input.order_by {
        object.key("orderBy").string(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_finding(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Finding,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.id {
        object.key("id").string(var_1);
    }
    if let Some(var_2) = &input.principal {
        let mut object_3 = object.key("principal").start_object();
        for (key_4, value_5) in var_2 {
            object_3.key(key_4).string(value_5);
        }
        object_3.finish();
    }
    if let Some(var_6) = &input.action {
        let mut array_7 = object.key("action").start_array();
        for item_8 in var_6 {
            array_7.value().string(item_8);
        }
        array_7.finish();
    }
    if let Some(var_9) = &input.resource {
        object.key("resource").string(var_9);
    }
    if let Some(var_10) = &input.is_public {
        object.key("isPublic").boolean(*var_10);
    }
    if let Some(var_11) = &input.resource_type {
        object.key("resourceType").string(var_11.as_str());
    }
    if let Some(var_12) = &input.condition {
        let mut object_13 = object.key("condition").start_object();
        for (key_14, value_15) in var_12 {
            object_13.key(key_14).string(value_15);
        }
        object_13.finish();
    }
    if let Some(var_16) = &input.created_at {
        object.key("createdAt").instant(var_16, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_17) = &input.analyzed_at {
        object.key("analyzedAt").instant(var_17, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_18) = &input.updated_at {
        object.key("updatedAt").instant(var_18, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_19) = &input.status {
        object.key("status").string(var_19.as_str());
    }
    if let Some(var_20) = &input.resource_owner_account {
        object.key("resourceOwnerAccount").string(var_20);
    }
    if let Some(var_21) = &input.error {
        object.key("error").string(var_21);
    }
    if let Some(var_22) = &input.sources {
        let mut array_23 = object.key("sources").start_array();
        for item_24 in var_22 {
            {
                let mut object_25 = array_23.value().start_object();
                crate::json_ser::serialize_structure_finding_source(&mut object_25, item_24)?;
                object_25.finish();
            }
        }
        array_23.finish();
    }
    Ok(())
}

pub fn serialize_structure_finding_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::FindingSummary,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.id {
        object.key("id").string(var_1);
    }
    if let Some(var_2) = &input.principal {
        let mut object_3 = object.key("principal").start_object();
        for (key_4, value_5) in var_2 {
            object_3.key(key_4).string(value_5);
        }
        object_3.finish();
    }
    if let Some(var_6) = &input.action {
        let mut array_7 = object.key("action").start_array();
        for item_8 in var_6 {
            array_7.value().string(item_8);
        }
        array_7.finish();
    }
    if let Some(var_9) = &input.resource {
        object.key("resource").string(var_9);
    }
    if let Some(var_10) = &input.is_public {
        object.key("isPublic").boolean(*var_10);
    }
    if let Some(var_11) = &input.resource_type {
        object.key("resourceType").string(var_11.as_str());
    }
    if let Some(var_12) = &input.condition {
        let mut object_13 = object.key("condition").start_object();
        for (key_14, value_15) in var_12 {
            object_13.key(key_14).string(value_15);
        }
        object_13.finish();
    }
    if let Some(var_16) = &input.created_at {
        object.key("createdAt").instant(var_16, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_17) = &input.analyzed_at {
        object.key("analyzedAt").instant(var_17, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_18) = &input.updated_at {
        object.key("updatedAt").instant(var_18, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_19) = &input.status {
        object.key("status").string(var_19.as_str());
    }
    if let Some(var_20) = &input.resource_owner_account {
        object.key("resourceOwnerAccount").string(var_20);
    }
    if let Some(var_21) = &input.error {
        object.key("error").string(var_21);
    }
    if let Some(var_22) = &input.sources {
        let mut array_23 = object.key("sources").start_array();
        for item_24 in var_22 {
            {
                let mut object_25 = array_23.value().start_object();
                crate::json_ser::serialize_structure_finding_source(&mut object_25, item_24)?;
                object_25.finish();
            }
        }
        array_23.finish();
    }
    Ok(())
}

pub fn serialize_structure_finding_source(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::FindingSource,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.detail {
        let mut object_3 = object.key("detail").start_object();
        crate::json_ser::serialize_structure_finding_source_detail(&mut object_3, var_2)?;
        object_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_finding_source_detail(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::FindingSourceDetail,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.access_point_arn {
        object.key("accessPointArn").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_archive_rule_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ArchiveRuleSummary,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.rule_name {
        object.key("ruleName").string(var_1);
    }
    if let Some(var_2) = &input.filter {
        let mut object_3 = object.key("filter").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut object_6 = object_3.key(key_4).start_object();
                crate::json_ser::serialize_structure_criterion(&mut object_6, value_5)?;
                object_6.finish();
            }
        }
        object_3.finish();
    }
    if let Some(var_7) = &input.created_at {
        object.key("createdAt").instant(var_7, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_8) = &input.updated_at {
        object.key("updatedAt").instant(var_8, smithy_types::instant::Format::DateTime)?;
    }
    Ok(())
}

pub fn serialize_structure_analyzed_resource_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::AnalyzedResourceSummary,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
    if let Some(var_2) = &input.resource_owner_account {
        object.key("resourceOwnerAccount").string(var_2);
    }
    if let Some(var_3) = &input.resource_type {
        object.key("resourceType").string(var_3.as_str());
    }
    Ok(())
}
