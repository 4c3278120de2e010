/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_analyzer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateAnalyzerOutput, crate::error::CreateAnalyzerError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::CreateAnalyzerError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateAnalyzerError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::CreateAnalyzerError {
            meta: generic,
            kind: crate::error::CreateAnalyzerErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ConflictException" => crate::error::CreateAnalyzerError {
            meta: generic,
            kind: crate::error::CreateAnalyzerErrorKind::ConflictException({
                #[allow(unused_mut)]
                let mut output = crate::error::conflict_exception::Builder::default();
                output = crate::json_deser::deser_structure_conflict_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::CreateAnalyzerError {
            meta: generic,
            kind: crate::error::CreateAnalyzerErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ServiceQuotaExceededException" => crate::error::CreateAnalyzerError {
            meta: generic,
            kind: crate::error::CreateAnalyzerErrorKind::ServiceQuotaExceededException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_quota_exceeded_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_quota_exceeded_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::CreateAnalyzerError {
            meta: generic,
            kind: crate::error::CreateAnalyzerErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::CreateAnalyzerError {
            meta: generic,
            kind: crate::error::CreateAnalyzerErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "CreateAnalyzer", "unrecognized error code");
            crate::error::CreateAnalyzerError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_analyzer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateAnalyzerOutput, crate::error::CreateAnalyzerError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_analyzer_output::Builder::default();
        output = crate::json_deser::deser_operation_create_analyzer(response.body().as_ref(), output)
            .map_err(crate::error::CreateAnalyzerError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_analyzer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzerOutput, crate::error::GetAnalyzerError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::GetAnalyzerError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetAnalyzerError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::GetAnalyzerError {
            meta: generic,
            kind: crate::error::GetAnalyzerErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::GetAnalyzerError {
            meta: generic,
            kind: crate::error::GetAnalyzerErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::GetAnalyzerError {
            meta: generic,
            kind: crate::error::GetAnalyzerErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::GetAnalyzerError {
            meta: generic,
            kind: crate::error::GetAnalyzerErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::GetAnalyzerError {
            meta: generic,
            kind: crate::error::GetAnalyzerErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "GetAnalyzer", "unrecognized error code");
            crate::error::GetAnalyzerError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_analyzer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzerOutput, crate::error::GetAnalyzerError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_analyzer_output::Builder::default();
        output = crate::json_deser::deser_operation_get_analyzer(response.body().as_ref(), output)
            .map_err(crate::error::GetAnalyzerError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_analyzer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteAnalyzerOutput, crate::error::DeleteAnalyzerError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::DeleteAnalyzerError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteAnalyzerError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::DeleteAnalyzerError {
            meta: generic,
            kind: crate::error::DeleteAnalyzerErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DeleteAnalyzerError {
            meta: generic,
            kind: crate::error::DeleteAnalyzerErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::DeleteAnalyzerError {
            meta: generic,
            kind: crate::error::DeleteAnalyzerErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::DeleteAnalyzerError {
            meta: generic,
            kind: crate::error::DeleteAnalyzerErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::DeleteAnalyzerError {
            meta: generic,
            kind: crate::error::DeleteAnalyzerErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteAnalyzerError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "DeleteAnalyzer", "unrecognized error code");
            crate::error::DeleteAnalyzerError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_analyzer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteAnalyzerOutput, crate::error::DeleteAnalyzerError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_analyzer_output::Builder::default();
        output = crate::json_deser::deser_operation_delete_analyzer(response.body().as_ref(), output)
            .map_err(crate::error::DeleteAnalyzerError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_analyzers_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzersOutput, crate::error::ListAnalyzersError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::ListAnalyzersError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListAnalyzersError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::ListAnalyzersError {
            meta: generic,
            kind: crate::error::ListAnalyzersErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzersError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::ListAnalyzersError {
            meta: generic,
            kind: crate::error::ListAnalyzersErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzersError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::ListAnalyzersError {
            meta: generic,
            kind: crate::error::ListAnalyzersErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzersError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::ListAnalyzersError {
            meta: generic,
            kind: crate::error::ListAnalyzersErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzersError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "ListAnalyzers", "unrecognized error code");
            crate::error::ListAnalyzersError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_analyzers_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzersOutput, crate::error::ListAnalyzersError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_analyzers_output::Builder::default();
        output = crate::json_deser::deser_operation_list_analyzers(response.body().as_ref(), output)
            .map_err(crate::error::ListAnalyzersError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateArchiveRuleOutput, crate::error::CreateArchiveRuleError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::CreateArchiveRuleError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ConflictException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::ConflictException({
                #[allow(unused_mut)]
                let mut output = crate::error::conflict_exception::Builder::default();
                output = crate::json_deser::deser_structure_conflict_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ServiceQuotaExceededException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::ServiceQuotaExceededException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_quota_exceeded_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_quota_exceeded_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::CreateArchiveRuleError {
            meta: generic,
            kind: crate::error::CreateArchiveRuleErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "CreateArchiveRule", "unrecognized error code");
            crate::error::CreateArchiveRuleError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateArchiveRuleOutput, crate::error::CreateArchiveRuleError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_archive_rule_output::Builder::default();
        output = crate::json_deser::deser_operation_create_archive_rule(response.body().as_ref(), output)
            .map_err(crate::error::CreateArchiveRuleError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetArchiveRuleOutput, crate::error::GetArchiveRuleError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::GetArchiveRuleError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::GetArchiveRuleError {
            meta: generic,
            kind: crate::error::GetArchiveRuleErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::GetArchiveRuleError {
            meta: generic,
            kind: crate::error::GetArchiveRuleErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::GetArchiveRuleError {
            meta: generic,
            kind: crate::error::GetArchiveRuleErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::GetArchiveRuleError {
            meta: generic,
            kind: crate::error::GetArchiveRuleErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::GetArchiveRuleError {
            meta: generic,
            kind: crate::error::GetArchiveRuleErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "GetArchiveRule", "unrecognized error code");
            crate::error::GetArchiveRuleError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetArchiveRuleOutput, crate::error::GetArchiveRuleError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_archive_rule_output::Builder::default();
        output = crate::json_deser::deser_operation_get_archive_rule(response.body().as_ref(), output)
            .map_err(crate::error::GetArchiveRuleError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_archive_rules_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListArchiveRulesOutput, crate::error::ListArchiveRulesError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::ListArchiveRulesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListArchiveRulesError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::ListArchiveRulesError {
            meta: generic,
            kind: crate::error::ListArchiveRulesErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListArchiveRulesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::ListArchiveRulesError {
            meta: generic,
            kind: crate::error::ListArchiveRulesErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListArchiveRulesError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::ListArchiveRulesError {
            meta: generic,
            kind: crate::error::ListArchiveRulesErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListArchiveRulesError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::ListArchiveRulesError {
            meta: generic,
            kind: crate::error::ListArchiveRulesErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListArchiveRulesError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "ListArchiveRules", "unrecognized error code");
            crate::error::ListArchiveRulesError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_archive_rules_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListArchiveRulesOutput, crate::error::ListArchiveRulesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_archive_rules_output::Builder::default();
        output = crate::json_deser::deser_operation_list_archive_rules(response.body().as_ref(), output)
            .map_err(crate::error::ListArchiveRulesError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateArchiveRuleOutput, crate::error::UpdateArchiveRuleError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::UpdateArchiveRuleError {
            meta: generic,
            kind: crate::error::UpdateArchiveRuleErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::UpdateArchiveRuleError {
            meta: generic,
            kind: crate::error::UpdateArchiveRuleErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::UpdateArchiveRuleError {
            meta: generic,
            kind: crate::error::UpdateArchiveRuleErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::UpdateArchiveRuleError {
            meta: generic,
            kind: crate::error::UpdateArchiveRuleErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::UpdateArchiveRuleError {
            meta: generic,
            kind: crate::error::UpdateArchiveRuleErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "UpdateArchiveRule", "unrecognized error code");
            crate::error::UpdateArchiveRuleError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateArchiveRuleOutput, crate::error::UpdateArchiveRuleError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_archive_rule_output::Builder::default();
        output = crate::json_deser::deser_operation_update_archive_rule(response.body().as_ref(), output)
            .map_err(crate::error::UpdateArchiveRuleError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteArchiveRuleOutput, crate::error::DeleteArchiveRuleError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::DeleteArchiveRuleError {
            meta: generic,
            kind: crate::error::DeleteArchiveRuleErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DeleteArchiveRuleError {
            meta: generic,
            kind: crate::error::DeleteArchiveRuleErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::DeleteArchiveRuleError {
            meta: generic,
            kind: crate::error::DeleteArchiveRuleErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::DeleteArchiveRuleError {
            meta: generic,
            kind: crate::error::DeleteArchiveRuleErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::DeleteArchiveRuleError {
            meta: generic,
            kind: crate::error::DeleteArchiveRuleErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "DeleteArchiveRule", "unrecognized error code");
            crate::error::DeleteArchiveRuleError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteArchiveRuleOutput, crate::error::DeleteArchiveRuleError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_archive_rule_output::Builder::default();
        output = crate::json_deser::deser_operation_delete_archive_rule(response.body().as_ref(), output)
            .map_err(crate::error::DeleteArchiveRuleError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_analyzed_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzedResourceOutput, crate::error::GetAnalyzedResourceError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetAnalyzedResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::GetAnalyzedResourceError {
            meta: generic,
            kind: crate::error::GetAnalyzedResourceErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::GetAnalyzedResourceError {
            meta: generic,
            kind: crate::error::GetAnalyzedResourceErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::GetAnalyzedResourceError {
            meta: generic,
            kind: crate::error::GetAnalyzedResourceErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::GetAnalyzedResourceError {
            meta: generic,
            kind: crate::error::GetAnalyzedResourceErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::GetAnalyzedResourceError {
            meta: generic,
            kind: crate::error::GetAnalyzedResourceErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "GetAnalyzedResource", "unrecognized error code");
            crate::error::GetAnalyzedResourceError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_analyzed_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzedResourceOutput, crate::error::GetAnalyzedResourceError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_analyzed_resource_output::Builder::default();
        output = crate::json_deser::deser_operation_get_analyzed_resource(response.body().as_ref(), output)
            .map_err(crate::error::GetAnalyzedResourceError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_analyzed_resources_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzedResourcesOutput, crate::error::ListAnalyzedResourcesError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListAnalyzedResourcesError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::ListAnalyzedResourcesError {
            meta: generic,
            kind: crate::error::ListAnalyzedResourcesErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::ListAnalyzedResourcesError {
            meta: generic,
            kind: crate::error::ListAnalyzedResourcesErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::ListAnalyzedResourcesError {
            meta: generic,
            kind: crate::error::ListAnalyzedResourcesErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::ListAnalyzedResourcesError {
            meta: generic,
            kind: crate::error::ListAnalyzedResourcesErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::ListAnalyzedResourcesError {
            meta: generic,
            kind: crate::error::ListAnalyzedResourcesErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "ListAnalyzedResources", "unrecognized error code");
            crate::error::ListAnalyzedResourcesError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_analyzed_resources_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzedResourcesOutput, crate::error::ListAnalyzedResourcesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_analyzed_resources_output::Builder::default();
        output = crate::json_deser::deser_operation_list_analyzed_resources(response.body().as_ref(), output)
            .map_err(crate::error::ListAnalyzedResourcesError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_findings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListFindingsOutput, crate::error::ListFindingsError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::ListFindingsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListFindingsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::ListFindingsError {
            meta: generic,
            kind: crate::error::ListFindingsErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListFindingsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::ListFindingsError {
            meta: generic,
            kind: crate::error::ListFindingsErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListFindingsError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::ListFindingsError {
            meta: generic,
            kind: crate::error::ListFindingsErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListFindingsError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::ListFindingsError {
            meta: generic,
            kind: crate::error::ListFindingsErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListFindingsError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::ListFindingsError {
            meta: generic,
            kind: crate::error::ListFindingsErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListFindingsError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "ListFindings", "unrecognized error code");
            crate::error::ListFindingsError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_findings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListFindingsOutput, crate::error::ListFindingsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_findings_output::Builder::default();
        output = crate::json_deser::deser_operation_list_findings(response.body().as_ref(), output)
            .map_err(crate::error::ListFindingsError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_finding_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetFindingOutput, crate::error::GetFindingError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::GetFindingError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetFindingError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::GetFindingError {
            meta: generic,
            kind: crate::error::GetFindingErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetFindingError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::GetFindingError {
            meta: generic,
            kind: crate::error::GetFindingErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetFindingError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::GetFindingError {
            meta: generic,
            kind: crate::error::GetFindingErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetFindingError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::GetFindingError {
            meta: generic,
            kind: crate::error::GetFindingErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetFindingError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::GetFindingError {
            meta: generic,
            kind: crate::error::GetFindingErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetFindingError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "GetFinding", "unrecognized error code");
            crate::error::GetFindingError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_finding_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetFindingOutput, crate::error::GetFindingError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_finding_output::Builder::default();
        output = crate::json_deser::deser_operation_get_finding(response.body().as_ref(), output)
            .map_err(crate::error::GetFindingError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_findings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateFindingsOutput, crate::error::UpdateFindingsError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::UpdateFindingsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateFindingsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::UpdateFindingsError {
            meta: generic,
            kind: crate::error::UpdateFindingsErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateFindingsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::UpdateFindingsError {
            meta: generic,
            kind: crate::error::UpdateFindingsErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateFindingsError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::UpdateFindingsError {
            meta: generic,
            kind: crate::error::UpdateFindingsErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateFindingsError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::UpdateFindingsError {
            meta: generic,
            kind: crate::error::UpdateFindingsErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateFindingsError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::UpdateFindingsError {
            meta: generic,
            kind: crate::error::UpdateFindingsErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateFindingsError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "UpdateFindings", "unrecognized error code");
            crate::error::UpdateFindingsError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_findings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateFindingsOutput, crate::error::UpdateFindingsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_findings_output::Builder::default();
        output = crate::json_deser::deser_operation_update_findings(response.body().as_ref(), output)
            .map_err(crate::error::UpdateFindingsError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_tags_for_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::ListTagsForResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTagsForResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::ListTagsForResourceError {
            meta: generic,
            kind: crate::error::ListTagsForResourceErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTagsForResourceError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::ListTagsForResourceError {
            meta: generic,
            kind: crate::error::ListTagsForResourceErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTagsForResourceError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::ListTagsForResourceError {
            meta: generic,
            kind: crate::error::ListTagsForResourceErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTagsForResourceError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::ListTagsForResourceError {
            meta: generic,
            kind: crate::error::ListTagsForResourceErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTagsForResourceError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::ListTagsForResourceError {
            meta: generic,
            kind: crate::error::ListTagsForResourceErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTagsForResourceError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "ListTagsForResource", "unrecognized error code");
            crate::error::ListTagsForResourceError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_tags_for_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_tags_for_resource_output::Builder::default();
        output = crate::json_deser::deser_operation_list_tags_for_resource(response.body().as_ref(), output)
            .map_err(crate::error::ListTagsForResourceError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_tag_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::TagResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::TagResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::TagResourceError {
            meta: generic,
            kind: crate::error::TagResourceErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TagResourceError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::TagResourceError {
            meta: generic,
            kind: crate::error::TagResourceErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TagResourceError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::TagResourceError {
            meta: generic,
            kind: crate::error::TagResourceErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TagResourceError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::TagResourceError {
            meta: generic,
            kind: crate::error::TagResourceErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TagResourceError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::TagResourceError {
            meta: generic,
            kind: crate::error::TagResourceErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TagResourceError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "TagResource", "unrecognized error code");
            crate::error::TagResourceError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_tag_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::tag_resource_output::Builder::default();
        output = crate::json_deser::deser_operation_tag_resource(response.body().as_ref(), output)
            .map_err(crate::error::TagResourceError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_untag_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::UntagResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UntagResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::UntagResourceError {
            meta: generic,
            kind: crate::error::UntagResourceErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UntagResourceError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::UntagResourceError {
            meta: generic,
            kind: crate::error::UntagResourceErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UntagResourceError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::UntagResourceError {
            meta: generic,
            kind: crate::error::UntagResourceErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UntagResourceError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::UntagResourceError {
            meta: generic,
            kind: crate::error::UntagResourceErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UntagResourceError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::UntagResourceError {
            meta: generic,
            kind: crate::error::UntagResourceErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UntagResourceError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "UntagResource", "unrecognized error code");
            crate::error::UntagResourceError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_untag_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::untag_resource_output::Builder::default();
        output = crate::json_deser::deser_operation_untag_resource(response.body().as_ref(), output)
            .map_err(crate::error::UntagResourceError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_start_resource_scan_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartResourceScanOutput, crate::error::StartResourceScanError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::StartResourceScanError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StartResourceScanError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => crate::error::StartResourceScanError {
            meta: generic,
            kind: crate::error::StartResourceScanErrorKind::AccessDeniedException({
                #[allow(unused_mut)]
                let mut output = crate::error::access_denied_exception::Builder::default();
                output = crate::json_deser::deser_structure_access_denied_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::StartResourceScanError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::StartResourceScanError {
            meta: generic,
            kind: crate::error::StartResourceScanErrorKind::InternalServerException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_exception::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::StartResourceScanError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::StartResourceScanError {
            meta: generic,
            kind: crate::error::StartResourceScanErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::StartResourceScanError::unhandled)?;
                output.build()
            }),
        },
        "ThrottlingException" => crate::error::StartResourceScanError {
            meta: generic,
            kind: crate::error::StartResourceScanErrorKind::ThrottlingException({
                #[allow(unused_mut)]
                let mut output = crate::error::throttling_exception::Builder::default();
                output = crate::json_deser::deser_structure_throttling_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::StartResourceScanError::unhandled)?;
                output.build()
            }),
        },
        "ValidationException" => crate::error::StartResourceScanError {
            meta: generic,
            kind: crate::error::StartResourceScanErrorKind::ValidationException({
                #[allow(unused_mut)]
                let mut output = crate::error::validation_exception::Builder::default();
                output = crate::json_deser::deser_structure_validation_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::StartResourceScanError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "StartResourceScan", "unrecognized error code");
            crate::error::StartResourceScanError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_start_resource_scan_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartResourceScanOutput, crate::error::StartResourceScanError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::start_resource_scan_output::Builder::default();
        output = crate::json_deser::deser_operation_start_resource_scan(response.body().as_ref(), output)
            .map_err(crate::error::StartResourceScanError::unhandled)?;
        output.build()
    })
}
