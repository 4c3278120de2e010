/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_log_group_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateLogGroupOutput, crate::error::CreateLogGroupError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::CreateLogGroupError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateLogGroupError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameterException" => crate::error::CreateLogGroupError {
            meta: generic,
            kind: crate::error::CreateLogGroupErrorKind::InvalidParameterException({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_exception::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateLogGroupError::unhandled)?;
                output.build()
            }),
        },
        "LimitExceededException" => crate::error::CreateLogGroupError {
            meta: generic,
            kind: crate::error::CreateLogGroupErrorKind::LimitExceededException({
                #[allow(unused_mut)]
                let mut output = crate::error::limit_exceeded_exception::Builder::default();
                output = crate::json_deser::deser_structure_limit_exceeded_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateLogGroupError::unhandled)?;
                output.build()
            }),
        },
        "OperationAbortedException" => crate::error::CreateLogGroupError {
            meta: generic,
            kind: crate::error::CreateLogGroupErrorKind::OperationAbortedException({
                #[allow(unused_mut)]
                let mut output = crate::error::operation_aborted_exception::Builder::default();
                output = crate::json_deser::deser_structure_operation_aborted_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateLogGroupError::unhandled)?;
                output.build()
            }),
        },
        "ResourceAlreadyExistsException" => crate::error::CreateLogGroupError {
            meta: generic,
            kind: crate::error::CreateLogGroupErrorKind::ResourceAlreadyExistsException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_already_exists_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_already_exists_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateLogGroupError::unhandled)?;
                output.build()
            }),
        },
        "ServiceUnavailableException" => crate::error::CreateLogGroupError {
            meta: generic,
            kind: crate::error::CreateLogGroupErrorKind::ServiceUnavailableException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_unavailable_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_unavailable_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateLogGroupError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "CreateLogGroup", "unrecognized error code");
            crate::error::CreateLogGroupError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_log_group_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateLogGroupOutput, crate::error::CreateLogGroupError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_log_group_output::Builder::default();
        output = crate::json_deser::deser_operation_create_log_group(response.body().as_ref(), output)
            .map_err(crate::error::CreateLogGroupError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_log_groups_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLogGroupsOutput, crate::error::DescribeLogGroupsError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::DescribeLogGroupsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeLogGroupsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameterException" => crate::error::DescribeLogGroupsError {
            meta: generic,
            kind: crate::error::DescribeLogGroupsErrorKind::InvalidParameterException({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_exception::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DescribeLogGroupsError::unhandled)?;
                output.build()
            }),
        },
        "ServiceUnavailableException" => crate::error::DescribeLogGroupsError {
            meta: generic,
            kind: crate::error::DescribeLogGroupsErrorKind::ServiceUnavailableException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_unavailable_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_unavailable_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DescribeLogGroupsError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "DescribeLogGroups", "unrecognized error code");
            crate::error::DescribeLogGroupsError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_log_groups_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLogGroupsOutput, crate::error::DescribeLogGroupsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::describe_log_groups_output::Builder::default();
        output = crate::json_deser::deser_operation_describe_log_groups(response.body().as_ref(), output)
            .map_err(crate::error::DescribeLogGroupsError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_log_events_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutLogEventsOutput, crate::error::PutLogEventsError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::PutLogEventsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::PutLogEventsError::unhandled(generic)),
    };
    Err(match error_code {
        "DataAlreadyAcceptedException" => crate::error::PutLogEventsError {
            meta: generic,
            kind: crate::error::PutLogEventsErrorKind::DataAlreadyAcceptedException({
                #[allow(unused_mut)]
                let mut output = crate::error::data_already_accepted_exception::Builder::default();
                output = crate::json_deser::deser_structure_data_already_accepted_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutLogEventsError::unhandled)?;
                output.build()
            }),
        },
        "InvalidParameterException" => crate::error::PutLogEventsError {
            meta: generic,
            kind: crate::error::PutLogEventsErrorKind::InvalidParameterException({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_exception::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutLogEventsError::unhandled)?;
                output.build()
            }),
        },
        "InvalidSequenceTokenException" => crate::error::PutLogEventsError {
            meta: generic,
            kind: crate::error::PutLogEventsErrorKind::InvalidSequenceTokenException({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_sequence_token_exception::Builder::default();
                output = crate::json_deser::deser_structure_invalid_sequence_token_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutLogEventsError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::PutLogEventsError {
            meta: generic,
            kind: crate::error::PutLogEventsErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutLogEventsError::unhandled)?;
                output.build()
            }),
        },
        "ServiceUnavailableException" => crate::error::PutLogEventsError {
            meta: generic,
            kind: crate::error::PutLogEventsErrorKind::ServiceUnavailableException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_unavailable_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_unavailable_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutLogEventsError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "PutLogEvents", "unrecognized error code");
            crate::error::PutLogEventsError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_log_events_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutLogEventsOutput, crate::error::PutLogEventsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::put_log_events_output::Builder::default();
        output = crate::json_deser::deser_operation_put_log_events(response.body().as_ref(), output)
            .map_err(crate::error::PutLogEventsError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_log_events_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetLogEventsOutput, crate::error::GetLogEventsError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::GetLogEventsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetLogEventsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameterException" => crate::error::GetLogEventsError {
            meta: generic,
            kind: crate::error::GetLogEventsErrorKind::InvalidParameterException({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_exception::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetLogEventsError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::GetLogEventsError {
            meta: generic,
            kind: crate::error::GetLogEventsErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetLogEventsError::unhandled)?;
                output.build()
            }),
        },
        "ServiceUnavailableException" => crate::error::GetLogEventsError {
            meta: generic,
            kind: crate::error::GetLogEventsErrorKind::ServiceUnavailableException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_unavailable_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_unavailable_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetLogEventsError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "GetLogEvents", "unrecognized error code");
            crate::error::GetLogEventsError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_log_events_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetLogEventsOutput, crate::error::GetLogEventsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_log_events_output::Builder::default();
        output = crate::json_deser::deser_operation_get_log_events(response.body().as_ref(), output)
            .map_err(crate::error::GetLogEventsError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_metric_filter_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutMetricFilterOutput, crate::error::PutMetricFilterError> {
    let generic = aws_http::json_errors::parse_generic_error(response).map_err(crate::error::PutMetricFilterError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::PutMetricFilterError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameterException" => crate::error::PutMetricFilterError {
            meta: generic,
            kind: crate::error::PutMetricFilterErrorKind::InvalidParameterException({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_exception::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutMetricFilterError::unhandled)?;
                output.build()
            }),
        },
        "LimitExceededException" => crate::error::PutMetricFilterError {
            meta: generic,
            kind: crate::error::PutMetricFilterErrorKind::LimitExceededException({
                #[allow(unused_mut)]
                let mut output = crate::error::limit_exceeded_exception::Builder::default();
                output = crate::json_deser::deser_structure_limit_exceeded_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutMetricFilterError::unhandled)?;
                output.build()
            }),
        },
        "OperationAbortedException" => crate::error::PutMetricFilterError {
            meta: generic,
            kind: crate::error::PutMetricFilterErrorKind::OperationAbortedException({
                #[allow(unused_mut)]
                let mut output = crate::error::operation_aborted_exception::Builder::default();
                output = crate::json_deser::deser_structure_operation_aborted_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutMetricFilterError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::PutMetricFilterError {
            meta: generic,
            kind: crate::error::PutMetricFilterErrorKind::ResourceNotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutMetricFilterError::unhandled)?;
                output.build()
            }),
        },
        "ServiceUnavailableException" => crate::error::PutMetricFilterError {
            meta: generic,
            kind: crate::error::PutMetricFilterErrorKind::ServiceUnavailableException({
                #[allow(unused_mut)]
                let mut output = crate::error::service_unavailable_exception::Builder::default();
                output = crate::json_deser::deser_structure_service_unavailable_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PutMetricFilterError::unhandled)?;
                output.build()
            }),
        },
        _ => {
            tracing::trace!(code = error_code, operation = "PutMetricFilter", "unrecognized error code");
            crate::error::PutMetricFilterError::generic(generic)
        }
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_metric_filter_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutMetricFilterOutput, crate::error::PutMetricFilterError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::put_metric_filter_output::Builder::default();
        output = crate::json_deser::deser_operation_put_metric_filter(response.body().as_ref(), output)
            .map_err(crate::error::PutMetricFilterError::unhandled)?;
        output.build()
    })
}
