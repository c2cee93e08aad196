use aws_sdk_rds::types;
use serde_json::{Value, json};

/// A DB parameter group.
pub fn db_parameter_group(group: &types::DbParameterGroup) -> Value {
    json!({
        "DBParameterGroupName": group.db_parameter_group_name,
        "DBParameterGroupFamily": group.db_parameter_group_family,
        "Description": group.description,
        "DBParameterGroupArn": group.db_parameter_group_arn,
    })
}

/// A parameter in a DB parameter group.
pub fn parameter(parameter: &types::Parameter) -> Value {
    json!({
        "ParameterName": parameter.parameter_name,
        "ParameterValue": parameter.parameter_value,
        "Description": parameter.description,
        "Source": parameter.source,
        "ApplyType": parameter.apply_type,
        "DataType": parameter.data_type,
        "AllowedValues": parameter.allowed_values,
        "IsModifiable": parameter.is_modifiable,
        "MinimumEngineVersion": parameter.minimum_engine_version,
        "ApplyMethod": parameter.apply_method.as_ref().map(types::ApplyMethod::as_str),
    })
}
