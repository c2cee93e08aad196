use crate::command::Command;
use crate::common::{parameter, select::Select};
use crate::Error;

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// modify DB parameter group operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ModifyDbParameterGroupInput {
    db_parameter_group_name: String,
    parameters: Vec<types::Parameter>,
}

/// Change parameters in a DB parameter group.
///
/// ```rust,no_run
/// use aws_sdk_rds::Client;
/// use rds_commands::write;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let modify = write::modify_db_parameter_group::ModifyDbParameterGroup {
///     db_parameter_group_name: "orders-pg16".to_string(),
///     parameters: vec!["max_connections=200@pending-reboot".parse()?],
/// };
/// modify.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDbParameterGroup {
    /// Name of the DB parameter group.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: String,
    /// Parameters to change (`name=value[@immediate|@pending-reboot]`), at most 20 per call.
    #[arg(long = "parameter", value_name = "NAME=VALUE", required = true)]
    pub parameters: Vec<parameter::ParameterChange>,
}

impl From<ModifyDbParameterGroup> for ModifyDbParameterGroupInput {
    fn from(modify: ModifyDbParameterGroup) -> Self {
        Self {
            db_parameter_group_name: modify.db_parameter_group_name,
            parameters: modify
                .parameters
                .into_iter()
                .map(types::Parameter::from)
                .collect(),
        }
    }
}

impl ModifyDbParameterGroup {
    /// Execute the modify DB parameter group operation.
    #[tracing::instrument(
        name = "rds_commands.modify_db_parameter_group",
        skip_all,
        fields(resource = %self.db_parameter_group_name, parameters = self.parameters.len()),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::modify_db_parameter_group::ModifyDbParameterGroupOutput,
        error::SdkError<operation::modify_db_parameter_group::ModifyDBParameterGroupError>,
    > {
        let modify: ModifyDbParameterGroupInput = self.into();
        client
            .modify_db_parameter_group()
            .db_parameter_group_name(modify.db_parameter_group_name)
            .set_parameters(Some(modify.parameters))
            .send()
            .await
    }
}

impl Command for ModifyDbParameterGroup {
    const OPERATION: &'static str = "ModifyDBParameterGroup";

    fn default_select() -> Select {
        Select::Field("DBParameterGroupName".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_parameter_group_name.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({ "DBParameterGroupName": response.db_parameter_group_name() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::single(
        ModifyDbParameterGroup {
            db_parameter_group_name: "a".to_string(),
            parameters: vec![
                parameter::ParameterChange {
                    name: "max_connections".to_string(),
                    value: "200".to_string(),
                    apply_method: parameter::ApplyMethod::PendingReboot,
                },
            ],
        },
        ModifyDbParameterGroupInput {
            db_parameter_group_name: "a".to_string(),
            parameters: vec![
                types::Parameter::builder()
                    .parameter_name("max_connections")
                    .parameter_value("200")
                    .apply_method(types::ApplyMethod::PendingReboot)
                    .build(),
            ],
        }
    )]
    #[case::mixed_apply_methods(
        ModifyDbParameterGroup {
            db_parameter_group_name: "a".to_string(),
            parameters: vec![
                parameter::ParameterChange {
                    name: "work_mem".to_string(),
                    value: "65536".to_string(),
                    apply_method: parameter::ApplyMethod::Immediate,
                },
                parameter::ParameterChange {
                    name: "shared_buffers".to_string(),
                    value: "{DBInstanceClassMemory/32768}".to_string(),
                    apply_method: parameter::ApplyMethod::PendingReboot,
                },
            ],
        },
        ModifyDbParameterGroupInput {
            db_parameter_group_name: "a".to_string(),
            parameters: vec![
                types::Parameter::builder()
                    .parameter_name("work_mem")
                    .parameter_value("65536")
                    .apply_method(types::ApplyMethod::Immediate)
                    .build(),
                types::Parameter::builder()
                    .parameter_name("shared_buffers")
                    .parameter_value("{DBInstanceClassMemory/32768}")
                    .apply_method(types::ApplyMethod::PendingReboot)
                    .build(),
            ],
        }
    )]
    fn test_modify_db_parameter_group(
        #[case] args: ModifyDbParameterGroup,
        #[case] expected: ModifyDbParameterGroupInput,
    ) {
        let actual: ModifyDbParameterGroupInput = args.into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parameters() {
        let args = ModifyDbParameterGroup {
            db_parameter_group_name: "a".to_string(),
            parameters: vec!["work_mem=65536@immediate".parse().unwrap()],
        };
        let expected = json!({
            "DBParameterGroupName": "a",
            "Parameters": [
                {
                    "ParameterName": "work_mem",
                    "ParameterValue": "65536",
                    "ApplyMethod": "immediate",
                },
            ],
        });
        assert_eq!(serde_json::to_value(&args).unwrap(), expected);
    }
}
