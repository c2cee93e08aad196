use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Describe the account's RDS quotas and their current usage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, clap::Args)]
pub struct DescribeAccountAttributes {}

impl DescribeAccountAttributes {
    /// Execute the describe account attributes operation.
    #[tracing::instrument(name = "rds_commands.describe_account_attributes", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_account_attributes::DescribeAccountAttributesOutput,
        error::SdkError<operation::describe_account_attributes::DescribeAccountAttributesError>,
    > {
        client.describe_account_attributes().send().await
    }
}

impl Command for DescribeAccountAttributes {
    const OPERATION: &'static str = "DescribeAccountAttributes";

    fn default_select() -> Select {
        Select::Field("AccountQuotas".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "AccountQuotas": response
                .account_quotas()
                .iter()
                .map(output::account::account_quota)
                .collect::<Vec<_>>(),
        }))
    }
}
