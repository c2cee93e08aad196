use aws_sdk_rds::types;
use serde_json::{Value, json};

/// An account quota and its current usage.
pub fn account_quota(quota: &types::AccountQuota) -> Value {
    json!({
        "AccountQuotaName": quota.account_quota_name,
        "Used": quota.used,
        "Max": quota.max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_quota() {
        let actual = account_quota(
            &types::AccountQuota::builder()
                .account_quota_name("DBInstances")
                .used(3)
                .max(40)
                .build(),
        );
        let expected = json!({
            "AccountQuotaName": "DBInstances",
            "Used": 3,
            "Max": 40,
        });
        assert_eq!(actual, expected);
    }
}
