use aws_sdk_rds::types;
use serde_json::{Value, json};

/// A DB instance log file.
pub fn log_file(details: &types::DescribeDbLogFilesDetails) -> Value {
    json!({
        "LogFileName": details.log_file_name,
        "LastWritten": details.last_written,
        "Size": details.size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file() {
        let actual = log_file(
            &types::DescribeDbLogFilesDetails::builder()
                .log_file_name("error/postgresql.log.2024-01-01-00")
                .last_written(1_704_067_200_000)
                .size(2048)
                .build(),
        );
        let expected = json!({
            "LogFileName": "error/postgresql.log.2024-01-01-00",
            "LastWritten": 1_704_067_200_000_i64,
            "Size": 2048,
        });
        assert_eq!(actual, expected);
    }
}
