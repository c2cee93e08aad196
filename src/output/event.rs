use crate::output;

use aws_sdk_rds::types;
use serde_json::{Value, json};

/// An event.
pub fn event(event: &types::Event) -> Value {
    json!({
        "SourceIdentifier": event.source_identifier,
        "SourceType": event.source_type.as_ref().map(types::SourceType::as_str),
        "SourceArn": event.source_arn,
        "Message": event.message,
        "EventCategories": event.event_categories(),
        "Date": output::timestamp(event.date.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_rds::primitives::DateTime;

    #[test]
    fn test_event() {
        let actual = event(
            &types::Event::builder()
                .source_identifier("db-1")
                .source_type(types::SourceType::DbInstance)
                .message("DB instance restarted")
                .event_categories("availability")
                .date(DateTime::from_secs(60))
                .build(),
        );
        let expected = json!({
            "SourceIdentifier": "db-1",
            "SourceType": "db-instance",
            "SourceArn": null,
            "Message": "DB instance restarted",
            "EventCategories": ["availability"],
            "Date": "1970-01-01T00:01:00Z",
        });
        assert_eq!(actual, expected);
    }
}
