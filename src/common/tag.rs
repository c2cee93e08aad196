use crate::Error;

use aws_sdk_rds::types;
use serde::Serialize;
use std::str;

/// A resource tag.
///
/// ```rust
/// use rds_commands::common::tag::Tag;
///
/// let tag: Tag = "team=storage".parse().unwrap();
/// assert_eq!(tag.key, "team");
/// assert_eq!(tag.value.as_deref(), Some("storage"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key.
    pub key: String,
    /// The tag value, absent for key-only tags.
    pub value: Option<String>,
}

impl str::FromStr for Tag {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (key, value) = match input.split_once('=') {
            Some((key, value)) => (key, Some(value.to_string())),
            None => (input, None),
        };
        if key.trim().is_empty() {
            return Err(Error::InvalidArgument(format!(
                "tag `{input}` has an empty key"
            )));
        }
        Ok(Self {
            key: key.trim().to_string(),
            value,
        })
    }
}

impl From<Tag> for types::Tag {
    fn from(tag: Tag) -> Self {
        Self::builder().key(tag.key).set_value(tag.value).build()
    }
}

/// Convert bound tags, omitting the list when none were given.
pub(crate) fn into_sdk_tags(tags: Vec<Tag>) -> Option<Vec<types::Tag>> {
    crate::common::non_empty(tags.into_iter().map(types::Tag::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::key_value("team=storage", "team", Some("storage"))]
    #[case::key_only("critical", "critical", None)]
    #[case::empty_value("owner=", "owner", Some(""))]
    #[case::value_with_separator("expr=a=b", "expr", Some("a=b"))]
    fn test_parse_tag(#[case] input: &str, #[case] key: &str, #[case] value: Option<&str>) {
        let actual: Tag = input.parse().unwrap();
        assert_eq!(actual.key, key);
        assert_eq!(actual.value.as_deref(), value);
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_key("=value")]
    fn test_parse_tag_rejects(#[case] input: &str) {
        assert!(input.parse::<Tag>().is_err());
    }

    #[test]
    fn test_into_sdk_tags() {
        assert_eq!(into_sdk_tags(vec![]), None);
        let actual = into_sdk_tags(vec![Tag {
            key: "a".to_string(),
            value: Some("b".to_string()),
        }]);
        let expected = vec![types::Tag::builder().key("a").value("b").build()];
        assert_eq!(actual, Some(expected));
    }
}
