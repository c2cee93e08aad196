use crate::{Error, Result};

use serde_json::{Map, Value};
use std::str;

/// What a command writes to its output.
///
/// Parsed from the `--select` flag:
/// - `*` selects the whole response,
/// - `^Name` echoes the bound parameter `Name`,
/// - anything else selects that top-level response field.
///
/// ```rust
/// use rds_commands::common::select::Select;
/// use serde_json::json;
///
/// let select: Select = "DBInstances".parse().unwrap();
/// let response = json!({"DBInstances": [], "Marker": null});
/// let parameters = json!({"DBInstanceIdentifier": "db-1"});
/// assert_eq!(select.project(response, &parameters).unwrap(), Some(json!([])));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Select {
    /// The whole response.
    Whole,
    /// A single top-level field of the response.
    Field(String),
    /// An echo of a bound input parameter.
    Parameter(String),
    /// Nothing at all.
    Nothing,
}

impl str::FromStr for Select {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim() {
            "" => Err(Error::InvalidArgument(
                "select must be `*`, a response field, or `^Parameter`".to_string(),
            )),
            "*" => Ok(Self::Whole),
            selection => match selection.strip_prefix('^') {
                Some("") => Err(Error::InvalidArgument(
                    "select `^` must name a parameter".to_string(),
                )),
                Some(parameter) => Ok(Self::Parameter(parameter.to_string())),
                None => Ok(Self::Field(selection.to_string())),
            },
        }
    }
}

/// Names match exactly first, then ignoring ASCII case.
fn lookup(fields: &mut Map<String, Value>, name: &str) -> Option<Value> {
    if let Some(value) = fields.remove(name) {
        return Some(value);
    }
    let key = fields
        .keys()
        .find(|key| key.eq_ignore_ascii_case(name))?
        .clone();
    fields.remove(&key)
}

impl Select {
    /// Pick the value to emit from a response and the bound parameters.
    pub fn project(&self, response: Value, parameters: &Value) -> Result<Option<Value>> {
        match self {
            Self::Whole => Ok(Some(response)),
            Self::Nothing => Ok(None),
            Self::Field(name) => match response {
                Value::Object(mut fields) => lookup(&mut fields, name)
                    .map(Some)
                    .ok_or_else(|| Error::UnknownField(name.clone())),
                _ => Err(Error::UnknownField(name.clone())),
            },
            Self::Parameter(name) => match parameters {
                Value::Object(fields) => lookup(&mut fields.clone(), name)
                    .map(Some)
                    .ok_or_else(|| Error::UnknownParameter(name.clone())),
                _ => Err(Error::UnknownParameter(name.clone())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::whole("*", Select::Whole)]
    #[case::field("DBInstances", Select::Field("DBInstances".to_string()))]
    #[case::parameter("^DBInstanceIdentifier", Select::Parameter("DBInstanceIdentifier".to_string()))]
    #[case::trimmed(" Marker ", Select::Field("Marker".to_string()))]
    fn test_parse_select(#[case] input: &str, #[case] expected: Select) {
        let actual: Select = input.parse().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("  ")]
    #[case::bare_caret("^")]
    fn test_parse_select_rejects(#[case] input: &str) {
        assert!(input.parse::<Select>().is_err());
    }

    #[rstest]
    #[case::whole(
        Select::Whole,
        Some(json!({"DBInstance": {"DBInstanceIdentifier": "db-1"}}))
    )]
    #[case::field(
        Select::Field("DBInstance".to_string()),
        Some(json!({"DBInstanceIdentifier": "db-1"}))
    )]
    #[case::field_ignoring_case(
        Select::Field("dbinstance".to_string()),
        Some(json!({"DBInstanceIdentifier": "db-1"}))
    )]
    #[case::parameter(
        Select::Parameter("DBInstanceIdentifier".to_string()),
        Some(json!("db-1"))
    )]
    #[case::unset_parameter(
        Select::Parameter("DBSnapshotIdentifier".to_string()),
        Some(Value::Null)
    )]
    #[case::nothing(Select::Nothing, None)]
    fn test_project(#[case] select: Select, #[case] expected: Option<Value>) {
        let response = json!({"DBInstance": {"DBInstanceIdentifier": "db-1"}});
        let parameters = json!({
            "DBInstanceIdentifier": "db-1",
            "DBSnapshotIdentifier": null,
        });
        let actual = select.project(response, &parameters).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_project_unknown_field() {
        let actual = Select::Field("Missing".to_string()).project(json!({}), &json!({}));
        assert!(matches!(actual, Err(Error::UnknownField(name)) if name == "Missing"));
    }

    #[test]
    fn test_project_unknown_parameter() {
        let actual = Select::Parameter("Missing".to_string()).project(json!({}), &json!({}));
        assert!(matches!(actual, Err(Error::UnknownParameter(name)) if name == "Missing"));
    }
}
