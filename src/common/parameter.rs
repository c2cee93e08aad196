use crate::Error;

use aws_sdk_rds::types;
use serde::Serialize;
use std::str;

/// When a modified parameter takes effect.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyMethod {
    /// Apply as soon as possible (dynamic parameters only).
    Immediate,
    /// Apply at the next reboot.
    #[default]
    PendingReboot,
}

impl From<ApplyMethod> for types::ApplyMethod {
    fn from(apply_method: ApplyMethod) -> Self {
        match apply_method {
            ApplyMethod::Immediate => Self::Immediate,
            ApplyMethod::PendingReboot => Self::PendingReboot,
        }
    }
}

/// A parameter group change.
///
/// ```rust
/// use rds_commands::common::parameter::{ApplyMethod, ParameterChange};
///
/// let change: ParameterChange = "max_connections=200@immediate".parse().unwrap();
/// assert_eq!(change.name, "max_connections");
/// assert_eq!(change.value, "200");
/// assert_eq!(change.apply_method, ApplyMethod::Immediate);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterChange {
    /// The parameter name.
    #[serde(rename = "ParameterName")]
    pub name: String,
    /// The new value.
    #[serde(rename = "ParameterValue")]
    pub value: String,
    /// When the new value takes effect.
    pub apply_method: ApplyMethod,
}

impl str::FromStr for ParameterChange {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, rest) = input.split_once('=').ok_or_else(|| {
            Error::InvalidArgument(format!(
                "parameter `{input}` must look like name=value[@immediate|@pending-reboot]"
            ))
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "parameter `{input}` has an empty name"
            )));
        }
        // values may contain '@'; only a known suffix selects the apply method
        let (value, apply_method) = match rest.rsplit_once('@') {
            Some((value, "immediate")) => (value, ApplyMethod::Immediate),
            Some((value, "pending-reboot")) => (value, ApplyMethod::PendingReboot),
            _ => (rest, ApplyMethod::default()),
        };
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
            apply_method,
        })
    }
}

impl From<ParameterChange> for types::Parameter {
    fn from(change: ParameterChange) -> Self {
        Self::builder()
            .parameter_name(change.name)
            .parameter_value(change.value)
            .apply_method(change.apply_method.into())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::default_method("work_mem=4096", "work_mem", "4096", ApplyMethod::PendingReboot)]
    #[case::immediate("max_connections=200@immediate", "max_connections", "200", ApplyMethod::Immediate)]
    #[case::pending_reboot(
        "shared_buffers=1024@pending-reboot",
        "shared_buffers",
        "1024",
        ApplyMethod::PendingReboot
    )]
    #[case::at_in_value("rds.notify=ops@example.com", "rds.notify", "ops@example.com", ApplyMethod::PendingReboot)]
    #[case::empty_value("search_path=", "search_path", "", ApplyMethod::PendingReboot)]
    fn test_parse_parameter_change(
        #[case] input: &str,
        #[case] name: &str,
        #[case] value: &str,
        #[case] apply_method: ApplyMethod,
    ) {
        let actual: ParameterChange = input.parse().unwrap();
        let expected = ParameterChange {
            name: name.to_string(),
            value: value.to_string(),
            apply_method,
        };
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::no_separator("work_mem")]
    #[case::empty_name("=1")]
    fn test_parse_parameter_change_rejects(#[case] input: &str) {
        assert!(input.parse::<ParameterChange>().is_err());
    }

    #[test]
    fn test_parameter_change_to_sdk() {
        let actual: types::Parameter = ParameterChange {
            name: "a".to_string(),
            value: "b".to_string(),
            apply_method: ApplyMethod::Immediate,
        }
        .into();
        let expected = types::Parameter::builder()
            .parameter_name("a")
            .parameter_value("b")
            .apply_method(types::ApplyMethod::Immediate)
            .build();
        assert_eq!(actual, expected);
    }
}
