use crate::Error;

use aws_sdk_rds::types;
use indexmap::IndexMap;
use serde::Serialize;
use std::str;

/// A describe filter.
///
/// ```rust
/// use rds_commands::common::filter::Filter;
///
/// let filter: Filter = "engine=postgres,mysql".parse().unwrap();
/// assert_eq!(filter.name, "engine");
/// assert_eq!(filter.values, vec!["postgres", "mysql"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// The filter name, such as `db-instance-id` or `engine`.
    pub name: String,
    /// Values matched by the filter.
    pub values: Vec<String>,
}

impl str::FromStr for Filter {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, values) = input.split_once('=').ok_or_else(|| {
            Error::InvalidArgument(format!("filter `{input}` must look like name=value[,value]"))
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "filter `{input}` has an empty name"
            )));
        }
        let values: Vec<String> = values
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "filter `{name}` needs at least one value"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            values,
        })
    }
}

/// Merge repeated filter names into one SDK filter each, first-seen order kept.
pub(crate) fn into_sdk_filters(filters: Vec<Filter>) -> Option<Vec<types::Filter>> {
    if filters.is_empty() {
        return None;
    }
    let mut grouped: IndexMap<String, Vec<String>> = IndexMap::with_capacity(filters.len());
    for filter in filters {
        grouped.entry(filter.name).or_default().extend(filter.values);
    }
    let filters = grouped
        .into_iter()
        .map(|(name, values)| {
            types::Filter::builder()
                .name(name)
                .set_values(Some(values))
                .build()
        })
        .collect();
    Some(filters)
}
