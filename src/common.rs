//! Shared parameter types for RDS commands.
//!
//! This module holds the pieces every command binds the same way: filters, tags,
//! parameter changes, pagination controls, and output selection.

/// Describe filters (`name=value1,value2`).
pub mod filter;

/// Automatic marker-based pagination.
pub mod pagination;

/// Parameter group changes (`name=value@apply-method`).
pub mod parameter;

/// Projection of a response to the value a caller asked for.
pub mod select;

/// Resource tags (`Key=Value`).
pub mod tag;

/// Omit lists the caller left empty.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
