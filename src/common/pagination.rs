use serde::Serialize;
use std::future::Future;

/// Pagination controls shared by every describe command.
///
/// By default every page is fetched and the items are returned together. With
/// `no_auto_iteration` a single call is made and the response keeps its
/// `Marker`, so the caller can continue from there.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct Pagination {
    /// Continuation marker returned by a previous call.
    #[arg(long)]
    pub marker: Option<String>,
    /// Maximum number of records per page (20 to 100).
    #[arg(long)]
    pub max_records: Option<i32>,
    /// Make one call and return its marker instead of fetching every page.
    #[arg(long)]
    #[serde(skip)]
    pub no_auto_iteration: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PaginationInput {
    pub(crate) auto_iterate: bool,
    pub(crate) marker: Option<String>,
    pub(crate) max_records: Option<i32>,
}

impl From<Pagination> for PaginationInput {
    fn from(pagination: Pagination) -> Self {
        Self {
            auto_iterate: !pagination.no_auto_iteration,
            marker: pagination.marker.filter(|marker| !marker.is_empty()),
            max_records: pagination.max_records,
        }
    }
}

/// One page of a marker-paginated response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Marker for the next page, if any.
    pub marker: Option<String>,
}

/// Fetch pages starting at `marker` until the service stops returning one.
///
/// Iteration also stops if the service hands back the marker it was just given.
pub async fn paginate<T, E, F, Fut>(marker: Option<String>, mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut items = Vec::new();
    let mut marker = marker;
    let mut pages = 0_usize;
    loop {
        let page = fetch(marker.clone()).await?;
        pages += 1;
        items.extend(page.items);
        let next = page.marker.filter(|next| !next.is_empty());
        tracing::debug!(pages, items = items.len(), more = next.is_some(), "fetched page");
        match next {
            Some(next) if marker.as_deref() == Some(next.as_str()) => {
                tracing::warn!(marker = %next, "service repeated the pagination marker, stopping");
                break;
            }
            Some(next) => marker = Some(next),
            None => break,
        }
    }
    Ok(items)
}

/// fetch one or every page of a describe call and rebuild the output
#[macro_export]
macro_rules! get_paginated_output {
    ($builder:expr, $pagination:expr, $output_type:ty, $items:ident, $set_items:ident) => {{
        let pagination: $crate::common::pagination::PaginationInput = $pagination;
        let builder = $builder.set_max_records(pagination.max_records);
        if pagination.auto_iterate {
            let items = $crate::common::pagination::paginate(pagination.marker, |marker| {
                let request = builder.clone().set_marker(marker);
                async move {
                    request
                        .send()
                        .await
                        .map(|output| $crate::common::pagination::Page {
                            items: output.$items.unwrap_or_default(),
                            marker: output.marker,
                        })
                }
            })
            .await?;
            Ok(<$output_type>::builder().$set_items(Some(items)).build())
        } else {
            builder.set_marker(pagination.marker).send().await
        }
    }};
}
