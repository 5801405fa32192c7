// HTTP routes

pub mod articles;
pub mod daycares;
pub mod events;
pub mod faith_communities;
pub mod health;
pub mod providers;
pub mod schools;
pub mod submissions;

use serde::Serialize;

/// Default page window, matching the frontend's "show more" step.
pub(crate) const DEFAULT_PAGE_SIZE: usize = 50;
/// Hard cap on a single response window.
pub(crate) const MAX_PAGE_SIZE: usize = 500;
/// Default "near me" radius in miles.
pub(crate) const DEFAULT_SEARCH_RADIUS_MILES: f64 = 25.0;

/// Split a comma-separated multi-select query parameter
/// (`?county=Hillsborough,Pinellas`) into its selected values.
pub(crate) fn csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A filtered directory listing.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    /// Collection size before filtering.
    pub total: usize,
    /// Records passing the active criteria.
    pub matched: usize,
    /// The requested window of matching records, in source order.
    pub items: Vec<T>,
}

/// Window the filtered records. Filtering already preserved source order;
/// this only slices.
pub(crate) fn windowed<T: Clone>(
    matched: Vec<&T>,
    total: usize,
    limit: Option<usize>,
    offset: Option<usize>,
) -> ListResponse<T> {
    let matched_count = matched.len();
    let offset = offset.unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let items = matched.into_iter().skip(offset).take(limit).cloned().collect();
    ListResponse {
        total,
        matched: matched_count,
        items,
    }
}
