//! Event directory routes.
//!
//! Events facet by city and category. `upcoming=true` drops past events
//! after the engine filter runs, preserving order; no map endpoint (the
//! frontend renders events as a list/calendar only).

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use super::{csv, windowed, ListResponse};
use crate::common::ApiError;
use crate::domains::events::Event;
use crate::kernel::{self, Criteria, FacetSet};
use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    city: Option<String>,
    category: Option<String>,
    tag: Option<String>,
    upcoming: Option<bool>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListParams {
    fn criteria(&self) -> Criteria {
        Criteria {
            search: self.search.clone().unwrap_or_default(),
            localities: csv(self.city.as_deref()),
            categories: csv(self.category.as_deref()),
            tags: csv(self.tag.as_deref()),
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let events = state.events().await?;
    let mut matched = kernel::filter(&events, &params.criteria());
    if params.upcoming.unwrap_or(false) {
        let now = Utc::now();
        matched.retain(|event| event.is_upcoming(now));
    }
    Ok(Json(windowed(
        matched,
        events.len(),
        params.limit,
        params.offset,
    )))
}

#[derive(Debug, Deserialize)]
pub struct FacetParams {
    /// Search-within-facet term for the city list.
    q: Option<String>,
}

pub async fn facet_lists(
    State(state): State<AppState>,
    Query(params): Query<FacetParams>,
) -> Result<Json<FacetSet>, ApiError> {
    let events = state.events().await?;
    let mut facets = kernel::facets(&events);
    if let Some(q) = params.q.as_deref() {
        facets.localities = kernel::search_values(&facets.localities, q);
    }
    Ok(Json(facets))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Event::find_by_key(&key, &state.db_pool)
        .await
        .map_err(ApiError::Fetch)?
        .map(Json)
        .ok_or(ApiError::NotFound("event"))
}
