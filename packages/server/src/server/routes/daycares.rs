//! Daycare directory routes.
//!
//! Daycares facet by county and profit status; the capability flags
//! (autism-specific, accepts-medicaid, sensory-room) are selected through
//! the `feature` parameter and matched as tags.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::{csv, windowed, ListResponse, DEFAULT_SEARCH_RADIUS_MILES};
use crate::common::ApiError;
use crate::domains::daycares::Daycare;
use crate::kernel::{self, Coordinates, Criteria, FacetSet, MapPoint};
use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    county: Option<String>,
    profit_status: Option<String>,
    feature: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListParams {
    fn criteria(&self) -> Criteria {
        Criteria {
            search: self.search.clone().unwrap_or_default(),
            localities: csv(self.county.as_deref()),
            categories: csv(self.profit_status.as_deref()),
            tags: csv(self.feature.as_deref()),
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Daycare>>, ApiError> {
    let daycares = state.daycares().await?;
    let matched = kernel::filter(&daycares, &params.criteria());
    Ok(Json(windowed(
        matched,
        daycares.len(),
        params.limit,
        params.offset,
    )))
}

#[derive(Debug, Deserialize)]
pub struct FacetParams {
    /// Search-within-facet term for the county list.
    q: Option<String>,
}

pub async fn facet_lists(
    State(state): State<AppState>,
    Query(params): Query<FacetParams>,
) -> Result<Json<FacetSet>, ApiError> {
    let daycares = state.daycares().await?;
    let mut facets = kernel::facets(&daycares);
    if let Some(q) = params.q.as_deref() {
        facets.localities = kernel::search_values(&facets.localities, q);
    }
    Ok(Json(facets))
}

#[derive(Debug, Deserialize)]
pub struct MapParams {
    search: Option<String>,
    county: Option<String>,
    profit_status: Option<String>,
    feature: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius_miles: Option<f64>,
}

pub async fn map(
    State(state): State<AppState>,
    Query(params): Query<MapParams>,
) -> Result<Json<Vec<MapPoint>>, ApiError> {
    let daycares = state.daycares().await?;
    let list_params = ListParams {
        search: params.search,
        county: params.county,
        profit_status: params.profit_status,
        feature: params.feature,
        ..Default::default()
    };
    let matched = kernel::filter(&daycares, &list_params.criteria());
    let mut on_map = kernel::mappable(&matched);
    if let Some(center) = Coordinates::from_parts(params.lat, params.lng) {
        let radius = params.radius_miles.unwrap_or(DEFAULT_SEARCH_RADIUS_MILES);
        on_map = kernel::within_radius(&on_map, center, radius);
    }
    Ok(Json(kernel::map_points(&on_map)))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Daycare>, ApiError> {
    Daycare::find_by_key(&key, &state.db_pool)
        .await
        .map_err(ApiError::Fetch)?
        .map(Json)
        .ok_or(ApiError::NotFound("daycare"))
}
