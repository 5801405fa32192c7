//! Provider directory routes.
//!
//! Multi-select parameters are comma-separated (`?county=a,b&service=x,y`),
//! matching the frontend's URL scheme. The three tag dimensions (services,
//! insurances, scholarships) merge into one tag selection; AND semantics
//! apply across the merged set.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::{csv, windowed, ListResponse, DEFAULT_SEARCH_RADIUS_MILES};
use crate::common::ApiError;
use crate::domains::providers::Provider;
use crate::kernel::{self, Coordinates, Criteria, FacetSet, MapPoint};
use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    county: Option<String>,
    service: Option<String>,
    insurance: Option<String>,
    scholarship: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListParams {
    fn criteria(&self) -> Criteria {
        let mut tags = csv(self.service.as_deref());
        tags.extend(csv(self.insurance.as_deref()));
        tags.extend(csv(self.scholarship.as_deref()));
        Criteria {
            search: self.search.clone().unwrap_or_default(),
            localities: csv(self.county.as_deref()),
            categories: Vec::new(),
            tags,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Provider>>, ApiError> {
    let providers = state.providers().await?;
    let matched = kernel::filter(&providers, &params.criteria());
    Ok(Json(windowed(
        matched,
        providers.len(),
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
    let providers = state.providers().await?;
    let mut facets = kernel::facets(&providers);
    if let Some(q) = params.q.as_deref() {
        facets.localities = kernel::search_values(&facets.localities, q);
    }
    Ok(Json(facets))
}

#[derive(Debug, Deserialize)]
pub struct MapParams {
    search: Option<String>,
    county: Option<String>,
    service: Option<String>,
    insurance: Option<String>,
    scholarship: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius_miles: Option<f64>,
}

pub async fn map(
    State(state): State<AppState>,
    Query(params): Query<MapParams>,
) -> Result<Json<Vec<MapPoint>>, ApiError> {
    let providers = state.providers().await?;
    let list_params = ListParams {
        search: params.search,
        county: params.county,
        service: params.service,
        insurance: params.insurance,
        scholarship: params.scholarship,
        ..Default::default()
    };
    let matched = kernel::filter(&providers, &list_params.criteria());
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
) -> Result<Json<Provider>, ApiError> {
    Provider::find_by_key(&key, &state.db_pool)
        .await
        .map_err(ApiError::Fetch)?
        .map(Json)
        .ok_or(ApiError::NotFound("provider"))
}
