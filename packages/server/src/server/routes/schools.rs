//! School directory routes.
//!
//! Schools facet by district and denomination; grade levels, scholarship
//! programs, and accreditations merge into the tag selection.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::{csv, windowed, ListResponse, DEFAULT_SEARCH_RADIUS_MILES};
use crate::common::ApiError;
use crate::domains::schools::School;
use crate::kernel::{self, Coordinates, Criteria, FacetSet, MapPoint};
use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    district: Option<String>,
    denomination: Option<String>,
    grade: Option<String>,
    scholarship: Option<String>,
    accreditation: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListParams {
    fn criteria(&self) -> Criteria {
        let mut tags = csv(self.grade.as_deref());
        tags.extend(csv(self.scholarship.as_deref()));
        tags.extend(csv(self.accreditation.as_deref()));
        Criteria {
            search: self.search.clone().unwrap_or_default(),
            localities: csv(self.district.as_deref()),
            categories: csv(self.denomination.as_deref()),
            tags,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<School>>, ApiError> {
    let schools = state.schools().await?;
    let matched = kernel::filter(&schools, &params.criteria());
    Ok(Json(windowed(
        matched,
        schools.len(),
        params.limit,
        params.offset,
    )))
}

#[derive(Debug, Deserialize)]
pub struct FacetParams {
    /// Search-within-facet term for the district list.
    q: Option<String>,
}

pub async fn facet_lists(
    State(state): State<AppState>,
    Query(params): Query<FacetParams>,
) -> Result<Json<FacetSet>, ApiError> {
    let schools = state.schools().await?;
    let mut facets = kernel::facets(&schools);
    if let Some(q) = params.q.as_deref() {
        facets.localities = kernel::search_values(&facets.localities, q);
    }
    Ok(Json(facets))
}

#[derive(Debug, Deserialize)]
pub struct MapParams {
    search: Option<String>,
    district: Option<String>,
    denomination: Option<String>,
    grade: Option<String>,
    scholarship: Option<String>,
    accreditation: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius_miles: Option<f64>,
}

pub async fn map(
    State(state): State<AppState>,
    Query(params): Query<MapParams>,
) -> Result<Json<Vec<MapPoint>>, ApiError> {
    let schools = state.schools().await?;
    let list_params = ListParams {
        search: params.search,
        district: params.district,
        denomination: params.denomination,
        grade: params.grade,
        scholarship: params.scholarship,
        accreditation: params.accreditation,
        ..Default::default()
    };
    let matched = kernel::filter(&schools, &list_params.criteria());
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
) -> Result<Json<School>, ApiError> {
    School::find_by_key(&key, &state.db_pool)
        .await
        .map_err(ApiError::Fetch)?
        .map(Json)
        .ok_or(ApiError::NotFound("school"))
}
