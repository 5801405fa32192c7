//! Faith community directory routes.
//!
//! Served from the embedded dataset; no database involved, so these
//! endpoints work even when the backend is unreachable.

use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;

use super::{csv, windowed, ListResponse, DEFAULT_SEARCH_RADIUS_MILES};
use crate::common::ApiError;
use crate::domains::faith_communities::FaithCommunity;
use crate::kernel::{self, Coordinates, Criteria, FacetSet, MapPoint};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    city: Option<String>,
    denomination: Option<String>,
    accommodation: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListParams {
    fn criteria(&self) -> Criteria {
        Criteria {
            search: self.search.clone().unwrap_or_default(),
            localities: csv(self.city.as_deref()),
            categories: csv(self.denomination.as_deref()),
            tags: csv(self.accommodation.as_deref()),
        }
    }
}

pub async fn list(
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<FaithCommunity>>, ApiError> {
    let communities = FaithCommunity::all();
    let matched = kernel::filter(communities, &params.criteria());
    Ok(Json(windowed(
        matched,
        communities.len(),
        params.limit,
        params.offset,
    )))
}

#[derive(Debug, Deserialize)]
pub struct FacetParams {
    /// Search-within-facet term for the city list.
    q: Option<String>,
}

pub async fn facet_lists(Query(params): Query<FacetParams>) -> Result<Json<FacetSet>, ApiError> {
    let mut facets = kernel::facets(FaithCommunity::all());
    if let Some(q) = params.q.as_deref() {
        facets.localities = kernel::search_values(&facets.localities, q);
    }
    Ok(Json(facets))
}

#[derive(Debug, Deserialize)]
pub struct MapParams {
    search: Option<String>,
    city: Option<String>,
    denomination: Option<String>,
    accommodation: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius_miles: Option<f64>,
}

pub async fn map(Query(params): Query<MapParams>) -> Result<Json<Vec<MapPoint>>, ApiError> {
    let list_params = ListParams {
        search: params.search,
        city: params.city,
        denomination: params.denomination,
        accommodation: params.accommodation,
        ..Default::default()
    };
    let matched = kernel::filter(FaithCommunity::all(), &list_params.criteria());
    let mut on_map = kernel::mappable(&matched);
    if let Some(center) = Coordinates::from_parts(params.lat, params.lng) {
        let radius = params.radius_miles.unwrap_or(DEFAULT_SEARCH_RADIUS_MILES);
        on_map = kernel::within_radius(&on_map, center, radius);
    }
    Ok(Json(kernel::map_points(&on_map)))
}

pub async fn detail(Path(key): Path<String>) -> Result<Json<&'static FaithCommunity>, ApiError> {
    FaithCommunity::find_by_key(&key)
        .map(Json)
        .ok_or(ApiError::NotFound("faith community"))
}
