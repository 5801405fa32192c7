//! Provider queries against the hosted database.
//!
//! Reads only; the directory never writes provider rows. Collections come
//! back ordered by name, which is the source order the filter engine
//! preserves.

use anyhow::Result;
use sqlx::PgPool;

use super::models::Provider;
use crate::common::ProviderId;

impl Provider {
    /// Fetch the full provider collection, name-ordered.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM resources WHERE resource_type = 'provider' ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find one provider by id.
    pub async fn find_by_id(id: ProviderId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM resources WHERE resource_type = 'provider' AND id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Find one provider by slug.
    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM resources WHERE resource_type = 'provider' AND slug = $1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Detail-page lookup: slug first, then id for legacy rows without one.
    pub async fn find_by_key(key: &str, pool: &PgPool) -> Result<Option<Self>> {
        if let Some(found) = Self::find_by_slug(key, pool).await? {
            return Ok(Some(found));
        }
        match ProviderId::parse(key) {
            Ok(id) => Self::find_by_id(id, pool).await,
            Err(_) => Ok(None),
        }
    }
}
