//! Daycare queries against the hosted database.

use anyhow::Result;
use sqlx::PgPool;

use super::models::Daycare;
use crate::common::DaycareId;

impl Daycare {
    /// Fetch the full daycare collection, name-ordered.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM daycares ORDER BY name ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(id: DaycareId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM daycares WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM daycares WHERE slug = $1")
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
        match DaycareId::parse(key) {
            Ok(id) => Self::find_by_id(id, pool).await,
            Err(_) => Ok(None),
        }
    }
}
