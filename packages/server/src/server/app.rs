//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::common::ApiError;
use crate::config::Config;
use crate::domains::daycares::Daycare;
use crate::domains::events::Event;
use crate::domains::providers::Provider;
use crate::domains::schools::School;
use crate::domains::submissions::SubmissionForwarder;
use crate::kernel::CollectionCache;
use crate::server::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<Config>,
    pub caches: Arc<DirectoryCaches>,
    pub forwarder: Arc<SubmissionForwarder>,
}

/// One TTL cache per database-backed directory collection. The embedded
/// collections (faith communities, articles) are compiled in and need no
/// cache.
pub struct DirectoryCaches {
    pub providers: CollectionCache<Provider>,
    pub schools: CollectionCache<School>,
    pub daycares: CollectionCache<Daycare>,
    pub events: CollectionCache<Event>,
}

impl DirectoryCaches {
    fn new(ttl: Duration) -> Self {
        Self {
            providers: CollectionCache::new(ttl),
            schools: CollectionCache::new(ttl),
            daycares: CollectionCache::new(ttl),
            events: CollectionCache::new(ttl),
        }
    }
}

impl AppState {
    pub async fn providers(&self) -> Result<Arc<Vec<Provider>>, ApiError> {
        self.caches
            .providers
            .get_or_fetch(|| Provider::find_all(&self.db_pool))
            .await
            .map_err(ApiError::Fetch)
    }

    pub async fn schools(&self) -> Result<Arc<Vec<School>>, ApiError> {
        self.caches
            .schools
            .get_or_fetch(|| School::find_all(&self.db_pool))
            .await
            .map_err(ApiError::Fetch)
    }

    pub async fn daycares(&self) -> Result<Arc<Vec<Daycare>>, ApiError> {
        self.caches
            .daycares
            .get_or_fetch(|| Daycare::find_all(&self.db_pool))
            .await
            .map_err(ApiError::Fetch)
    }

    pub async fn events(&self) -> Result<Arc<Vec<Event>>, ApiError> {
        self.caches
            .events
            .get_or_fetch(|| Event::find_all(&self.db_pool))
            .await
            .map_err(ApiError::Fetch)
    }
}

/// Build the Axum application router.
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let cache_ttl = Duration::from_secs(config.cache_ttl_secs);
    let forwarder = SubmissionForwarder::new(config.submission_webhook_url.clone());

    let state = AppState {
        db_pool: pool,
        config: Arc::new(config),
        caches: Arc::new(DirectoryCaches::new(cache_ttl)),
        forwarder: Arc::new(forwarder),
    };

    // Public read API for a static frontend on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::health::health_handler))
        // Providers
        .route("/api/providers", get(routes::providers::list))
        .route("/api/providers/facets", get(routes::providers::facet_lists))
        .route("/api/providers/map", get(routes::providers::map))
        .route("/api/providers/:key", get(routes::providers::detail))
        // Schools
        .route("/api/schools", get(routes::schools::list))
        .route("/api/schools/facets", get(routes::schools::facet_lists))
        .route("/api/schools/map", get(routes::schools::map))
        .route("/api/schools/:key", get(routes::schools::detail))
        // Daycares
        .route("/api/daycares", get(routes::daycares::list))
        .route("/api/daycares/facets", get(routes::daycares::facet_lists))
        .route("/api/daycares/map", get(routes::daycares::map))
        .route("/api/daycares/:key", get(routes::daycares::detail))
        // Faith communities (embedded dataset)
        .route("/api/faith-communities", get(routes::faith_communities::list))
        .route(
            "/api/faith-communities/facets",
            get(routes::faith_communities::facet_lists),
        )
        .route("/api/faith-communities/map", get(routes::faith_communities::map))
        .route(
            "/api/faith-communities/:key",
            get(routes::faith_communities::detail),
        )
        // Events
        .route("/api/events", get(routes::events::list))
        .route("/api/events/facets", get(routes::events::facet_lists))
        .route("/api/events/:key", get(routes::events::detail))
        // Articles (embedded content)
        .route("/api/articles", get(routes::articles::list))
        .route("/api/articles/:slug", get(routes::articles::detail))
        // Lead generation
        .route(
            "/api/submissions/provider",
            post(routes::submissions::submit_provider),
        )
        .route(
            "/api/submissions/daycare",
            post(routes::submissions::submit_daycare),
        )
        .route(
            "/api/submissions/event",
            post(routes::submissions::submit_event),
        )
        .route("/api/contact", post(routes::submissions::submit_contact))
        .route("/api/donate", get(routes::submissions::donate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
