//! Router-level tests for the embedded-content directories and the error
//! surfaces that don't need a live database.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, post_json, test_app, test_config};

#[tokio::test]
async fn article_list_and_detail_round_trip() {
    let app = test_app(test_config());
    let (status, body) = get(app.clone(), "/api/articles").await;
    assert_eq!(status, StatusCode::OK);
    let summaries = body.as_array().expect("array of summaries");
    assert!(!summaries.is_empty());

    let slug = summaries[0]["slug"].as_str().expect("slug");
    let (status, body) = get(app, &format!("/api/articles/{slug}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], slug);
    assert!(body["body"].as_str().map(|b| !b.is_empty()).unwrap_or(false));
}

#[tokio::test]
async fn unknown_article_slug_is_an_explicit_404() {
    let app = test_app(test_config());
    let (status, body) = get(app, "/api/articles/not-a-real-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["retryable"], false);
}

#[tokio::test]
async fn faith_directory_filters_by_city_and_accommodation() {
    let app = test_app(test_config());

    let (status, all) = get(app.clone(), "/api/faith-communities").await;
    assert_eq!(status, StatusCode::OK);
    let total = all["total"].as_u64().unwrap();
    assert_eq!(all["matched"].as_u64().unwrap(), total);

    let (status, filtered) = get(
        app,
        "/api/faith-communities?city=Tampa&accommodation=sensory-room",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(filtered["matched"].as_u64().unwrap() < total);
    for item in filtered["items"].as_array().unwrap() {
        assert_eq!(item["city"], "Tampa");
    }
}

#[tokio::test]
async fn faith_facets_narrow_with_search_within_facet() {
    let app = test_app(test_config());

    let (status, facets) = get(app.clone(), "/api/faith-communities/facets").await;
    assert_eq!(status, StatusCode::OK);
    let cities = facets["localities"].as_array().unwrap();
    assert!(cities.len() > 1);
    // Sorted ascending, deduplicated.
    let names: Vec<&str> = cities.iter().map(|c| c.as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);

    let (status, narrowed) = get(app, "/api/faith-communities/facets?q=tamp").await;
    assert_eq!(status, StatusCode::OK);
    let narrowed_cities = narrowed["localities"].as_array().unwrap();
    assert!(narrowed_cities.iter().all(|c| c
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("tamp")));
    // Narrowing the displayed options must not touch the other facets.
    assert_eq!(narrowed["categories"], facets["categories"]);
}

#[tokio::test]
async fn faith_map_drops_records_without_coordinates() {
    let app = test_app(test_config());

    let (status, list) = get(app.clone(), "/api/faith-communities?limit=500").await;
    assert_eq!(status, StatusCode::OK);
    let without_coords = list["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["latitude"].is_null())
        .count();
    assert!(without_coords > 0, "dataset should have an unmappable row");

    let (status, points) = get(app, "/api/faith-communities/map").await;
    assert_eq!(status, StatusCode::OK);
    let points = points.as_array().unwrap();
    assert_eq!(
        points.len(),
        list["items"].as_array().unwrap().len() - without_coords
    );
    for point in points {
        assert!(point["latitude"].is_f64() || point["latitude"].is_i64());
        assert!(point["label"].as_str().map(|l| !l.is_empty()).unwrap_or(false));
    }
}

#[tokio::test]
async fn faith_map_radius_narrows_to_nearby_markers() {
    let app = test_app(test_config());
    // Centered on Tampa with a tight radius; Jacksonville and Miami rows
    // must drop out.
    let (status, points) = get(
        app,
        "/api/faith-communities/map?lat=27.95&lng=-82.46&radius_miles=30",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = points
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["label"].as_str().unwrap())
        .collect();
    assert!(!labels.is_empty());
    // Lakewood is in Jacksonville, New Life in Miami; both are far outside
    // the radius.
    assert!(!labels.iter().any(|l| l.contains("Lakewood") || l.contains("New Life")));
}

#[tokio::test]
async fn faith_detail_resolves_slug_and_falls_back_to_id() {
    let app = test_app(test_config());

    let (status, by_slug) = get(app.clone(), "/api/faith-communities/grace-fellowship-tampa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["name"], "Grace Fellowship Church");

    // Row 4 ships without a slug; its numeric id is the fallback key.
    let (status, by_id) = get(app.clone(), "/api/faith-communities/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["name"], "First Baptist Church of Brandon");

    let (status, _) = get(app, "/api/faith-communities/no-such-key").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn db_backed_directory_surfaces_retryable_fetch_error() {
    let app = test_app(test_config());
    let (status, body) = get(app, "/api/providers").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn invalid_contact_message_reports_every_problem() {
    let app = test_app(test_config());
    let (status, body) = post_json(
        app,
        "/api/contact",
        json!({ "name": "", "email": "nope", "message": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 3);
}

#[tokio::test]
async fn valid_submission_without_relay_is_a_503() {
    // Validation passes, but no webhook is configured in the test harness.
    let app = test_app(test_config());
    let (status, body) = post_json(
        app,
        "/api/contact",
        json!({
            "name": "Jordan Alvarez",
            "email": "jordan@example.com",
            "message": "Do you list providers in Polk County?"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["retryable"], false);
}

#[tokio::test]
async fn donate_returns_configured_checkout_url() {
    let mut config = test_config();
    config.donate_url = Some("https://donate.example.org/checkout".to_string());
    let app = test_app(config);
    let (status, body) = get(app, "/api/donate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checkout_url"], "https://donate.example.org/checkout");

    let unconfigured = test_app(test_config());
    let (status, _) = get(unconfigured, "/api/donate").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn list_windowing_honors_limit_and_offset() {
    let app = test_app(test_config());
    let (_, all) = get(app.clone(), "/api/faith-communities").await;
    let names: Vec<String> = all["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();

    let (status, page) = get(app, "/api/faith-communities?limit=2&offset=1").await;
    assert_eq!(status, StatusCode::OK);
    let paged: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(paged, &names[1..3]);
    assert_eq!(page["matched"].as_u64().unwrap() as usize, names.len());
}
