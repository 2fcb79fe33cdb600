#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use starchart_core::fixtures::{self, FakeCatalog};
use starchart_core::store::MemoryOverrideStore;
use starchart_enrichment::{PlanetService, SpeciesService};
use tower::ServiceExt;

use starchart_api::config::ServerConfig;
use starchart_api::router::build_app_router;
use starchart_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_base_url: fixtures::CATALOG_BASE.to_string(),
        catalog_timeout_secs: 5,
        database_url: None,
    }
}

/// The full router plus handles on its collaborators.
pub struct TestApp {
    pub router: Router,
    pub catalog: Arc<FakeCatalog>,
    pub store: Arc<MemoryOverrideStore>,
}

/// Build the application router over an in-memory catalog and store, with
/// the same middleware stack production uses.
pub fn build_test_app(catalog: FakeCatalog) -> TestApp {
    let config = test_config();
    let catalog = Arc::new(catalog);
    let store = Arc::new(MemoryOverrideStore::new());

    let planets = PlanetService::new(catalog.clone(), store.clone());
    let species = SpeciesService::new(catalog.clone(), planets.clone());

    let state = AppState {
        config: Arc::new(config.clone()),
        species,
        planets,
        store: store.clone(),
    };

    TestApp {
        router: build_app_router(state, &config),
        catalog,
        store,
    }
}

/// Human (homeworld Tatooine), Droid (no homeworld), Wookie (Kashyyyk).
pub fn sample_catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_species("1", fixtures::remote_species("1", "Human", "180", Some("1")))
        .with_species("2", fixtures::remote_species("2", "Droid", "n/a", None))
        .with_species("3", fixtures::remote_species("3", "Wookie", "210", Some("14")))
        .with_planet("1", fixtures::remote_planet("1", "Tatooine"))
        .with_planet("14", fixtures::remote_planet("14", "Kashyyyk"))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// PUT an arbitrary body, optionally without a content type.
pub async fn put_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response {
    let mut builder = Request::builder().method(Method::PUT).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
