//! HTTP route handlers.
//!
//! Three static routes matched by exact path, GET only. Anything else falls
//! through to axum's defaults: 404 for unknown paths and 405 for a known path
//! requested with another method.
//!
//! The health routes carry `Cache-Control: no-store` so that a probe is always
//! answered by the process itself. Request tracing is opt-in via
//! `logging.access_log`.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{AppConfig, CACHE_CONTROL_NO_STORE, HEALTH_PATH, LIVENESS_PATH, ROOT_PATH};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes.
pub fn create_router(config: &AppConfig) -> Router {
    let home_routes = Router::new().route(ROOT_PATH, get(home::index));

    // Health checks - no caching, always fresh for probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .route(LIVENESS_PATH, get(health::liveness))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    let router = Router::new().merge(home_routes).merge(health_routes);

    if config.logging.access_log {
        // Request ID middleware - creates root span with request_id for correlation
        router.layer(middleware::from_fn(request_id_layer))
    } else {
        router
    }
}
