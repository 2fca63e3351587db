//! Health check endpoints for load balancers and container orchestration.
//!
//! Both endpoints only check that the process can respond to HTTP. `/health`
//! is polled by the load balancer to decide whether to route traffic here;
//! the liveness probe is polled by Kubernetes to decide whether to restart
//! the container.

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::config::{HEALTH_MESSAGE, HEALTH_STATUS, LIVENESS_MESSAGE, LIVENESS_STATUS};

/// Fixed JSON body returned by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    pub const HEALTHY: Self = Self {
        status: HEALTH_STATUS,
        message: HEALTH_MESSAGE,
    };

    pub const ALIVE: Self = Self {
        status: LIVENESS_STATUS,
        message: LIVENESS_MESSAGE,
    };
}

/// `GET /health`
pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(HealthStatus::HEALTHY))
}

/// `GET /oms/marketplace/mgmt/health/liveness`
pub async fn liveness() -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(HealthStatus::ALIVE))
}
