//! Welcome, health and status endpoints.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Welcome {
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub service: String,
    pub status: &'static str,
    pub version: String,
}

/// `GET /` — greet API clients.
pub async fn root(State(state): State<AppState>) -> Json<Welcome> {
    Json(Welcome { message: format!("Welcome to {}", state.service.title) })
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}

/// `GET /api/v1/status` — service identity and run state.
pub async fn status(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        service: state.service.name.clone(),
        status: "running",
        version: state.service.version.clone(),
    })
}
