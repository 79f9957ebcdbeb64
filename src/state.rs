//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries immutable service metadata, so cloning it per request
//! is a pointer copy and handlers share no writable state.

use std::sync::Arc;

use serde::Serialize;

pub const SERVICE_TITLE: &str = "Dijitle API";
pub const SERVICE_NAME: &str = "dijitle-api";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Identity reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub title: String,
    pub name: String,
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: SERVICE_TITLE.to_owned(),
            name: SERVICE_NAME.to_owned(),
            version: SERVICE_VERSION.to_owned(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ServiceInfo>,
}

impl AppState {
    #[must_use]
    pub fn new(service: ServiceInfo) -> Self {
        Self { service: Arc::new(service) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceInfo::default())
    }
}
