//! # General Route Handlers

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "bannergen server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
