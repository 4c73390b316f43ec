//! Server configuration.

use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::ServeError;

/// Origin the bundled static front-end is served from during development.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5500";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// The single origin allowed to call the API from a browser.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// CORS layer admitting `allowed_origin` only, for GET and POST.
    ///
    /// The grant is echoed only when the request's `Origin` matches.
    ///
    /// # Errors
    /// [`ServeError::InvalidOrigin`] if the origin is empty or not a valid
    /// header value.
    pub fn cors_layer(&self) -> Result<CorsLayer, ServeError> {
        let origin = self.allowed_origin.trim();
        if origin.is_empty() {
            return Err(ServeError::InvalidOrigin(self.allowed_origin.clone()));
        }
        let origin = HeaderValue::from_str(origin)
            .map_err(|_| ServeError::InvalidOrigin(self.allowed_origin.clone()))?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any))
    }
}
