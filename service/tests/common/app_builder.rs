//! Test app builder that mirrors main.rs wiring with injectable backends.
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_full_app() {
//!     let app = TestAppBuilder::new()
//!         .with_mock_client(mock)
//!         .with_cors(&["http://localhost:5173"])
//!         .build();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use pokeatlas_web::{
    address::{AddressSource, ApiAddress},
    app,
    backend::{mock::MockPokemonClient, HttpPokemonClient, PokemonApiClient},
    http::cors_layer,
    pokedex::PokedexLoader,
    service_info::{BuildStamp, ServiceInfo},
};

use super::http_mock::MockHttpServer;

/// Builder for test applications that mirrors main.rs wiring.
pub struct TestAppBuilder {
    /// Backend client (None uses an empty `MockPokemonClient`)
    client: Option<Arc<dyn PokemonApiClient>>,
    /// Address and deadline the HTTP client was built with (default address when mocked)
    backend: (ApiAddress, Duration),
    /// Build stamp reported on `/api/v1/info` (none by default)
    stamp: BuildStamp<'static>,
    /// Whether to include Swagger UI
    include_swagger: bool,
    /// CORS allowed origins (None means no CORS layer)
    cors_origins: Option<Vec<String>>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: None,
            backend: (ApiAddress::default(), Duration::from_secs(10)),
            stamp: BuildStamp::default(),
            include_swagger: false,
            cors_origins: None,
        }
    }

    /// Route loaders to an in-process mock client.
    #[must_use]
    pub fn with_mock_client(mut self, client: Arc<MockPokemonClient>) -> Self {
        let client: Arc<dyn PokemonApiClient> = client;
        self.client = Some(client);
        self
    }

    /// Route loaders over HTTP to a stub backend, with the production timeout.
    #[must_use]
    pub fn with_backend(self, backend: &MockHttpServer) -> Self {
        self.with_backend_timeout(backend, Duration::from_secs(10))
    }

    /// Route loaders over HTTP to a stub backend with a custom deadline.
    #[must_use]
    pub fn with_backend_timeout(self, backend: &MockHttpServer, timeout: Duration) -> Self {
        self.with_backend_address(&backend.address(), timeout)
    }

    /// Route loaders over HTTP to an arbitrary `host:port`.
    #[must_use]
    pub fn with_backend_address(mut self, address: &str, timeout: Duration) -> Self {
        let address = ApiAddress::parse(address).expect("backend address");
        let client: Arc<dyn PokemonApiClient> =
            Arc::new(HttpPokemonClient::new(&address, timeout).expect("http client"));
        self.client = Some(client);
        self.backend = (address, timeout);
        self
    }

    /// Include Swagger UI (/swagger-ui) and the OpenAPI document.
    #[must_use]
    pub fn with_swagger(mut self) -> Self {
        self.include_swagger = true;
        self
    }

    /// Configure CORS with specific allowed origins.
    #[must_use]
    pub fn with_cors(mut self, origins: &[&str]) -> Self {
        self.cors_origins = Some(origins.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Report a commit and build time on `/api/v1/info`.
    #[must_use]
    pub fn with_stamp(mut self, stamp: BuildStamp<'static>) -> Self {
        self.stamp = stamp;
        self
    }

    /// Build the Axum router with the same layer ordering as main.rs.
    #[must_use]
    pub fn build(self) -> Router {
        let client = self.client.unwrap_or_else(|| {
            let mock: Arc<dyn PokemonApiClient> = Arc::new(MockPokemonClient::new());
            mock
        });
        let loader = Arc::new(PokedexLoader::new(client));
        let (address, timeout) = &self.backend;
        let info = ServiceInfo::with_stamp(address, AddressSource::Configured, *timeout, self.stamp);

        let mut app = app::router(loader, info, self.include_swagger);

        if let Some(origins) = self.cors_origins {
            app = app.layer(cors_layer(&origins));
        }

        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_default_builder_serves_health() {
        let app = TestAppBuilder::new().build();

        let (status, _, _) = crate::common::get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
    }
}
