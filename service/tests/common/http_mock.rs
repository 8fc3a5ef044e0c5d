//! HTTP mock server helpers for testing outbound backend calls.
//!
//! A thin wrapper around `wiremock` for declarative stubbing of the
//! Pokémon backend.
//!
//! ```ignore
//! let server = MockHttpServer::start().await;
//!
//! server
//!     .expect_get("/pokemons/0")
//!     .respond_with_json(json!([]))
//!     .expect_times(1)
//!     .mount()
//!     .await;
//! ```
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(5))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A stub backend listening on a random local port.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// `host:port` of the server, as an address would be configured.
    pub fn address(&self) -> String {
        self.server.address().to_string()
    }

    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Begin stubbing a GET on `route`.
    pub fn expect_get(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            route: route.to_string(),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }

    /// Number of requests the server has received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Panic if any `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }
}

enum StubBody {
    Json(Value),
    Raw(String),
}

pub struct StubBuilder<'a> {
    server: &'a MockServer,
    route: String,
    status: u16,
    body: Option<StubBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(StubBody::Json(body));
        self
    }

    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(StubBody::Raw(body.into()));
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut template = ResponseTemplate::new(self.status);
        template = match self.body {
            Some(StubBody::Json(value)) => template.set_body_json(value),
            Some(StubBody::Raw(raw)) => template.set_body_string(raw),
            None => template,
        };
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = Mock::given(method("GET"))
            .and(path(self.route.as_str()))
            .respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }

        mock.mount(self.server).await;
    }
}
