//! Client for the Pokémon backend API.
//!
//! - [`PokemonApiClient`] - Trait defining the backend operations
//! - [`HttpPokemonClient`] - reqwest implementation with a per-request deadline
//! - [`mock::MockPokemonClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! Integration tests exercise `HttpPokemonClient` against a wiremock server:
//!
//! ```ignore
//! let server = MockHttpServer::start().await;
//! server
//!     .expect_get("/pokemons/0")
//!     .respond_with_json(json!([]))
//!     .mount()
//!     .await;
//!
//! let client = HttpPokemonClient::with_client(reqwest::Client::new(), server.url());
//! assert!(client.list_pokemons(0).await?.is_empty());
//! ```

mod client;

pub use client::{HttpPokemonClient, PokemonApiClient, PokemonApiError};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
