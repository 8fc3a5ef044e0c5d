use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::address::ApiAddress;
use crate::pokemon::{PokemonDetailed, PokemonSummary};

/// Errors that can occur when calling the Pokémon backend.
#[derive(Debug, Error)]
pub enum PokemonApiError {
    /// Connection failure, or a body that is not the expected JSON
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The backend did not answer within the configured deadline
    #[error("backend request timed out")]
    Timeout,

    /// Resource not found (legacy name lookup only)
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// Backend returned a non-success status
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}

impl From<reqwest::Error> for PokemonApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

/// Operations the backend exposes.
///
/// Use [`HttpPokemonClient`] for real calls, or `mock::MockPokemonClient`
/// (behind `test-utils`) in tests.
#[async_trait]
pub trait PokemonApiClient: Send + Sync {
    /// `GET /pokemons/{offset}`. An empty page is returned as an empty vector.
    async fn list_pokemons(&self, offset: u64) -> Result<Vec<PokemonSummary>, PokemonApiError>;

    /// `GET /pokemondetailed/{id}`. A JSON `null` body yields `None`.
    async fn get_pokemon_detailed(
        &self,
        id: u64,
    ) -> Result<Option<PokemonDetailed>, PokemonApiError>;

    /// `GET /pokemon/{name}`, the legacy single-item lookup.
    async fn get_pokemon(&self, name: &str) -> Result<PokemonSummary, PokemonApiError>;
}

/// reqwest-backed implementation of [`PokemonApiClient`].
pub struct HttpPokemonClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPokemonClient {
    /// Create a client for `address` whose requests fail after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the underlying TLS backend cannot be initialized.
    pub fn new(address: &ApiAddress, timeout: Duration) -> Result<Self, PokemonApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PokemonApiError::Request)?;
        Ok(Self::with_client(client, address.base_url()))
    }

    /// Create a client with a custom `reqwest::Client` and base URL.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, PokemonApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "backend request");

        let response = self.client.get(&url).send().await?;
        Ok(response)
    }
}

async fn error_for_status(response: reqwest::Response) -> PokemonApiError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    PokemonApiError::ApiError { status, message }
}

#[async_trait]
impl PokemonApiClient for HttpPokemonClient {
    async fn list_pokemons(&self, offset: u64) -> Result<Vec<PokemonSummary>, PokemonApiError> {
        let response = self.get(&format!("/pokemons/{offset}")).await?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_pokemon_detailed(
        &self,
        id: u64,
    ) -> Result<Option<PokemonDetailed>, PokemonApiError> {
        let response = self.get(&format!("/pokemondetailed/{id}")).await?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_pokemon(&self, name: &str) -> Result<PokemonSummary, PokemonApiError> {
        let response = self
            .get(&format!("/pokemon/{}", urlencoding::encode(name)))
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokemonApiError::NotFound(name.to_string()));
        }

        if !status.is_success() {
            return Err(error_for_status(response).await);
        }

        Ok(response.json().await?)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{PokemonApiClient, PokemonApiError, PokemonDetailed, PokemonSummary};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `PokemonApiClient`.
    ///
    /// Configure responses with `set_*_result` methods and inspect the
    /// arguments each operation was called with.
    pub struct MockPokemonClient {
        list_result: Mutex<Option<Result<Vec<PokemonSummary>, PokemonApiError>>>,
        detailed_result: Mutex<Option<Result<Option<PokemonDetailed>, PokemonApiError>>>,
        by_name_result: Mutex<Option<Result<PokemonSummary, PokemonApiError>>>,
        list_calls: Mutex<Vec<u64>>,
        detailed_calls: Mutex<Vec<u64>>,
        by_name_calls: Mutex<Vec<String>>,
    }

    impl MockPokemonClient {
        pub fn new() -> Self {
            Self {
                list_result: Mutex::new(None),
                detailed_result: Mutex::new(None),
                by_name_result: Mutex::new(None),
                list_calls: Mutex::new(Vec::new()),
                detailed_calls: Mutex::new(Vec::new()),
                by_name_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for `list_pokemons` calls.
        pub fn set_list_result(&self, result: Result<Vec<PokemonSummary>, PokemonApiError>) {
            *self.list_result.lock().unwrap() = Some(result);
        }

        /// Set the result for `get_pokemon_detailed` calls.
        pub fn set_detailed_result(
            &self,
            result: Result<Option<PokemonDetailed>, PokemonApiError>,
        ) {
            *self.detailed_result.lock().unwrap() = Some(result);
        }

        /// Set the result for `get_pokemon` calls.
        pub fn set_by_name_result(&self, result: Result<PokemonSummary, PokemonApiError>) {
            *self.by_name_result.lock().unwrap() = Some(result);
        }

        /// Offsets passed to `list_pokemons`.
        pub fn list_calls(&self) -> Vec<u64> {
            self.list_calls.lock().unwrap().clone()
        }

        /// Ids passed to `get_pokemon_detailed`.
        pub fn detailed_calls(&self) -> Vec<u64> {
            self.detailed_calls.lock().unwrap().clone()
        }

        /// Names passed to `get_pokemon`.
        pub fn by_name_calls(&self) -> Vec<String> {
            self.by_name_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPokemonClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PokemonApiClient for MockPokemonClient {
        async fn list_pokemons(
            &self,
            offset: u64,
        ) -> Result<Vec<PokemonSummary>, PokemonApiError> {
            self.list_calls.lock().unwrap().push(offset);

            self.list_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn get_pokemon_detailed(
            &self,
            id: u64,
        ) -> Result<Option<PokemonDetailed>, PokemonApiError> {
            self.detailed_calls.lock().unwrap().push(id);

            self.detailed_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(None))
        }

        async fn get_pokemon(&self, name: &str) -> Result<PokemonSummary, PokemonApiError> {
            self.by_name_calls.lock().unwrap().push(name.to_string());

            self.by_name_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(PokemonApiError::NotFound(name.to_string())))
        }
    }
}
