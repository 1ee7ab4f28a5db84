use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_trace};
use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::schema::{Credits, Images, Movie, MovieResponse};
use crate::{DiscoverRequest, FailureKind, FetchError, MovieId};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    /// A v3 key goes into the query string; a v4 read token (a JWT) is sent as a bearer token.
    pub api_key: Option<String>,
    pub language: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            language: "en-US".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

impl FetchSettings {
    fn bearer_token(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| key.starts_with("eyJ"))
    }

    fn query_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && !key.starts_with("eyJ"))
    }
}

/// The upstream catalog as seen by the engine.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn discover(&self, request: &DiscoverRequest) -> Result<MovieResponse, FetchError>;
    async fn movie(&self, id: MovieId) -> Result<Movie, FetchError>;
    async fn credits(&self, id: MovieId) -> Result<Credits, FetchError>;
    async fn images(&self, id: MovieId) -> Result<Images, FetchError>;
    async fn similar(&self, id: MovieId) -> Result<MovieResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalog {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestCatalog {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str, params: &[(String, String)]) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(key) = self.settings.query_key() {
                query.append_pair("api_key", key);
            }
            query.append_pair("language", &self.settings.language);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, FetchError> {
        let url = self.endpoint(path, params)?;
        catalog_debug!("GET {}", path);

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = self.settings.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FetchError::new(FailureKind::Unauthorized, status.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        catalog_trace!("{} returned {} bytes", path, bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogSource for ReqwestCatalog {
    async fn discover(&self, request: &DiscoverRequest) -> Result<MovieResponse, FetchError> {
        let mut params = request.filters.clone();
        params.push(("page".to_string(), request.page.to_string()));
        self.get_json("/discover/movie", &params).await
    }

    async fn movie(&self, id: MovieId) -> Result<Movie, FetchError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }

    async fn credits(&self, id: MovieId) -> Result<Credits, FetchError> {
        self.get_json(&format!("/movie/{id}/credits"), &[]).await
    }

    async fn images(&self, id: MovieId) -> Result<Images, FetchError> {
        // Images are mostly untagged or English; the language filter alone would hide them.
        let params = [(
            "include_image_language".to_string(),
            format!("{},null", self.settings.language.split('-').next().unwrap_or("en")),
        )];
        self.get_json(&format!("/movie/{id}/images"), &params).await
    }

    async fn similar(&self, id: MovieId) -> Result<MovieResponse, FetchError> {
        self.get_json(&format!("/movie/{id}/similar"), &[]).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
