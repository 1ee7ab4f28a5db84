use std::fmt;

use crate::schema::{Credits, Images, Movie, MovieResponse};

pub type MovieId = u64;

/// One page of the discover endpoint: filter criteria plus page number.
///
/// Doubles as the de-duplication and cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoverRequest {
    pub filters: Vec<(String, String)>,
    pub page: u32,
}

impl DiscoverRequest {
    pub fn new(filters: Vec<(String, String)>, page: u32) -> Self {
        Self { filters, page }
    }
}

/// Everything the detail screen shows. Only `movie` is mandatory; the side
/// requests fail independently.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie: Movie,
    pub credits: Option<Credits>,
    pub images: Option<Images>,
    pub similar: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageLoaded {
        request: DiscoverRequest,
        result: Result<MovieResponse, FetchError>,
    },
    DetailLoaded {
        movie_id: MovieId,
        result: Result<MovieDetail, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Unauthorized,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Unauthorized => write!(f, "api key rejected"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}
