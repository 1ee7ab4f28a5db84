//! Catalog engine: upstream API client, request de-duplication and caching.
mod cache;
mod engine;
mod fetch;
pub mod schema;
mod types;

pub use cache::{CacheSettings, PageCache};
pub use engine::EngineHandle;
pub use fetch::{CatalogSource, FetchSettings, ReqwestCatalog, DEFAULT_BASE_URL};
pub use schema::{
    image_url, Cast, Credits, Crew, Genre, Image, Images, Movie, MovieResponse,
    ProductionCountry, SpokenLanguage,
};
pub use types::{
    DiscoverRequest, EngineError, EngineEvent, FailureKind, FetchError, MovieDetail, MovieId,
};
