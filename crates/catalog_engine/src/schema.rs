//! Records returned by the upstream movie metadata API.
//!
//! Every field is defaulted when missing or `null`, so schema drift upstream
//! degrades to empty values instead of decode failures.

use serde::{Deserialize, Deserializer};

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Absolute URL for an image path such as `/abc.jpg` at a size such as `w500`.
pub fn image_url(path: &str, size: &str) -> String {
    format!("{IMAGE_BASE_URL}/{size}{path}")
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub vote_average: f64,
    #[serde(deserialize_with = "nullable")]
    pub vote_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub release_date: String,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub runtime: Option<u32>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub status: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub genres: Vec<Genre>,
    #[serde(deserialize_with = "nullable")]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(deserialize_with = "nullable")]
    pub spoken_languages: Vec<SpokenLanguage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ProductionCountry {
    #[serde(deserialize_with = "nullable")]
    pub iso_3166_1: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SpokenLanguage {
    #[serde(deserialize_with = "nullable")]
    pub english_name: String,
    #[serde(deserialize_with = "nullable")]
    pub iso_639_1: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Cast {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub character: String,
    pub profile_path: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Crew {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub job: String,
    #[serde(deserialize_with = "nullable")]
    pub department: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Credits {
    #[serde(deserialize_with = "nullable")]
    pub cast: Vec<Cast>,
    #[serde(deserialize_with = "nullable")]
    pub crew: Vec<Crew>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    pub aspect_ratio: f64,
    #[serde(deserialize_with = "nullable")]
    pub file_path: String,
    pub height: u32,
    pub width: u32,
    pub vote_average: f64,
    pub vote_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Images {
    #[serde(deserialize_with = "nullable")]
    pub backdrops: Vec<Image>,
    #[serde(deserialize_with = "nullable")]
    pub posters: Vec<Image>,
}

/// One page of a listing endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MovieResponse {
    pub page: u32,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u64,
}
