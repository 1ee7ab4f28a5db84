use std::collections::BTreeMap;
use std::fmt;

/// Genres hidden from most listings.
const EXCLUDED_GENRES: &str = "18,36,27,10749";

/// Catalog criteria forwarded to the upstream discover endpoint unmodified.
///
/// Keys are kept ordered so equal filters produce equal fetch keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CatalogFilter {
    criteria: BTreeMap<String, String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.criteria.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.criteria.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Key/value pairs in key order, ready to append to a query string.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.criteria
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for CatalogFilter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

/// Identifies one upstream request: the filter plus the page number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub filter: CatalogFilter,
    pub page: u32,
}

impl FetchKey {
    pub fn new(filter: CatalogFilter, page: u32) -> Self {
        Self { filter, page }
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let criteria = self
            .filter
            .criteria
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        write!(f, "[{criteria}]#{}", self.page)
    }
}

/// The listings reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Popular,
    TopRated,
    Upcoming,
    Action,
    Comedy,
    Drama,
    SciFi,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Popular,
        Category::TopRated,
        Category::Upcoming,
        Category::Action,
        Category::Comedy,
        Category::Drama,
        Category::SciFi,
    ];

    /// Route path segment, without the leading slash.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::TopRated => "top-rated",
            Category::Upcoming => "upcoming",
            Category::Action => "action",
            Category::Comedy => "comedy",
            Category::Drama => "drama",
            Category::SciFi => "sci-fi",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(slug))
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::TopRated => "Top Rated",
            Category::Upcoming => "Upcoming",
            Category::Action => "Action",
            Category::Comedy => "Comedy",
            Category::Drama => "Drama",
            Category::SciFi => "Sci-Fi",
        }
    }

    /// Discover criteria for this listing. `today` is an ISO date (`YYYY-MM-DD`)
    /// used as the lower release bound for upcoming titles.
    pub fn filter(self, today: &str) -> CatalogFilter {
        let base = CatalogFilter::new();
        match self {
            Category::Popular => base
                .with("sort_by", "popularity.desc")
                .with("without_genres", EXCLUDED_GENRES),
            Category::TopRated => base
                .with("sort_by", "vote_average.desc")
                .with("vote_count.gte", "1000")
                .with("without_genres", EXCLUDED_GENRES),
            Category::Upcoming => base
                .with("sort_by", "release_date.desc")
                .with("primary_release_date.gte", today)
                .with("without_genres", EXCLUDED_GENRES),
            Category::Action => base
                .with("with_genres", "28")
                .with("sort_by", "popularity.desc")
                .with("without_genres", EXCLUDED_GENRES),
            Category::Comedy => base
                .with("with_genres", "35")
                .with("sort_by", "popularity.desc")
                .with("without_genres", EXCLUDED_GENRES),
            Category::Drama => base
                .with("with_genres", "18")
                .with("sort_by", "vote_average.desc")
                .with("vote_count.gte", "500"),
            Category::SciFi => base
                .with("with_genres", "878")
                .with("sort_by", "popularity.desc")
                .with("without_genres", EXCLUDED_GENRES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_with_same_criteria_make_equal_keys() {
        let a = CatalogFilter::new().with("b", "2").with("a", "1");
        let b = CatalogFilter::new().with("a", "1").with("b", "2");
        assert_eq!(FetchKey::new(a, 3), FetchKey::new(b, 3));
    }

    #[test]
    fn key_display_is_stable() {
        let key = FetchKey::new(Category::Action.filter("2026-01-01"), 2);
        assert_eq!(
            key.to_string(),
            "[sort_by=popularity.desc&with_genres=28&without_genres=18,36,27,10749]#2"
        );
    }

    #[test]
    fn slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("westerns"), None);
    }

    #[test]
    fn drama_keeps_excluded_genres() {
        let filter = Category::Drama.filter("2026-01-01");
        assert_eq!(filter.get("with_genres"), Some("18"));
        assert_eq!(filter.get("without_genres"), None);
        assert_eq!(filter.get("vote_count.gte"), Some("500"));
    }

    #[test]
    fn upcoming_is_bounded_by_today() {
        let filter = Category::Upcoming.filter("2026-10-19");
        assert_eq!(filter.get("primary_release_date.gte"), Some("2026-10-19"));
    }
}
