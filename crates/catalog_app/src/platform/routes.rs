use catalog_core::{Category, ParamStore, QueryParams, PAGE_PARAM};

/// A screen address. Unknown paths fall back to the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Listing {
        category: Category,
        params: QueryParams,
    },
    Movie(u64),
}

impl Route {
    pub fn parse(raw: &str) -> Self {
        let Ok(params) = QueryParams::parse(raw) else {
            return Route::Home;
        };
        let segments: Vec<&str> = params
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        match segments.as_slice() {
            ["movie", id] => id.parse().map_or(Route::Home, Route::Movie),
            [slug] => match Category::from_slug(slug) {
                Some(category) => Route::Listing { category, params },
                None => Route::Home,
            },
            _ => Route::Home,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Listing { params, .. } => params.route(),
            Route::Movie(id) => format!("/movie/{id}"),
        }
    }

    pub fn page_param(&self) -> Option<String> {
        match self {
            Route::Listing { params, .. } => params.get_param(PAGE_PARAM),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_routes_keep_query() {
        let route = Route::parse("/sci-fi?page=4");
        match &route {
            Route::Listing { category, .. } => assert_eq!(*category, Category::SciFi),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(route.page_param().as_deref(), Some("4"));
        assert_eq!(route.to_path(), "/sci-fi?page=4");
    }

    #[test]
    fn movie_routes() {
        assert_eq!(Route::parse("/movie/603"), Route::Movie(603));
        assert_eq!(Route::parse("/movie/abc"), Route::Home);
    }

    #[test]
    fn unknown_routes_go_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/westerns"), Route::Home);
        assert_eq!(Route::parse("/a/b/c"), Route::Home);
        assert_eq!(Route::Home.to_path(), "/");
    }
}
