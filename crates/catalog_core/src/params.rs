use url::Url;

/// Name of the query parameter holding the current listing page.
pub const PAGE_PARAM: &str = "page";

const ROUTE_BASE: &str = "http://catalog.local/";

/// Key/value parameter source backing navigation state.
pub trait ParamStore {
    fn get_param(&self, name: &str) -> Option<String>;
    fn set_param(&mut self, name: &str, value: &str);
}

/// A [`ParamStore`] over the query string of an app route such as `/action?page=3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    url: Url,
}

impl QueryParams {
    /// Parses a route. Relative routes resolve against the app root.
    pub fn parse(route: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(ROUTE_BASE)?;
        let url = base.join(route.trim())?;
        Ok(Self { url })
    }

    /// The route path, always starting with `/`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Path plus query, in the form accepted by [`QueryParams::parse`].
    pub fn route(&self) -> String {
        match self.url.query() {
            Some(query) if !query.is_empty() => format!("{}?{}", self.url.path(), query),
            _ => self.url.path().to_string(),
        }
    }
}

impl ParamStore for QueryParams {
    fn get_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn set_param(&mut self, name: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        match pairs.iter_mut().find(|(key, _)| key == name) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((name.to_string(), value.to_string())),
        }
        self.url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_writes_page() {
        let mut params = QueryParams::parse("/action").unwrap();
        assert_eq!(params.get_param(PAGE_PARAM), None);
        params.set_param(PAGE_PARAM, "4");
        assert_eq!(params.get_param(PAGE_PARAM).as_deref(), Some("4"));
        assert_eq!(params.route(), "/action?page=4");
    }

    #[test]
    fn set_keeps_other_keys_in_place() {
        let mut params = QueryParams::parse("/drama?page=2&view=grid").unwrap();
        params.set_param(PAGE_PARAM, "3");
        assert_eq!(params.route(), "/drama?page=3&view=grid");
        assert_eq!(params.path(), "/drama");
    }

    #[test]
    fn relative_routes_resolve_from_root() {
        let params = QueryParams::parse("comedy?page=9").unwrap();
        assert_eq!(params.path(), "/comedy");
        assert_eq!(params.get_param("page").as_deref(), Some("9"));
    }
}
