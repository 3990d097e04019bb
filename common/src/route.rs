//! ハッシュルーティング
//!
//! - `#/`              → Home
//! - `#/movies`        → Search
//! - `#/movies/{id}`   → Detail

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    /// 空文字のIDもそのまま持つ（詳細側で取得しない状態になる）
    Detail(String),
    NotFound,
}

impl Route {
    /// `location.hash` 相当の文字列から判定
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_start_matches('/');

        // "movies/" は ID 欄が空の詳細ルート
        if path == "movies/" {
            return Route::Detail(String::new());
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["movies"] => Route::Search,
            ["movies", id] => Route::Detail((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Search => "#/movies".to_string(),
            Route::Detail(id) => format!("#/movies/{}", id),
            Route::NotFound => "#/404".to_string(),
        }
    }

    pub fn detail_id(&self) -> Option<&str> {
        match self {
            Route::Detail(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#"), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(Route::parse("#/movies"), Route::Search);
        assert_eq!(Route::parse("#/movies?x=1"), Route::Search);
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(Route::parse("#/movies/tt0372784"), Route::Detail("tt0372784".into()));
    }

    #[test]
    fn test_parse_detail_without_id() {
        assert_eq!(Route::parse("#/movies/"), Route::Detail(String::new()));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("#/tv"), Route::NotFound);
        assert_eq!(Route::parse("#/movies/tt1/cast"), Route::NotFound);
    }

    #[test]
    fn test_href_roundtrip() {
        for route in [Route::Home, Route::Search, Route::Detail("tt0372784".into())] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
