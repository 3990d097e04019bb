//! OMDb HTTPクライアント（reqwest）

use crate::error::Result;
use movie_search_common::{
    parse_detail_response, parse_search_response, ApiConfig, DetailOutcome, DetailRequest,
    Error as ApiError, MovieApi, SearchOutcome, SearchRequest,
};

pub struct OmdbClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OmdbClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("movie-search/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    async fn get_body(&self, pairs: &[(&'static str, String)]) -> movie_search_common::Result<String> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(pairs)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;

        response.text().await.map_err(transport)
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    // URLにAPIキーが含まれるので落としてから文字列化する
    ApiError::Transport(e.without_url().to_string())
}

impl MovieApi for OmdbClient {
    async fn search(&self, request: &SearchRequest) -> movie_search_common::Result<SearchOutcome> {
        tracing::debug!(title = %request.title, page = request.page, "GET search");
        let body = self.get_body(&request.query_pairs(&self.config.api_key)).await?;
        parse_search_response(&body)
    }

    async fn lookup(&self, request: &DetailRequest) -> movie_search_common::Result<DetailOutcome> {
        tracing::debug!(id = %request.id, "GET detail");
        let body = self.get_body(&request.query_pairs(&self.config.api_key)).await?;
        parse_detail_response(&body)
    }
}
