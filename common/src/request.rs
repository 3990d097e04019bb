//! OMDb リクエストの組み立て
//!
//! クエリパラメータの組だけを作る。パーセントエンコードは
//! 送信側（reqwest の `query` / ブラウザの `URLSearchParams`）に任せる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// API接続設定（起動時に注入する）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(Error::Config("API key is empty".into()));
        }
        Ok(Self {
            api_key,
            base_url: base_url.into(),
        })
    }
}

/// タイトル検索（1ページ分）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub title: String,
    /// 1始まり
    pub page: u32,
}

impl SearchRequest {
    pub fn new(title: impl Into<String>, page: u32) -> Self {
        Self {
            title: title.into(),
            page: page.max(1),
        }
    }

    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", api_key.to_string()),
            ("s", self.title.clone()),
            ("page", self.page.to_string()),
        ]
    }
}

/// ID指定の詳細取得
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: String,
}

impl DetailRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", api_key.to_string()),
            ("i", self.id.clone()),
            ("plot", "full".to_string()),
        ]
    }
}
