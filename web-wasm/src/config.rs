//! 起動時のAPI設定
//!
//! ビルド時の `OMDB_API_KEY`、無ければ index.html の
//! `<meta name="omdb-api-key" content="...">` から読む。

use movie_search_common::{ApiConfig, Result, DEFAULT_BASE_URL};

const API_KEY_META: &str = "omdb-api-key";
const BASE_URL_META: &str = "omdb-base-url";

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .get_attribute("content")
        .filter(|value| !value.trim().is_empty())
}

pub fn load_api_config() -> Result<ApiConfig> {
    let api_key = option_env!("OMDB_API_KEY")
        .map(str::to_string)
        .or_else(|| meta_content(API_KEY_META))
        .unwrap_or_default();
    let base_url = meta_content(BASE_URL_META).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ApiConfig::with_base_url(api_key, base_url)
}
