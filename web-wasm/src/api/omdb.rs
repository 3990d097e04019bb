//! OMDb API連携（window.fetch）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Url};
use movie_search_common::{
    parse_detail_response, parse_search_response, ApiConfig, DetailOutcome, DetailRequest,
    Error, MovieApi, SearchOutcome, SearchRequest,
};

/// ブラウザの fetch で OMDb を呼ぶクライアント
#[derive(Clone)]
pub struct OmdbFetch {
    config: ApiConfig,
}

impl OmdbFetch {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// ベースURLにクエリパラメータを付けたURL
///
/// 値のエンコードは URLSearchParams に任せる
pub fn build_url(base_url: &str, pairs: &[(&'static str, String)]) -> Result<String, JsValue> {
    let url = Url::new(base_url)?;
    let params = url.search_params();
    for (key, value) in pairs {
        params.append(key, value);
    }
    Ok(url.href())
}

/// GETしてレスポンス本文を返す（共通処理）
async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// JS側の例外を共通エラーに変換（コンソールにも出す）
fn transport_error(context: &str, e: JsValue) -> Error {
    let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
    gloo::console::error!(format!("{}: {}", context, message));
    Error::Transport(message)
}

impl OmdbFetch {
    async fn get(&self, context: &str, pairs: &[(&'static str, String)]) -> movie_search_common::Result<String> {
        let url = build_url(&self.config.base_url, pairs)
            .map_err(|e| transport_error(context, e))?;
        fetch_text(&url)
            .await
            .map_err(|e| transport_error(context, e))
    }
}

impl MovieApi for OmdbFetch {
    async fn search(&self, request: &SearchRequest) -> movie_search_common::Result<SearchOutcome> {
        let body = self
            .get("search", &request.query_pairs(&self.config.api_key))
            .await?;
        parse_search_response(&body).inspect_err(|e| {
            gloo::console::error!(format!("search: {}", e));
        })
    }

    async fn lookup(&self, request: &DetailRequest) -> movie_search_common::Result<DetailOutcome> {
        let body = self
            .get("lookup", &request.query_pairs(&self.config.api_key))
            .await?;
        parse_detail_response(&body).inspect_err(|e| {
            gloo::console::error!(format!("lookup: {}", e));
        })
    }
}
