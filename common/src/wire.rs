//! OMDb レスポンスのスキーマとパーサー
//!
//! OMDb は成否を `"Response": "True" | "False"` の文字列で返す。
//! これをタグとして明示的なバリアントにデシリアライズし、
//! 形が合わないものは `Error::Malformed` として通信失敗扱いにする。

use crate::error::{Error, Result};
use crate::types::{MediaType, MovieDetail, MovieSummary, Poster, NOT_AVAILABLE};
use serde::Deserialize;
use serde_json::error::Category;

/// 検索APIの結果
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found {
        results: Vec<MovieSummary>,
        total_results: u32,
    },
    /// `"Response": "False"`（"Movie not found!" など）
    NotFound { reason: Option<String> },
}

/// ID指定APIの結果
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(MovieDetail),
    NotFound { reason: Option<String> },
}

#[derive(Deserialize)]
#[serde(tag = "Response")]
enum SearchEnvelope {
    #[serde(rename = "True")]
    Found {
        #[serde(rename = "Search", default)]
        search: Vec<WireSummary>,
        #[serde(rename = "totalResults")]
        total_results: Option<String>,
    },
    #[serde(rename = "False")]
    NotFound {
        #[serde(rename = "Error", default)]
        error: Option<String>,
    },
}

#[derive(Deserialize)]
struct WireSummary {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Type", default)]
    kind: String,
}

#[derive(Deserialize)]
#[serde(tag = "Response")]
enum DetailEnvelope {
    #[serde(rename = "True")]
    Found(WireDetail),
    #[serde(rename = "False")]
    NotFound {
        #[serde(rename = "Error", default)]
        error: Option<String>,
    },
}

/// `imdbID` と `Title` は必須。それ以外の表示用項目は欠けていても空で受ける
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireDetail {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    title: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    runtime: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    director: String,
    #[serde(default)]
    actors: String,
    #[serde(default)]
    plot: String,
    #[serde(default)]
    poster: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(default)]
    rated: Option<String>,
    #[serde(default)]
    released: Option<String>,
    #[serde(default)]
    writer: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    awards: Option<String>,
    #[serde(rename = "imdbVotes", default)]
    imdb_votes: Option<String>,
}

impl From<WireSummary> for MovieSummary {
    fn from(raw: WireSummary) -> Self {
        MovieSummary {
            id: raw.imdb_id,
            title: raw.title,
            year: raw.year,
            poster: Poster::from_wire(&raw.poster),
            kind: MediaType::from_wire(&raw.kind),
        }
    }
}

impl From<WireDetail> for MovieDetail {
    fn from(raw: WireDetail) -> Self {
        MovieDetail {
            id: raw.imdb_id,
            title: raw.title,
            year: raw.year,
            runtime: raw.runtime,
            genre: raw.genre,
            director: raw.director,
            actors: raw.actors,
            plot: raw.plot,
            poster: Poster::from_wire(&raw.poster),
            rating: raw.imdb_rating,
            rated: available(raw.rated),
            released: available(raw.released),
            writer: available(raw.writer),
            language: available(raw.language),
            country: available(raw.country),
            awards: available(raw.awards),
            imdb_votes: available(raw.imdb_votes),
        }
    }
}

/// "N/A" と空文字を None に寄せる
fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}

fn from_json<'a, T: Deserialize<'a>>(body: &'a str, what: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| match e.classify() {
        Category::Data => Error::Malformed(format!("{}: {}", what, e)),
        _ => Error::Json(e),
    })
}

/// 検索レスポンスをパース
///
/// # Returns
/// * `Ok(SearchOutcome::Found)` - `Response: "True"`
/// * `Ok(SearchOutcome::NotFound)` - `Response: "False"`
/// * `Err` - JSON不正、タグ欠落、`totalResults` が数値でない
pub fn parse_search_response(body: &str) -> Result<SearchOutcome> {
    match from_json::<SearchEnvelope>(body, "search response")? {
        SearchEnvelope::Found { search, total_results } => {
            let raw_total = total_results
                .ok_or_else(|| Error::Malformed("search response: totalResults missing".into()))?;
            let total_results: u32 = raw_total.trim().parse().map_err(|_| {
                Error::Malformed(format!("search response: totalResults {:?}", raw_total))
            })?;

            Ok(SearchOutcome::Found {
                results: search.into_iter().map(MovieSummary::from).collect(),
                total_results,
            })
        }
        SearchEnvelope::NotFound { error } => Ok(SearchOutcome::NotFound { reason: error }),
    }
}

/// 詳細レスポンスをパース
pub fn parse_detail_response(body: &str) -> Result<DetailOutcome> {
    match from_json::<DetailEnvelope>(body, "detail response")? {
        DetailEnvelope::Found(raw) => Ok(DetailOutcome::Found(raw.into())),
        DetailEnvelope::NotFound { error } => Ok(DetailOutcome::NotFound { reason: error }),
    }
}
