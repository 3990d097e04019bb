//! 検索結果・詳細レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - MovieSummary: 検索結果の1件（一覧表示用）
//! - MovieDetail: ID指定で取得した詳細レコード
//! - Poster / MediaType: OMDbの文字列値を型付けしたもの

use serde::Serialize;
use std::fmt;

/// OMDbが「値なし」を表すときのセンチネル
pub const NOT_AVAILABLE: &str = "N/A";

/// ポスター画像がない場合の代替画像
pub const NO_POSTER_PLACEHOLDER: &str = "/no-poster.svg";

/// ポスター画像の参照
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum Poster {
    Available(String),
    #[default]
    Missing,
}

impl Poster {
    /// ワイヤ上の文字列から変換（"N/A" と空文字は Missing）
    pub fn from_wire(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == NOT_AVAILABLE {
            Poster::Missing
        } else {
            Poster::Available(raw.to_string())
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Poster::Available(url) => Some(url),
            Poster::Missing => None,
        }
    }

    /// 表示用のsrc（なければプレースホルダ）
    pub fn src_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.url().unwrap_or(placeholder)
    }
}

/// 作品種別
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    Episode,
    Game,
    #[serde(untagged)]
    Other(String),
}

impl MediaType {
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "movie" => MediaType::Movie,
            "series" => MediaType::Series,
            "episode" => MediaType::Episode,
            "game" => MediaType::Game,
            _ => MediaType::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
            MediaType::Game => "game",
            MediaType::Other(s) => s,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検索結果の1件
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    /// IMDb ID（詳細ルートのキー）
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: Poster,
    pub kind: MediaType,
}

/// 詳細レコード
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub poster: Poster,
    /// IMDb評価（"7.8" など、未評価なら "N/A"）
    pub rating: String,

    // 以下は表示時に値があれば出す補助項目
    pub rated: Option<String>,
    pub released: Option<String>,
    pub writer: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub imdb_votes: Option<String>,
}

impl MovieDetail {
    /// 「1995 • 142 min」形式の副見出し
    pub fn byline(&self) -> String {
        match (self.year.is_empty(), self.runtime.is_empty()) {
            (false, false) => format!("{} • {}", self.year, self.runtime),
            (false, true) => self.year.clone(),
            (true, false) => self.runtime.clone(),
            (true, true) => String::new(),
        }
    }

    /// 値のある補助項目を (ラベル, 値) で返す
    pub fn extra_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Rated", &self.rated),
            ("Released", &self.released),
            ("Writer", &self.writer),
            ("Language", &self.language),
            ("Country", &self.country),
            ("Awards", &self.awards),
            ("IMDb Votes", &self.imdb_votes),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}
