//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 「見つからない」はエラーではなく `SearchOutcome::NotFound` などで表現する。
/// ここに来るのは通信失敗・レスポンス不正・設定不備のみ。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
