use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieSearchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`movie-search config --set-api-key YOUR_KEY` で設定するか OMDB_API_KEY を指定してください")]
    MissingApiKey,

    #[error("API呼び出しエラー: {0}")]
    Api(#[from] movie_search_common::Error),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, MovieSearchError>;
