use crate::error::{MovieSearchError, Result};
use movie_search_common::{ApiConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "OMDB_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MovieSearchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("movie-search").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    pub fn get_api_key(&self) -> Result<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key(&self, from_env: Option<String>) -> Result<String> {
        from_env
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
            .ok_or(MovieSearchError::MissingApiKey)
    }

    /// クライアントに渡す接続設定
    pub fn api_config(&self) -> Result<ApiConfig> {
        let key = self.get_api_key()?;
        Ok(ApiConfig::with_base_url(key, self.base_url.clone())?)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        if key.trim().is_empty() {
            return Err(MovieSearchError::Config("APIキーが空です".into()));
        }
        self.api_key = Some(key.trim().to_string());
        self.save()
    }

    /// 表示用（先頭4文字以外を伏せる）
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let visible: String = key.chars().take(4).collect();
            format!("{}{}", visible, "*".repeat(key.chars().count().saturating_sub(4)))
        })
    }
}
