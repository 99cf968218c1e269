use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::services::birthday_reminder::DEFAULT_WINDOW_DAYS;

/// デフォルトの設定ファイルパス
pub const DEFAULT_CONFIG_PATH: &str = "./.assistant-bot/config.json";

/// デフォルトのアドレス帳ファイルパス
pub const DEFAULT_BOOK_PATH: &str = "~/.assistant-bot/addressbook.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub book_path: String,
    pub birthday_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_path: DEFAULT_BOOK_PATH.to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む。ファイルがなければデフォルト値を使う
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path))?;
        Ok(config)
    }

    /// CLIで指定されたアドレス帳パスで上書きする
    pub fn with_book_path(mut self, book_path: Option<String>) -> Self {
        if let Some(book_path) = book_path {
            self.book_path = book_path;
        }
        self
    }
}
