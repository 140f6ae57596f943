use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::ChatId;

/// Application configuration, read from `config.json` next to the binary.
///
/// Only the surrounding application touches this; the formatting core never
/// reads configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub telegram_api_id: u64,
    pub telegram_api_hash: String,
    #[serde(default)]
    pub chats_to_summarize: Vec<ChatConfig>,
}

/// One chat the application should summarize.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub id: ChatId,
    #[serde(default)]
    pub name: Option<String>,
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))
    }
}
