use serde::Deserialize;

/// A Telegram chat identifier as the surrounding application sees it.
///
/// Chat ids arrive either as signed integers (from the client library) or as
/// strings (from `config.json`), and supergroups/channels carry the internal
/// `-100` prefix over the "real" numeric id. The untagged representation
/// accepts both JSON forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Int(i64),
    Str(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Int(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        ChatId::Int(i64::from(id))
    }
}

impl From<&str> for ChatId {
    fn from(id: &str) -> Self {
        ChatId::Str(id.to_string())
    }
}

impl From<String> for ChatId {
    fn from(id: String) -> Self {
        ChatId::Str(id)
    }
}

/// One topic extracted by the LLM from a chat's message history.
///
/// Every field defaults when absent; a present field of the wrong type is a
/// decode error. An entry without discussion points renders as an empty
/// section rather than failing the whole report.
#[derive(Debug, Deserialize)]
pub struct TopicEntry {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub discussion: Vec<DiscussionPoint>,
}

/// A single discussion point with the messages it cites.
///
/// The order of `key_message_ids` fixes the displayed `[n]` citation index
/// (1-based); the ids themselves only appear inside the deep-link URL.
#[derive(Debug, Deserialize)]
pub struct DiscussionPoint {
    #[serde(default)]
    pub point: String,
    #[serde(default)]
    pub key_message_ids: Vec<i64>,
}
