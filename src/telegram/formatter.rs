//! Summary report rendering with Telegram deep links.
//!
//! Provides functionality to:
//! - Normalize chat ids into the bare numeric form used by `t.me/c/` links
//! - Parse an LLM summary payload (raw or markdown-fenced JSON)
//! - Render the per-topic report with 1-based citation anchors

use tracing::{debug, warn};

use crate::core::models::{ChatId, TopicEntry};
use crate::errors::SummaryError;
use crate::utils::text::strip_code_fence;

/// Supergroup/channel ids carry this prefix in API-level identifiers;
/// `t.me/c/` deep links want the bare id without it.
const SUPERGROUP_PREFIX: &str = "-100";

/// Normalize a chat id into the numeric form used in web deep links.
///
/// Accepts a signed integer or its string form. A `-100` supergroup prefix
/// is stripped whole; a bare leading minus sign is stripped on its own.
/// Never fails for integer or digit-string input.
///
/// # Examples
///
/// ```
/// use csb::telegram::format_chat_id;
///
/// assert_eq!(format_chat_id(-100_123_456_789_i64), "123456789");
/// assert_eq!(format_chat_id("-100123456789"), "123456789");
/// assert_eq!(format_chat_id(123456789), "123456789");
/// ```
#[must_use]
pub fn format_chat_id(chat_id: impl Into<ChatId>) -> String {
    let raw = match chat_id.into() {
        ChatId::Int(id) => id.to_string(),
        ChatId::Str(id) => id,
    };

    if let Some(bare) = raw.strip_prefix(SUPERGROUP_PREFIX) {
        bare.to_string()
    } else if let Some(bare) = raw.strip_prefix('-') {
        bare.to_string()
    } else {
        raw
    }
}

/// Render an LLM summary payload into a report with citation deep links.
///
/// The payload is expected to be a JSON array of topics, optionally wrapped
/// in a markdown code fence. Each topic renders as a `##` heading, a
/// participants line, and its discussion points, where every cited message id
/// becomes an `<a href="https://t.me/c/{chat}/{message}">[n]</a>` anchor
/// labeled with its 1-based position in the point's id list.
///
/// Never panics and never returns an error: any parse or shape failure
/// degrades to a string starting with `"Error parsing summary"`.
#[must_use]
pub fn format_summary(payload: &str, chat_id: impl Into<ChatId>) -> String {
    match render_summary(payload, &chat_id.into()) {
        Ok(report) => report,
        Err(e) => {
            warn!("summary parsing degraded to error string: {}", e);
            e.to_string()
        }
    }
}

/// Typed inner path of [`format_summary`]; keeps the malformed-payload and
/// unexpected-shape failures distinguishable.
fn render_summary(payload: &str, chat_id: &ChatId) -> Result<String, SummaryError> {
    let stripped = strip_code_fence(payload);
    if stripped.len() != payload.trim().len() {
        debug!("stripped markdown code fence from summary payload");
    }

    let value: serde_json::Value = serde_json::from_str(stripped)?;
    let topics: Vec<TopicEntry> = serde_json::from_value(value)
        .map_err(|e| SummaryError::UnexpectedShape(e.to_string()))?;

    let link_chat_id = format_chat_id(chat_id.clone());

    let sections: Vec<String> = topics
        .iter()
        .map(|entry| render_topic(entry, &link_chat_id))
        .collect();

    Ok(sections.join("\n\n"))
}

fn render_topic(entry: &TopicEntry, link_chat_id: &str) -> String {
    let mut lines = vec![
        format!("## {}", entry.topic),
        format!("Participant: {}", entry.participants.join(", ")),
        "Discussion:".to_string(),
    ];

    for point in &entry.discussion {
        let anchors: Vec<String> = point
            .key_message_ids
            .iter()
            .enumerate()
            .map(|(i, message_id)| {
                // The URL pattern and the bracketed 1-based label are a
                // compatibility contract with existing reports.
                format!(
                    "<a href=\"https://t.me/c/{}/{}\">[{}]</a>",
                    link_chat_id,
                    message_id,
                    i + 1
                )
            })
            .collect();

        lines.push(format!(" - {} {}", point.point, anchors.join(" ")));
    }

    lines.join("\n")
}
