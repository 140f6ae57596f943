/// CSB - formatting core for a Telegram chatbot that summarizes group-chat
/// discussions with a language model.
///
/// The surrounding application connects to Telegram, enumerates dialogs and
/// fetches message history, then asks an LLM for a structured JSON summary of
/// each configured chat. This crate owns the final step: turning that summary
/// payload into a human-readable report whose citations deep-link back to the
/// original messages on Telegram's web interface.
///
/// # Architecture
///
/// The core is two pure functions:
/// - `telegram::format_chat_id` normalizes any accepted chat-id form into the
///   bare numeric id used by `https://t.me/c/...` deep links
/// - `telegram::format_summary` parses the summary payload (raw JSON or a
///   markdown-fenced block) and renders the per-topic report
///
/// Everything network-shaped (session auth, entity resolution, history
/// retrieval) belongs to the messaging-client collaborator, not here.
///
/// # Example
///
/// ```
/// use csb::telegram::format_summary;
///
/// let payload = r#"[
///     {
///         "topic": "Release planning",
///         "participants": ["Alice", "Bob"],
///         "discussion": [
///             { "point": "Ship on Friday", "key_message_ids": [42, 43] }
///         ]
///     }
/// ]"#;
///
/// let report = format_summary(payload, "-100123456789");
/// assert!(report.starts_with("## Release planning"));
/// assert!(report.contains(r#"<a href="https://t.me/c/123456789/42">[1]</a>"#));
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod telegram;
pub mod utils;

/// Configure structured logging for the host application.
///
/// Installs a tracing-subscriber fmt layer; call once at startup before any
/// summary formatting runs so degraded-parse warnings are captured.
///
/// # Example
///
/// ```
/// csb::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
