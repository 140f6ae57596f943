//! All Telegram-specific functionality

pub mod formatter;

// Re-export main entry points for convenience
pub use formatter::{format_chat_id, format_summary};
