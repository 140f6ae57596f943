use thiserror::Error;

/// Failure modes of summary parsing.
///
/// Both variants render with the `"Error parsing summary"` prefix that the
/// public string contract exposes, but they stay distinct internally so a
/// malformed payload can be told apart from a structurally wrong one.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The payload was not valid JSON after fence stripping.
    #[error("Error parsing summary: invalid JSON: {0}")]
    MalformedPayload(String),

    /// The payload was valid JSON but not the expected array of topics.
    #[error("Error parsing summary: unexpected shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::MalformedPayload(error.to_string())
    }
}
