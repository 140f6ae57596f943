use regex::Regex;

/// Strip one markdown code fence wrapping the whole payload, if present.
///
/// LLMs frequently return JSON wrapped in a fenced block (```` ```json ... ``` ````)
/// even when asked for raw JSON. If the trimmed input starts with a fence
/// marker (with an optional language tag) and ends with a closing marker,
/// both markers are removed and the inner text is returned verbatim;
/// otherwise the trimmed input is returned unchanged.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    static FENCE_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"(?s)\A```[a-zA-Z0-9_-]*\r?\n(.*?)\r?\n?```\z").unwrap_or_else(|_| {
            // Extremely defensive: in practice this cannot fail.
            Regex::new(r"$^").expect("fallback regex compiles")
        })
    });

    let trimmed = text.trim();
    match FENCE_RE.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => trimmed,
    }
}
