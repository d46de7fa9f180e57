//! Completion-text sanitization.
//!
//! The upstream model is asked for strict JSON but routinely wraps its
//! output in a markdown code fence. Stripping is idempotent: already-clean
//! JSON passes through unchanged.

/// Strip a leading ```json / ``` fence and a trailing ``` fence, then trim.
pub fn strip_markdown_fences(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text.to_string()
}

/// True when the sanitized text looks like a JSON object.
pub fn looks_like_json_object(text: &str) -> bool {
    text.starts_with('{')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_markdown_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_markdown_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn clean_json_passes_through_unchanged() {
        let clean = "{\"a\": 1}";
        assert_eq!(strip_markdown_fences(clean), clean);
    }

    #[test]
    fn stripping_is_idempotent() {
        let raw = "```json\n{\"a\": 1}\n```";
        let once = strip_markdown_fences(raw);
        let twice = strip_markdown_fences(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(strip_markdown_fences("  \n{\"a\": 1}\n  "), "{\"a\": 1}");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(strip_markdown_fences(""), "");
        assert_eq!(strip_markdown_fences("   "), "");
    }

    #[test]
    fn json_object_detection() {
        assert!(looks_like_json_object("{\"a\": 1}"));
        assert!(!looks_like_json_object("Sure! Here is your JSON:"));
        assert!(!looks_like_json_object(""));
    }
}
