//! Failure message normalization.
//!
//! Some remote drivers report errors as a serialized map rather than plain
//! text, e.g. `{'errorMessage':'Unable to locate element','class':...}`.
//! Normalization unwraps that form so consumers always see the embedded text.
//! The wrapped form is not guaranteed to be valid JSON, so it is scanned for
//! delimiters rather than parsed.

/// Single-quoted wrapper prefix.
pub const ERROR_MESSAGE_LABEL_SINGLE_QUOTED: &str = "{'errorMessage':";

/// Double-quoted wrapper prefix.
pub const ERROR_MESSAGE_LABEL_DOUBLE_QUOTED: &str = "{\"errorMessage\":";

// Both labels are ASCII and of equal length.
const LABEL_LEN: usize = ERROR_MESSAGE_LABEL_SINGLE_QUOTED.len();
const _: () = assert!(ERROR_MESSAGE_LABEL_DOUBLE_QUOTED.len() == LABEL_LEN);

const SINGLE_QUOTED_BOUNDARY: &str = "','";
const DOUBLE_QUOTED_BOUNDARY: &str = "\",\"";

/// Normalize an optional message. `None` passes through.
pub fn normalize_message(message: Option<&str>) -> Option<String> {
    message.map(|message| normalize(message).to_string())
}

/// Normalize a message, returning the embedded text of a wrapped message or
/// the input unchanged.
///
/// Normalization is not idempotent: a wrapped message whose embedded text is
/// itself wrapped only loses its outer layer.
pub fn normalize(message: &str) -> &str {
    if is_wrapped(message) {
        extract_error_message_text(&message[LABEL_LEN..])
    } else {
        message
    }
}

/// Whether the message starts with one of the wrapper prefixes.
pub fn is_wrapped(message: &str) -> bool {
    message.starts_with(ERROR_MESSAGE_LABEL_SINGLE_QUOTED)
        || message.starts_with(ERROR_MESSAGE_LABEL_DOUBLE_QUOTED)
}

fn extract_error_message_text(body: &str) -> &str {
    // Skip the opening quote of the value.
    let mut chars = body.chars();
    chars.next();
    let text = chars.as_str();

    let end = text
        .find(SINGLE_QUOTED_BOUNDARY)
        .or_else(|| text.find(DOUBLE_QUOTED_BOUNDARY));
    match end {
        Some(end) if end > 0 => &text[..end],
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_unchanged() {
        assert_eq!(normalize("element not found"), "element not found");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("{'other':'x'}"), "{'other':'x'}");
    }

    #[test]
    fn test_none_passes_through() {
        assert_eq!(normalize_message(None), None);
    }

    #[test]
    fn test_some_plain_message() {
        assert_eq!(
            normalize_message(Some("some text")),
            Some("some text".to_string())
        );
    }

    #[test]
    fn test_single_quoted_wrapper() {
        assert_eq!(normalize("{'errorMessage':'boom','other':'x'}"), "boom");
    }

    #[test]
    fn test_double_quoted_wrapper() {
        assert_eq!(normalize("{\"errorMessage\":\"boom\",\"other\":\"x\"}"), "boom");
    }

    #[test]
    fn test_missing_boundary_returns_remainder() {
        assert_eq!(
            normalize("{'errorMessage':no-boundary-here"),
            "o-boundary-here"
        );
    }

    #[test]
    fn test_boundary_at_start_returns_remainder() {
        assert_eq!(normalize("{'errorMessage':'','x':'y'}"), "','x':'y'}");
    }

    #[test]
    fn test_single_quoted_boundary_preferred() {
        // `","` appears first but `','` is searched first.
        assert_eq!(
            normalize("{\"errorMessage\":\"a\",\"b','c\"}"),
            "a\",\"b"
        );
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(normalize(ERROR_MESSAGE_LABEL_SINGLE_QUOTED), "");
        assert_eq!(normalize(ERROR_MESSAGE_LABEL_DOUBLE_QUOTED), "");
    }

    #[test]
    fn test_multibyte_delimiter_is_not_split() {
        assert_eq!(normalize("{'errorMessage':éboom','x':'y'}"), "boom");
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        let message = "driver said {'errorMessage':'boom','x':'y'}";
        assert_eq!(normalize(message), message);
    }

    #[test]
    fn test_nested_wrapper_loses_one_layer() {
        let once = normalize("{'errorMessage':'{'errorMessage':'inner','x':'y'}");
        assert_eq!(once, "{'errorMessage':'inner");
        assert_eq!(normalize(once), "inner");
    }

    #[test]
    fn test_is_wrapped() {
        assert!(is_wrapped("{'errorMessage':'boom'}"));
        assert!(is_wrapped("{\"errorMessage\":\"boom\"}"));
        assert!(!is_wrapped("boom"));
        assert!(!is_wrapped("{ 'errorMessage':'boom'}"));
    }
}
