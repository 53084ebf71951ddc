//! Text helpers for speakable output.

/// Truncate to at most `max` characters, respecting character boundaries.
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(preview("hello", 50), "hello");
    }

    #[test]
    fn exact_length_is_unchanged() {
        assert_eq!(preview("abcde", 5), "abcde");
    }

    #[test]
    fn long_text_is_truncated() {
        let text = "a".repeat(60);
        assert_eq!(preview(&text, 50).len(), 50);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "déjà vu all over again";
        let cut = preview(text, 4);
        assert_eq!(cut, "déjà");
    }
}
