/// Returns the prefix of `text` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
/// The result is shorter than `text` exactly when truncation happened.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_text_unchanged() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate_chars("12345", 5), "12345");
    }

    #[test]
    fn test_truncate_longer_text() {
        assert_eq!(truncate_chars("123456", 5), "12345");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each character is 3 bytes in UTF-8
        let text = "日本語のテキスト";
        assert_eq!(truncate_chars(text, 3), "日本語");
        assert_eq!(truncate_chars("🦀🦀🦀", 2), "🦀🦀");
    }
}
