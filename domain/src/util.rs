//! Small text utilities shared across layers.

/// Escape prompt-template markers in untrusted user text.
///
/// User input is data, never executable template syntax. Prompt templates
/// use `{{variable}}` markers; a user message containing literal `{{` or
/// `}}` would otherwise be interpreted as a substitution site. Each marker
/// is backslash-escaped character by character, which template engines
/// treat as literal braces.
pub fn escape_template_markers(text: &str) -> String {
    text.replace("{{", "\\{\\{").replace("}}", "\\}\\}")
}

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut. Safe on multi-byte input.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape_template_markers("hello world"), "hello world");
        assert_eq!(escape_template_markers("a { b } c"), "a { b } c");
    }

    #[test]
    fn test_escape_neutralizes_markers() {
        assert_eq!(escape_template_markers("{{name}}"), "\\{\\{name\\}\\}");
        assert_eq!(
            escape_template_markers("use {{var}} twice {{var}}"),
            "use \\{\\{var\\}\\} twice \\{\\{var\\}\\}"
        );
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("abcdefgh", 3), "abc...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_str("日本語テキスト", 3), "日本語...");
    }
}
