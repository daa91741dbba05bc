//! Input sanitization

/// Escape the five HTML special characters.
///
/// `'` becomes `&#039;`. Values are escaped before any check runs and are
/// never unescaped afterwards, so length and pattern checks see the escaped
/// text.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("ab'cd"), "ab&#039;cd");
        assert_eq!(escape_html("<b>\"x\" & y</b>"), "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
