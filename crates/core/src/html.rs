//! HTML escaping for server-rendered pages.

/// Escape text for use in HTML element content or a quoted attribute value.
///
/// # Examples
///
/// ```
/// use gamevault_core::html::escape;
/// assert_eq!(escape("<b>\"Tom & Jerry's\"</b>"),
///     "&lt;b&gt;&quot;Tom &amp; Jerry&#x27;s&quot;&lt;/b&gt;");
/// ```
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape("Super Mario 64"), "Super Mario 64");
    }

    #[test]
    fn script_tags_are_neutralised() {
        let escaped = escape("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }
}
