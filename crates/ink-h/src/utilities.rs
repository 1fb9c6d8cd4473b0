//! Tag tables and escaping helpers.

/// Void (self-closing) HTML elements
pub const VOID_HTML_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// SVG elements that are always written self-closed
pub const VOID_SVG_TAGS: &[&str] = &["path"];

/// All tags that never carry children
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr", "path",
];

/// Check if a tag is void. Matching is exact, so `BR` is not void.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Check if a tag is an HTML void element (what a DOM serializer self-closes)
pub fn is_void_html_tag(tag: &str) -> bool {
    VOID_HTML_TAGS.contains(&tag.to_lowercase().as_str())
}

/// Escape text content for HTML
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escape a double-quoted HTML attribute value
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags_table() {
        assert_eq!(VOID_TAGS.len(), VOID_HTML_TAGS.len() + VOID_SVG_TAGS.len());
        for tag in VOID_HTML_TAGS.iter().chain(VOID_SVG_TAGS) {
            assert!(is_void_tag(tag));
        }
    }

    #[test]
    fn test_is_void_tag() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("path"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("svg"));
        assert!(!is_void_tag("BR"));
    }

    #[test]
    fn test_is_void_html_tag() {
        assert!(is_void_html_tag("img"));
        assert!(is_void_html_tag("HR"));
        assert!(!is_void_html_tag("path"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; &lt;c&gt;");
        assert_eq!(escape_attr("plain"), "plain");
    }
}
