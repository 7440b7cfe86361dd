//! HTML escaping for values interpolated into markup strings.
//!
//! One function serves both text content and (double-quoted) attribute
//! values, so every interpolation site gets the same treatment.

/// Escape `&`, `<`, `>`, `"` and `'` for safe embedding in HTML.
pub fn html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::html;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            html(r#"<img src="x" onerror='alert(1)'>"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;alert(1)&#39;&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first() {
        // "&lt;" must not be double-escaped into "&amp;lt;" by a later pass.
        assert_eq!(html("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(html("Flutter Developer"), "Flutter Developer");
    }
}
