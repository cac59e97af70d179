//! Markup sanitizing and escaping helpers.
//!
//! # Invariants
//! - `strip_tags` is idempotent.
//! - Escaped output never contains raw `<`, `>`, `&`, `"` or `'` from input.

use once_cell::sync::Lazy;
use regex::Regex;

// Complete tags, comments, and a dangling unterminated tag at the end.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>|<[^>]*$").expect("valid tag regex"));

/// Removes embedded markup from free text.
pub fn strip_tags(value: &str) -> String {
    TAG_RE.replace_all(value, "").into_owned()
}

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, strip_tags};

    #[test]
    fn strip_tags_removes_markup_and_is_idempotent() {
        let once = strip_tags("<b>Farmer</b> at <a href=\"/p\">Mill</a><!-- x -->");
        assert_eq!(once, "Farmer at Mill");
        assert_eq!(strip_tags(&once), once);
    }

    #[test]
    fn strip_tags_drops_unterminated_trailing_tag() {
        assert_eq!(strip_tags("Clerk <span class=\"x"), "Clerk ");
        assert_eq!(strip_tags("3 > 2"), "3 > 2");
    }

    #[test]
    fn escape_html_neutralizes_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Neil & Co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; Co&lt;/a&gt;"
        );
    }
}
