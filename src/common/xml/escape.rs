use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Automata are built once and shared across threads
static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\""])
        .expect("Failed to build XML attribute escaper")
});

static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

// LeftmostLongest so `&amp;lt;` decodes to `&lt;` and not `<`
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape a value for use inside a double-quoted attribute.
///
/// # Examples
///
/// ```
/// use pptx_oxml::common::xml::escape_attr;
/// assert_eq!(escape_attr("Title \"1\" & <2>"), "Title &quot;1&quot; &amp; &lt;2&gt;");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;"])
}

/// Escape character data. Quotes are left as-is.
///
/// # Examples
///
/// ```
/// use pptx_oxml::common::xml::escape_text;
/// assert_eq!(escape_text("a < \"b\""), "a &lt; \"b\"");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use pptx_oxml::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_and_text_escaping_differ_on_quotes() {
        assert_eq!(escape_attr("\""), "&quot;");
        assert_eq!(escape_text("\""), "\"");
        assert_eq!(escape_attr("'"), "'");
    }

    #[test]
    fn test_escape_unescape_inverse() {
        let raw = "Rounded <Rectangle> & \"Friends\"";
        assert_eq!(unescape_xml(&escape_attr(raw)), raw);
        assert_eq!(unescape_xml(&escape_text(raw)), raw);
    }
}
