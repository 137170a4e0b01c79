//! Namespace prefixes used by PresentationML and DrawingML parts.
use phf::phf_map;

/// Prefix to namespace URI for every prefix the builders emit.
static NAMESPACES: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "http://schemas.openxmlformats.org/drawingml/2006/main",
    "c" => "http://schemas.openxmlformats.org/drawingml/2006/chart",
    "dgm" => "http://schemas.openxmlformats.org/drawingml/2006/diagram",
    "p" => "http://schemas.openxmlformats.org/presentationml/2006/main",
    "pic" => "http://schemas.openxmlformats.org/drawingml/2006/picture",
    "r" => "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
};

/// Namespace URI to the prefix the element tree uses for it, whatever
/// prefix the source document chose.
static CANONICAL_PREFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    "http://schemas.openxmlformats.org/drawingml/2006/main" => "a",
    "http://schemas.openxmlformats.org/drawingml/2006/chart" => "c",
    "http://schemas.openxmlformats.org/drawingml/2006/diagram" => "dgm",
    "http://schemas.openxmlformats.org/presentationml/2006/main" => "p",
    "http://schemas.openxmlformats.org/drawingml/2006/picture" => "pic",
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships" => "r",
};

/// Look up the namespace URI bound to `prefix`.
#[inline]
pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    NAMESPACES.get(prefix).copied()
}

/// Prefix used in the element tree for the namespace `uri`.
#[inline]
pub fn canonical_prefix(uri: &str) -> Option<&'static str> {
    CANONICAL_PREFIXES.get(uri).copied()
}

/// Render `xmlns:` declarations for `prefixes`, in the order given.
///
/// Unknown prefixes are skipped.
///
/// ```
/// use pptx_oxml::ooxml::xml::ns::nsdecls;
/// assert_eq!(
///     nsdecls(&["a"]),
///     "xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\""
/// );
/// ```
pub fn nsdecls(prefixes: &[&str]) -> String {
    prefixes
        .iter()
        .filter_map(|prefix| namespace_uri(prefix).map(|uri| format!("xmlns:{prefix}=\"{uri}\"")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a qualified name into `(prefix, local_name)`.
#[inline]
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qname),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nsdecls_keeps_order() {
        let decls = nsdecls(&["a", "p"]);
        let a_pos = decls.find("xmlns:a=").unwrap();
        let p_pos = decls.find("xmlns:p=").unwrap();
        assert!(a_pos < p_pos);
        assert!(decls.contains("presentationml/2006/main"));
    }

    #[test]
    fn test_unknown_prefix_is_skipped() {
        assert_eq!(nsdecls(&["zz"]), "");
        assert_eq!(namespace_uri("zz"), None);
    }

    #[test]
    fn test_canonical_prefix_inverts_table() {
        for prefix in ["a", "c", "dgm", "p", "pic", "r"] {
            let uri = namespace_uri(prefix).unwrap();
            assert_eq!(canonical_prefix(uri), Some(prefix));
        }
        assert_eq!(canonical_prefix("urn:a"), None);
    }

    #[test]
    fn test_split_qname() {
        assert_eq!(split_qname("a:srgbClr"), (Some("a"), "srgbClr"));
        assert_eq!(split_qname("sp"), (None, "sp"));
    }
}
