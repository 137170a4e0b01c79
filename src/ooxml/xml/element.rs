//! Mutable XML element tree.
//!
//! Parts are small enough that the shape and color wrappers work on a fully
//! materialized tree instead of re-scanning bytes for each accessor. Tags and
//! attribute names are stored in qualified `prefix:local` form. Names in a
//! namespace listed in [`ns`](super::ns) are rewritten to its canonical prefix
//! while parsing (`a:` for DrawingML, `p:` for PresentationML), so lookups
//! match regardless of the prefix or default namespace the source used.
//! Names in other or unbound namespaces keep the prefix they were written
//! with.

use crate::common::xml::{escape_text, unescape_xml};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xml::ns::{canonical_prefix, split_qname};
use crate::ooxml::xml::writer::{SerializeOptions, write_element};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

type Attributes = SmallVec<[(String, String); 4]>;

/// A single XML element with its attributes, text, and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the qualified `tag`, e.g. `"a:srgbClr"`.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn with_attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of [`Element::append`].
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Qualified tag name.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Tag name without its namespace prefix.
    #[inline]
    pub fn local_name(&self) -> &str {
        split_qname(&self.tag).1
    }

    /// Namespace prefix of the tag, if any.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        split_qname(&self.tag).0
    }

    /// True when the qualified tag equals `tag`.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    // ---------------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------------

    /// Attribute value by qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Attributes in document order, namespace declarations included.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Parse an attribute as an integer.
    ///
    /// Returns `Ok(None)` when absent and [`OoxmlError::InvalidValue`] when
    /// present but not an integer.
    pub fn int_attr(&self, name: &str) -> Result<Option<i64>> {
        match self.attr(name) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
                OoxmlError::InvalidValue(format!(
                    "attribute '{}' on <{}> is not an integer: '{}'",
                    name, self.tag, raw
                ))
            }),
        }
    }

    /// Required attribute; fails with [`OoxmlError::MissingAttribute`].
    pub fn required_attr(&self, name: &str) -> Result<&str> {
        self.attr(name).ok_or_else(|| OoxmlError::MissingAttribute {
            element: self.tag.clone(),
            attribute: name.to_string(),
        })
    }

    // ---------------------------------------------------------------------
    // Text
    // ---------------------------------------------------------------------

    /// Character data directly inside this element.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the character data directly inside this element.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    // ---------------------------------------------------------------------
    // Children
    // ---------------------------------------------------------------------

    /// Child elements in document order.
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable child list.
    #[inline]
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// First child with the qualified `tag`.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Mutable first child with the qualified `tag`.
    pub fn child_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.tag == tag)
    }

    /// All children with the qualified `tag`, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// First child whose tag is any of `tags`.
    pub fn first_child_of(&self, tags: &[&str]) -> Option<&Element> {
        self.children.iter().find(|c| tags.contains(&c.tag.as_str()))
    }

    /// Mutable first child whose tag is any of `tags`.
    pub fn first_child_of_mut(&mut self, tags: &[&str]) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .find(|c| tags.contains(&c.tag.as_str()))
    }

    /// Index of the first child whose tag is any of `tags`.
    pub fn position_of(&self, tags: &[&str]) -> Option<usize> {
        self.children
            .iter()
            .position(|c| tags.contains(&c.tag.as_str()))
    }

    /// Descend through first children matching each tag in `path`.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |node, tag| node.child(tag))
    }

    /// Mutable form of [`Element::find`].
    pub fn find_mut(&mut self, path: &[&str]) -> Option<&mut Element> {
        let mut node = self;
        for tag in path {
            node = node.child_mut(tag)?;
        }
        Some(node)
    }

    /// Append `child` as the last child and return it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Insert `child` at `index` (clamped to the child count) and return it.
    pub fn insert(&mut self, index: usize, child: Element) -> &mut Element {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
        &mut self.children[index]
    }

    /// Insert `child` before the first existing child whose tag appears in
    /// `successors`, or append when there is none. Keeps schema sequence order.
    pub fn insert_before(&mut self, child: Element, successors: &[&str]) -> &mut Element {
        match self.position_of(successors) {
            Some(index) => self.insert(index, child),
            None => self.append(child),
        }
    }

    /// Remove every child whose tag is in `tags`; returns how many were removed.
    pub fn remove_children(&mut self, tags: &[&str]) -> usize {
        let before = self.children.len();
        self.children.retain(|c| !tags.contains(&c.tag.as_str()));
        before - self.children.len()
    }

    /// Existing first child with `tag`, or a new empty one appended last.
    pub fn get_or_add_child(&mut self, tag: &str) -> &mut Element {
        self.get_or_insert_child(tag, &[])
    }

    /// Existing first child with `tag`, or a new one placed before the first
    /// child listed in `successors`.
    pub fn get_or_insert_child(&mut self, tag: &str, successors: &[&str]) -> &mut Element {
        match self.children.iter().position(|c| c.tag == tag) {
            Some(index) => &mut self.children[index],
            None => self.insert_before(Element::new(tag), successors),
        }
    }

    // ---------------------------------------------------------------------
    // Parsing and serialization
    // ---------------------------------------------------------------------

    /// Parse a document or fragment and return its root element.
    ///
    /// ```
    /// use pptx_oxml::ooxml::xml::Element;
    ///
    /// let el = Element::from_xml(r#"<a:srgbClr xmlns:a="urn:a" val="FF0000"/>"#).unwrap();
    /// assert_eq!(el.local_name(), "srgbClr");
    /// assert_eq!(el.attr("val"), Some("FF0000"));
    /// ```
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::from_bytes(xml.as_bytes())
    }

    /// Parse UTF-8 XML bytes and return the root element.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(bytes);
        let mut scopes = NsScopes::default();
        // Open elements paired with their raw (still escaped) character data
        let mut stack: Vec<(Element, String)> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    scopes.enter();
                    stack.push((element_from_start(e, &mut scopes)?, String::new()));
                },
                Ok(Event::Empty(ref e)) => {
                    scopes.enter();
                    let element = element_from_start(e, &mut scopes)?;
                    scopes.leave();
                    match stack.last_mut() {
                        Some((parent, _)) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Ok(Event::Text(ref t)) => {
                    if let Some((_, raw)) = stack.last_mut() {
                        raw.push_str(&utf8(t.to_vec(), "text content")?);
                    }
                },
                Ok(Event::CData(ref c)) => {
                    if let Some((_, raw)) = stack.last_mut() {
                        raw.push_str(&escape_text(&utf8(c.to_vec(), "CDATA section")?));
                    }
                },
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some((_, raw)) = stack.last_mut() {
                        let name = utf8(r.to_vec(), "entity reference")?;
                        push_entity(raw, &name)?;
                    }
                },
                Ok(Event::End(_)) => {
                    scopes.leave();
                    let Some((mut element, raw)) = stack.pop() else {
                        return Err(OoxmlError::Xml("unbalanced end tag".to_string()));
                    };
                    element.text = finish_text(&raw, !element.children.is_empty());
                    match stack.last_mut() {
                        Some((parent, _)) => parent.children.push(element),
                        None => {
                            log::trace!("parsed <{}> element tree", element.tag);
                            return Ok(element);
                        },
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
        }

        Err(OoxmlError::InvalidFormat("No root element found".to_string()))
    }

    /// Compact serialization without an XML declaration.
    pub fn to_xml(&self) -> String {
        self.to_xml_with(&SerializeOptions::default())
    }

    /// Two-space indented serialization ending in a newline.
    pub fn to_pretty_xml(&self) -> String {
        self.to_xml_with(&SerializeOptions::pretty())
    }

    /// Serialize according to `options`.
    pub fn to_xml_with(&self, options: &SerializeOptions) -> String {
        let mut out = String::with_capacity(256);
        if options.xml_declaration {
            out.push_str(r#"<?xml version="1.0" encoding="UTF-8""#);
            if options.standalone {
                out.push_str(r#" standalone="yes""#);
            }
            out.push_str("?>");
            if options.indent.is_some() {
                out.push('\n');
            }
        }
        write_element(self, &mut out, options, 0);
        out
    }
}

fn utf8(bytes: Vec<u8>, what: &str) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|_| OoxmlError::InvalidFormat(format!("Invalid UTF-8 in {what}")))
}

/// Namespace bindings in scope while parsing, innermost last.
#[derive(Debug, Default)]
struct NsScopes {
    bindings: Vec<(String, String)>,
    marks: Vec<usize>,
}

impl NsScopes {
    fn enter(&mut self) {
        self.marks.push(self.bindings.len());
    }

    fn leave(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.bindings.truncate(mark);
        }
    }

    /// Bind `prefix` to `uri`; the empty prefix is the default namespace.
    fn bind(&mut self, prefix: &str, uri: &str) {
        self.bindings.push((prefix.to_string(), uri.to_string()));
    }

    fn resolve(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Rewrite `qname` to the canonical prefix of its namespace. Unprefixed
    /// attributes are in no namespace, so the default only applies to tags.
    fn canonical_qname(&self, qname: &str, is_tag: bool) -> String {
        let (prefix, local) = split_qname(qname);
        let uri = match prefix {
            Some(prefix) => self.resolve(prefix),
            None if is_tag => self.resolve(""),
            None => None,
        };
        match uri.and_then(canonical_prefix) {
            Some(canonical) => format!("{canonical}:{local}"),
            None => qname.to_string(),
        }
    }
}

fn is_ns_declaration(key: &str) -> bool {
    key == "xmlns" || key.starts_with("xmlns:")
}

fn element_from_start(e: &BytesStart<'_>, scopes: &mut NsScopes) -> Result<Element> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| OoxmlError::Xml(err.to_string()))?;
        let key = utf8(attr.key.as_ref().to_vec(), "attribute key")?;
        let value = attr
            .unescape_value()
            .map_err(|err| OoxmlError::Xml(err.to_string()))?
            .into_owned();
        if is_ns_declaration(&key) {
            scopes.bind(key.strip_prefix("xmlns:").unwrap_or(""), &value);
        }
        attributes.push((key, value));
    }

    let tag = utf8(e.name().as_ref().to_vec(), "tag name")?;
    let mut element = Element::new(&scopes.canonical_qname(&tag, true));

    for (key, value) in attributes {
        let key = if is_ns_declaration(&key) {
            match canonical_prefix(&value) {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => key,
            }
        } else {
            scopes.canonical_qname(&key, false)
        };
        // `xmlns` and `xmlns:a` for the same namespace collapse into one
        if element.attr(&key).is_none() {
            element.attributes.push((key, value));
        }
    }

    Ok(element)
}

/// Append an entity reference to raw text. Character references are decoded
/// and re-escaped so the final unescape pass leaves them intact.
fn push_entity(raw: &mut String, name: &str) -> Result<()> {
    let Some(number) = name.strip_prefix('#') else {
        raw.push('&');
        raw.push_str(name);
        raw.push(';');
        return Ok(());
    };

    let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => number.parse::<u32>(),
    }
    .map_err(|_| OoxmlError::Xml(format!("invalid character reference '&{name};'")))?;

    let ch = char::from_u32(code)
        .ok_or_else(|| OoxmlError::Xml(format!("invalid character reference '&{name};'")))?;
    raw.push_str(&escape_text(ch.encode_utf8(&mut [0u8; 4])));
    Ok(())
}

/// Drop indentation whitespace; keep significant text such as `<a:t> </a:t>`.
fn finish_text(raw: &str, has_children: bool) -> String {
    if raw.trim().is_empty() && (has_children || raw.contains('\n')) {
        return String::new();
    }
    unescape_xml(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP: &str = r#"<p:sp xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:nvSpPr>
    <p:cNvPr id="2" name="Title &amp; Co"/>
    <p:cNvSpPr/>
    <p:nvPr/>
  </p:nvSpPr>
  <p:spPr/>
  <p:txBody>
    <a:p><a:r><a:t> </a:t></a:r><a:r><a:t>x &lt; y &#x41;</a:t></a:r></a:p>
  </p:txBody>
</p:sp>"#;

    #[test]
    fn test_parse_tree_shape() {
        let sp = Element::from_xml(SP).unwrap();
        assert_eq!(sp.tag(), "p:sp");
        assert_eq!(sp.children().len(), 3);
        let c_nv_pr = sp.find(&["p:nvSpPr", "p:cNvPr"]).unwrap();
        assert_eq!(c_nv_pr.attr("name"), Some("Title & Co"));
        assert_eq!(c_nv_pr.int_attr("id").unwrap(), Some(2));
        assert_eq!(sp.text(), "");
    }

    #[test]
    fn test_significant_text_is_kept() {
        let sp = Element::from_xml(SP).unwrap();
        let p = sp.find(&["p:txBody", "a:p"]).unwrap();
        let texts: Vec<_> = p
            .children_named("a:r")
            .map(|r| r.child("a:t").unwrap().text().to_string())
            .collect();
        assert_eq!(texts, vec![" ".to_string(), "x < y A".to_string()]);
    }

    #[test]
    fn test_character_reference_in_attribute() {
        let el = Element::from_xml(r#"<p:cNvPr id="2" name="A&#65;B &amp; &#x43;"/>"#).unwrap();
        assert_eq!(el.attr("name"), Some("AAB & C"));
        assert_eq!(el.to_xml(), r#"<p:cNvPr id="2" name="AAB &amp; C"/>"#);
    }

    #[test]
    fn test_default_namespace_gets_canonical_prefix() {
        let el = Element::from_xml(
            r#"<solidFill xmlns="http://schemas.openxmlformats.org/drawingml/2006/main"><srgbClr val="FF0000"/></solidFill>"#,
        )
        .unwrap();
        assert_eq!(el.tag(), "a:solidFill");
        assert_eq!(el.children()[0].tag(), "a:srgbClr");
        assert_eq!(
            el.to_xml(),
            r#"<a:solidFill xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:srgbClr val="FF0000"/></a:solidFill>"#
        );
    }

    #[test]
    fn test_foreign_prefix_gets_canonical_prefix() {
        let el = Element::from_xml(
            r#"<pml:sp xmlns:pml="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:rel="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><pml:nvSpPr rel:id="rId1" name="x"/></pml:sp>"#,
        )
        .unwrap();
        assert_eq!(el.tag(), "p:sp");
        let nv_sp_pr = el.child("p:nvSpPr").unwrap();
        assert_eq!(nv_sp_pr.attr("r:id"), Some("rId1"));
        assert_eq!(nv_sp_pr.attr("name"), Some("x"));
    }

    #[test]
    fn test_namespace_scope_ends_with_element() {
        let el = Element::from_xml(
            r#"<x:root xmlns:x="urn:x"><a:inner xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"/><inner/></x:root>"#,
        )
        .unwrap();
        assert_eq!(el.tag(), "x:root");
        assert_eq!(el.children()[0].tag(), "a:inner");
        assert_eq!(el.children()[1].tag(), "inner");
    }

    #[test]
    fn test_compact_round_trip() {
        let xml = r#"<a:solidFill xmlns:a="urn:a"><a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr></a:solidFill>"#;
        let el = Element::from_xml(xml).unwrap();
        assert_eq!(el.to_xml(), xml);
    }

    #[test]
    fn test_attribute_editing_keeps_order() {
        let mut el = Element::new("p:ph").with_attr("type", "dt").with_attr("idx", 10);
        el.set_attr("type", "ftr");
        el.set_attr("sz", "quarter");
        let keys: Vec<_> = el.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["type", "idx", "sz"]);
        assert_eq!(el.remove_attr("idx"), Some("10".to_string()));
        assert_eq!(el.remove_attr("idx"), None);
    }

    #[test]
    fn test_int_attr_reports_garbage() {
        let el = Element::new("a:gd").with_attr("val", "abc");
        assert!(matches!(el.int_attr("val"), Err(OoxmlError::InvalidValue(_))));
        assert_eq!(el.int_attr("missing").unwrap(), None);
        assert!(matches!(
            el.required_attr("missing"),
            Err(OoxmlError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_insert_before_successor() {
        let mut sp_pr = Element::new("p:spPr")
            .with_child(Element::new("a:xfrm"))
            .with_child(Element::new("a:ln"));
        sp_pr.get_or_insert_child("a:prstGeom", &["a:noFill", "a:solidFill", "a:ln"]);
        let tags: Vec<_> = sp_pr.children().iter().map(Element::tag).collect();
        assert_eq!(tags, vec!["a:xfrm", "a:prstGeom", "a:ln"]);

        // existing child is returned, not duplicated
        sp_pr.get_or_insert_child("a:prstGeom", &["a:ln"]);
        assert_eq!(sp_pr.children().len(), 3);
    }

    #[test]
    fn test_remove_children_counts() {
        let mut av_lst = Element::new("a:avLst")
            .with_child(Element::new("a:gd"))
            .with_child(Element::new("a:gd"))
            .with_child(Element::new("a:extLst"));
        assert_eq!(av_lst.remove_children(&["a:gd"]), 2);
        assert_eq!(av_lst.children().len(), 1);
    }

    #[test]
    fn test_malformed_input_errors() {
        assert!(Element::from_xml("").is_err());
        assert!(Element::from_xml("<a:x><a:y></a:x>").is_err());
    }
}
