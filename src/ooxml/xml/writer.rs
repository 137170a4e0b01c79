//! Serialization of [`Element`] trees.
use crate::common::xml::{escape_attr, escape_text};
use crate::ooxml::xml::Element;

/// Output settings for [`Element::to_xml_with`].
///
/// The default produces compact output with no declaration, which is the form
/// written back into package parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub xml_declaration: bool,
    /// Add `standalone="yes"` to the declaration.
    pub standalone: bool,
}

impl SerializeOptions {
    /// Two-space indentation, one element per line, trailing newline.
    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            ..Self::default()
        }
    }

    /// Declaration with `standalone="yes"`, as Office writes its parts.
    pub fn part() -> Self {
        Self {
            indent: None,
            xml_declaration: true,
            standalone: true,
        }
    }

    /// Builder: set the indent width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}

pub(crate) fn write_element(el: &Element, out: &mut String, options: &SerializeOptions, depth: usize) {
    if let Some(width) = options.indent {
        out.extend(std::iter::repeat_n(' ', width * depth));
    }

    out.push('<');
    out.push_str(el.tag());
    for (key, value) in el.attrs() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if el.children().is_empty() && el.text().is_empty() {
        out.push_str("/>");
    } else {
        out.push('>');
        out.push_str(&escape_text(el.text()));

        if !el.children().is_empty() {
            if options.indent.is_some() {
                out.push('\n');
            }
            for child in el.children() {
                write_element(child, out, options, depth + 1);
            }
            if let Some(width) = options.indent {
                out.extend(std::iter::repeat_n(' ', width * depth));
            }
        }

        out.push_str("</");
        out.push_str(el.tag());
        out.push('>');
    }

    if options.indent.is_some() {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("a:prstGeom")
            .with_attr("prst", "chevron")
            .with_child(
                Element::new("a:avLst").with_child(
                    Element::new("a:gd")
                        .with_attr("name", "adj")
                        .with_attr("fmla", "val 50000"),
                ),
            )
    }

    #[test]
    fn test_pretty_layout() {
        let expected = concat!(
            "<a:prstGeom prst=\"chevron\">\n",
            "  <a:avLst>\n",
            "    <a:gd name=\"adj\" fmla=\"val 50000\"/>\n",
            "  </a:avLst>\n",
            "</a:prstGeom>\n",
        );
        assert_eq!(sample().to_pretty_xml(), expected);
    }

    #[test]
    fn test_text_elements_stay_inline_when_pretty() {
        let el = Element::new("a:r").with_child({
            let mut t = Element::new("a:t");
            t.set_text("A & B");
            t
        });
        assert_eq!(el.to_pretty_xml(), "<a:r>\n  <a:t>A &amp; B</a:t>\n</a:r>\n");
    }

    #[test]
    fn test_part_declaration() {
        let out = Element::new("p:sld").to_xml_with(&SerializeOptions::part());
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><p:sld/>"
        );
    }

    #[test]
    fn test_custom_indent() {
        let out = sample().to_xml_with(&SerializeOptions::default().with_indent(4));
        assert!(out.contains("\n    <a:avLst>\n        <a:gd "));
    }
}
