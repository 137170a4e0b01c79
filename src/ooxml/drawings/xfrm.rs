//! Two-dimensional transform (`<a:xfrm>`): offset and extents in EMUs.
use std::fmt;
use std::fmt::Write as _;

use crate::ooxml::error::Result;
use crate::ooxml::xml::Element;

pub const XFRM: &str = "a:xfrm";
pub const OFF: &str = "a:off";
pub const EXT: &str = "a:ext";

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform2D {
    /// X position (left edge)
    pub x: i64,
    /// Y position (top edge)
    pub y: i64,
    /// Width
    pub cx: i64,
    /// Height
    pub cy: i64,
}

impl Transform2D {
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    /// Read an `<a:xfrm>` element. Missing `off`/`ext` children read as zero.
    pub fn from_element(xfrm: &Element) -> Result<Self> {
        let mut transform = Self::default();
        if let Some(off) = xfrm.child(OFF) {
            transform.x = off.int_attr("x")?.unwrap_or(0);
            transform.y = off.int_attr("y")?.unwrap_or(0);
        }
        if let Some(ext) = xfrm.child(EXT) {
            transform.cx = ext.int_attr("cx")?.unwrap_or(0);
            transform.cy = ext.int_attr("cy")?.unwrap_or(0);
        }
        Ok(transform)
    }

    /// Write offset and extents into an existing `<a:xfrm>` element.
    pub fn apply_to(&self, xfrm: &mut Element) {
        let off = xfrm.get_or_insert_child(OFF, &[EXT]);
        off.set_attr("x", self.x);
        off.set_attr("y", self.y);
        let ext = xfrm.get_or_add_child(EXT);
        ext.set_attr("cx", self.cx);
        ext.set_attr("cy", self.cy);
    }
}

/// Write `<a:xfrm><a:off/><a:ext/></a:xfrm>` markup.
pub fn write_a_xfrm_off_ext(xml: &mut String, x: i64, y: i64, cx: i64, cy: i64) -> fmt::Result {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{x}" y="{y}"/>"#)?;
    write!(xml, r#"<a:ext cx="{cx}" cy="{cy}"/>"#)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let mut xml = String::new();
        write_a_xfrm_off_ext(&mut xml, 111, 222, 333, 444).unwrap();
        assert_eq!(
            xml,
            r#"<a:xfrm><a:off x="111" y="222"/><a:ext cx="333" cy="444"/></a:xfrm>"#
        );
        let el = Element::from_xml(&xml).unwrap();
        assert_eq!(
            Transform2D::from_element(&el).unwrap(),
            Transform2D::new(111, 222, 333, 444)
        );
    }

    #[test]
    fn test_apply_to_empty_xfrm_orders_children() {
        let mut el = Element::new(XFRM);
        Transform2D::new(1, 2, 3, 4).apply_to(&mut el);
        assert_eq!(
            el.to_xml(),
            r#"<a:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/></a:xfrm>"#
        );
    }

    #[test]
    fn test_missing_children_read_as_zero() {
        let el = Element::new(XFRM);
        assert_eq!(Transform2D::from_element(&el).unwrap(), Transform2D::default());
    }
}
