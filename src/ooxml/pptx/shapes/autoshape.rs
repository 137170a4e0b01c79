/// Shape elements (`<p:sp>`): classification, accessors, and builders.
///
/// A `<p:sp>` can be an autoshape, a placeholder, or a text box. The roles are
/// read off independent markers in the non-visual properties and geometry, so
/// nothing stops a document from setting more than one of them.
use std::fmt::Write as _;
use std::ops::{Deref, DerefMut};

use crate::common::xml::escape_attr;
use crate::ooxml::drawings::geometry::{CtPresetGeometry2D, PRST_GEOM};
use crate::ooxml::drawings::preset::AutoShapeType;
use crate::ooxml::drawings::xfrm::write_a_xfrm_off_ext;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::shapes::placeholder::{Direction, PlaceholderSize, PlaceholderType};
use crate::ooxml::pptx::shapes::properties::{CtShapeProperties, SP_PR};
use crate::ooxml::xml::{Element, nsdecls};

pub const SP: &str = "p:sp";
const NV_SP_PR: &str = "p:nvSpPr";
const C_NV_PR: &str = "p:cNvPr";
const C_NV_SP_PR: &str = "p:cNvSpPr";
const NV_PR: &str = "p:nvPr";
const PH: &str = "p:ph";
const TX_BODY: &str = "p:txBody";

/// Role of a shape, resolved with placeholder first, then text box, then
/// autoshape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Placeholder,
    TextBox,
    AutoShape,
    /// Custom geometry or no geometry at all
    Freeform,
}

/// View over a `<p:sp>` element.
///
/// `E` is `&Element` for read access or `&mut Element` for editing. The
/// builders live on `CtShape<Element>` and return the new element.
///
/// # Examples
///
/// ```rust
/// use pptx_oxml::ooxml::drawings::AutoShapeType;
/// use pptx_oxml::ooxml::pptx::shapes::CtShape;
///
/// let sp = CtShape::new_autoshape_sp(2, "Chevron 1", AutoShapeType::Chevron, 0, 0, 100, 100).unwrap();
/// let shape = CtShape::new(&sp).unwrap();
/// assert!(shape.is_autoshape());
/// assert!(!shape.is_placeholder());
/// assert_eq!(shape.prst().unwrap(), Some(AutoShapeType::Chevron));
/// ```
#[derive(Debug)]
pub struct CtShape<E> {
    element: E,
}

impl<E: Deref<Target = Element>> CtShape<E> {
    /// Wrap `element`, which must be a `<p:sp>`.
    pub fn new(element: E) -> Result<Self> {
        if !element.is(SP) {
            return Err(OoxmlError::UnknownElement(format!(
                "expected <{SP}>, got <{}>",
                element.tag()
            )));
        }
        Ok(Self { element })
    }

    /// The wrapped element.
    #[inline]
    pub fn element(&self) -> &Element {
        &self.element
    }

    fn c_nv_pr(&self) -> Result<&Element> {
        self.element
            .find(&[NV_SP_PR, C_NV_PR])
            .ok_or_else(|| OoxmlError::InvalidFormat(format!("<{SP}> has no <{C_NV_PR}>")))
    }

    /// The `<p:ph>` marker, present only on placeholders.
    pub fn ph(&self) -> Option<&Element> {
        self.element.find(&[NV_SP_PR, NV_PR, PH])
    }

    /// Shape id, unique within the slide.
    pub fn shape_id(&self) -> Result<u32> {
        let raw = self.c_nv_pr()?.required_attr("id")?;
        raw.parse()
            .map_err(|_| OoxmlError::InvalidValue(format!("shape id '{raw}' is not an unsigned integer")))
    }

    /// Shape name, e.g. "Rounded Rectangle 8".
    pub fn name(&self) -> Result<&str> {
        self.c_nv_pr()?.required_attr("name")
    }

    /// True for a shape drawn from a preset outline that is not a text box.
    pub fn is_autoshape(&self) -> bool {
        self.prst_geom_element().is_some() && !self.is_textbox()
    }

    /// True when the shape carries a `<p:ph>` placeholder marker.
    pub fn is_placeholder(&self) -> bool {
        self.ph().is_some()
    }

    /// True when `<p:cNvSpPr txBox="1"/>` marks the shape as a text box.
    pub fn is_textbox(&self) -> bool {
        matches!(
            self.element
                .find(&[NV_SP_PR, C_NV_SP_PR])
                .and_then(|el| el.attr("txBox")),
            Some("1" | "true")
        )
    }

    /// True when the shape has a `<p:txBody>`.
    pub fn has_text_frame(&self) -> bool {
        self.element.child(TX_BODY).is_some()
    }

    /// The role of this shape.
    pub fn shape_kind(&self) -> ShapeKind {
        if self.is_placeholder() {
            ShapeKind::Placeholder
        } else if self.is_textbox() {
            ShapeKind::TextBox
        } else if self.is_autoshape() {
            ShapeKind::AutoShape
        } else {
            ShapeKind::Freeform
        }
    }

    fn prst_geom_element(&self) -> Option<&Element> {
        self.element.find(&[SP_PR, PRST_GEOM])
    }

    /// The `<a:prstGeom>` element, or `None` for placeholders and freeforms.
    pub fn prst_geom(&self) -> Option<CtPresetGeometry2D<&Element>> {
        self.prst_geom_element()
            .map(|el| CtPresetGeometry2D::new(el))
            .and_then(Result::ok)
    }

    /// Preset kind of the outline, or `None` when there is no preset geometry.
    pub fn prst(&self) -> Result<Option<AutoShapeType>> {
        match self.prst_geom() {
            Some(prst_geom) => prst_geom.prst(),
            None => Ok(None),
        }
    }

    /// Shape properties, when present.
    pub fn sp_pr(&self) -> Option<CtShapeProperties<&Element>> {
        self.element
            .child(SP_PR)
            .map(|el| CtShapeProperties::new(el))
            .and_then(Result::ok)
    }

    /// Placeholder kind; `None` unless this is a placeholder.
    pub fn ph_type(&self) -> Result<Option<PlaceholderType>> {
        self.ph_attr("type", PlaceholderType::from_xml)
    }

    /// Placeholder text orientation; `None` unless this is a placeholder.
    pub fn ph_orient(&self) -> Result<Option<Direction>> {
        self.ph_attr("orient", Direction::from_xml)
    }

    /// Placeholder size class; `None` unless this is a placeholder.
    pub fn ph_sz(&self) -> Result<Option<PlaceholderSize>> {
        self.ph_attr("sz", PlaceholderSize::from_xml)
    }

    /// Placeholder index; `None` unless this is a placeholder.
    pub fn ph_idx(&self) -> Result<Option<u32>> {
        let Some(ph) = self.ph() else {
            return Ok(None);
        };
        match ph.attr("idx") {
            None => Ok(Some(0)),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                OoxmlError::InvalidValue(format!("placeholder idx '{raw}' is not an unsigned integer"))
            }),
        }
    }

    /// Read an enumerated `<p:ph>` attribute, falling back to the schema
    /// default when the attribute is absent.
    fn ph_attr<T: Default>(&self, name: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>> {
        let Some(ph) = self.ph() else {
            return Ok(None);
        };
        match ph.attr(name) {
            None => Ok(Some(T::default())),
            Some(raw) => parse(raw).map(Some).ok_or_else(|| {
                OoxmlError::InvalidValue(format!("invalid placeholder {name} '{raw}'"))
            }),
        }
    }
}

impl<E: DerefMut<Target = Element>> CtShape<E> {
    /// Mutable preset geometry, e.g. to rewrite its guides.
    pub fn prst_geom_mut(&mut self) -> Option<CtPresetGeometry2D<&mut Element>> {
        self.element
            .find_mut(&[SP_PR, PRST_GEOM])
            .map(|el| CtPresetGeometry2D::new(el))
            .and_then(Result::ok)
    }

    /// Shape properties, added in schema position when missing.
    pub fn get_or_add_sp_pr(&mut self) -> Result<CtShapeProperties<&mut Element>> {
        let sp_pr = self
            .element
            .get_or_insert_child(SP_PR, &["p:style", TX_BODY, "p:extLst"]);
        CtShapeProperties::new(sp_pr)
    }
}

impl CtShape<Element> {
    /// Build a new autoshape `<p:sp>` with the default theme style and a
    /// centered, empty text body.
    pub fn new_autoshape_sp(
        id: u32,
        name: &str,
        prst: AutoShapeType,
        left: i64,
        top: i64,
        width: i64,
        height: i64,
    ) -> Result<Element> {
        let mut xml = String::with_capacity(768);
        write!(xml, "<p:sp {}>", nsdecls(&["a", "p"]))?;
        write_nv_sp_pr(&mut xml, id, name, "<p:cNvSpPr/>", "<p:nvPr/>")?;

        xml.push_str("<p:spPr>");
        write_a_xfrm_off_ext(&mut xml, left, top, width, height)?;
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, prst.to_xml())?;
        xml.push_str("</p:spPr>");

        xml.push_str("<p:style>");
        xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
        xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
        xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
        xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
        xml.push_str("</p:style>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
        xml.push_str("<a:lstStyle/>");
        xml.push_str(r#"<a:p><a:pPr algn="ctr"/></a:p>"#);
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        log::debug!("built autoshape sp id={id} prst={prst}");
        Element::from_xml(&xml)
    }

    /// Build a new placeholder `<p:sp>`.
    ///
    /// `type`, `orient`, `sz`, and `idx` are written only when they differ
    /// from the schema defaults (obj, horz, full, 0). Text-bearing kinds get
    /// an empty text body.
    pub fn new_placeholder_sp(
        id: u32,
        name: &str,
        ph_type: PlaceholderType,
        orient: Direction,
        sz: PlaceholderSize,
        idx: u32,
    ) -> Result<Element> {
        let mut ph = String::from("<p:ph");
        if ph_type != PlaceholderType::default() {
            write!(ph, r#" type="{}""#, ph_type.to_xml())?;
        }
        if orient != Direction::default() {
            write!(ph, r#" orient="{}""#, orient.to_xml())?;
        }
        if sz != PlaceholderSize::default() {
            write!(ph, r#" sz="{}""#, sz.to_xml())?;
        }
        if idx != 0 {
            write!(ph, r#" idx="{idx}""#)?;
        }
        ph.push_str("/>");

        let mut xml = String::with_capacity(512);
        write!(xml, "<p:sp {}>", nsdecls(&["a", "p"]))?;
        write_nv_sp_pr(
            &mut xml,
            id,
            name,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
            &format!("<p:nvPr>{ph}</p:nvPr>"),
        )?;
        xml.push_str("<p:spPr/>");
        if ph_type.has_text_frame() {
            xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>");
        }
        xml.push_str("</p:sp>");

        log::debug!("built placeholder sp id={id} type={ph_type} idx={idx}");
        Element::from_xml(&xml)
    }

    /// Build a new text box `<p:sp>`: unfilled rectangle whose body resizes
    /// to fit its text.
    pub fn new_textbox_sp(
        id: u32,
        name: &str,
        left: i64,
        top: i64,
        width: i64,
        height: i64,
    ) -> Result<Element> {
        let mut xml = String::with_capacity(512);
        write!(xml, "<p:sp {}>", nsdecls(&["a", "p"]))?;
        write_nv_sp_pr(&mut xml, id, name, r#"<p:cNvSpPr txBox="1"/>"#, "<p:nvPr/>")?;

        xml.push_str("<p:spPr>");
        write_a_xfrm_off_ext(&mut xml, left, top, width, height)?;
        write!(
            xml,
            r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
            AutoShapeType::Rectangle.to_xml()
        )?;
        xml.push_str("<a:noFill/>");
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="none"><a:spAutoFit/></a:bodyPr>"#);
        xml.push_str("<a:lstStyle/><a:p/>");
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        log::debug!("built textbox sp id={id}");
        Element::from_xml(&xml)
    }
}

fn write_nv_sp_pr(
    xml: &mut String,
    id: u32,
    name: &str,
    c_nv_sp_pr: &str,
    nv_pr: &str,
) -> std::fmt::Result {
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, id, escape_attr(name))?;
    xml.push_str(c_nv_sp_pr);
    xml.push_str(nv_pr);
    xml.push_str("</p:nvSpPr>");
    Ok(())
}
