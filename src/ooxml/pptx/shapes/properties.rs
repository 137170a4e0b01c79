/// Shape properties (`<p:spPr>`): transform, geometry, and fill.
use std::ops::{Deref, DerefMut};

use crate::ooxml::drawings::geometry::{CtPresetGeometry2D, PRST_GEOM};
use crate::ooxml::drawings::xfrm::{Transform2D, XFRM};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::dml::ColorFormat;
use crate::ooxml::xml::Element;

pub const SP_PR: &str = "p:spPr";

const NO_FILL: &str = "a:noFill";
const SOLID_FILL: &str = "a:solidFill";

/// Members of `EG_FillProperties`.
const FILL_TAGS: [&str; 6] = [
    NO_FILL,
    SOLID_FILL,
    "a:gradFill",
    "a:blipFill",
    "a:pattFill",
    "a:grpFill",
];

/// Elements that follow the fill in the `CT_ShapeProperties` sequence.
const FILL_SUCCESSORS: [&str; 7] = [
    "a:ln",
    "a:effectLst",
    "a:effectDag",
    "a:scene3d",
    "a:sp3d",
    "a:extLst",
    "p:extLst",
];

/// View over a `<p:spPr>` element.
#[derive(Debug)]
pub struct CtShapeProperties<E> {
    element: E,
}

impl<E: Deref<Target = Element>> CtShapeProperties<E> {
    /// Wrap `element`, which must be a `<p:spPr>`.
    pub fn new(element: E) -> Result<Self> {
        if !element.is(SP_PR) {
            return Err(OoxmlError::UnknownElement(format!(
                "expected <{SP_PR}>, got <{}>",
                element.tag()
            )));
        }
        Ok(Self { element })
    }

    #[inline]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Position and size, when the shape overrides what it inherits.
    pub fn xfrm(&self) -> Result<Option<Transform2D>> {
        self.element
            .child(XFRM)
            .map(Transform2D::from_element)
            .transpose()
    }

    /// The preset geometry, if any.
    pub fn prst_geom(&self) -> Option<CtPresetGeometry2D<&Element>> {
        self.element
            .child(PRST_GEOM)
            .map(|el| CtPresetGeometry2D::new(el))
            .and_then(Result::ok)
    }

    /// True when fill is explicitly turned off with `<a:noFill>`.
    pub fn has_no_fill(&self) -> bool {
        self.element.child(NO_FILL).is_some()
    }

    /// Color of the solid fill, if the fill is solid.
    pub fn solid_fill(&self) -> Option<ColorFormat<&Element>> {
        self.element
            .child(SOLID_FILL)
            .map(ColorFormat::from_colorchoice_parent)
    }
}

impl<E: DerefMut<Target = Element>> CtShapeProperties<E> {
    /// Set position and size, adding `<a:xfrm>` as the first child if needed.
    pub fn set_xfrm(&mut self, transform: Transform2D) {
        let xfrm = match self.element.position_of(&[XFRM]) {
            Some(index) => &mut self.element.children_mut()[index],
            None => self.element.insert(0, Element::new(XFRM)),
        };
        transform.apply_to(xfrm);
    }

    /// Mutable preset geometry, if any.
    pub fn prst_geom_mut(&mut self) -> Option<CtPresetGeometry2D<&mut Element>> {
        self.element
            .child_mut(PRST_GEOM)
            .map(|el| CtPresetGeometry2D::new(el))
            .and_then(Result::ok)
    }

    /// Make the fill solid, replacing any other fill, and return its color.
    pub fn get_or_change_to_solid_fill(&mut self) -> ColorFormat<&mut Element> {
        if self.element.child(SOLID_FILL).is_none() {
            let index = self.element.position_of(&FILL_TAGS);
            self.element.remove_children(&FILL_TAGS);
            let fill = Element::new(SOLID_FILL);
            match index {
                Some(index) => {
                    self.element.insert(index, fill);
                },
                None => {
                    self.element.insert_before(fill, &FILL_SUCCESSORS);
                },
            }
            log::debug!("changed shape fill to <{SOLID_FILL}>");
        }

        let fill = self
            .element
            .get_or_insert_child(SOLID_FILL, &FILL_SUCCESSORS);
        ColorFormat::from_colorchoice_parent(fill)
    }
}
