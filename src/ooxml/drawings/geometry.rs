//! Preset geometry (`<a:prstGeom>`) and its adjustment guides.
use std::ops::{Deref, DerefMut};

use crate::ooxml::drawings::preset::AutoShapeType;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xml::Element;

pub const PRST_GEOM: &str = "a:prstGeom";
pub const AV_LST: &str = "a:avLst";
pub const GD: &str = "a:gd";

/// One adjustment guide, e.g. `<a:gd name="adj1" fmla="val 50000"/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeomGuide {
    /// Guide name such as "adj" or "adj2"
    pub name: String,
    /// Guide formula such as "val 50000"
    pub fmla: String,
}

impl GeomGuide {
    /// Guide with a constant value formula (`"val <value>"`).
    pub fn constant(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            fmla: format!("val {value}"),
        }
    }

    fn from_element(gd: &Element) -> Result<Self> {
        Ok(Self {
            name: gd.required_attr("name")?.to_string(),
            fmla: gd.required_attr("fmla")?.to_string(),
        })
    }

    fn to_element(&self) -> Element {
        Element::new(GD)
            .with_attr("name", &self.name)
            .with_attr("fmla", &self.fmla)
    }
}

/// View over an `<a:prstGeom>` element.
///
/// `E` is `&Element` for read access or `&mut Element` for editing.
#[derive(Debug)]
pub struct CtPresetGeometry2D<E> {
    element: E,
}

impl<E: Deref<Target = Element>> CtPresetGeometry2D<E> {
    /// Wrap `element`, which must be an `<a:prstGeom>`.
    pub fn new(element: E) -> Result<Self> {
        if !element.is(PRST_GEOM) {
            return Err(OoxmlError::UnknownElement(format!(
                "expected <{PRST_GEOM}>, got <{}>",
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

    /// Raw `prst` token.
    pub fn prst_token(&self) -> Result<&str> {
        self.element.required_attr("prst")
    }

    /// The preset kind; `None` for a token outside `ST_ShapeType`.
    pub fn prst(&self) -> Result<Option<AutoShapeType>> {
        Ok(AutoShapeType::from_xml(self.prst_token()?))
    }

    /// Guides in document order. Empty when there is no `<a:avLst>`.
    pub fn gd_lst(&self) -> Result<Vec<GeomGuide>> {
        match self.element.child(AV_LST) {
            None => Ok(Vec::new()),
            Some(av_lst) => av_lst.children_named(GD).map(GeomGuide::from_element).collect(),
        }
    }
}

impl<E: DerefMut<Target = Element>> CtPresetGeometry2D<E> {
    /// Set the preset kind.
    pub fn set_prst(&mut self, prst: AutoShapeType) {
        self.element.set_attr("prst", prst.to_xml());
    }

    /// Replace every guide with `guides`, each written as `"val <value>"`.
    ///
    /// Existing guides are discarded even when names repeat.
    pub fn rewrite_guides<S: AsRef<str>>(&mut self, guides: &[(S, i64)]) {
        let av_lst = self.element.get_or_insert_child(AV_LST, &[]);
        av_lst.remove_children(&[GD]);
        for (name, value) in guides {
            av_lst.append(GeomGuide::constant(name.as_ref(), *value).to_element());
        }
        log::debug!("rewrote preset geometry guides ({} total)", guides.len());
    }

    /// Replace every guide with `guides` as given.
    pub fn set_gd_lst(&mut self, guides: &[GeomGuide]) {
        let av_lst = self.element.get_or_insert_child(AV_LST, &[]);
        av_lst.remove_children(&[GD]);
        for guide in guides {
            av_lst.append(guide.to_element());
        }
    }
}

/// A fresh `<a:prstGeom prst="..."><a:avLst/></a:prstGeom>`.
pub fn new_prst_geom(prst: AutoShapeType) -> Element {
    Element::new(PRST_GEOM)
        .with_attr("prst", prst.to_xml())
        .with_child(Element::new(AV_LST))
}
