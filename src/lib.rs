//! pptx-oxml - typed access to PresentationML and DrawingML markup
//!
//! This library exposes the XML inside PowerPoint parts through small typed
//! views: colors with their brightness adjustments, shapes with their preset
//! geometry, and builders that produce canonical shape markup.
//!
//! # Features
//!
//! - **Color resolution**: RGB, theme, HSL, preset, system, and scRGB colors
//! - **Brightness**: tint and shade read from and written to `lumMod`/`lumOff`
//! - **Shapes**: autoshape / placeholder / text box classification
//! - **Preset geometry**: adjustment guide access and atomic rewrite
//! - **Builders**: new autoshape, placeholder, and text box `<p:sp>` elements
//!
//! # Example - Recoloring a fill
//!
//! ```
//! use pptx_oxml::common::RGBColor;
//! use pptx_oxml::ooxml::drawings::{ColorType, ThemeColor};
//! use pptx_oxml::ooxml::pptx::dml::ColorFormat;
//! use pptx_oxml::ooxml::xml::Element;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut fill = Element::from_xml(
//!     r#"<a:solidFill xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:schemeClr val="accent1"/></a:solidFill>"#,
//! )?;
//!
//! let mut color = ColorFormat::from_colorchoice_parent(&mut fill);
//! assert_eq!(color.theme_color()?, ThemeColor::Accent1);
//!
//! color.set_brightness(-0.25)?;
//! color.set_rgb(RGBColor::new(0x3C, 0x2F, 0x80));
//! assert_eq!(color.color_type()?, Some(ColorType::Rgb));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a shape
//!
//! ```
//! use pptx_oxml::ooxml::drawings::AutoShapeType;
//! use pptx_oxml::ooxml::pptx::shapes::CtShape;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut sp = CtShape::new_autoshape_sp(2, "Chevron 1", AutoShapeType::Chevron, 0, 0, 914400, 457200)?;
//!
//! let mut shape = CtShape::new(&mut sp)?;
//! if let Some(mut prst_geom) = shape.prst_geom_mut() {
//!     prst_geom.rewrite_guides(&[("adj", 30000)]);
//! }
//! assert!(sp.to_xml().contains(r#"<a:gd name="adj" fmla="val 30000"/>"#));
//! # Ok(())
//! # }
//! ```

/// Types shared by every layer: RGB values and XML escaping.
pub mod common;

/// OOXML markup: element tree, DrawingML, and PresentationML views.
pub mod ooxml;
