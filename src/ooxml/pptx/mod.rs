//! PowerPoint (.pptx) presentation markup.
//!
//! Typed access to PresentationML shape elements and the DrawingML color
//! settings they carry:
//!
//! - `shapes`: `<p:sp>` classification, shape properties, and builders
//! - `dml`: color resolution for fills, lines, and fonts
//!
//! # Example
//!
//! ```rust
//! use pptx_oxml::common::RGBColor;
//! use pptx_oxml::ooxml::pptx::shapes::CtShape;
//!
//! let mut sp = CtShape::new_textbox_sp(9, "TextBox 8", 111, 222, 333, 444)?;
//! let mut shape = CtShape::new(&mut sp)?;
//! assert!(shape.is_textbox());
//!
//! shape
//!     .get_or_add_sp_pr()?
//!     .get_or_change_to_solid_fill()
//!     .set_rgb(RGBColor::new(0x3C, 0x2F, 0x80));
//! # Ok::<(), pptx_oxml::ooxml::OoxmlError>(())
//! ```

pub mod dml;
pub mod shapes;
