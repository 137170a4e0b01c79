//! DrawingML (DML) support for OOXML documents.
//!
//! DrawingML is the namespace shared by all Office formats for drawing
//! content. This module covers the pieces presentation shapes are built from:
//! color choices, preset geometry, and transforms.

pub mod color;
pub mod geometry;
pub mod preset;
pub mod xfrm;

pub use color::{ColorType, ThemeColor};
pub use geometry::{CtPresetGeometry2D, GeomGuide};
pub use preset::AutoShapeType;
pub use xfrm::Transform2D;
