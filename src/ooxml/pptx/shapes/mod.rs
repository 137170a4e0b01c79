/// Shapes module for PowerPoint presentations.
///
/// This module provides typed views over `<p:sp>` elements:
/// - Classification into autoshape, placeholder, and text box
/// - Builders for new autoshapes, placeholders, and text boxes
/// - Shape properties (transform, preset geometry, solid fill)
pub mod autoshape;
pub mod placeholder;
pub mod properties;

pub use autoshape::{CtShape, ShapeKind};
pub use placeholder::{Direction, PlaceholderSize, PlaceholderType};
pub use properties::CtShapeProperties;
