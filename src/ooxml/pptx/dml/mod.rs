//! DrawingML objects used by presentation shapes, [`ColorFormat`] being the
//! most prominent.

pub mod color;

pub use color::{Color, ColorFormat, HslValue, ScRgbValue, SystemColorValue};
