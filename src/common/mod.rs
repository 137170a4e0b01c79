//! Common types and utilities shared across the markup layers.

// Submodule declarations
pub mod style;
pub mod xml;

// Re-exports for convenience
pub use style::RGBColor;
