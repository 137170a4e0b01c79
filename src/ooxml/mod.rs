//! Office Open XML (OOXML) markup support.
//!
//! Typed views borrow an element of an in-memory tree and read or edit it in
//! place, so unknown markup around them survives untouched.
//!
//! # Architecture
//!
//! 1. **XML layer** (`xml`): mutable element tree, namespaces, serialization
//! 2. **DrawingML** (`drawings`): color choices, preset geometry, transforms
//! 3. **PresentationML** (`pptx`): shapes and color formats built on the above
//! 4. **Errors** (`error`): one error type for every layer
pub mod drawings;
pub mod error;
pub mod pptx;
pub mod xml;

// Re-export error types
pub use error::{OoxmlError, Result};
