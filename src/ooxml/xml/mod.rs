//! In-memory XML tree used by the typed element wrappers.
//!
//! - [`Element`]: mutable element node with parse and serialize support
//! - [`SerializeOptions`]: output configuration (indentation, declaration)
//! - [`ns`]: namespace prefixes and `xmlns` declaration rendering

pub mod element;
pub mod ns;
pub mod writer;

pub use element::Element;
pub use ns::nsdecls;
pub use writer::SerializeOptions;
