//! XML character escaping shared by the element tree and the fragment builders.

mod escape;

pub use escape::{escape_attr, escape_text, unescape_xml};
