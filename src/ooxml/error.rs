/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A property was read or written on a variant that does not carry it,
    /// e.g. `.rgb` on a scheme color.
    #[error("no .{property} property on color type '{color_type}'")]
    UnsupportedProperty {
        property: &'static str,
        color_type: String,
    },

    /// Element tag not present in a closed dispatch table
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Value rejected by validation
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Required attribute is absent
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
