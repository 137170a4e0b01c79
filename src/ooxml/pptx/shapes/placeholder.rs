/// Placeholder attribute enumerations (`<p:ph>`).
///
/// Each enum round-trips through its XML token and has the schema default as
/// its `Default`, so writers can omit attributes that equal the default.
use std::fmt;

/// Kind of content a placeholder is reserved for (`ST_PlaceholderType`).
///
/// Corresponds to the VBA `PpPlaceholderType` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderType {
    Title,
    Body,
    CenterTitle,
    Subtitle,
    Date,
    SlideNumber,
    Footer,
    Header,
    /// Generic content placeholder; the schema default
    Object,
    Chart,
    Table,
    ClipArt,
    Diagram,
    Media,
    SlideImage,
    Picture,
}

impl PlaceholderType {
    /// Convert to the `type` attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
            Self::CenterTitle => "ctrTitle",
            Self::Subtitle => "subTitle",
            Self::Date => "dt",
            Self::SlideNumber => "sldNum",
            Self::Footer => "ftr",
            Self::Header => "hdr",
            Self::Object => "obj",
            Self::Chart => "chart",
            Self::Table => "tbl",
            Self::ClipArt => "clipArt",
            Self::Diagram => "dgm",
            Self::Media => "media",
            Self::SlideImage => "sldImg",
            Self::Picture => "pic",
        }
    }

    /// Parse the `type` attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "title" => Some(Self::Title),
            "body" => Some(Self::Body),
            "ctrTitle" => Some(Self::CenterTitle),
            "subTitle" => Some(Self::Subtitle),
            "dt" => Some(Self::Date),
            "sldNum" => Some(Self::SlideNumber),
            "ftr" => Some(Self::Footer),
            "hdr" => Some(Self::Header),
            "obj" => Some(Self::Object),
            "chart" => Some(Self::Chart),
            "tbl" => Some(Self::Table),
            "clipArt" => Some(Self::ClipArt),
            "dgm" => Some(Self::Diagram),
            "media" => Some(Self::Media),
            "sldImg" => Some(Self::SlideImage),
            "pic" => Some(Self::Picture),
            _ => None,
        }
    }

    /// Placeholders of these kinds are created with an empty text body.
    #[inline]
    pub const fn has_text_frame(self) -> bool {
        matches!(
            self,
            Self::Title | Self::CenterTitle | Self::Subtitle | Self::Body | Self::Object
        )
    }
}

impl Default for PlaceholderType {
    #[inline]
    fn default() -> Self {
        Self::Object
    }
}

impl fmt::Display for PlaceholderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Text orientation of a placeholder (`ST_Direction`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Horizontal => "horz",
            Self::Vertical => "vert",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "horz" => Some(Self::Horizontal),
            "vert" => Some(Self::Vertical),
            _ => None,
        }
    }
}

impl Default for Direction {
    #[inline]
    fn default() -> Self {
        Self::Horizontal
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Size class of a placeholder relative to the master (`ST_PlaceholderSize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderSize {
    Full,
    Half,
    Quarter,
}

impl PlaceholderSize {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Quarter => "quarter",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Self::Full),
            "half" => Some(Self::Half),
            "quarter" => Some(Self::Quarter),
            _ => None,
        }
    }
}

impl Default for PlaceholderSize {
    #[inline]
    fn default() -> Self {
        Self::Full
    }
}

impl fmt::Display for PlaceholderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_type_conversion() {
        assert_eq!(PlaceholderType::CenterTitle.to_xml(), "ctrTitle");
        assert_eq!(PlaceholderType::from_xml("sldNum"), Some(PlaceholderType::SlideNumber));
        assert_eq!(PlaceholderType::from_xml("invalid"), None);
        assert_eq!(PlaceholderType::default(), PlaceholderType::Object);
    }

    #[test]
    fn test_text_frame_kinds() {
        assert!(PlaceholderType::Title.has_text_frame());
        assert!(PlaceholderType::Object.has_text_frame());
        assert!(!PlaceholderType::Date.has_text_frame());
        assert!(!PlaceholderType::Table.has_text_frame());
    }

    #[test]
    fn test_direction_and_size_conversion() {
        assert_eq!(Direction::from_xml("vert"), Some(Direction::Vertical));
        assert_eq!(Direction::default().to_xml(), "horz");
        assert_eq!(PlaceholderSize::from_xml("quarter"), Some(PlaceholderSize::Quarter));
        assert_eq!(PlaceholderSize::default(), PlaceholderSize::Full);
        assert_eq!(PlaceholderSize::from_xml("tiny"), None);
    }
}
