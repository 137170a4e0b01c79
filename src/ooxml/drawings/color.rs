//! DrawingML color elements (`EG_ColorChoice`) and their transforms.
//!
//! A color choice is one of six sibling elements placed inside a parent such as
//! `<a:solidFill>` or `<a:fgClr>`. Brightness is carried by `<a:lumMod>` and
//! `<a:lumOff>` transform children of the color element.
use std::fmt;

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xml::Element;

pub const SCRGB_CLR: &str = "a:scrgbClr";
pub const SRGB_CLR: &str = "a:srgbClr";
pub const HSL_CLR: &str = "a:hslClr";
pub const SYS_CLR: &str = "a:sysClr";
pub const SCHEME_CLR: &str = "a:schemeClr";
pub const PRST_CLR: &str = "a:prstClr";

pub const LUM_MOD: &str = "a:lumMod";
pub const LUM_OFF: &str = "a:lumOff";

/// Members of `EG_ColorChoice`, in schema order.
pub const COLOR_CHOICE_TAGS: [&str; 6] = [SCRGB_CLR, SRGB_CLR, HSL_CLR, SYS_CLR, SCHEME_CLR, PRST_CLR];

/// One hundred percent in `ST_Percentage` units.
pub const PERCENT_SCALE: f64 = 100_000.0;

/// The way a color is specified.
///
/// Corresponds to the VBA `MsoColorType` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// Explicit RGB value (`a:srgbClr`)
    Rgb,
    /// Hue, saturation, luminance (`a:hslClr`)
    Hsl,
    /// Named preset such as "coral" (`a:prstClr`)
    Preset,
    /// Theme slot such as accent1 (`a:schemeClr`)
    Scheme,
    /// Linear RGB percentages (`a:scrgbClr`)
    ScRgb,
    /// Operating system color (`a:sysClr`)
    System,
}

impl ColorType {
    /// Map a color element tag to its type. Closed lookup: anything outside
    /// `EG_ColorChoice` is `None`.
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            SRGB_CLR => Some(Self::Rgb),
            HSL_CLR => Some(Self::Hsl),
            PRST_CLR => Some(Self::Preset),
            SCHEME_CLR => Some(Self::Scheme),
            SCRGB_CLR => Some(Self::ScRgb),
            SYS_CLR => Some(Self::System),
            _ => None,
        }
    }

    /// Element tag that carries this color type.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Rgb => SRGB_CLR,
            Self::Hsl => HSL_CLR,
            Self::Preset => PRST_CLR,
            Self::Scheme => SCHEME_CLR,
            Self::ScRgb => SCRGB_CLR,
            Self::System => SYS_CLR,
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Preset => "PRESET",
            Self::Scheme => "SCHEME",
            Self::ScRgb => "SCRGB",
            Self::System => "SYSTEM",
        };
        f.write_str(name)
    }
}

/// Theme color slot referenced by `<a:schemeClr val="..."/>`.
///
/// Corresponds to the VBA `MsoThemeColorIndex` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Background1,
    Background2,
    Dark1,
    Dark2,
    FollowedHyperlink,
    Hyperlink,
    Light1,
    Light2,
    /// Placeholder color, resolved from the referencing style
    PlaceholderColor,
    Text1,
    Text2,
}

impl ThemeColor {
    /// XML token for this slot.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Background1 => "bg1",
            Self::Background2 => "bg2",
            Self::Dark1 => "dk1",
            Self::Dark2 => "dk2",
            Self::FollowedHyperlink => "folHlink",
            Self::Hyperlink => "hlink",
            Self::Light1 => "lt1",
            Self::Light2 => "lt2",
            Self::PlaceholderColor => "phClr",
            Self::Text1 => "tx1",
            Self::Text2 => "tx2",
        }
    }

    /// Parse an XML token. Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "accent1" => Some(Self::Accent1),
            "accent2" => Some(Self::Accent2),
            "accent3" => Some(Self::Accent3),
            "accent4" => Some(Self::Accent4),
            "accent5" => Some(Self::Accent5),
            "accent6" => Some(Self::Accent6),
            "bg1" => Some(Self::Background1),
            "bg2" => Some(Self::Background2),
            "dk1" => Some(Self::Dark1),
            "dk2" => Some(Self::Dark2),
            "folHlink" => Some(Self::FollowedHyperlink),
            "hlink" => Some(Self::Hyperlink),
            "lt1" => Some(Self::Light1),
            "lt2" => Some(Self::Light2),
            "phClr" => Some(Self::PlaceholderColor),
            "tx1" => Some(Self::Text1),
            "tx2" => Some(Self::Text2),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Parse an `ST_Percentage` value into thousandths of a percent.
///
/// Accepts the transitional integer form (`"25000"`) and the strict
/// percent form (`"25%"`, `"12.5%"`).
pub fn parse_percentage(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    let invalid = || OoxmlError::InvalidValue(format!("invalid percentage value '{raw}'"));

    match raw.strip_suffix('%') {
        Some(percent) => {
            let value: f64 = percent.trim().parse().map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
            Ok((value * 1000.0).round() as i64)
        },
        None => raw.parse::<i64>().map_err(|_| invalid()),
    }
}

/// Read a percentage-valued `val` attribute of the first `tag` child.
fn percentage_child(color: &Element, tag: &str) -> Result<Option<i64>> {
    match color.child(tag) {
        None => Ok(None),
        Some(child) => parse_percentage(child.required_attr("val")?).map(Some),
    }
}

/// `val` of the `<a:lumMod>` child, if present.
#[inline]
pub fn lum_mod(color: &Element) -> Result<Option<i64>> {
    percentage_child(color, LUM_MOD)
}

/// `val` of the `<a:lumOff>` child, if present.
#[inline]
pub fn lum_off(color: &Element) -> Result<Option<i64>> {
    percentage_child(color, LUM_OFF)
}

/// Remove every luminance transform from a color element.
pub fn clear_lum_mod_lum_off(color: &mut Element) {
    color.remove_children(&[LUM_MOD, LUM_OFF]);
}

/// Append an `<a:lumMod>` with `fraction` (1.0 == 100%).
pub fn add_lum_mod(color: &mut Element, fraction: f64) -> &mut Element {
    color.append(Element::new(LUM_MOD).with_attr("val", to_percentage(fraction)))
}

/// Append an `<a:lumOff>` with `fraction` (1.0 == 100%).
pub fn add_lum_off(color: &mut Element, fraction: f64) -> &mut Element {
    color.append(Element::new(LUM_OFF).with_attr("val", to_percentage(fraction)))
}

#[inline]
fn to_percentage(fraction: f64) -> i64 {
    (fraction * PERCENT_SCALE).round() as i64
}

/// The color choice element inside `parent`, if any.
#[inline]
pub fn color_choice(parent: &Element) -> Option<&Element> {
    parent.first_child_of(&COLOR_CHOICE_TAGS)
}

/// Mutable form of [`color_choice`].
#[inline]
pub fn color_choice_mut(parent: &mut Element) -> Option<&mut Element> {
    parent.first_child_of_mut(&COLOR_CHOICE_TAGS)
}

/// Replace whatever color choice `parent` holds with a new, empty element of
/// `color_type` and return it. Transforms on the old color do not carry over.
pub fn change_color_choice(parent: &mut Element, color_type: ColorType) -> &mut Element {
    let index = parent.position_of(&COLOR_CHOICE_TAGS).unwrap_or(0);
    let removed = parent.remove_children(&COLOR_CHOICE_TAGS);
    log::debug!(
        "<{}>: replaced {} color element(s) with <{}>",
        parent.tag(),
        removed,
        color_type.tag()
    );
    parent.insert(index, Element::new(color_type.tag()))
}
