use std::fmt;
use std::str::FromStr;

use crate::ooxml::error::{OoxmlError, Result};

/// RGB color representation.
///
/// Immutable value object holding red, green, and blue components, each in
/// the range 0-255. Its canonical text form is six upper-case hex digits,
/// the form used by the `val` attribute of `<a:srgbClr>`.
///
/// # Examples
///
/// ```rust
/// use pptx_oxml::common::RGBColor;
///
/// let orange = RGBColor::new(255, 128, 0);
/// assert_eq!(orange.to_string(), "FF8000");
///
/// let parsed: RGBColor = "3C2F80".parse().unwrap();
/// assert_eq!(parsed, RGBColor::new(0x3C, 0x2F, 0x80));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color from in-range components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from wide integer components.
    ///
    /// Fails with [`OoxmlError::InvalidValue`] when any component lies
    /// outside 0-255.
    ///
    /// ```rust
    /// use pptx_oxml::common::RGBColor;
    ///
    /// assert!(RGBColor::try_new(12, 34, 56).is_ok());
    /// assert!(RGBColor::try_new(256, 0, 0).is_err());
    /// assert!(RGBColor::try_new(0, -1, 0).is_err());
    /// ```
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self::new(component(r)?, component(g)?, component(b)?))
    }

    /// Parse a color from a six digit hex string such as `"3C2F80"`.
    ///
    /// A leading `#` is tolerated. Case is ignored on input.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OoxmlError::InvalidValue(format!(
                "RGB hex string must have six hex digits, got '{hex}'"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                OoxmlError::InvalidValue(format!("invalid hex digit in RGB string '{hex}'"))
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to the canonical upper-case hex string (no `#` prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Components as a tuple.
    #[inline]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

fn component(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        OoxmlError::InvalidValue(format!(
            "RGBColor() takes three integer values 0-255, got {value}"
        ))
    })
}

fn integral_component(value: f64) -> Result<u8> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(OoxmlError::InvalidValue(format!(
            "RGBColor() takes three integer values 0-255, got {value}"
        )));
    }
    component(value as i64)
}

impl TryFrom<(i64, i64, i64)> for RGBColor {
    type Error = OoxmlError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self> {
        Self::try_new(r, g, b)
    }
}

/// Floating point components are accepted only when they hold whole numbers.
impl TryFrom<(f64, f64, f64)> for RGBColor {
    type Error = OoxmlError;

    fn try_from((r, g, b): (f64, f64, f64)) -> Result<Self> {
        Ok(Self::new(
            integral_component(r)?,
            integral_component(g)?,
            integral_component(b)?,
        ))
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for RGBColor {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_is_upper_hex() {
        assert_eq!(RGBColor::new(0x3c, 0x2f, 0x80).to_string(), "3C2F80");
        assert_eq!(RGBColor::new(0, 0, 0).to_hex(), "000000");
    }

    #[test]
    fn test_from_hex_accepts_lower_case_and_hash() {
        assert_eq!(
            RGBColor::from_hex("#ff0000").unwrap(),
            RGBColor::new(255, 0, 0)
        );
        assert_eq!(
            "0000Ff".parse::<RGBColor>().unwrap(),
            RGBColor::new(0, 0, 255)
        );
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(RGBColor::from_hex("FFF").is_err());
        assert!(RGBColor::from_hex("GG0000").is_err());
        assert!(RGBColor::from_hex("FF00001").is_err());
        assert!(RGBColor::from_hex("ééé").is_err());
        assert!(RGBColor::from_hex("##FF0000").is_err());
        assert!(RGBColor::from_hex("+F+F+F").is_err());
        assert_eq!(RGBColor::from_hex("#ff8000").unwrap(), RGBColor::new(255, 128, 0));
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(RGBColor::try_new(-1, 0, 0).is_err());
        assert!(RGBColor::try_new(0, 256, 0).is_err());
        assert!(RGBColor::try_from((0i64, 0i64, 1000i64)).is_err());
        assert_eq!(
            RGBColor::try_new(1, 2, 3).unwrap().as_tuple(),
            (1, 2, 3)
        );
    }

    #[test]
    fn test_float_components_must_be_integral() {
        assert!(RGBColor::try_from((1.5, 0.0, 0.0)).is_err());
        assert!(RGBColor::try_from((f64::NAN, 0.0, 0.0)).is_err());
        assert!(RGBColor::try_from((0.0, 0.0, 255.5)).is_err());
        assert_eq!(
            RGBColor::try_from((12.0, 34.0, 56.0)).unwrap(),
            RGBColor::new(12, 34, 56)
        );
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let color = RGBColor::new(r, g, b);
            let parsed = RGBColor::from_hex(&color.to_string()).unwrap();
            prop_assert_eq!(parsed, color);
        }

        #[test]
        fn prop_out_of_range_rejected(v in prop_oneof![i64::MIN..0i64, 256i64..i64::MAX]) {
            prop_assert!(RGBColor::try_new(v, 0, 0).is_err());
            prop_assert!(RGBColor::try_new(0, v, 0).is_err());
            prop_assert!(RGBColor::try_new(0, 0, v).is_err());
        }
    }
}
