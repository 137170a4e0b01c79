//! Color access for fills, lines, and fonts.
//!
//! [`ColorFormat`] wraps the parent of a color choice (`<a:solidFill>`,
//! `<a:fgClr>`, ...) and resolves the current color through [`Color`], a
//! closed enum dispatched on the color element's tag.
use std::ops::{Deref, DerefMut};

use crate::common::RGBColor;
use crate::ooxml::drawings::color::{
    ColorType, PERCENT_SCALE, ThemeColor, add_lum_mod, add_lum_off, change_color_choice,
    clear_lum_mod_lum_off, color_choice, color_choice_mut, lum_mod, lum_off, parse_percentage,
};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xml::Element;

/// `ST_PositiveFixedAngle` units per degree.
const ANGLE_SCALE: f64 = 60_000.0;

/// Hue/saturation/luminance literal of an `<a:hslClr>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslValue {
    /// Hue in degrees, 0.0..360.0
    pub hue: f64,
    /// Saturation, 1.0 == 100%
    pub saturation: f64,
    /// Luminance, 1.0 == 100%
    pub luminance: f64,
}

/// Linear RGB literal of an `<a:scrgbClr>`, each channel 1.0 == 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScRgbValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// System color literal of an `<a:sysClr>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemColorValue {
    /// System color name, e.g. "windowText"
    pub name: String,
    /// Last computed value the producing application saw
    pub last_color: Option<RGBColor>,
}

/// The color held by a color-choice parent, typed by element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color<'a> {
    /// No color element present
    None,
    Rgb(&'a Element),
    Hsl(&'a Element),
    Preset(&'a Element),
    Scheme(&'a Element),
    ScRgb(&'a Element),
    System(&'a Element),
}

impl<'a> Color<'a> {
    /// Resolve a color element (or its absence) to its variant.
    ///
    /// Fails with [`OoxmlError::UnknownElement`] for a tag outside
    /// `EG_ColorChoice`.
    pub fn from_element(element: Option<&'a Element>) -> Result<Self> {
        let Some(el) = element else {
            return Ok(Self::None);
        };

        let color_type = ColorType::from_tag(el.tag())
            .ok_or_else(|| OoxmlError::UnknownElement(format!("<{}> is not a color element", el.tag())))?;
        log::trace!("resolved <{}> as {} color", el.tag(), color_type);

        Ok(match color_type {
            ColorType::Rgb => Self::Rgb(el),
            ColorType::Hsl => Self::Hsl(el),
            ColorType::Preset => Self::Preset(el),
            ColorType::Scheme => Self::Scheme(el),
            ColorType::ScRgb => Self::ScRgb(el),
            ColorType::System => Self::System(el),
        })
    }

    /// Color type, `None` when no color is defined.
    pub fn color_type(&self) -> Option<ColorType> {
        self.element().and_then(|el| ColorType::from_tag(el.tag()))
    }

    /// The underlying color element.
    pub fn element(&self) -> Option<&'a Element> {
        match *self {
            Self::None => None,
            Self::Rgb(el)
            | Self::Hsl(el)
            | Self::Preset(el)
            | Self::Scheme(el)
            | Self::ScRgb(el)
            | Self::System(el) => Some(el),
        }
    }

    fn unsupported(&self, property: &'static str) -> OoxmlError {
        OoxmlError::UnsupportedProperty {
            property,
            color_type: self
                .color_type()
                .map_or_else(|| "None".to_string(), |t| t.to_string()),
        }
    }

    /// Literal RGB value; only defined for RGB colors.
    pub fn rgb(&self) -> Result<RGBColor> {
        match self {
            Self::Rgb(el) => RGBColor::from_hex(el.required_attr("val")?),
            _ => Err(self.unsupported("rgb")),
        }
    }

    /// Theme slot; only defined for scheme colors.
    pub fn theme_color(&self) -> Result<ThemeColor> {
        match self {
            Self::Scheme(el) => {
                let val = el.required_attr("val")?;
                ThemeColor::from_xml(val)
                    .ok_or_else(|| OoxmlError::InvalidValue(format!("unknown theme color '{val}'")))
            },
            _ => Err(self.unsupported("theme_color")),
        }
    }

    /// Brightness adjustment in -1.0..=1.0; 0.0 when there is none.
    ///
    /// A tint carries `<a:lumOff>` and reads as `lumOff`. A shade carries
    /// only `<a:lumMod>` and reads as `lumMod - 1.0`. Out-of-range markup is
    /// clamped.
    pub fn brightness(&self) -> Result<f64> {
        let Some(el) = self.element() else {
            return Ok(0.0);
        };
        let brightness = if let Some(off) = lum_off(el)? {
            off as f64 / PERCENT_SCALE
        } else if let Some(modulation) = lum_mod(el)? {
            modulation as f64 / PERCENT_SCALE - 1.0
        } else {
            0.0
        };
        Ok(brightness.clamp(-1.0, 1.0))
    }

    /// Hue, saturation, and luminance; only defined for HSL colors.
    pub fn hsl(&self) -> Result<HslValue> {
        match self {
            Self::Hsl(el) => Ok(HslValue {
                hue: el.int_attr("hue")?.unwrap_or(0) as f64 / ANGLE_SCALE,
                saturation: percentage_attr(el, "sat")?,
                luminance: percentage_attr(el, "lum")?,
            }),
            _ => Err(self.unsupported("hsl")),
        }
    }

    /// Preset color name such as "coral"; only defined for preset colors.
    pub fn preset_name(&self) -> Result<&'a str> {
        match *self {
            Self::Preset(el) => el.required_attr("val"),
            _ => Err(self.unsupported("preset_name")),
        }
    }

    /// System color name and last value; only defined for system colors.
    pub fn system_color(&self) -> Result<SystemColorValue> {
        match self {
            Self::System(el) => Ok(SystemColorValue {
                name: el.required_attr("val")?.to_string(),
                last_color: el.attr("lastClr").map(RGBColor::from_hex).transpose()?,
            }),
            _ => Err(self.unsupported("system_color")),
        }
    }

    /// Linear RGB channels; only defined for scRGB colors.
    pub fn scrgb(&self) -> Result<ScRgbValue> {
        match self {
            Self::ScRgb(el) => Ok(ScRgbValue {
                r: percentage_attr(el, "r")?,
                g: percentage_attr(el, "g")?,
                b: percentage_attr(el, "b")?,
            }),
            _ => Err(self.unsupported("scrgb")),
        }
    }
}

fn percentage_attr(el: &Element, name: &str) -> Result<f64> {
    Ok(parse_percentage(el.required_attr(name)?)? as f64 / PERCENT_SCALE)
}

/// Color settings of one color-choice parent element.
///
/// `E` is `&Element` for read access or `&mut Element` for editing.
///
/// # Examples
///
/// ```rust
/// use pptx_oxml::common::RGBColor;
/// use pptx_oxml::ooxml::drawings::ColorType;
/// use pptx_oxml::ooxml::pptx::dml::ColorFormat;
/// use pptx_oxml::ooxml::xml::Element;
///
/// let mut fill = Element::from_xml(
///     r#"<a:solidFill xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr></a:solidFill>"#,
/// ).unwrap();
///
/// let mut color = ColorFormat::from_colorchoice_parent(&mut fill);
/// assert_eq!(color.color_type().unwrap(), Some(ColorType::Scheme));
/// assert!((color.brightness().unwrap() + 0.25).abs() < 1e-9);
///
/// color.set_rgb(RGBColor::new(0x12, 0x34, 0x56));
/// assert_eq!(color.rgb().unwrap().to_string(), "123456");
/// assert_eq!(color.brightness().unwrap(), 0.0);
/// ```
#[derive(Debug)]
pub struct ColorFormat<E> {
    parent: E,
}

impl<E: Deref<Target = Element>> ColorFormat<E> {
    /// Wrap the parent element of a color choice.
    pub fn from_colorchoice_parent(parent: E) -> Self {
        Self { parent }
    }

    /// The wrapped parent element.
    #[inline]
    pub fn parent(&self) -> &Element {
        &self.parent
    }

    /// The current color variant.
    pub fn color(&self) -> Result<Color<'_>> {
        Color::from_element(color_choice(&self.parent))
    }

    /// How the color is defined, or `None` when no color is defined here.
    pub fn color_type(&self) -> Result<Option<ColorType>> {
        Ok(self.color()?.color_type())
    }

    /// Literal RGB value. Fails unless the color type is RGB.
    pub fn rgb(&self) -> Result<RGBColor> {
        self.color()?.rgb()
    }

    /// Theme slot. Fails unless the color type is scheme.
    pub fn theme_color(&self) -> Result<ThemeColor> {
        self.color()?.theme_color()
    }

    /// Brightness adjustment between -1.0 (black) and 1.0 (white).
    pub fn brightness(&self) -> Result<f64> {
        self.color()?.brightness()
    }
}

impl<E: DerefMut<Target = Element>> ColorFormat<E> {
    /// Make this an RGB color with value `rgb`.
    ///
    /// Whatever color was defined before is replaced, brightness adjustments
    /// included.
    pub fn set_rgb(&mut self, rgb: RGBColor) {
        let srgb_clr = change_color_choice(&mut self.parent, ColorType::Rgb);
        srgb_clr.set_attr("val", rgb);
    }

    /// Make this a scheme color referencing `theme_color`.
    ///
    /// Whatever color was defined before is replaced, brightness adjustments
    /// included.
    pub fn set_theme_color(&mut self, theme_color: ThemeColor) {
        let scheme_clr = change_color_choice(&mut self.parent, ColorType::Scheme);
        scheme_clr.set_attr("val", theme_color.to_xml());
    }

    /// Lighten (positive) or darken (negative) the current color.
    ///
    /// Fails for values outside -1.0..=1.0 and when no color is defined.
    pub fn set_brightness(&mut self, value: f64) -> Result<()> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(OoxmlError::InvalidValue(format!(
                "brightness must be between -1.0 and 1.0, got {value}"
            )));
        }

        let Some(color) = color_choice_mut(&mut self.parent) else {
            return Err(OoxmlError::InvalidValue(
                "can't set brightness when color type is None; set rgb or theme_color first"
                    .to_string(),
            ));
        };

        clear_lum_mod_lum_off(color);
        if value > 0.0 {
            add_lum_mod(color, 1.0 - value);
            add_lum_off(color, value);
        } else if value < 0.0 {
            add_lum_mod(color, 1.0 + value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xml::nsdecls;
    use proptest::prelude::*;

    fn fill(inner: &str) -> Element {
        Element::from_xml(&format!("<a:solidFill {}>{inner}</a:solidFill>", nsdecls(&["a"]))).unwrap()
    }

    #[test]
    fn test_color_type_for_each_variant() {
        let cases = [
            ("", None),
            (r#"<a:srgbClr val="123456"/>"#, Some(ColorType::Rgb)),
            (r#"<a:hslClr hue="0" sat="0" lum="0"/>"#, Some(ColorType::Hsl)),
            (r#"<a:prstClr val="coral"/>"#, Some(ColorType::Preset)),
            (r#"<a:schemeClr val="accent1"/>"#, Some(ColorType::Scheme)),
            (r#"<a:scrgbClr r="0" g="0" b="0"/>"#, Some(ColorType::ScRgb)),
            (r#"<a:sysClr val="windowText"/>"#, Some(ColorType::System)),
        ];
        for (inner, expected) in cases {
            let el = fill(inner);
            assert_eq!(
                ColorFormat::from_colorchoice_parent(&el).color_type().unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_color_in_default_namespace() {
        let el = Element::from_xml(
            r#"<solidFill xmlns="http://schemas.openxmlformats.org/drawingml/2006/main"><srgbClr val="FF0000"><lumMod val="75000"/></srgbClr></solidFill>"#,
        )
        .unwrap();
        let color = ColorFormat::from_colorchoice_parent(&el);
        assert_eq!(color.color_type().unwrap(), Some(ColorType::Rgb));
        assert_eq!(color.rgb().unwrap(), RGBColor::new(0xFF, 0, 0));
        assert!((color.brightness().unwrap() + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_element_is_a_lookup_error() {
        let el = Element::new("a:gradFill");
        assert!(matches!(
            Color::from_element(Some(&el)),
            Err(OoxmlError::UnknownElement(_))
        ));
        assert_eq!(Color::from_element(None).unwrap(), Color::None);
    }

    #[test]
    fn test_rgb_only_on_rgb_colors() {
        let el = fill(r#"<a:srgbClr val="3C2F80"/>"#);
        let color = ColorFormat::from_colorchoice_parent(&el);
        assert_eq!(color.rgb().unwrap(), RGBColor::new(0x3C, 0x2F, 0x80));
        assert!(matches!(
            color.theme_color(),
            Err(OoxmlError::UnsupportedProperty { property: "theme_color", .. })
        ));

        let el = fill(r#"<a:schemeClr val="accent1"/>"#);
        let err = ColorFormat::from_colorchoice_parent(&el).rgb().unwrap_err();
        assert_eq!(err.to_string(), "no .rgb property on color type 'SCHEME'");

        let el = fill("");
        let err = ColorFormat::from_colorchoice_parent(&el).rgb().unwrap_err();
        assert_eq!(err.to_string(), "no .rgb property on color type 'None'");
    }

    #[test]
    fn test_theme_color_read() {
        let el = fill(r#"<a:schemeClr val="accent6"/>"#);
        let color = ColorFormat::from_colorchoice_parent(&el);
        assert_eq!(color.theme_color().unwrap(), ThemeColor::Accent6);

        let el = fill(r#"<a:schemeClr val="purple"/>"#);
        assert!(matches!(
            ColorFormat::from_colorchoice_parent(&el).theme_color(),
            Err(OoxmlError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_brightness_from_lum_children() {
        let cases = [
            (r#"<a:schemeClr val="accent1"/>"#, 0.0),
            (r#"<a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr>"#, -0.25),
            (
                r#"<a:schemeClr val="accent1"><a:lumMod val="60000"/><a:lumOff val="40000"/></a:schemeClr>"#,
                0.4,
            ),
            (r#"<a:srgbClr val="FF0000"><a:lumMod val="50%"/></a:srgbClr>"#, -0.5),
            // out-of-range values are clamped
            (r#"<a:schemeClr val="accent1"><a:lumOff val="200000"/></a:schemeClr>"#, 1.0),
            (r#"<a:schemeClr val="accent1"><a:lumMod val="-50000"/></a:schemeClr>"#, -1.0),
            ("", 0.0),
        ];
        for (inner, expected) in cases {
            let el = fill(inner);
            let brightness = ColorFormat::from_colorchoice_parent(&el).brightness().unwrap();
            assert!((brightness - expected).abs() < 1e-9, "{inner}: {brightness}");
        }
    }

    #[test]
    fn test_set_rgb_switches_scheme_to_rgb() {
        let mut el = fill(r#"<a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr>"#);
        let mut color = ColorFormat::from_colorchoice_parent(&mut el);
        color.set_rgb(RGBColor::new(1, 2, 3));

        assert_eq!(color.color_type().unwrap(), Some(ColorType::Rgb));
        assert_eq!(color.rgb().unwrap(), RGBColor::new(1, 2, 3));
        assert_eq!(color.brightness().unwrap(), 0.0);
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.children()[0].to_xml(), r#"<a:srgbClr val="010203"/>"#);
    }

    #[test]
    fn test_set_rgb_on_empty_parent() {
        let mut el = fill("");
        ColorFormat::from_colorchoice_parent(&mut el).set_rgb(RGBColor::new(255, 255, 255));
        assert_eq!(
            ColorFormat::from_colorchoice_parent(&el).rgb().unwrap(),
            RGBColor::new(255, 255, 255)
        );
    }

    #[test]
    fn test_set_theme_color() {
        let mut el = fill(r#"<a:srgbClr val="FF0000"/>"#);
        let mut color = ColorFormat::from_colorchoice_parent(&mut el);
        color.set_theme_color(ThemeColor::Text1);
        assert_eq!(color.color_type().unwrap(), Some(ColorType::Scheme));
        assert_eq!(color.theme_color().unwrap(), ThemeColor::Text1);
        assert_eq!(el.children()[0].attr("val"), Some("tx1"));
    }

    #[test]
    fn test_set_brightness_writes_tint_and_shade() {
        let mut el = fill(r#"<a:schemeClr val="accent1"/>"#);
        let mut color = ColorFormat::from_colorchoice_parent(&mut el);

        color.set_brightness(0.4).unwrap();
        assert_eq!(
            color.parent().children()[0].to_xml(),
            r#"<a:schemeClr val="accent1"><a:lumMod val="60000"/><a:lumOff val="40000"/></a:schemeClr>"#
        );

        color.set_brightness(-0.25).unwrap();
        assert_eq!(
            color.parent().children()[0].to_xml(),
            r#"<a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr>"#
        );

        color.set_brightness(0.0).unwrap();
        assert_eq!(color.parent().children()[0].to_xml(), r#"<a:schemeClr val="accent1"/>"#);
    }

    #[test]
    fn test_set_brightness_validation() {
        let mut el = fill("");
        let mut color = ColorFormat::from_colorchoice_parent(&mut el);
        assert!(color.set_brightness(0.5).is_err());

        color.set_rgb(RGBColor::new(0, 0, 0));
        assert!(color.set_brightness(1.5).is_err());
        assert!(color.set_brightness(f64::NAN).is_err());
        assert!(color.set_brightness(-1.0).is_ok());
    }

    #[test]
    fn test_variant_literals() {
        let el = fill(r#"<a:hslClr hue="7200000" sat="50%" lum="25000"/>"#);
        let hsl = ColorFormat::from_colorchoice_parent(&el).color().unwrap().hsl().unwrap();
        assert_eq!(
            hsl,
            HslValue {
                hue: 120.0,
                saturation: 0.5,
                luminance: 0.25
            }
        );

        let el = fill(r#"<a:prstClr val="coral"/>"#);
        let color = ColorFormat::from_colorchoice_parent(&el);
        assert_eq!(color.color().unwrap().preset_name().unwrap(), "coral");
        assert!(color.color().unwrap().hsl().is_err());

        let el = fill(r#"<a:sysClr val="windowText" lastClr="000000"/>"#);
        let sys = ColorFormat::from_colorchoice_parent(&el).color().unwrap().system_color().unwrap();
        assert_eq!(sys.name, "windowText");
        assert_eq!(sys.last_color, Some(RGBColor::new(0, 0, 0)));

        let el = fill(r#"<a:scrgbClr r="100000" g="50000" b="0"/>"#);
        let scrgb = ColorFormat::from_colorchoice_parent(&el).color().unwrap().scrgb().unwrap();
        assert_eq!(scrgb, ScRgbValue { r: 1.0, g: 0.5, b: 0.0 });
    }

    proptest! {
        #[test]
        fn prop_lum_off_brightness(v in 0i64..=100_000) {
            let el = fill(&format!(r#"<a:schemeClr val="accent1"><a:lumOff val="{v}"/></a:schemeClr>"#));
            let brightness = ColorFormat::from_colorchoice_parent(&el).brightness().unwrap();
            prop_assert!((brightness - v as f64 / 100_000.0).abs() < 1e-12);
        }

        #[test]
        fn prop_lum_mod_brightness(v in 0i64..=100_000) {
            let el = fill(&format!(r#"<a:schemeClr val="accent1"><a:lumMod val="{v}"/></a:schemeClr>"#));
            let brightness = ColorFormat::from_colorchoice_parent(&el).brightness().unwrap();
            prop_assert!((brightness - (v as f64 / 100_000.0 - 1.0)).abs() < 1e-12);
        }

        #[test]
        fn prop_set_rgb_reads_back(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let mut el = fill(r#"<a:schemeClr val="bg1"/>"#);
            let mut color = ColorFormat::from_colorchoice_parent(&mut el);
            color.set_rgb(RGBColor::new(r, g, b));
            prop_assert_eq!(color.color_type().unwrap(), Some(ColorType::Rgb));
            prop_assert_eq!(color.rgb().unwrap(), RGBColor::new(r, g, b));
        }
    }
}
