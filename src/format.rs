//! Output formats and the generated color value

use std::fmt::{Display, Write};
use std::str::FromStr;

use owo_colors::OwoColorize;

use crate::convert::{hsb_to_hex, hsb_to_hsl, hsb_to_rgb, Hsb, Rgb};

/// How a generated color is represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `[r, g, b]`
    RgbArray,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `[h, s, l]`
    HslArray,
    /// `[h, s, b]`
    HsvArray,
}

/// Error from [`Format::from_str`]
#[derive(Debug, thiserror::Error)]
#[error("unknown color format: {0:?}")]
pub struct FormatParseError(String);

impl FromStr for Format {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s {
            "hex" => Format::Hex,
            "rgb" => Format::Rgb,
            "rgba" => Format::Rgba,
            "rgbArray" => Format::RgbArray,
            "hsl" => Format::Hsl,
            "hsla" => Format::Hsla,
            "hslArray" => Format::HslArray,
            "hsvArray" | "hsbArray" => Format::HsvArray,
            _ => return Err(FormatParseError(s.to_string())),
        };
        Ok(format)
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::RgbArray => "rgbArray",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
            Format::HslArray => "hslArray",
            Format::HsvArray => "hsvArray",
        };
        f.write_str(name)
    }
}

impl Format {
    pub fn needs_alpha(self) -> bool {
        matches!(self, Format::Rgba | Format::Hsla)
    }

    /// Render `hsb` in this format
    ///
    /// `alpha` is only read by [`Format::Rgba`] and [`Format::Hsla`].
    pub fn apply(self, hsb: Hsb, alpha: f64) -> ColorValue {
        match self {
            Format::Hex => ColorValue::Text(hsb_to_hex(hsb)),
            Format::Rgb => {
                let Rgb { r, g, b } = hsb_to_rgb(hsb);
                ColorValue::Text(format!("rgb({r}, {g}, {b})"))
            }
            Format::Rgba => {
                let Rgb { r, g, b } = hsb_to_rgb(hsb);
                ColorValue::Text(format!("rgba({r}, {g}, {b}, {alpha})"))
            }
            Format::RgbArray => {
                let Rgb { r, g, b } = hsb_to_rgb(hsb);
                ColorValue::RgbArray([r, g, b])
            }
            Format::Hsl => {
                let hsl = hsb_to_hsl(hsb);
                ColorValue::Text(format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l))
            }
            Format::Hsla => {
                let hsl = hsb_to_hsl(hsb);
                ColorValue::Text(format!(
                    "hsla({}, {}%, {}%, {alpha})",
                    hsl.h, hsl.s, hsl.l
                ))
            }
            Format::HslArray => {
                let hsl = hsb_to_hsl(hsb);
                ColorValue::FloatArray([hsl.h, hsl.s, hsl.l])
            }
            Format::HsvArray => ColorValue::FloatArray([hsb.h, hsb.s, hsb.b]),
        }
    }
}

/// A formatted color
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Text(String),
    RgbArray([u8; 3]),
    FloatArray([f64; 3]),
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorValue::Text(t) => t.fmt(f),
            ColorValue::RgbArray([a, b, c]) => write!(f, "[{a}, {b}, {c}]"),
            ColorValue::FloatArray([a, b, c]) => write!(f, "[{a}, {b}, {c}]"),
        }
    }
}

/// A generated color
///
/// The [`Display`] [alternate modifier](std::fmt#sign0) only prints the
/// formatted value, without the swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Sampled triple the value was built from
    pub hsb: Hsb,
    pub format: Format,
    pub value: ColorValue,
}

impl Color {
    pub fn rgb(&self) -> Rgb {
        hsb_to_rgb(self.hsb)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return self.value.fmt(f);
        }
        let Rgb { r, g, b } = self.rgb();
        let swatch = owo_colors::DynColors::Rgb(r, g, b);
        write!(f, "{}", "  ".on_color(swatch))?;
        f.write_char(' ')?;
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const SAMPLE: Hsb = Hsb {
        h: 120.0,
        s: 100.0,
        b: 100.0,
    };

    #[test_case(Format::Hex => "#00ff00")]
    #[test_case(Format::Rgb => "rgb(0, 255, 0)")]
    #[test_case(Format::Rgba => "rgba(0, 255, 0, 0.5)")]
    #[test_case(Format::RgbArray => "[0, 255, 0]")]
    #[test_case(Format::Hsl => "hsl(120, 100%, 50%)")]
    #[test_case(Format::Hsla => "hsla(120, 100%, 50%, 0.5)")]
    #[test_case(Format::HslArray => "[120, 100, 50]")]
    #[test_case(Format::HsvArray => "[120, 100, 100]")]
    fn render(format: Format) -> String {
        format.apply(SAMPLE, 0.5).to_string()
    }

    #[test_case("hex" => Format::Hex)]
    #[test_case("rgbArray" => Format::RgbArray)]
    #[test_case("hsvArray" => Format::HsvArray)]
    #[test_case("HEX" => panics "unknown" ; "case sensitive")]
    fn parse(s: &str) -> Format {
        s.parse().expect("unknown")
    }

    #[test]
    fn names_round_trip() {
        for format in [
            Format::Hex,
            Format::Rgb,
            Format::Rgba,
            Format::RgbArray,
            Format::Hsl,
            Format::Hsla,
            Format::HslArray,
            Format::HsvArray,
        ] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn alternate_display_is_plain() {
        let color = Color {
            hsb: SAMPLE,
            format: Format::Hex,
            value: Format::Hex.apply(SAMPLE, 1.0),
        };
        assert_eq!(format!("{color:#}"), "#00ff00");
        assert!(format!("{color}").ends_with(" #00ff00"));
    }
}
