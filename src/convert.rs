//! Conversions between HSB, RGB, HSL and hex
//!
//! Saturation, brightness and lightness are percentages in `[0, 100]`,
//! hue is in degrees.

use crate::{regex, Error};

/// Hue, saturation, brightness (a.k.a. HSV)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

/// Hue, saturation, lightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsb {
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Standard 6-sextant HSV to RGB
///
/// Hue 0 is read as 1 and 360 as 359. Channels are floored.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let mut h = hsb.h;
    if h == 0.0 {
        h = 1.0;
    }
    if h == 360.0 {
        h = 359.0;
    }

    let h = h / 360.0;
    let s = hsb.s / 100.0;
    let v = hsb.b / 100.0;

    let h_i = (h * 6.0).floor();
    let f = h * 6.0 - h_i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match h_i as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    // `as u8` saturates, keeping out of range input inside [0, 255]
    let channel = |c: f64| (c * 255.0).floor() as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

pub fn hsb_to_hsl(hsb: Hsb) -> Hsl {
    let s = hsb.s / 100.0;
    let v = hsb.b / 100.0;
    let k = (2.0 - s) * v;

    let denom = if k < 1.0 { k } else { 2.0 - k };
    let saturation = if denom == 0.0 {
        0.0
    } else {
        (s * v / denom * 10000.0).round() / 100.0
    };

    Hsl {
        h: hsb.h,
        s: saturation,
        l: k / 2.0 * 100.0,
    }
}

/// Lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn hsb_to_hex(hsb: Hsb) -> String {
    rgb_to_hex(hsb_to_rgb(hsb))
}

/// Parse `#rgb`, `#rrggbb`, with or without the `#`
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, Error> {
    let caps = regex!(r"(?i)\A#?([0-9a-f]{3}|[0-9a-f]{6})\z")
        .captures(hex.trim())
        .ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
    let digits = &caps[1];
    let expanded = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|e| Error::InvalidHex(format!("{hex}: {e}")))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Inverse of [`hsb_to_rgb`], up to rounding
///
/// The hue is normalized into `[0, 360)`; gray has hue 0.
pub fn rgb_to_hsb(rgb: Rgb) -> Result<Hsb, Error> {
    let red = f64::from(rgb.r) / 255.0;
    let green = f64::from(rgb.g) / 255.0;
    let blue = f64::from(rgb.b) / 255.0;

    let c_max = red.max(green).max(blue);
    let delta = c_max - red.min(green).min(blue);
    let saturation = if c_max == 0.0 { 0.0 } else { delta / c_max };

    let hue = if delta == 0.0 {
        0.0
    } else if c_max == red {
        60.0 * (((green - blue) / delta) % 6.0)
    } else if c_max == green {
        60.0 * ((blue - red) / delta + 2.0)
    } else if c_max == blue {
        60.0 * ((red - green) / delta + 4.0)
    } else {
        return Err(Error::Conversion(format!(
            "no channel matches the maximum of {rgb:?}"
        )));
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    Ok(Hsb::new(hue, saturation * 100.0, c_max * 100.0))
}

pub fn hex_to_hsb(hex: &str) -> Result<Hsb, Error> {
    rgb_to_hsb(hex_to_rgb(hex)?)
}
