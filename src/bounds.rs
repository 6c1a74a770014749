//! Hue buckets and their saturation/brightness bounds
//!
//! Each chromatic bucket covers a slice of the hue circle and carries a
//! piecewise-linear curve giving the minimum brightness allowed for a
//! saturation. Red is stored as `[-26, 18]` so it can wrap through 0.

use crate::convert::hex_to_hsb;
use crate::{regex, Error};

/// Inclusive `(min, max)` pair, in degrees or percent
pub type Range = (f64, f64);

/// The whole hue circle
pub const FULL_HUE_RANGE: Range = (0.0, 360.0);

/// A named hue bucket
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDefinition {
    pub name: String,
    /// `None` only for the achromatic bucket
    pub hue_range: Option<Range>,
    /// `(saturation, brightness)` control points, ascending by saturation
    pub lower_bounds: Vec<(f64, f64)>,
    pub saturation_range: Range,
    pub brightness_range: Range,
}

impl ColorDefinition {
    fn contains(&self, hue: f64) -> bool {
        self.hue_range
            .is_some_and(|(min, max)| hue >= min && hue <= max)
    }

    /// Evaluate the lower-bound curve at `saturation`
    ///
    /// Returns 0 when the saturation is outside every bracket.
    pub fn minimum_brightness(&self, saturation: f64) -> f64 {
        for pair in self.lower_bounds.windows(2) {
            let (s1, v1) = pair[0];
            let (s2, v2) = pair[1];
            if saturation >= s1 && saturation <= s2 {
                let m = (v2 - v1) / (s2 - s1);
                let b = v1 - m * s1;
                return m * saturation + b;
            }
        }
        0.0
    }
}

/// Table of [`ColorDefinition`]s
///
/// Definitions are scanned in the order they were defined, so a hue on the
/// shared edge of two buckets resolves to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBounds {
    colors: Vec<ColorDefinition>,
}

impl ColorBounds {
    /// A table with no buckets
    pub fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    /// Register a bucket
    ///
    /// Redefining a name replaces the previous definition in place. The
    /// lower bounds can't be empty and must be sorted by saturation.
    pub fn define(
        &mut self,
        name: &str,
        hue_range: Option<Range>,
        lower_bounds: &[(f64, f64)],
    ) -> Result<(), Error> {
        if lower_bounds.is_empty() {
            return Err(Error::InvalidBounds(format!("{name}: no lower bounds")));
        }
        if !lower_bounds.windows(2).all(|w| w[0].0 <= w[1].0) {
            return Err(Error::InvalidBounds(format!(
                "{name}: lower bounds not sorted by saturation"
            )));
        }
        self.insert(name, hue_range, lower_bounds);
        Ok(())
    }

    fn insert(&mut self, name: &str, hue_range: Option<Range>, lower_bounds: &[(f64, f64)]) {
        let first = lower_bounds[0];
        let last = lower_bounds[lower_bounds.len() - 1];
        let def = ColorDefinition {
            name: name.to_string(),
            hue_range,
            lower_bounds: lower_bounds.to_vec(),
            saturation_range: (first.0, last.0),
            brightness_range: (last.1, first.1),
        };
        match self.colors.iter_mut().find(|c| c.name == name) {
            Some(slot) => *slot = def,
            None => self.colors.push(def),
        }
    }

    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.colors
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&ColorDefinition> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Find the bucket containing `hue`
    pub fn lookup_by_hue(&self, hue: f64) -> Result<&ColorDefinition, Error> {
        let mut normalized = hue;
        if (334.0..=360.0).contains(&normalized) {
            normalized -= 360.0;
        }
        self.colors
            .iter()
            .find(|c| c.contains(normalized))
            .ok_or(Error::ColorNotFound { hue })
    }

    /// Minimum brightness for a saturation at the given hue
    ///
    /// 0 if the hue matches no bucket.
    pub fn minimum_brightness(&self, hue: f64, saturation: f64) -> f64 {
        self.lookup_by_hue(hue)
            .map_or(0.0, |c| c.minimum_brightness(saturation))
    }

    /// Hue range for a hue option
    ///
    /// Accepts, in this order of precedence, a number, a bucket name or a
    /// 3/6 digit hex color. Only numbers in `(0, 360)` pin the hue, any other
    /// number is the full circle, as is anything unrecognized.
    pub fn resolve_hue_range(&self, input: Option<&str>) -> Range {
        let Some(input) = input.map(str::trim) else {
            return FULL_HUE_RANGE;
        };

        if let Some(n) = parse_degrees(input) {
            if n > 0.0 && n < 360.0 {
                return (n, n);
            }
            return FULL_HUE_RANGE;
        }

        if let Some(color) = self.lookup_by_name(input) {
            if let Some(range) = color.hue_range {
                return range;
            }
        } else if regex!(r"(?i)\A#?(?:[0-9a-f]{3}|[0-9a-f]{6})\z").is_match(input) {
            if let Ok(hsb) = hex_to_hsb(input) {
                return (hsb.h, hsb.h);
            }
        }

        FULL_HUE_RANGE
    }
}

fn parse_degrees(s: &str) -> Option<f64> {
    let caps = regex!(r"\A([+-]?\d+)(?:\.\d+)?\z").captures(s)?;
    caps[1].parse::<i32>().ok().map(f64::from)
}

impl Default for ColorBounds {
    /// The standard table: monochrome plus seven chromatic buckets
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("monochrome", None, &[(0.0, 0.0), (100.0, 0.0)]);
        table.insert(
            "red",
            Some((-26.0, 18.0)),
            &[
                (20.0, 100.0),
                (30.0, 92.0),
                (40.0, 89.0),
                (50.0, 85.0),
                (60.0, 78.0),
                (70.0, 70.0),
                (80.0, 60.0),
                (90.0, 55.0),
                (100.0, 50.0),
            ],
        );
        table.insert(
            "orange",
            Some((18.0, 46.0)),
            &[
                (20.0, 100.0),
                (30.0, 93.0),
                (40.0, 88.0),
                (50.0, 86.0),
                (60.0, 85.0),
                (70.0, 70.0),
                (100.0, 70.0),
            ],
        );
        table.insert(
            "yellow",
            Some((46.0, 62.0)),
            &[
                (25.0, 100.0),
                (40.0, 94.0),
                (50.0, 89.0),
                (60.0, 86.0),
                (70.0, 84.0),
                (80.0, 82.0),
                (90.0, 80.0),
                (100.0, 75.0),
            ],
        );
        table.insert(
            "green",
            Some((62.0, 178.0)),
            &[
                (30.0, 100.0),
                (40.0, 90.0),
                (50.0, 85.0),
                (60.0, 81.0),
                (70.0, 74.0),
                (80.0, 64.0),
                (90.0, 50.0),
                (100.0, 40.0),
            ],
        );
        table.insert(
            "blue",
            Some((178.0, 257.0)),
            &[
                (20.0, 100.0),
                (30.0, 86.0),
                (40.0, 80.0),
                (50.0, 74.0),
                (60.0, 60.0),
                (70.0, 52.0),
                (80.0, 44.0),
                (90.0, 39.0),
                (100.0, 35.0),
            ],
        );
        table.insert(
            "purple",
            Some((257.0, 282.0)),
            &[
                (20.0, 100.0),
                (30.0, 87.0),
                (40.0, 79.0),
                (50.0, 70.0),
                (60.0, 65.0),
                (70.0, 59.0),
                (80.0, 52.0),
                (90.0, 45.0),
                (100.0, 42.0),
            ],
        );
        table.insert(
            "pink",
            Some((282.0, 334.0)),
            &[
                (20.0, 100.0),
                (30.0, 90.0),
                (40.0, 86.0),
                (60.0, 84.0),
                (80.0, 80.0),
                (90.0, 75.0),
                (100.0, 73.0),
            ],
        );
        table
    }
}
