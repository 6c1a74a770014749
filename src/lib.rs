//! Attractive random colors
//!
//! Colors are not drawn uniformly from RGB. A hue is picked first, then a
//! saturation and a brightness inside hand tuned bounds for that hue, so the
//! results avoid muddy or clashing tones.
//!
//! Create a [`RandomColor`] and call [`RandomColor::generate`] with some
//! [`Options`]:
//!
//! ```
//! use random_color::{Format, Options, RandomColor};
//!
//! let mut gen = RandomColor::new();
//! let colors = gen
//!     .generate(&Options {
//!         hue: Some("blue".into()),
//!         count: Some(3),
//!         format: Format::Rgb,
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(colors.len(), 3);
//! assert_eq!(gen.history().len(), 3);
//! ```
//!
//! The plain [`Display`](std::fmt::Display) of a [`Color`] *may* output ANSI
//! color codes. Use the alternate form (`{:#}`) or something like
//! [anstream](https://docs.rs/anstream/) if you dont want them.

pub mod bounds;
pub mod convert;
pub mod format;
pub mod log;
pub mod random;
pub mod sample;
pub mod seed;

use std::fmt::Debug;
use std::str::FromStr;

use rand_pcg::Pcg64 as Pcg;

use bounds::ColorBounds;
use log::{Logger, NoopLogger, TAG};
use random::RandomSource;
use sample::Occupancy;

pub use convert::{Hsb, Hsl, Rgb};
pub use format::{Color, ColorValue, Format};
pub use seed::{SeedError, SeedValue};

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}
pub(crate) use regex;

/// Brightness/saturation preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Luminosity {
    Bright,
    Dark,
    Light,
    /// Any saturation and brightness
    Random,
}

/// Error from [`Luminosity::from_str`]
#[derive(Debug, thiserror::Error)]
#[error("unknown luminosity: {0:?}")]
pub struct LuminosityParseError(String);

impl FromStr for Luminosity {
    type Err = LuminosityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bright" => Ok(Luminosity::Bright),
            "dark" => Ok(Luminosity::Dark),
            "light" => Ok(Luminosity::Light),
            "random" => Ok(Luminosity::Random),
            _ => Err(LuminosityParseError(s.to_string())),
        }
    }
}

/// What to generate
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    /// Bucket name (`"red"`, `"monochrome"`...), degrees or a hex color
    ///
    /// Anything not recognized means any hue.
    pub hue: Option<String>,
    pub luminosity: Option<Luminosity>,
    /// Generate a batch of colors with spread out hues
    pub count: Option<u32>,
    /// Replaces the generator seed. An invalid seed unseeds the generator.
    pub seed: Option<SeedValue>,
    pub format: Format,
    /// Alpha for [`Format::Rgba`] and [`Format::Hsla`], random if missing
    pub alpha: Option<f64>,
}

/// Result of [`RandomColor::generate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    One(Color),
    Many(Vec<Color>),
}

impl Generated {
    pub fn len(&self) -> usize {
        match self {
            Generated::One(_) => 1,
            Generated::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<Color> {
        match self {
            Generated::One(c) => vec![c],
            Generated::Many(v) => v,
        }
    }
}

/// Color generator
///
/// Holds the seed, the verbose flag and the history of every color it has
/// produced. One generator is meant to be used by one caller at a time.
pub struct RandomColor {
    table: ColorBounds,
    rng: RandomSource,
    verbose: bool,
    history: Vec<Color>,
    logger: Box<dyn Logger>,
}

impl Debug for RandomColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomColor")
            .field("seed", &self.rng.seed())
            .field("verbose", &self.verbose)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl Default for RandomColor {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomColor {
    /// Create a new unseeded generator with the standard bounds table
    pub fn new() -> Self {
        Self::with_logger(NoopLogger)
    }

    /// Create a generator that sends verbose traces to `logger`
    pub fn with_logger(logger: impl Logger + 'static) -> Self {
        Self {
            table: ColorBounds::default(),
            rng: RandomSource::new(None),
            verbose: false,
            history: Vec::new(),
            logger: Box::new(logger),
        }
    }

    /// Replace the bounds table
    pub fn with_table(mut self, table: ColorBounds) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &ColorBounds {
        &self.table
    }

    /// Current seed state, `None` when using entropy
    pub fn seed(&self) -> Option<i64> {
        self.rng.seed()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Every color generated so far, oldest first
    pub fn history(&self) -> &[Color] {
        &self.history
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Seed the generator
    ///
    /// An invalid seed is logged and ignored.
    pub fn set_seed(&mut self, seed: impl Into<SeedValue>) {
        let seed = seed.into();
        match seed.parse() {
            Ok(n) => {
                self.rng.set_seed(Some(n));
                self.trace(format_args!("seed set to {n}"));
            }
            Err(e) => self.trace(format_args!("ignoring seed: {e}")),
        }
    }

    /// Generate one color, or a batch if `count` is set
    ///
    /// A `count` of 1 still returns a single color, 0 an empty batch.
    pub fn generate(&mut self, options: &Options) -> Result<Generated, Error> {
        if let Some(seed) = &options.seed {
            match seed.parse() {
                Ok(n) => {
                    self.rng.set_seed(Some(n));
                    self.trace(format_args!("seed set to {n}"));
                }
                Err(e) => {
                    self.rng.set_seed(None);
                    self.trace(format_args!("{e}, using true randomness"));
                }
            }
        }

        let Some(count) = options.count else {
            return self.generate_one(options, None).map(Generated::One);
        };

        self.trace(format_args!("generating {count} colors"));
        let mut occupancy = Occupancy::new(count as usize);
        let mut colors = Vec::with_capacity(count as usize);
        for i in 0..count {
            self.trace(format_args!("color {} of {count}", i + 1));
            colors.push(self.generate_one(options, Some(&mut occupancy))?);
            if let Some(slot) = occupancy.assigned().last() {
                self.trace(format_args!("hue slot {slot}"));
            }
        }

        if count == 1 {
            Ok(Generated::One(colors.remove(0)))
        } else {
            Ok(Generated::Many(colors))
        }
    }

    fn generate_one(
        &mut self,
        options: &Options,
        occupancy: Option<&mut Occupancy>,
    ) -> Result<Color, Error> {
        let h = sample::pick_hue(&self.table, &mut self.rng, options, occupancy);
        let s = sample::pick_saturation(&self.table, &mut self.rng, h, options)?;
        let b = sample::pick_brightness(&self.table, &mut self.rng, h, s, options);
        let hsb = Hsb::new(h, s, b);
        self.trace(format_args!("picked hsb({h}, {s}, {b})"));

        let format = options.format;
        let alpha = match options.alpha {
            Some(a) => a,
            None if format.needs_alpha() => self.rng.unit(),
            None => 1.0,
        };
        self.trace(format_args!("formatting as {format}"));
        let color = Color {
            hsb,
            format,
            value: format.apply(hsb, alpha),
        };

        self.history.push(color.clone());
        Ok(color)
    }

    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.verbose {
            self.logger.debug(TAG, &message.to_string());
        }
    }
}

/// Generation error
///
/// These only happen with a broken bounds table or conversion bug, they are
/// never caused by bad options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hue fell outside every bucket of the table
    #[error("no color bucket contains hue {hue}")]
    ColorNotFound { hue: f64 },
    #[error("color conversion: {0}")]
    Conversion(String),
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    /// Rejected [`ColorBounds::define`] input
    #[error("invalid color bounds: {0}")]
    InvalidBounds(String),
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::log::FnLogger;
    use test_case::test_case;

    fn seeded(seed: i64, format: Format) -> Options {
        Options {
            seed: Some(seed.into()),
            format,
            ..Default::default()
        }
    }

    #[test]
    fn seed_1234_single_rgb() {
        let mut gen = RandomColor::new();
        let opts = Options {
            count: Some(1),
            ..seeded(1234, Format::Rgb)
        };
        let Generated::One(color) = gen.generate(&opts).unwrap() else {
            panic!("expected one color");
        };
        // a single slot spans [0, 360 % 359], so the hue is pinned to red
        assert_eq!(color.hsb, Hsb::new(0.0, 38.0, 90.0));
        assert_eq!(format!("{color:#}"), "rgb(229, 143, 142)");
    }

    #[test]
    fn seed_1234_pair() {
        let mut gen = RandomColor::new();
        let opts = Options {
            count: Some(2),
            ..seeded(1234, Format::Rgb)
        };
        let colors = gen.generate(&opts).unwrap().into_vec();
        let hsb = colors.iter().map(|c| c.hsb).collect::<Vec<_>>();
        assert_eq!(
            hsb,
            vec![Hsb::new(39.0, 38.0, 89.0), Hsb::new(26.0, 39.0, 96.0)]
        );
        assert_eq!(format!("{:#}", colors[0]), "rgb(226, 196, 140)");
        assert_eq!(format!("{:#}", colors[1]), "rgb(244, 190, 149)");
    }

    #[test]
    fn batch_of_five_spreads_hues() {
        let entries = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&entries);
        let mut gen = RandomColor::with_logger(FnLogger(move |_: &str, msg: &str| {
            sink.borrow_mut().push(msg.to_string())
        }));
        gen.set_verbose(true);
        let colors = gen
            .generate(&Options {
                count: Some(5),
                ..seeded(24, Format::HsvArray)
            })
            .unwrap()
            .into_vec();

        let hues = colors.iter().map(|c| c.hsb.h).collect::<Vec<_>>();
        assert_eq!(hues, vec![55.0, 185.0, 79.0, 13.0, 267.0]);

        let mut slots = entries
            .borrow()
            .iter()
            .filter_map(|m| m.strip_prefix("hue slot ")?.parse::<usize>().ok())
            .collect::<Vec<_>>();
        assert_eq!(slots, vec![0, 2, 1, 4, 3]);
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn same_seed_same_colors() {
        let mut a = RandomColor::new();
        let mut b = RandomColor::new();
        let sequence = [
            Options {
                count: Some(4),
                ..seeded(77, Format::Hex)
            },
            Options {
                hue: Some("pink".into()),
                luminosity: Some(Luminosity::Light),
                format: Format::HslArray,
                ..Default::default()
            },
            Options {
                luminosity: Some(Luminosity::Dark),
                format: Format::RgbArray,
                ..Default::default()
            },
        ];
        for opts in &sequence {
            assert_eq!(a.generate(opts).unwrap(), b.generate(opts).unwrap());
        }
        assert_eq!(a.history(), b.history());
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn monochrome_is_gray() {
        let mut gen = RandomColor::new();
        let opts = Options {
            hue: Some("monochrome".into()),
            count: Some(20),
            ..Default::default()
        };
        for color in gen.generate(&opts).unwrap().into_vec() {
            assert_eq!(color.hsb.s, 0.0);
            let Rgb { r, g, b } = color.rgb();
            assert!(r == g && g == b);
        }
    }

    #[test]
    fn default_is_hex() {
        let mut gen = RandomColor::new();
        let re = regex::Regex::new(r"(?i)\A#[0-9a-f]{6}\z").unwrap();
        for _ in 0..50 {
            let Generated::One(color) = gen.generate(&Options::default()).unwrap() else {
                panic!("expected one color");
            };
            assert!(re.is_match(&format!("{color:#}")), "{color:#}");
        }
    }

    #[test_case(None => 1 ; "no count")]
    #[test_case(Some(0) => 0 ; "zero")]
    #[test_case(Some(1) => 1 ; "one")]
    #[test_case(Some(2) => 2 ; "two")]
    #[test_case(Some(7) => 7 ; "seven")]
    fn count(count: Option<u32>) -> usize {
        let mut gen = RandomColor::new();
        gen.generate(&Options::default()).unwrap();
        let out = gen
            .generate(&Options {
                count,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(gen.history().len(), 1 + out.len());
        assert_eq!(matches!(out, Generated::Many(_)), count.is_some_and(|c| c != 1));
        out.len()
    }

    #[test]
    fn history_keeps_order() {
        let mut gen = RandomColor::new();
        let first = gen.generate(&Options::default()).unwrap().into_vec();
        let second = gen
            .generate(&Options {
                count: Some(3),
                format: Format::HsvArray,
                ..Default::default()
            })
            .unwrap()
            .into_vec();
        let all = first.into_iter().chain(second).collect::<Vec<_>>();
        assert_eq!(gen.history(), all.as_slice());
    }

    #[test]
    fn invalid_seed_unseeds() {
        let mut gen = RandomColor::new();
        gen.set_seed(10_i64);
        assert_eq!(gen.seed(), Some(10));
        gen.generate(&Options {
            seed: Some("not a seed".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(gen.seed(), None);
    }

    #[test]
    fn set_seed_ignores_garbage() {
        let mut gen = RandomColor::new();
        gen.set_seed("42");
        assert_eq!(gen.seed(), Some(42));
        gen.set_seed("forty two");
        assert_eq!(gen.seed(), Some(42));
    }

    #[test]
    fn seed_persists_between_calls() {
        let mut a = RandomColor::new();
        a.set_seed(5_i64);
        let first = a.generate(&Options::default()).unwrap();
        let second = a.generate(&Options::default()).unwrap();

        let mut b = RandomColor::new();
        let batch = b
            .generate(&Options {
                seed: Some(SeedValue::Int(5)),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(first, batch);
        assert_eq!(second, b.generate(&Options::default()).unwrap());
    }

    #[test]
    fn explicit_alpha() {
        let mut gen = RandomColor::new();
        let out = gen
            .generate(&Options {
                format: Format::Rgba,
                alpha: Some(0.25),
                ..Default::default()
            })
            .unwrap()
            .into_vec();
        let text = format!("{:#}", out[0]);
        assert!(text.starts_with("rgba(") && text.ends_with(", 0.25)"), "{text}");
    }

    #[test]
    fn verbose_traces_go_to_logger() {
        let entries = Rc::new(RefCell::new(Vec::<(String, String)>::new()));
        let sink = Rc::clone(&entries);
        let mut gen = RandomColor::with_logger(FnLogger(move |tag: &str, msg: &str| {
            sink.borrow_mut().push((tag.to_string(), msg.to_string()))
        }));

        gen.generate(&Options::default()).unwrap();
        assert!(entries.borrow().is_empty());

        gen.set_verbose(true);
        gen.generate(&Options {
            count: Some(2),
            format: Format::Hsl,
            seed: Some("bad".into()),
            ..Default::default()
        })
        .unwrap();
        let entries = entries.borrow();
        assert!(entries.iter().all(|(tag, _)| tag == TAG));
        assert!(entries.iter().any(|(_, m)| m.contains("seed")));
        assert!(entries.iter().any(|(_, m)| m == "formatting as hsl"));
        assert!(entries.iter().any(|(_, m)| m == "color 2 of 2"));
    }

    #[test]
    fn broken_table_is_fatal() {
        let mut table = ColorBounds::empty();
        table
            .define("blue", Some((178.0, 257.0)), &[(20.0, 100.0), (100.0, 35.0)])
            .unwrap();
        let mut gen = RandomColor::new().with_table(table);
        let res = gen.generate(&Options {
            hue: Some("10".into()),
            ..Default::default()
        });
        assert!(matches!(res, Err(Error::ColorNotFound { .. })));
        assert!(gen.history().is_empty());
    }

    #[test_case("bright" => Luminosity::Bright)]
    #[test_case("random" => Luminosity::Random)]
    #[test_case("dim" => panics "unknown")]
    fn parse_luminosity(s: &str) -> Luminosity {
        s.parse().expect("unknown")
    }
}
