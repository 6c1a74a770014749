//! Hue, saturation and brightness sampling

use crate::bounds::ColorBounds;
use crate::random::RandomSource;
use crate::{Error, Luminosity, Options};

/// Hue sub-ranges already handed out in a batch
///
/// One slot per requested color. Lives for a single batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    taken: Vec<bool>,
    assigned: Vec<usize>,
}

impl Occupancy {
    pub fn new(slots: usize) -> Self {
        Self {
            taken: vec![false; slots],
            assigned: Vec::with_capacity(slots),
        }
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Out of range slots are never taken
    pub fn is_taken(&self, slot: usize) -> bool {
        self.taken.get(slot).copied().unwrap_or(false)
    }

    /// Slot handed to each color so far, fallbacks included
    pub fn assigned(&self) -> &[usize] {
        &self.assigned
    }

    /// Claim `slot`, or fall back to `slot + 2` if it was already taken
    ///
    /// The fallback is not marked and may itself be taken. With no slots
    /// there is nothing to claim and `slot` is returned as is.
    pub fn claim(&mut self, slot: usize) -> usize {
        let len = self.taken.len();
        if len == 0 {
            return slot;
        }
        let slot = slot % len;
        let assigned = if self.taken[slot] {
            (slot + 2) % len
        } else {
            self.taken[slot] = true;
            slot
        };
        self.assigned.push(assigned);
        assigned
    }
}

fn normalize_hue(hue: f64) -> f64 {
    if hue < 0.0 {
        hue + 360.0
    } else if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}

/// Pick a hue in `[0, 360)`
///
/// With a non empty `occupancy` the hue range is split in one step per slot
/// and the hue is drawn from a step no other color of the batch got, when
/// possible. Step ends wrap at 359, so the last step of the full circle
/// runs backwards from its start down to 1.
pub fn pick_hue(
    table: &ColorBounds,
    rng: &mut RandomSource,
    options: &Options,
    occupancy: Option<&mut Occupancy>,
) -> f64 {
    let (min, max) = table.resolve_hue_range(options.hue.as_deref());

    let hue = match occupancy {
        Some(occupancy) if !occupancy.is_empty() => {
            let slots = occupancy.len();
            let step = (max - min) / slots as f64;
            let candidate = rng.within(min, max);
            let index = if step > 0.0 {
                (((candidate - min) / step).floor().max(0.0) as usize).min(slots - 1)
            } else {
                0
            };
            let index = occupancy.claim(index) as f64;
            let low = (min + index * step) % 359.0;
            let high = (min + (index + 1.0) * step) % 359.0;
            rng.within(low, high)
        }
        _ => rng.within(min, max),
    };

    normalize_hue(hue)
}

pub fn pick_saturation(
    table: &ColorBounds,
    rng: &mut RandomSource,
    hue: f64,
    options: &Options,
) -> Result<f64, Error> {
    if options.hue.as_deref() == Some("monochrome") {
        return Ok(0.0);
    }
    if options.luminosity == Some(Luminosity::Random) {
        return Ok(rng.within(0.0, 100.0));
    }

    let (mut s_min, mut s_max) = table.lookup_by_hue(hue)?.saturation_range;
    match options.luminosity {
        Some(Luminosity::Bright) => s_min = 55.0,
        Some(Luminosity::Dark) => s_min = s_max - 10.0,
        Some(Luminosity::Light) => s_max = 55.0,
        Some(Luminosity::Random) | None => {}
    }

    Ok(rng.within(s_min, s_max))
}

pub fn pick_brightness(
    table: &ColorBounds,
    rng: &mut RandomSource,
    hue: f64,
    saturation: f64,
    options: &Options,
) -> f64 {
    let mut b_min = table.minimum_brightness(hue, saturation);
    let mut b_max = 100.0;

    match options.luminosity {
        Some(Luminosity::Dark) => b_max = b_min + 20.0,
        Some(Luminosity::Light) => b_min = (b_max + b_min) / 2.0,
        Some(Luminosity::Random) => {
            b_min = 0.0;
            b_max = 100.0;
        }
        Some(Luminosity::Bright) | None => {}
    }

    rng.within(b_min, b_max)
}
