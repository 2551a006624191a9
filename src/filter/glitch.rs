use std::ops::RangeInclusive;

use log::trace;
use rand::{Rng, RngCore};

use super::Filter;
use crate::{Intensity, Raster};

/// Shifts every row horizontally by its own random offset.
///
/// Columns that fall off an edge repeat the edge pixel instead of wrapping.
pub struct Glitch {
    strength: Intensity,
}

impl Glitch {
    pub fn new(strength: Intensity) -> Self {
        Self { strength }
    }

    /// Inclusive range a row's shift is drawn from. Skewed towards positive shifts.
    pub fn shift_range(&self) -> RangeInclusive<i64> {
        let strength = self.strength.get() as i64;
        -(strength / 40)..=strength / 20 - strength / 40
    }
}

impl Filter for Glitch {
    fn name(&self) -> &'static str {
        "glitch"
    }

    fn apply(&self, src: &Raster, rng: &mut dyn RngCore) -> Raster {
        let strength = self.strength.get() as i64;
        let last = src.width() as i64 - 1;
        trace!("glitch: shifts in {:?}", self.shift_range());

        let mut out = src.blank_like();
        for y in 0..src.height() {
            let shift = rng.random_range(0..=strength / 20) - strength / 40;
            let line = src.row(y);

            for (x, px) in out.row_mut(y).iter_mut().enumerate() {
                let sx = (x as i64 + shift).clamp(0, last);
                *px = line[sx as usize];
            }
        }
        out
    }
}
