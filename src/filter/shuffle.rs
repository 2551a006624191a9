use log::trace;
use rand::{Rng, RngCore};

use super::Filter;
use crate::{Intensity, Raster};

/// Performs `strength * pixels / 1000` random pairwise swaps.
///
/// Indices are drawn with replacement, so a swap may be a no-op or undo an
/// earlier one. This is deliberately not a uniform permutation.
pub struct Shuffle {
    strength: Intensity,
}

impl Shuffle {
    pub fn new(strength: Intensity) -> Self {
        Self { strength }
    }

    pub fn swaps(&self, total: usize) -> usize {
        self.strength.get() as usize * total / Intensity::MAX as usize
    }
}

impl Filter for Shuffle {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    fn apply(&self, src: &Raster, rng: &mut dyn RngCore) -> Raster {
        let mut out = src.clone();
        let pixels = out.pixels_mut();
        let total = pixels.len();
        let swaps = self.swaps(total);
        trace!("shuffle: {swaps} swaps over {total} pixels");

        for _ in 0..swaps {
            let a = rng.random_range(0..total);
            let b = rng.random_range(0..total);
            pixels.swap(a, b);
        }
        out
    }
}
