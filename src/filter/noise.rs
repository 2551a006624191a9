use image::Pixel;
use rand::{Rng, RngCore};

use super::{clamp_channel, Filter};
use crate::{Intensity, Raster};

/// Adds a centred random offset in `[-s/2, s - s/2]` to every channel.
///
/// Each channel draws its own offset, so noise is coloured rather than
/// luminance-only.
pub struct Noise {
    strength: Intensity,
}

impl Noise {
    pub fn new(strength: Intensity) -> Self {
        Self { strength }
    }
}

impl Filter for Noise {
    fn name(&self) -> &'static str {
        "noise"
    }

    fn apply(&self, src: &Raster, rng: &mut dyn RngCore) -> Raster {
        let strength = self.strength.get() as i32;
        let center = strength / 2;

        let mut out = src.clone();
        for px in out.pixels_mut() {
            px.apply(|c| clamp_channel(c as i32 + rng.random_range(0..=strength) - center));
        }
        out
    }
}
