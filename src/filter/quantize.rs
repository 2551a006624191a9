use image::Pixel;
use log::trace;
use rand::RngCore;

use super::{clamp_channel, Filter};
use crate::{Intensity, Raster};

/// Posterizes every channel into a fixed number of integer buckets.
pub struct Quantize {
    strength: Intensity,
}

impl Quantize {
    pub fn new(strength: Intensity) -> Self {
        Self { strength }
    }

    /// Number of buckets per channel, from 256 at low strength down to 5 at 1000.
    pub fn levels(&self) -> u32 {
        (256 / (self.strength.get() / 20).max(1)).max(2)
    }
}

fn quantize_channel(value: u8, levels: u32) -> u8 {
    let bucket = value as u32 * levels / 256;
    clamp_channel((bucket * (256 / levels)) as i32)
}

impl Filter for Quantize {
    fn name(&self) -> &'static str {
        "quantize"
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Raster {
        let levels = self.levels();
        trace!("quantize: {levels} levels, step {}", 256 / levels);

        let mut out = src.clone();
        for px in out.pixels_mut() {
            px.apply(|c| quantize_channel(c, levels));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::filter::test_util::gradient;

    fn quantize(strength: u16) -> Quantize {
        Quantize::new(Intensity::new(strength).unwrap())
    }

    #[test]
    fn level_formula() {
        assert_eq!(quantize(0).levels(), 256);
        assert_eq!(quantize(19).levels(), 256);
        assert_eq!(quantize(40).levels(), 128);
        assert_eq!(quantize(500).levels(), 10);
        assert_eq!(quantize(1000).levels(), 5);
    }

    #[test]
    fn channel_mapping_truncates() {
        // 5 levels, step 51
        assert_eq!(quantize_channel(0, 5), 0);
        assert_eq!(quantize_channel(51, 5), 0);
        assert_eq!(quantize_channel(52, 5), 51);
        assert_eq!(quantize_channel(255, 5), 204);
        // 10 levels, step 25
        assert_eq!(quantize_channel(128, 10), 125);
    }

    #[test]
    fn low_strength_is_identity() {
        let src = gradient(16, 16);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(quantize(10).apply(&src, &mut rng), src);
    }

    #[test]
    fn output_is_multiple_of_step() {
        let src = gradient(256, 4);
        let mut rng = StdRng::seed_from_u64(0);
        for strength in [100, 333, 500, 750, 1000] {
            let filter = quantize(strength);
            let step = (256 / filter.levels()) as u8;
            let out = filter.apply(&src, &mut rng);
            for px in out.pixels() {
                assert!(px.0.iter().all(|c| c % step == 0), "{px:?} not a multiple of {step}");
            }
        }
    }

    #[test]
    fn reapplying_power_of_two_levels_is_noop() {
        let src = gradient(256, 4);
        let mut rng = StdRng::seed_from_u64(0);
        for strength in [40, 80, 160, 320, 640] {
            let filter = quantize(strength);
            let once = filter.apply(&src, &mut rng);
            assert_eq!(filter.apply(&once, &mut rng), once, "strength {strength}");
        }
    }
}
