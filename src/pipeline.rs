use log::debug;
use rand::RngCore;

use crate::{
    filter::{Blockify, Filter, Glitch, Noise, Quantize, Shuffle},
    Intensity, Raster,
};

/// Strength of each stage. The default leaves every stage off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub noise: Intensity,
    pub quantize: Intensity,
    pub shuffle: Intensity,
    pub glitch: Intensity,
    pub blockify: Intensity,
}

impl Params {
    pub fn is_identity(&self) -> bool {
        [
            self.noise,
            self.quantize,
            self.shuffle,
            self.glitch,
            self.blockify,
        ]
        .iter()
        .all(|i| i.is_off())
    }
}

/// Active stages in the fixed order noise, quantize, shuffle, glitch, blockify.
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new(params: &Params) -> Self {
        let mut filters: Vec<Box<dyn Filter>> = Vec::new();

        if !params.noise.is_off() {
            filters.push(Box::new(Noise::new(params.noise)));
        }

        if !params.quantize.is_off() {
            filters.push(Box::new(Quantize::new(params.quantize)));
        }

        if !params.shuffle.is_off() {
            filters.push(Box::new(Shuffle::new(params.shuffle)));
        }

        if !params.glitch.is_off() {
            filters.push(Box::new(Glitch::new(params.glitch)));
        }

        if !params.blockify.is_off() {
            filters.push(Box::new(Blockify::new(params.blockify)));
        }

        Self { filters }
    }

    pub fn stages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|f| f.name())
    }

    /// Runs every active stage on `src` and returns a fresh raster.
    pub fn run(&self, src: &Raster, rng: &mut dyn RngCore) -> Raster {
        let mut current: Option<Raster> = None;

        for filter in self.filters.iter() {
            debug!("applying {}", filter.name());
            let next = filter.apply(current.as_ref().unwrap_or(src), rng);
            current = Some(next);
        }

        current.unwrap_or_else(|| src.clone())
    }
}

/// Degrades `src` with a one-off pipeline built from `params`.
pub fn degrade(src: &Raster, params: &Params, rng: &mut dyn RngCore) -> Raster {
    let pipeline = Pipeline::new(params);
    debug!(
        "degrading {}x{} raster, stages: {:?}",
        src.width(),
        src.height(),
        pipeline.stages().collect::<Vec<_>>()
    );
    pipeline.run(src, rng)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::filter::test_util::gradient;

    fn intensity(v: u16) -> Intensity {
        Intensity::new(v).unwrap()
    }

    #[test]
    fn skips_disabled_stages() {
        let params = Params {
            quantize: intensity(10),
            blockify: intensity(1),
            ..Default::default()
        };
        let stages: Vec<_> = Pipeline::new(&params).stages().collect();
        assert_eq!(stages, ["quantize", "blockify"]);
    }

    #[test]
    fn fixed_order() {
        let params = Params {
            noise: Intensity::FULL,
            quantize: Intensity::FULL,
            shuffle: Intensity::FULL,
            glitch: Intensity::FULL,
            blockify: Intensity::FULL,
        };
        let stages: Vec<_> = Pipeline::new(&params).stages().collect();
        assert_eq!(stages, ["noise", "quantize", "shuffle", "glitch", "blockify"]);
    }

    #[test]
    fn all_off_returns_copy() {
        let src = gradient(9, 4);
        let params = Params::default();
        assert!(params.is_identity());

        let out = degrade(&src, &params, &mut StdRng::seed_from_u64(0));
        assert_eq!(out, src);
    }

    #[test]
    fn matches_manual_chain() {
        let src = gradient(24, 24);
        let params = Params {
            noise: intensity(120),
            quantize: intensity(300),
            glitch: intensity(500),
            ..Default::default()
        };

        let out = degrade(&src, &params, &mut StdRng::seed_from_u64(77));

        let mut rng = StdRng::seed_from_u64(77);
        let manual = Noise::new(params.noise).apply(&src, &mut rng);
        let manual = Quantize::new(params.quantize).apply(&manual, &mut rng);
        let manual = Glitch::new(params.glitch).apply(&manual, &mut rng);
        assert_eq!(out, manual);
    }

    #[test]
    fn keeps_dimensions() {
        let src = gradient(13, 7);
        let params = Params {
            noise: intensity(1000),
            quantize: intensity(1000),
            shuffle: intensity(1000),
            glitch: intensity(1000),
            blockify: intensity(1000),
        };
        let out = degrade(&src, &params, &mut StdRng::seed_from_u64(3));
        assert_eq!((out.width(), out.height()), (13, 7));
    }
}
