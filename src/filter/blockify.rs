use image::Rgb;
use log::trace;
use rand::RngCore;

use super::Filter;
use crate::{Intensity, Raster};

/// Pixelates by filling square tiles with their mean colour.
///
/// Tiles start at the top-left corner; the last row and column of tiles are
/// clipped by the raster edge and averaged over their in-bounds pixels only.
pub struct Blockify {
    strength: Intensity,
}

impl Blockify {
    pub fn new(strength: Intensity) -> Self {
        Self { strength }
    }

    /// Tile edge length, from 2 up to 64.
    pub fn block_size(&self) -> u32 {
        (self.strength.get() / 16 + 2).max(2)
    }
}

impl Filter for Blockify {
    fn name(&self) -> &'static str {
        "blockify"
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Raster {
        let block = self.block_size();
        let (width, height) = (src.width(), src.height());
        trace!("blockify: {block}x{block} tiles");

        let mut out = src.blank_like();
        for top in (0..height).step_by(block as usize) {
            let bottom = (top + block).min(height);

            for left in (0..width).step_by(block as usize) {
                let (from, to) = (left as usize, (left + block).min(width) as usize);

                let mut sum = [0u32; 3];
                let mut count = 0u32;
                for y in top..bottom {
                    for px in &src.row(y)[from..to] {
                        for (acc, c) in sum.iter_mut().zip(px.0) {
                            *acc += c as u32;
                        }
                        count += 1;
                    }
                }

                let mean = Rgb(sum.map(|acc| (acc / count) as u8));
                for y in top..bottom {
                    out.row_mut(y)[from..to].fill(mean);
                }
            }
        }
        out
    }
}
