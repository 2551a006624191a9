mod blockify;
mod glitch;
mod noise;
mod quantize;
mod shuffle;

pub use blockify::Blockify;
pub use glitch::Glitch;
pub use noise::Noise;
pub use quantize::Quantize;
pub use shuffle::Shuffle;

use rand::RngCore;

use crate::Raster;

pub trait Filter {
    fn name(&self) -> &'static str;

    /// Produces a new raster with the same dimensions as `src`.
    fn apply(&self, src: &Raster, rng: &mut dyn RngCore) -> Raster;
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
pub(crate) mod test_util {
    use image::Rgb;

    use crate::Raster;

    /// Raster whose pixels encode their own coordinates, `[x, y, x ^ y]`.
    pub fn gradient(width: u32, height: u32) -> Raster {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| Rgb([x as u8, y as u8, (x ^ y) as u8])))
            .collect();
        Raster::from_pixels(width, height, pixels).unwrap()
    }

    pub fn sorted_pixels(raster: &Raster) -> Vec<[u8; 3]> {
        let mut pixels: Vec<[u8; 3]> = raster.pixels().iter().map(|px| px.0).collect();
        pixels.sort_unstable();
        pixels
    }
}
