use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("raster must have at least one pixel, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    #[error("expected {expected} pixels for a {width}x{height} raster, got {actual}")]
    PixelCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("intensity {0} is outside 0..=1000")]
    IntensityOutOfRange(u32),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
