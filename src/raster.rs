use image::{Rgb, RgbImage};

use crate::error::{Error, Result};

/// Dense row-major grid of 8-bit RGB pixels with at least one pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb<u8>>,
}

impl Raster {
    /// Creates a raster filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgb<u8>) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Wraps row-major pixels. The length must be exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb<u8>>) -> Result<Self> {
        check_size(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::PixelCount {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Blank raster with the same dimensions as `self`.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: vec![Rgb([0, 0, 0]); self.pixels.len()],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// # Panics
    /// When `(x, y)` lies outside the raster.
    pub fn get(&self, x: u32, y: u32) -> Rgb<u8> {
        self.pixels[self.index(x, y)]
    }

    /// # Panics
    /// When `(x, y)` lies outside the raster.
    pub fn put(&mut self, x: u32, y: u32, value: Rgb<u8>) {
        let idx = self.index(x, y);
        self.pixels[idx] = value;
    }

    pub fn pixels(&self) -> &[Rgb<u8>] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb<u8>] {
        &mut self.pixels
    }

    pub fn row(&self, y: u32) -> &[Rgb<u8>] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [Rgb<u8>] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = y as usize * self.width as usize;
        let width = self.width as usize;
        &mut self.pixels[start..start + width]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

fn check_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyRaster { width, height });
    }
    Ok(())
}

impl TryFrom<RgbImage> for Raster {
    type Error = Error;

    fn try_from(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().copied().collect();
        Self::from_pixels(width, height, pixels)
    }
}

impl From<&Raster> for RgbImage {
    fn from(raster: &Raster) -> Self {
        RgbImage::from_fn(raster.width, raster.height, |x, y| raster.get(x, y))
    }
}
