use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::{debug, warn};

use crate::{error::Result, Raster};

/// Decodes any supported format and drops alpha.
pub fn load(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Raster::try_from(img)
}

/// Encodes in the format implied by the extension, PNG when there is none
/// or it names no writable format.
pub fn save(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    save_image(&RgbImage::from(raster), path)
}

pub fn save_image(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = output_format(path);
    if matches!(format, ImageFormat::Jpeg | ImageFormat::Avif) {
        warn!("{} uses lossy {format:?} compression", path.display());
    }

    img.save_with_format(path, format)?;
    debug!("wrote {} as {format:?}", path.display());
    Ok(())
}

fn output_format(path: &Path) -> ImageFormat {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| format.writing_enabled())
        .unwrap_or(ImageFormat::Png)
}
