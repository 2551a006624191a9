//! Lossy image degradation.
//!
//! A [`Raster`] is threaded through up to five filters in a fixed order:
//! noise, quantize, shuffle, glitch and blockify. Each is controlled by an
//! [`Intensity`] in `0..=1000`; zero skips the stage.
//!
//! ```no_run
//! use degrade::{degrade, image_io, Intensity, Params};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let src = image_io::load("input.png")?;
//! let params = Params {
//!     noise: Intensity::new(200)?,
//!     blockify: Intensity::new(300)?,
//!     ..Default::default()
//! };
//! let out = degrade(&src, &params, &mut StdRng::seed_from_u64(1));
//! image_io::save(&out, "degraded.png")?;
//! # Ok::<(), degrade::Error>(())
//! ```

mod error;
pub mod filter;
pub mod image_io;
mod intensity;
mod pipeline;
pub mod preview;
mod raster;

pub use error::{Error, Result};
pub use intensity::Intensity;
pub use pipeline::{degrade, Params, Pipeline};
pub use raster::Raster;
