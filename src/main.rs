use std::{path::PathBuf, time::Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use log::{debug, info};
use rand::{random, rngs::StdRng, SeedableRng};

use degrade::{image_io, preview, Intensity, Params, Pipeline};

#[derive(Parser)]
#[command(
    version,
    about = "Degrades an image with noise, posterization, shuffling, glitching and pixelation"
)]
struct Args {
    /// The image to degrade
    #[arg(short = 'f', long, value_name = "FILE")]
    file: PathBuf,

    /// Where to write the degraded image, PNG unless the extension names another format
    #[arg(short = 'o', long, value_name = "FILE", default_value = "degraded.png")]
    output: PathBuf,

    /// Adds random per-channel noise
    #[arg(long, value_name = "0-1000", default_value_t = 0, value_parser = intensity_parser())]
    noise: u16,

    /// Reduces the colour levels per channel
    #[arg(long, value_name = "0-1000", default_value_t = 0, value_parser = intensity_parser())]
    quantize: u16,

    /// Swaps random pixel pairs
    #[arg(long, value_name = "0-1000", default_value_t = 0, value_parser = intensity_parser())]
    shuffle: u16,

    /// Shifts rows horizontally
    #[arg(long, value_name = "0-1000", default_value_t = 0, value_parser = intensity_parser())]
    glitch: u16,

    /// Pixelates into averaged blocks
    #[arg(long, value_name = "0-1000", default_value_t = 0, value_parser = intensity_parser())]
    blockify: u16,

    /// Seed for the random stages, random if omitted
    #[arg(short = 's', long, value_name = "SEED")]
    seed: Option<u64>,

    /// Also writes a side-by-side preview of original and degraded image
    #[arg(short = 'c', long, value_name = "FILE")]
    compare: Option<PathBuf>,

    /// Logs every stage
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn intensity_parser() -> clap::builder::RangedI64ValueParser<u16> {
    clap::value_parser!(u16).range(0..=Intensity::MAX as i64)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub compare: Option<PathBuf>,
    pub seed: u64,
    pub params: Params,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let params = Params {
            noise: Intensity::new(args.noise)?,
            quantize: Intensity::new(args.quantize)?,
            shuffle: Intensity::new(args.shuffle)?,
            glitch: Intensity::new(args.glitch)?,
            blockify: Intensity::new(args.blockify)?,
        };

        if args.compare.as_ref() == Some(&args.output) {
            return Err(anyhow!(
                "comparison and output would both be written to {}",
                args.output.display()
            ));
        }

        Ok(Self {
            input: args.file,
            output: args.output,
            compare: args.compare,
            seed: args.seed.unwrap_or_else(random),
            params,
        })
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = Config::try_from(args)?;
    debug!("{config:?}");

    let source = image_io::load(&config.input)?;
    println!(
        "Loaded {} ({}x{})",
        config.input.display(),
        source.width(),
        source.height()
    );

    let pipeline = Pipeline::new(&config.params);
    if config.params.is_identity() {
        info!("all intensities are zero, output is a copy of the input");
    }

    let timer = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let degraded = pipeline.run(&source, &mut rng);

    let stages: Vec<_> = pipeline.stages().collect();
    println!(
        "Applied [{}] in {:.2?} (seed {})",
        stages.join(", "),
        timer.elapsed(),
        config.seed
    );

    image_io::save(&degraded, &config.output)?;
    println!("Saved {}", config.output.display());

    if let Some(path) = &config.compare {
        image_io::save_image(&preview::side_by_side(&source, &degraded), path)?;
        println!("Saved comparison {}", path.display());
    }

    Ok(())
}
