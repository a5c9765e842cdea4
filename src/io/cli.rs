//! Command-line interface for building uniform and mixed grid collages

use crate::algorithm::{ImagePool, LayoutPlan, MixedGridPlanner, UniformGridPlanner};
use crate::io::collector::collect_images;
use crate::io::configuration::{
    CollageConfig, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLS, DEFAULT_IMAGE_DIRECTORY,
    DEFAULT_LARGE_BLOCKS, DEFAULT_MIXED_OUTPUT, DEFAULT_PLACEMENT_ATTEMPTS, DEFAULT_QUALITY,
    DEFAULT_ROWS, DEFAULT_UNIFORM_OUTPUT,
};
use crate::io::error::Result;
use crate::io::image::{output_format, save_collage};
use crate::io::progress::RenderProgress;
use crate::io::report::{report_plan, report_render};
use crate::render::{FileLoader, Renderer};
use crate::spatial::CellSize;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridcollage")]
#[command(
    author,
    version,
    about = "Arrange a directory of images into a grid collage"
)]
/// Command-line arguments for the collage builder
pub struct Cli {
    /// Layout to build
    #[command(subcommand)]
    pub command: Command,

    /// Only log warnings and errors, and hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Collage layouts
#[derive(Subcommand)]
pub enum Command {
    /// One image per cell
    Uniform(UniformArgs),
    /// Single cells mixed with randomly placed 2x2 blocks
    Mixed(MixedArgs),
}

/// Arguments shared by every layout
#[derive(Args)]
pub struct GridArgs {
    /// Directory containing the source images
    #[arg(short, long, default_value = DEFAULT_IMAGE_DIRECTORY)]
    pub input: PathBuf,

    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Cell width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u32,

    /// Cell height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: u32,

    /// Keep directory order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Background color for blank cells (hex RRGGBB or a basic color name)
    #[arg(short, long, default_value = "white", value_parser = parse_color)]
    pub background: [u8; 3],

    /// Random seed for reproducible layouts
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments of the uniform layout
#[derive(Args)]
pub struct UniformArgs {
    #[command(flatten)]
    /// Shared grid settings
    pub grid: GridArgs,

    /// Output image path
    #[arg(short, long, default_value = DEFAULT_UNIFORM_OUTPUT)]
    pub output: PathBuf,
}

/// Arguments of the mixed layout
#[derive(Args)]
pub struct MixedArgs {
    #[command(flatten)]
    /// Shared grid settings
    pub grid: GridArgs,

    /// Output image path
    #[arg(short, long, default_value = DEFAULT_MIXED_OUTPUT)]
    pub output: PathBuf,

    /// Number of 2x2 blocks
    #[arg(short, long, default_value_t = DEFAULT_LARGE_BLOCKS)]
    pub large: usize,

    /// Random anchor draws per 2x2 block before it is skipped
    #[arg(short, long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS)]
    pub attempts: usize,
}

/// Parse a hex color (`RRGGBB`, optionally prefixed by `#`) or a basic color name
///
/// # Errors
///
/// Returns a message if the value is neither a known name nor six hex digits
pub fn parse_color(value: &str) -> std::result::Result<[u8; 3], String> {
    match value.to_ascii_lowercase().as_str() {
        "white" => return Ok([255, 255, 255]),
        "black" => return Ok([0, 0, 0]),
        "gray" | "grey" => return Ok([128, 128, 128]),
        _ => {}
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected RRGGBB hex or a color name, got '{value}'"));
    }

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| format!("invalid hex color '{value}'"))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

impl GridArgs {
    fn to_config(&self, output: &Path) -> CollageConfig {
        CollageConfig {
            rows: self.rows,
            cols: self.cols,
            cell: CellSize::new(self.cell_width, self.cell_height),
            shuffle: !self.no_shuffle,
            quality: self.quality,
            background: self.background,
            seed: self.seed,
            output: output.to_path_buf(),
            ..CollageConfig::default()
        }
    }
}

impl Command {
    /// Directory the source images are read from
    pub fn input(&self) -> &Path {
        match self {
            Self::Uniform(args) => &args.grid.input,
            Self::Mixed(args) => &args.grid.input,
        }
    }

    /// Explicit configuration for the selected layout
    pub fn config(&self) -> CollageConfig {
        match self {
            Self::Uniform(args) => CollageConfig {
                large_blocks: 0,
                ..args.grid.to_config(&args.output)
            },
            Self::Mixed(args) => CollageConfig {
                large_blocks: args.large,
                placement_attempts: args.attempts,
                ..args.grid.to_config(&args.output)
            },
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Mixed(_) => "mixed",
        }
    }
}

/// Runs one collage build from parsed CLI arguments
pub struct CollageProcessor {
    cli: Cli,
    loader: FileLoader,
}

impl CollageProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            loader: FileLoader,
        }
    }

    /// Collect, plan, render and save the collage
    ///
    /// Returns the path of the written image.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid or the output extension is not writable
    /// - The input directory cannot be read
    /// - The mixed layout needs more images than were found
    /// - The collage cannot be saved
    pub fn process(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let command = &self.cli.command;
        let config = command.config();

        // Fail on configuration before any file is decoded
        config.validate()?;
        output_format(&config.output)?;

        let images = collect_images(command.input())?;
        log::info!(
            "Found {} images in '{}'",
            images.len(),
            command.input().display()
        );

        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("Building {} layout with seed {seed}", command.label());
        let mut rng = StdRng::seed_from_u64(seed);

        let plan = self.plan(&config, ImagePool::new(images), &mut rng)?;
        report_plan(&plan, &self.loader);

        let progress = if self.cli.quiet {
            RenderProgress::hidden()
        } else {
            RenderProgress::new("Rendering")
        };
        let outcome = Renderer::new(&self.loader, config.cell, config.background)
            .with_progress(&progress)
            .render(&plan)?;
        report_render(&outcome, &self.loader);

        save_collage(&outcome.image, &config.output, config.quality)?;
        log::info!(
            "Saved collage to '{}' in {:.2?}",
            config.output.display(),
            start_time.elapsed()
        );

        Ok(config.output)
    }

    fn plan(
        &self,
        config: &CollageConfig,
        pool: ImagePool<PathBuf>,
        rng: &mut StdRng,
    ) -> Result<LayoutPlan<PathBuf>> {
        match self.cli.command {
            Command::Uniform(_) => {
                log::info!(
                    "Grid needs {} images for {}x{} cells",
                    config.total_cells(),
                    config.rows,
                    config.cols
                );
                UniformGridPlanner::new(config).plan(pool, rng)
            }
            Command::Mixed(_) => {
                let planner = MixedGridPlanner::new(config);
                let quota = planner.quota()?;
                log::info!(
                    "{}x{} grid with {} 2x2 blocks needs {} images",
                    config.rows,
                    config.cols,
                    quota.large_blocks,
                    quota.needed
                );
                planner.plan(pool, rng)
            }
        }
    }
}
