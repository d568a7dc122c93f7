use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raster_fx::{channel::DEFAULT_GRAYSCALE_BOOST, ChromaOverflow, FilterPipeline};

use pixelscope::io;
use pixelscope::presets::PresetBook;

#[derive(Parser)]
#[command(name = "pixelscope")]
#[command(about = "Color space explorer and pixel effects for still images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Visualize an image in another color space
    Convert {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Target color space: hsv, lab, cmyk, or ycbcr
        #[arg(short, long)]
        space: String,

        /// Apply the space's threshold rule with this cutoff
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Wrap out-of-range YCbCr chroma modulo 256 instead of clamping
        #[arg(long)]
        wrap_chroma: bool,
    },
    /// Convert to grayscale
    Gray {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Brightness boost applied to the luminance
        #[arg(short, long, default_value_t = DEFAULT_GRAYSCALE_BOOST)]
        boost: f32,
    },
    /// Shift brightness up or down
    Brightness {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Amount added to each color channel (negative darkens)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f32,
    },
    /// Isolate or threshold a single RGB channel
    Channel {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Channel name: red, green, or blue
        #[arg(short, long)]
        name: String,

        /// Binarize the channel at this cutoff instead of extracting it
        #[arg(short, long)]
        threshold: Option<f32>,
    },
    /// Box blur
    Blur {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Blur level; the kernel is (2 * level + 1) pixels on a side
        #[arg(short, long, default_value_t = 1)]
        level: usize,
    },
    /// Pixelate into uniform blocks
    Pixelate {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Block side length in pixels
        #[arg(short, long, default_value_t = 5)]
        block: usize,

        /// Average channels independently instead of flattening to gray
        #[arg(long)]
        color: bool,
    },
    /// Run a named preset filter chain
    Preset {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Preset name (see `pixelscope presets`)
        #[arg(short, long)]
        name: String,

        /// YAML preset file merged over the built-ins
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List available presets
    Presets {
        /// YAML preset file merged over the built-ins
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            space,
            threshold,
            wrap_chroma,
        } => {
            let space = space.parse()?;
            let overflow = if wrap_chroma {
                ChromaOverflow::Wrap
            } else {
                ChromaOverflow::Clamp
            };
            let pipeline = match threshold {
                Some(threshold) => {
                    FilterPipeline::new().convert_threshold(space, threshold, overflow)
                }
                None => FilterPipeline::new().convert(space),
            };
            run_pipeline(&input, &output, &pipeline)
        }
        Commands::Gray { input, output, boost } => {
            run_pipeline(&input, &output, &FilterPipeline::new().grayscale(boost))
        }
        Commands::Brightness {
            input,
            output,
            amount,
        } => run_pipeline(&input, &output, &FilterPipeline::new().brightness(amount)),
        Commands::Channel {
            input,
            output,
            name,
            threshold,
        } => {
            let channel = name.parse()?;
            let pipeline = match threshold {
                Some(threshold) => FilterPipeline::new().channel_threshold(channel, threshold),
                None => FilterPipeline::new().extract(channel),
            };
            run_pipeline(&input, &output, &pipeline)
        }
        Commands::Blur { input, output, level } => {
            run_pipeline(&input, &output, &FilterPipeline::new().blur(level))
        }
        Commands::Pixelate {
            input,
            output,
            block,
            color,
        } => {
            let pipeline = if color {
                FilterPipeline::new().pixelate_color(block)
            } else {
                FilterPipeline::new().pixelate_gray(block)
            };
            run_pipeline(&input, &output, &pipeline)
        }
        Commands::Preset {
            input,
            output,
            name,
            file,
        } => {
            let book = load_book(file.as_deref())?;
            let pipeline = book.pipeline(&name)?;
            tracing::info!(preset = %name, filters = pipeline.len(), "Resolved preset");
            run_pipeline(&input, &output, &pipeline)
        }
        Commands::Presets { file } => {
            let book = load_book(file.as_deref())?;
            println!("Available presets:\n");
            for (name, chain) in book.chains() {
                println!("  {name}");
                for spec in chain {
                    println!("    - {}", spec.describe());
                }
            }
            Ok(())
        }
    }
}

/// Load the preset table, merging an optional user file over the built-ins.
fn load_book(file: Option<&Path>) -> anyhow::Result<PresetBook> {
    match file {
        Some(path) => Ok(PresetBook::with_file(path)?),
        None => Ok(PresetBook::built_in()),
    }
}

/// Load a PNG, run the filter chain, write the result.
fn run_pipeline(input: &Path, output: &Path, pipeline: &FilterPipeline) -> anyhow::Result<()> {
    let source = io::load_png(input)?;
    tracing::info!(
        width = source.width(),
        height = source.height(),
        filters = pipeline.len(),
        "Processing image"
    );

    let result = pipeline.run(&source)?;
    io::save_png(output, &result)?;

    println!(
        "Wrote {} ({}x{} px)",
        output.display(),
        result.width(),
        result.height()
    );
    Ok(())
}
