use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use shapescan::debug::DebugConfig;
use shapescan::samples::{self, SampleKind};
use shapescan::{DetectionPipeline, acquisition, report};

#[derive(Parser)]
#[command(name = "shapescan")]
#[command(about = "Detect dark shapes in images and classify them")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect and classify shapes in an image.
    Detect {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Save debug outputs to directory (must be empty)
        #[arg(long, value_name = "DIR")]
        debug_out: Option<PathBuf>,
    },

    /// Render a synthetic test image.
    Sample {
        #[arg(value_enum)]
        kind: SampleKind,

        /// Output PNG path
        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value = "240", value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        #[arg(long, default_value = "240", value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Detect { image_path, json, debug_out } => {
            tracing::info!(path = %image_path.display(), "loading image");
            let input = acquisition::load_path_async(&image_path).await?;

            let pipeline = DetectionPipeline::new();
            let trace = pipeline.detect_traced(&input);

            if let Some(dir) = debug_out {
                let dump = DebugConfig::new(dir)?;
                dump.save_trace(&input, &trace)?;
                tracing::info!(dir = %dump.path().display(), "debug outputs written");
            }

            if json {
                println!("{}", report::render_json(&trace.result)?);
            } else {
                print!("{}", report::render_text(&trace.result));
            }
        }
        Commands::Sample { kind, out, width, height } => {
            let img = samples::render(kind, width, height);
            img.save(&out)
                .map_err(|e| anyhow::anyhow!("Failed to save sample image: {}", e))?;
            tracing::info!(kind = kind.name(), path = %out.display(), "sample written");
        }
    }

    Ok(())
}
