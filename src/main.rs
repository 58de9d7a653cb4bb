use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gifdither::models::{AppConfig, ReconstructionMode};
use gifdither::services::{DitherJob, DitherPipeline};

#[derive(Parser)]
#[command(name = "gifdither")]
#[command(about = "Dither animated GIFs down to 2- or 4-color palettes")]
struct Cli {
    /// YAML config file (falls back to GIFDITHER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither every frame of a GIF and write the result
    Dither {
        /// Source GIF
        input: PathBuf,

        /// Destination GIF
        output: PathBuf,

        /// Palette id (see `gifdither palettes`)
        #[arg(short, long)]
        palette: Option<u32>,

        /// Fixed frame delay in centiseconds (default: keep source delays)
        #[arg(short, long)]
        delay: Option<u16>,

        /// Worker threads (0 = all cores)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Where error diffusion takes its reconstruction values from
        #[arg(long, value_enum)]
        reconstruction: Option<ReconstructionMode>,
    },
    /// List available palettes
    Palettes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gifdither=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("GIFDITHER_CONFIG").ok().map(PathBuf::from));
    let config = Arc::new(AppConfig::load(config_path.as_deref())?);
    let pipeline = DitherPipeline::new(config)?;

    match cli.command {
        Commands::Dither {
            input,
            output,
            palette,
            delay,
            threads,
            reconstruction,
        } => {
            let job = DitherJob {
                input,
                output,
                palette,
                delay,
                threads,
                reconstruction,
            };
            pipeline.run(&job)?;
            println!("Written to {}", job.output.display());
        }
        Commands::Palettes => run_palettes_command(&pipeline),
    }

    Ok(())
}

/// Print the palette registry, default marked with `*`
fn run_palettes_command(pipeline: &DitherPipeline) {
    let registry = pipeline.registry();
    for entry in registry.iter() {
        let marker = if entry.id == registry.default_id() {
            "*"
        } else {
            " "
        };
        let colors: Vec<String> = entry
            .palette
            .colors()
            .iter()
            .map(|c| format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b))
            .collect();
        println!(
            "{marker} {:>3}  {:<10} {}",
            entry.id,
            entry.name,
            colors.join(" ")
        );
    }
}
