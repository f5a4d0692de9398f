use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pitclean_core::{list_inputs, process_all, NormalizerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Normalize point-in-time count CSV exports into a canonical five-column layout",
    long_about = None
)]
struct Cli {
    /// Directory holding the raw CSV exports (defaults to the compiled-in path)
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Existing directory that receives the cleaned files
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = NormalizerConfig::from_env().with_overrides(cli.input_dir, cli.output_dir);
    info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting batch"
    );

    let inputs = list_inputs(&config.input_dir, &config.suffix).with_context(|| {
        format!(
            "failed to list input directory {}",
            config.input_dir.display()
        )
    })?;
    info!(files = inputs.len(), "found input files");

    let batch = process_all(&inputs, &config.output_dir, &config.schema);
    for report in &batch.reports {
        println!("{report}");
    }
    println!("{}", batch.completion_line());

    Ok(())
}
