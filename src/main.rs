use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use wordsieve::pipeline::{run_pipeline, PipelineConfig};

/// Printed before arguments are parsed, on every invocation
const USAGE: &str = "Usage: exe [in] [out]";

#[derive(Parser, Debug)]
#[command(name = "wordsieve")]
#[command(about = "Strip diacritics, keep purely alphabetic lines and write them deduplicated")]
#[command(version)]
struct Args {
    /// Input text file, one entry per line
    input: PathBuf,

    /// Output file, created or truncated
    output: PathBuf,
}

fn main() -> Result<()> {
    println!("{USAGE}");

    // WHY: structured JSON logging enables observability; stderr keeps stdout to the usage line
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting wordsieve");
    info!(?args, "Parsed CLI arguments");

    let stats = run_pipeline(&args.input, &args.output, &PipelineConfig::default())?;

    let summary = serde_json::to_string(&stats)?;
    info!(%summary, "Run complete");
    Ok(())
}
