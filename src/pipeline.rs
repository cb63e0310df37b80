// WHY: file-to-file driver shared by the CLI and integration tests
// Read phase fills the collector, write phase drains it; nothing is written until input is exhausted

use crate::collector::{CollectStats, DedupCollector};
use crate::reader::{LineReader, ReadStats, ReaderConfig};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info};

/// Tunables for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub reader: ReaderConfig,
    /// Buffer size for the output writer (default: 8KB)
    pub write_buffer_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reader: ReaderConfig::default(),
            write_buffer_size: 8192,
        }
    }
}

/// Summary of a complete run
#[derive(Serialize, Debug, Clone)]
pub struct RunStats {
    pub input_path: String,
    pub output_path: String,
    pub read: ReadStats,
    pub collect: CollectStats,
    pub lines_written: u64,
    pub duration_ms: u64,
}

/// Filter `input_path` and write the unique accepted lines to `output_path`
///
/// Both files are opened before any line is read; the output is truncated even
/// when the input turns out to be empty.
pub fn run_pipeline<P, Q>(input_path: P, output_path: Q, config: &PipelineConfig) -> Result<RunStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let start_time = std::time::Instant::now();

    let input = File::open(input_path)
        .with_context(|| format!("Failed to open input file {}", input_path.display()))?;
    let output = File::create(output_path)
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;
    debug!("Opened {} -> {}", input_path.display(), output_path.display());

    let mut collector = DedupCollector::new();
    let reader = LineReader::new(config.reader.clone());
    let read = reader.read_open_file(input, input_path, |line| {
        collector.push(line);
    })?;

    let collected = collector.stats();
    info!(
        "Collected {} unique lines from {} ({} rejected, {} empty, {} duplicates)",
        collected.unique,
        input_path.display(),
        collected.rejected,
        collected.empty,
        collected.duplicates
    );

    let writer = BufWriter::with_capacity(config.write_buffer_size, output);
    let lines_written = collector
        .write_to(writer)
        .with_context(|| format!("Failed to write output file {}", output_path.display()))?;
    info!("Wrote {} lines to {}", lines_written, output_path.display());

    let collect = collector.into_stats();
    Ok(RunStats {
        input_path: input_path.display().to_string(),
        output_path: output_path.display().to_string(),
        read,
        collect,
        lines_written,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}
