use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Statistics for file reading operations
#[derive(Serialize, Debug, Clone, Default)]
pub struct ReadStats {
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Remove one trailing terminator: `\n`, `\r\n` or a lone `\r`
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split one `read_line` chunk into logical lines
///
/// `\n`, `\r\n` and a lone `\r` all end a line, so `"a\rb\r\n"` yields `"a"`
/// and `"b"`. The chunk ends at the first `\n`, so any other `\r` inside it is a
/// lone carriage return.
pub fn split_terminated(chunk: &str) -> std::str::Split<'_, char> {
    strip_terminator(chunk).split('\r')
}

/// Line reader that hands each terminator-stripped line to a callback
pub struct LineReader {
    config: ReaderConfig,
}

impl LineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Feed every line of an already-opened file to `on_line`
    /// `path` is only used for error context and logging
    pub fn read_open_file<F>(&self, file: File, path: &Path, on_line: F) -> Result<ReadStats>
    where
        F: FnMut(&str),
    {
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let stats = Self::read_lines_from(reader, on_line)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;

        info!(
            "Read {}: {} lines, {} bytes in {}ms ({:.2} MB/s)",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms,
            if stats.duration_ms > 0 {
                (stats.bytes_read as f64 / 1_000_000.0) / (stats.duration_ms as f64 / 1000.0)
            } else {
                0.0
            }
        );
        Ok(stats)
    }

    /// Feed every line of an already-open reader to `on_line`
    /// WHY: raw lines stay transient, only the callback decides what survives
    pub fn read_lines_from<R, F>(mut reader: R, mut on_line: F) -> Result<ReadStats>
    where
        R: BufRead,
        F: FnMut(&str),
    {
        let start_time = std::time::Instant::now();
        let mut buffer = String::new();
        let mut stats = ReadStats::default();

        loop {
            buffer.clear();
            let bytes = match reader.read_line(&mut buffer) {
                Ok(bytes) => bytes,
                Err(e) => {
                    let error_msg = format!("Decoding error at line {}: {}", stats.lines_read + 1, e);
                    warn!("{}", error_msg);
                    return Err(anyhow::Error::new(e).context(error_msg));
                }
            };
            if bytes == 0 {
                break;
            }

            stats.bytes_read += bytes as u64;
            for line in split_terminated(&buffer) {
                stats.lines_read += 1;
                on_line(line);
            }
        }

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        Ok(stats)
    }
}
