use crate::normalization::filter_line_into;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Per-run collection counters
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectStats {
    /// Lines offered to the collector
    pub lines_seen: u64,
    /// Lines containing a non-letter character after stripping
    pub rejected: u64,
    /// Lines that passed the predicate but were empty
    pub empty: u64,
    /// Accepted lines already present in the set
    pub duplicates: u64,
    /// Size of the result set
    pub unique: u64,
}

/// Accumulates accepted lines into an unordered set of unique values
#[derive(Debug, Default)]
pub struct DedupCollector {
    lines: HashSet<String>,
    stats: CollectStats,
    /// Reused for every line; only newly inserted lines are copied out
    scratch: String,
}

impl DedupCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter one raw line and keep it if it survives
    /// Returns true when the line was newly inserted
    pub fn push(&mut self, raw_line: &str) -> bool {
        self.stats.lines_seen += 1;

        let verdict = filter_line_into(raw_line, &mut self.scratch);
        if !verdict.is_accepted() {
            debug!(line = raw_line, "Rejected line with non-letter characters");
            self.stats.rejected += 1;
            return false;
        }

        // Emptiness is a separate stage from the letter predicate
        if self.scratch.is_empty() {
            self.stats.empty += 1;
            return false;
        }

        if self.contains(&self.scratch) {
            self.stats.duplicates += 1;
            return false;
        }

        self.lines.insert(self.scratch.clone());
        self.stats.unique += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    pub fn stats(&self) -> &CollectStats {
        &self.stats
    }

    /// Iterate the result set in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Drop the result set, keeping the final counters
    pub fn into_stats(self) -> CollectStats {
        self.stats
    }

    /// Write every unique line followed by `\n`, returning the number written
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<u64> {
        let mut written = 0u64;
        for line in self.iter() {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

impl<'a> Extend<&'a str> for DedupCollector {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for line in iter {
            self.push(line);
        }
    }
}
