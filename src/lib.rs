pub mod normalization;
pub mod reader;
pub mod collector;
pub mod pipeline;

// Re-export main types for convenient access
pub use normalization::{filter_line_into, strip_diacritics, transform, LineVerdict};
pub use collector::{CollectStats, DedupCollector};
pub use reader::{LineReader, ReadStats, ReaderConfig};
pub use pipeline::{run_pipeline, PipelineConfig, RunStats};
