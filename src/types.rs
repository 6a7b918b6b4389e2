/*!
 * Core types shared by the collector, the document builder and the report
 */

use std::path::PathBuf;

/// A file matched by the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as found on disk (root joined with the relative part)
    pub path: PathBuf,
    /// Path relative to the scanned root, always `/`-separated
    pub relative_path: String,
}

/// Outcome of reading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Full text of the file
    Read { content: String },
    /// The file could not be read as text
    Failed { reason: String },
}

impl FileContent {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Result of a completed pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing matched the pattern; no output was written
    NoMatches,
    /// The document was written
    Written(RunSummary),
}

/// Everything the final report shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Output file path as written
    pub output_file: PathBuf,
    /// Size of the written document in bytes
    pub output_bytes: u64,
    /// Counters gathered while building
    pub statistics: BuildStatistics,
    /// Which clipboard provider took the text, if any
    pub clipboard: Option<String>,
}

/// Counters gathered by the document builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStatistics {
    /// Number of sections appended
    pub files_processed: usize,
    /// Sections whose body is an error placeholder
    pub read_failures: usize,
    /// Lines of successfully read content
    pub total_lines: usize,
    /// Characters of successfully read content
    pub total_chars: usize,
}
