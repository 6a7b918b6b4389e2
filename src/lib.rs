/*!
 * filecopy - Bundle matching files into a single Markdown document
 *
 * Files matching a `*.ext` pattern are collected recursively, written to
 * `output.md` as one heading and fenced block per file, and copied to the
 * system clipboard.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use clipboard::{ClipboardOutcome, ClipboardWriter, NoopClipboard, SystemClipboard};
pub use config::{Args, CollectionRequest, Config, OUTPUT_FILE};
pub use error::{FileCopyError, Result};
pub use pipeline::Pipeline;
pub use report::Reporter;
pub use scanner::Scanner;
pub use types::{BuildStatistics, FileContent, FileEntry, RunOutcome, RunSummary};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
