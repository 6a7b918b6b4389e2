/*!
 * The collect, build, write and copy sequence behind one run
 */

use indicatif::ProgressBar;
use tracing::info;

use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::error::Result;
use crate::output::{copy_output, write_output};
use crate::scanner::Scanner;
use crate::types::{FileEntry, RunOutcome, RunSummary};
use crate::writer::MarkdownWriter;

/// One run over a collection request
pub struct Pipeline<'a> {
    config: Config,
    progress: ProgressBar,
    clipboard: &'a dyn ClipboardWriter,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: Config, progress: ProgressBar, clipboard: &'a dyn ClipboardWriter) -> Self {
        Self {
            config,
            progress,
            clipboard,
        }
    }

    /// Find every file the request matches
    pub fn collect(&self) -> Result<Vec<FileEntry>> {
        Scanner::new(&self.config).collect()
    }

    /// Build the document from `entries`, write it and copy it
    pub fn process(&self, entries: &[FileEntry]) -> Result<RunSummary> {
        self.progress.set_length(entries.len() as u64);
        self.progress.set_position(0);

        let (document, statistics) = MarkdownWriter::build(entries, &self.progress).finish();
        self.progress.finish_and_clear();

        write_output(&self.config.output_file, &document)?;
        let clipboard = copy_output(self.clipboard, &document);

        info!(
            "Bundled {} files ({} unreadable)",
            statistics.files_processed, statistics.read_failures
        );

        Ok(RunSummary {
            output_file: self.config.output_file.clone(),
            output_bytes: document.len() as u64,
            statistics,
            clipboard: clipboard.provider().map(str::to_string),
        })
    }

    /// Collect then process; an empty collection writes nothing
    pub fn run(&self) -> Result<RunOutcome> {
        self.run_with(|_| {})
    }

    /// Like [`Pipeline::run`], calling `on_collected` with the matches before building
    pub fn run_with<F>(&self, on_collected: F) -> Result<RunOutcome>
    where
        F: FnOnce(&[FileEntry]),
    {
        let entries = self.collect()?;
        if entries.is_empty() {
            return Ok(RunOutcome::NoMatches);
        }
        on_collected(&entries);
        self.process(&entries).map(RunOutcome::Written)
    }
}
