/*!
 * Output sink: the Markdown file and the clipboard
 */

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::clipboard::{ClipboardOutcome, ClipboardWriter};
use crate::error::{Result, ResultExt};

/// Write the document, replacing any existing file
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Push the document to the clipboard; failures are only logged
pub fn copy_output(clipboard: &dyn ClipboardWriter, text: &str) -> ClipboardOutcome {
    let outcome = clipboard.write(text);
    if let ClipboardOutcome::Unavailable { reason } = &outcome {
        debug!("Clipboard skipped: {}", reason);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::NoopClipboard;
    use tempfile::tempdir;

    #[test]
    fn test_write_output_overwrites() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("output.md");
        fs::write(&path, "previous run, much longer than the new text").unwrap();

        write_output(&path, "### a.py\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "### a.py\n");
    }

    #[test]
    fn test_write_output_reports_unwritable_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("output.md");

        let err = write_output(&path, "text").unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
    }

    #[test]
    fn test_copy_output_tolerates_unavailable_clipboard() {
        let outcome = copy_output(&NoopClipboard, "text");
        assert_eq!(outcome.provider(), None);
    }
}
