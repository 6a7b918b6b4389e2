/*!
 * Markdown document builder
 */

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::types::{BuildStatistics, FileContent, FileEntry};

const FENCE: &str = "```";

/// Append-only Markdown document, one section per collected file
#[derive(Debug, Default)]
pub struct MarkdownWriter {
    buffer: String,
    statistics: BuildStatistics,
}

impl MarkdownWriter {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every entry and append its section, advancing `progress` once per file
    pub fn build(entries: &[FileEntry], progress: &ProgressBar) -> Self {
        let mut writer = Self::new();

        for entry in entries {
            progress.set_message(entry.relative_path.clone());
            let line = format!(" {}", entry.path.display());
            if progress.is_hidden() {
                println!("{}", line);
            } else {
                progress.println(line);
            }

            let content = read_entry(&entry.path);
            writer.push_section(&entry.relative_path, &content);

            progress.inc(1);
        }

        writer
    }

    /// Append the heading and fenced block for one file
    pub fn push_section(&mut self, relative_path: &str, content: &FileContent) {
        self.buffer.push_str("### ");
        self.buffer.push_str(relative_path);
        self.buffer.push('\n');
        self.buffer.push_str(FENCE);
        self.buffer.push('\n');

        match content {
            FileContent::Read { content } => {
                self.buffer.push_str(content);
                self.buffer.push('\n');

                self.statistics.total_lines += content.lines().count();
                self.statistics.total_chars += content.chars().count();
            }
            FileContent::Failed { reason } => {
                self.buffer.push_str("// Error reading file: ");
                self.buffer.push_str(reason);
                self.buffer.push('\n');

                self.statistics.read_failures += 1;
            }
        }

        self.buffer.push_str(FENCE);
        self.buffer.push_str("\n\n");

        self.statistics.files_processed += 1;
    }

    /// Statistics gathered so far
    pub fn statistics(&self) -> &BuildStatistics {
        &self.statistics
    }

    /// The document text so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer, returning the document and its statistics
    pub fn finish(self) -> (String, BuildStatistics) {
        (self.buffer, self.statistics)
    }
}

/// Read a file as text, turning any failure into [`FileContent::Failed`]
///
/// A byte-order mark selects UTF-8, UTF-16 or UTF-32 and is dropped from the
/// content. Without one the file must be valid UTF-8.
pub fn read_entry(path: &Path) -> FileContent {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return FileContent::Failed {
                reason: e.to_string(),
            };
        }
    };

    match decode_text(bytes) {
        Ok(content) => {
            debug!("Read {} ({} bytes)", path.display(), content.len());
            FileContent::Read { content }
        }
        Err(reason) => {
            warn!("{}: {}", path.display(), reason);
            FileContent::Failed { reason }
        }
    }
}

fn decode_text(bytes: Vec<u8>) -> Result<String, String> {
    // UTF-32 LE shares its first two bytes with the UTF-16 LE mark
    if let Some(big_endian) = utf32_bom(&bytes) {
        return decode_utf32(&bytes[4..], big_endian);
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(&bytes) {
        return encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .map(|text| text.into_owned())
            .ok_or_else(|| format!("not valid {} text", encoding.name()));
    }

    String::from_utf8(bytes).map_err(|e| format!("not valid UTF-8 text ({})", e.utf8_error()))
}

fn utf32_bom(bytes: &[u8]) -> Option<bool> {
    match bytes {
        [0xff, 0xfe, 0x00, 0x00, ..] => Some(false),
        [0x00, 0x00, 0xfe, 0xff, ..] => Some(true),
        _ => None,
    }
}

fn decode_utf32(bytes: &[u8], big_endian: bool) -> Result<String, String> {
    let invalid = || format!("not valid UTF-32{} text", if big_endian { "BE" } else { "LE" });

    if bytes.len() % 4 != 0 {
        return Err(invalid());
    }

    bytes
        .chunks_exact(4)
        .map(|unit| {
            let unit = [unit[0], unit[1], unit[2], unit[3]];
            let code = if big_endian {
                u32::from_be_bytes(unit)
            } else {
                u32::from_le_bytes(unit)
            };
            char::from_u32(code).ok_or_else(invalid)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_section_layout() {
        let mut writer = MarkdownWriter::new();
        writer.push_section(
            "a/x.py",
            &FileContent::Read {
                content: "print(1)".to_string(),
            },
        );

        assert_eq!(writer.as_str(), "### a/x.py\n```\nprint(1)\n```\n\n");
    }

    #[test]
    fn test_failed_section_is_single_placeholder_line() {
        let mut writer = MarkdownWriter::new();
        writer.push_section(
            "broken.py",
            &FileContent::Failed {
                reason: "Permission denied (os error 13)".to_string(),
            },
        );

        assert_eq!(
            writer.as_str(),
            "### broken.py\n```\n// Error reading file: Permission denied (os error 13)\n```\n\n"
        );
        assert_eq!(writer.statistics().read_failures, 1);
        assert_eq!(writer.statistics().files_processed, 1);
    }

    #[test]
    fn test_trailing_newline_is_kept_verbatim() {
        let mut writer = MarkdownWriter::new();
        writer.push_section(
            "x.txt",
            &FileContent::Read {
                content: "line\n".to_string(),
            },
        );

        assert_eq!(writer.as_str(), "### x.txt\n```\nline\n\n```\n\n");
    }

    #[test]
    fn test_statistics_count_successful_content() {
        let mut writer = MarkdownWriter::new();
        writer.push_section(
            "one.txt",
            &FileContent::Read {
                content: "a\nb\nc".to_string(),
            },
        );
        writer.push_section(
            "two.txt",
            &FileContent::Failed {
                reason: "gone".to_string(),
            },
        );

        let (_, stats) = writer.finish();
        assert_eq!(
            stats,
            BuildStatistics {
                files_processed: 2,
                read_failures: 1,
                total_lines: 3,
                total_chars: 5,
            }
        );
    }

    #[test]
    fn test_read_entry_strips_bom() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bom.txt");
        fs::write(&path, "\u{feff}hello").unwrap();

        assert_eq!(
            read_entry(&path),
            FileContent::Read {
                content: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_read_entry_decodes_utf16_with_bom() {
        let temp_dir = tempdir().unwrap();

        let le = temp_dir.path().join("le.py");
        let mut bytes = vec![0xffu8, 0xfe];
        bytes.extend("print(1)\n".encode_utf16().flat_map(|u| u.to_le_bytes()));
        fs::write(&le, bytes).unwrap();

        let be = temp_dir.path().join("be.py");
        let mut bytes = vec![0xfeu8, 0xff];
        bytes.extend("print(\"é\")".encode_utf16().flat_map(|u| u.to_be_bytes()));
        fs::write(&be, bytes).unwrap();

        assert_eq!(
            read_entry(&le),
            FileContent::Read {
                content: "print(1)\n".to_string()
            }
        );
        assert_eq!(
            read_entry(&be),
            FileContent::Read {
                content: "print(\"é\")".to_string()
            }
        );
    }

    #[test]
    fn test_read_entry_decodes_utf32le_with_bom() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("wide.txt");
        let mut bytes = vec![0xffu8, 0xfe, 0x00, 0x00];
        bytes.extend("ok".chars().flat_map(|c| (c as u32).to_le_bytes()));
        fs::write(&path, bytes).unwrap();

        assert_eq!(
            read_entry(&path),
            FileContent::Read {
                content: "ok".to_string()
            }
        );
    }

    #[test]
    fn test_read_entry_binary_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blob.bin");
        fs::write(&path, [0x00u8, 0x9f, 0x92, 0xc3, 0x28]).unwrap();

        match read_entry(&path) {
            FileContent::Failed { reason } => assert!(reason.contains("UTF-8")),
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_read_entry_missing_file_fails() {
        let temp_dir = tempdir().unwrap();
        let content = read_entry(&temp_dir.path().join("vanished.txt"));
        assert!(content.is_failed());
    }
}
