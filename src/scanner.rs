/*!
 * Recursive file collection
 */

use std::fs;
use std::path::{Path, PathBuf};

use glob_match::glob_match;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::{CollectionRequest, Config};
use crate::error::Result;
use crate::types::FileEntry;
use crate::utils::relative_path_string;

/// Collector for files matching a pattern under a root directory
pub struct Scanner {
    /// What to collect
    request: CollectionRequest,
    /// Previous output document, never collected into a new one
    excluded: Option<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: &Config) -> Self {
        Self {
            request: config.request.clone(),
            excluded: fs::canonicalize(&config.output_file).ok(),
        }
    }

    /// Walk the root and return every matching file
    ///
    /// Entries are sorted by file name at each directory level so repeated
    /// runs over unchanged input see the same order. Any traversal error
    /// aborts the collection.
    pub fn collect(&self) -> Result<Vec<FileEntry>> {
        let root = self.request.root();
        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry?;

            if !is_file(&entry) || !self.matches(entry.path()) || self.is_excluded(entry.path()) {
                continue;
            }

            trace!("Matched {}", entry.path().display());
            files.push(FileEntry {
                relative_path: relative_path_string(root, entry.path()),
                path: entry.into_path(),
            });
        }

        debug!(
            "Collected {} files matching {} under {}",
            files.len(),
            self.request.pattern(),
            root.display()
        );

        Ok(files)
    }

    /// Check whether a file name matches the request pattern
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| glob_match(self.request.pattern(), &name.to_string_lossy()))
            .unwrap_or(false)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        match &self.excluded {
            Some(excluded) => {
                path.file_name() == excluded.file_name()
                    && fs::canonicalize(path).map_or(false, |p| &p == excluded)
            }
            None => false,
        }
    }
}

/// Regular files, or symlinks that resolve to one
fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn scanner_for(root: &Path, pattern: &str) -> Scanner {
        let request = CollectionRequest::new(root, pattern).unwrap();
        Scanner::new(&Config::new(request).with_output_file(root.join("output.md")))
    }

    #[test]
    fn test_matches_on_file_name_only() {
        let temp_dir = tempdir().unwrap();
        let scanner = scanner_for(temp_dir.path(), "*.py");

        assert!(scanner.matches(Path::new("a/b/x.py")));
        assert!(scanner.matches(Path::new("x.py")));
        assert!(!scanner.matches(Path::new("x.pyc")));
        assert!(!scanner.matches(Path::new("py/x.rs")));
    }

    #[test]
    fn test_collect_recurses_and_sorts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("a").join("deep")).unwrap();
        fs::write(root.join("b").join("y.py"), "").unwrap();
        fs::write(root.join("a").join("x.py"), "").unwrap();
        fs::write(root.join("a").join("deep").join("z.py"), "").unwrap();
        fs::write(root.join("a").join("notes.txt"), "").unwrap();

        let files = scanner_for(root, "*.py").collect().unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.relative_path.as_str()).collect();

        assert_eq!(paths, vec!["a/deep/z.py", "a/x.py", "b/y.py"]);
        assert_eq!(files[1].path, root.join("a").join("x.py"));
    }

    #[test]
    fn test_collect_skips_matching_directories() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("pkg.py")).unwrap();
        fs::write(root.join("pkg.py").join("inner.py"), "").unwrap();

        let files = scanner_for(root, "*.py").collect().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "pkg.py/inner.py");
    }

    #[test]
    fn test_collect_empty_result() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("main.rs"), "").unwrap();

        let files = scanner_for(temp_dir.path(), "*.py").collect().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_excludes_previous_output() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("output.md"), "old").unwrap();
        fs::write(root.join("readme.md"), "new").unwrap();

        let files = scanner_for(root, "*.md").collect().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "readme.md");
    }
}
