/*!
 * Configuration handling for filecopy
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::Result;

/// Output file written into the current working directory
pub const OUTPUT_FILE: &str = "output.md";

/// Prefix every pattern must start with ("any name, this extension")
pub const PATTERN_PREFIX: &str = "*.";

/// Command-line arguments for filecopy
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "filecopy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bundle matching files into a Markdown document and copy it to the clipboard",
    long_about = "Recursively collects files matching a pattern (e.g. *.py), writes them to output.md \
                  with one heading and fenced block per file, and places the same text on the clipboard. \
                  Without arguments the directory and pattern are asked for interactively."
)]
pub struct Args {
    /// Directory to search recursively
    #[clap(requires = "pattern")]
    pub directory_path: Option<String>,

    /// File name pattern, e.g. "*.rs"
    #[clap(requires = "directory_path")]
    pub pattern: Option<String>,
}

impl Args {
    /// Both positional arguments, when they were supplied
    pub fn request_parts(&self) -> Option<(&str, &str)> {
        match (&self.directory_path, &self.pattern) {
            (Some(dir), Some(pattern)) => Some((dir.as_str(), pattern.as_str())),
            _ => None,
        }
    }
}

/// Directory and pattern for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRequest {
    root: PathBuf,
    pattern: String,
}

impl CollectionRequest {
    /// Build a request after checking the directory and pattern
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>) -> Result<Self> {
        let root = root.into();
        let pattern = pattern.into();

        ensure!(
            root.is_dir(),
            PathNotFound,
            "Directory does not exist: {}",
            root.display()
        );
        ensure!(
            validate_pattern(&pattern).is_ok(),
            InvalidArgument,
            "Pattern must start with {}: {}",
            PATTERN_PREFIX,
            pattern
        );

        Ok(Self { root, pattern })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Check that `input` names an existing directory
pub fn validate_directory(input: &str) -> std::result::Result<(), String> {
    if Path::new(input).is_dir() {
        Ok(())
    } else {
        Err("Directory does not exist".to_string())
    }
}

/// Check that `input` has the `*.ext` shape
pub fn validate_pattern(input: &str) -> std::result::Result<(), String> {
    if input.starts_with(PATTERN_PREFIX) {
        Ok(())
    } else {
        Err(format!("Pattern must start with {}", PATTERN_PREFIX))
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// What to collect
    pub request: CollectionRequest,

    /// Output Markdown file path
    pub output_file: PathBuf,
}

impl Config {
    /// Configuration writing to the default output file
    pub fn new(request: CollectionRequest) -> Self {
        Self {
            request,
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }

    /// Redirect the output file
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }
}
