//! Global error handling for filecopy
//!
//! Fatal failures of a run are represented by [`FileCopyError`]. Expected,
//! recoverable conditions (unreadable files, missing clipboard) are modelled
//! elsewhere and never reach this type.

use std::io;
use thiserror::Error;

/// Global error type for filecopy operations
#[derive(Error, Debug)]
pub enum FileCopyError {
    /// File system errors
    #[error("IO error")]
    Io(#[from] io::Error),

    /// Directory traversal errors
    #[error("Directory walk failed")]
    Walk(#[from] walkdir::Error),

    /// Prompt interaction errors
    #[error("Prompt failed")]
    Prompt(#[from] dialoguer::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An error annotated with what was being attempted
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Specialized Result type for filecopy operations
pub type Result<T> = std::result::Result<T, FileCopyError>;

/// Creates a FileCopyError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::FileCopyError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Wrap the error with a description of the failed operation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| FileCopyError::Context {
            context: f().to_string(),
            source: Box::new(e),
        })
    }
}

/// Render an error and every `source()` below it, one per line
pub fn error_chain(err: &dyn std::error::Error) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}
