/*!
 * Input resolution: command-line arguments or interactive prompts
 */

use dialoguer::{theme::ColorfulTheme, Input};
use tracing::debug;

use crate::config::{validate_directory, validate_pattern, Args, CollectionRequest};
use crate::error::Result;

/// Produce a collection request from the arguments, prompting when absent
pub fn resolve_request(args: &Args) -> Result<CollectionRequest> {
    match args.request_parts() {
        Some((dir, pattern)) => {
            debug!("Using command-line arguments: {} {}", dir, pattern);
            CollectionRequest::new(dir, pattern)
        }
        None => prompt_request(),
    }
}

/// Ask for the directory and pattern until both are valid
fn prompt_request() -> Result<CollectionRequest> {
    let theme = ColorfulTheme::default();

    let dir: String = Input::with_theme(&theme)
        .with_prompt("Directory path")
        .validate_with(|input: &String| validate_directory(input))
        .interact_text()?;

    let pattern: String = Input::with_theme(&theme)
        .with_prompt("File pattern (e.g. *.py)")
        .validate_with(|input: &String| validate_pattern(input))
        .interact_text()?;

    CollectionRequest::new(dir, pattern)
}
