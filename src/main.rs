/*!
 * Command-line interface for filecopy
 */

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use filecopy::config::{Args, Config};
use filecopy::error::{error_chain, Result};
use filecopy::logger::initialize_logger;
use filecopy::pipeline::Pipeline;
use filecopy::prompt::resolve_request;
use filecopy::report::Reporter;
use filecopy::types::RunOutcome;
use filecopy::SystemClipboard;

fn main() -> ExitCode {
    initialize_logger();

    let args = Args::parse();

    print_banner();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let chain = error_chain(&e);
            eprintln!("{} {}", "Error:".red().bold(), chain[0]);
            for cause in &chain[1..] {
                eprintln!("  {} {}", "Caused by:".red(), cause);
            }
            eprintln!("{}", format!("{:?}", e).dimmed());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let request = resolve_request(args)?;
    let config = Config::new(request);

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.green} [{bar:30.green/white}] {pos}/{len} {wide_msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    progress.set_prefix("Processing");

    let clipboard = SystemClipboard;
    let pipeline = Pipeline::new(config, progress.clone(), &clipboard);

    let start_time = Instant::now();
    let outcome = pipeline.run_with(|entries| {
        println!("{}", format!("Found {} files", entries.len()).green());
        progress.enable_steady_tick(Duration::from_millis(100));
    })?;

    match outcome {
        RunOutcome::NoMatches => println!("{}", "No matching files found".yellow()),
        RunOutcome::Written(summary) => {
            Reporter::new().print_report(&summary, start_time.elapsed());
            println!("{}", "Done!".green().bold());
        }
    }

    Ok(())
}

fn print_banner() {
    println!("{}", format!("{:─^60}", " File Copy ").green());
    println!();
}
