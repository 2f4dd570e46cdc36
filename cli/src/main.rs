//! Terminal front end for the prime service.
//!
//! Runs one submission cycle through the same state machine as the browser
//! page and prints the resulting view.

mod render;
mod source;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use contract::{PrimesState, View, run_submission};
use tracing::Level;

use crate::render::render_lines;
use crate::source::HttpSource;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// Rejected input or failed fetch, carrying the user-facing message.
    #[error("{0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(name = "primes-cli", about = "Fetch prime numbers up to a limit from the prime service")]
struct Cli {
    #[arg(long, env = "PRIMES_API_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Log request details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Upper bound N; parsed the same way as the web form.
    #[arg(allow_negative_numbers = true)]
    limit: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<Vec<String>, CliError> {
    let source = HttpSource::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    let mut state = PrimesState::default();
    state.set_limit_input(cli.limit.as_str());

    if let Err(err) = run_submission(&mut state, &source).await {
        tracing::debug!(error = %err, input = %cli.limit, "submission rejected");
    }

    match state.view() {
        View::Error(message) => Err(CliError::Failed(message.to_owned())),
        view => Ok(render_lines(view)),
    }
}
