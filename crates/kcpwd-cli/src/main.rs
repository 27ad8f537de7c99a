//! kcpwd CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use kcpwd_cli::{run, Aborted, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let default_filter = match cli.verbose {
        0 => "kcpwd=warn",
        1 => "kcpwd=info",
        _ => "kcpwd=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Run the command
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // a declined prompt has already said "Aborted!"
            if !e.is::<Aborted>() {
                eprintln!("Error: {e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
