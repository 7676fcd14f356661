//! podwrap - drive a podman-compatible CLI from the command line

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use podman_cli_wrapper::cli::Cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries container output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.run().await {
        // Exit directly: a blocked stdin relay must not hold up runtime shutdown.
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
