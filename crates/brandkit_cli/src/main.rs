//! CLI entry point for brandkit.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Log to stderr so piped command output stays clean. RUST_LOG overrides the
/// default level.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
