#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*};

use crate::{
    application::{Application, ApplicationError},
    cli::Cli,
};

mod application;
mod cli;
mod filesystem;
mod tree;

#[snafu::report]
fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args)?;

    Ok(())
}

/// Logs go to stderr so that `--dry-run` output on stdout stays clean.
fn setup_tracing(cli_args: &Cli) {
    let Some(filter) = cli_args.log_level.to_filter() else {
        return;
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .with(filter)
        .init();
}
