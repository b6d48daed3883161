use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::output::*;
pub use services::runner::*;
pub use services::validator::*;
pub use services::walker::*;

const LOG_ENV: &str = "PLSQL_CHECK_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging();

    let validator = HeuristicValidator::new()?;
    if handle_command(&cli, &validator)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
