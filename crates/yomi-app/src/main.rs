use atty::Stream;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod download;
pub mod loader;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref(), cli.language, cli.data_dir.clone())?;

    controller::run(cli.command, config).await
}

/// Log to stderr so command output on stdout stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(Stream::Stderr))
        .init();
}
