mod cli;
mod commands;

use std::io::{self, IsTerminal};
use std::sync::Arc;

use clap::Parser;
use hooker_core::{Reporter, ReqwestTransport};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let reporter = Reporter::new(io::stdout().is_terminal());
    let transport = Arc::new(ReqwestTransport::new());

    commands::run(cli, transport, reporter, &mut io::stdout()).await
}
