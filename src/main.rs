mod cli;
mod commands;
mod epub;
mod model;
mod sheet;
mod util;
mod validation;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %failure_chain(&err), "tocheck failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Normalize(args) => commands::normalize::run(args),
    }
}

fn failure_chain(err: &anyhow::Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" <- ")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn failure_chain_lists_context_before_root_cause() {
        let err = std::fs::read("/nonexistent/tocheck/book.epub")
            .context("failed to open EPUB: book.epub")
            .expect_err("file does not exist");

        let chain = failure_chain(&err);
        assert!(chain.starts_with("failed to open EPUB: book.epub <- "));
        assert_eq!(chain.matches(" <- ").count(), err.chain().count() - 1);
    }
}
