use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod correction;
mod mapping;
mod output;
mod parsing;
mod store;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("seq_patcher=debug,info")
    } else {
        EnvFilter::new("seq_patcher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::correct::run(&cli)
}
