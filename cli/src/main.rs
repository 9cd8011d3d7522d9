
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{build, layers, locate, neighbors, polylines};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// `RUST_LOG` wins; otherwise `-v` selects debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Build(args) => build::run(&cli, args),
        Commands::Locate(args) => locate::run(&cli, args),
        Commands::Neighbors(args) => neighbors::run(&cli, args),
        Commands::Layers(args) => layers::run(&cli, args),
        Commands::Polylines(args) => polylines::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
