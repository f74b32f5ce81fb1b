use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod collection;
mod core;
mod genes;
mod imaging;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("har_atlas=debug,info")
    } else {
        EnvFilter::new("har_atlas=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match &cli.command {
        cli::Commands::Report(args) => {
            cli::report::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Summary(args) => {
            cli::summary::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
