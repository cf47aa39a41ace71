use anyhow::Result;
use clap::Parser;
use imgls::{ImglsConfig, run};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "List image format, dimensions and size", long_about = None)]
struct Args {
    /// Files or directories to inspect (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ImglsConfig::from_inputs(args.paths, args.verbose)?;
    run(&config)
}
