use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod discovery;
mod error;
mod extractor;
mod renderer;

use config::Config;

#[derive(Parser)]
#[command(name = "workflowdoc", version)]
#[command(
    about = "Generate markdown documentation from workflow annotation comments",
    long_about = None
)]
struct Cli {
    /// Path to the workflows directory (defaults to .github/workflows)
    #[arg(long)]
    workflows_dir: Option<String>,

    /// Path to the output markdown file (defaults to WORKFLOWS.md)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Path to config file (defaults to ./workflowdoc.toml or ~/.config/workflowdoc/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = Config::load_with_path(args.config)?;
    if let Some(dir) = args.workflows_dir {
        config.workflows_dir = dir;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if args.verbose {
        config.verbose = true;
    }

    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    cli::generate::run(&config)
}
