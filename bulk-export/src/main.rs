use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bulk_export::Dependencies;

#[derive(Parser)]
#[command(name = "bulk-export")]
#[command(
    about = "Convert tokenCounts, pairCounts or uriCounts files into chunked bulk index requests",
    long_about = None
)]
struct Cli {
    /// Target index name, used verbatim in every index action
    index_name: String,

    /// Source count file; its base name selects the record kind
    source_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprint!("{}", error_report(&e));
        std::process::exit(1);
    }
}

/// The error followed by its cause chain, one line each.
fn error_report(e: &anyhow::Error) -> String {
    let mut report = format!("Error: {}\n", e);
    for cause in e.chain().skip(1) {
        report.push_str(&format!("  Caused by: {}\n", cause));
    }
    report
}

fn run(cli: &Cli) -> Result<()> {
    let deps = Dependencies::new(&cli.index_name, &cli.source_file)?;
    let summary = deps
        .run()
        .with_context(|| format!("Failed to export {}", cli.source_file.display()))?;

    info!(
        records = summary.records,
        chunks = summary.chunks,
        "Done"
    );
    Ok(())
}
