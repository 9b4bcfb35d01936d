mod error;
mod fields;
mod ingest;
mod invariants;
mod legacy;
mod models;
mod report;

use clap::Parser;
use error::Result;
use std::{io, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Request file to scan. Read from standard input when omitted.
    input: Option<PathBuf>,

    #[arg(long, env = "GIF_EXTRACTOR_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let input = ingest::resolve_input(args.input, io::stdin().lock())?;
    let comparison = {
        let reader = ingest::open_input(&input)?;
        report::compare(reader)?
    };
    println!("{comparison}");

    let output = report::output_path(&input)?;
    report::write_gifs(&output, comparison.authoritative())?;
    info!(input = %input.display(), output = %output.display(), "done");
    Ok(())
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
