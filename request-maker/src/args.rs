use clap::Parser;
use derive_getters::Getters;
use std::path::PathBuf;

#[derive(Parser, Debug, Getters)]
#[command(name = "request-maker")]
#[command(about = "Generate fake request files for gif-extractor", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "requests.txt")]
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Fixed seed for reproducible files.
    #[arg(long)]
    seed: Option<u64>,

    /// Only emit GET requests, so every strategy must agree on the file.
    #[arg(long)]
    get_only: bool,
}
