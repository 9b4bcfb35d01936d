mod args;
mod generator;
mod stream;

use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::{fs::File, io::BufWriter};
use stream::write_requests;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let out = BufWriter::new(File::create(args.output())?);
    write_requests(out, &mut rng, *args.lines(), *args.get_only())?;
    println!(
        "Wrote {} requests to {}",
        args.lines(),
        args.output().display()
    );
    Ok(())
}
