use crate::generator::generate_request_line;
use rand::Rng;
use std::io::{self, Write};

pub fn write_requests<W: Write, R: Rng + ?Sized>(
    mut out: W,
    rng: &mut R,
    lines: usize,
    get_only: bool,
) -> io::Result<()> {
    for _ in 0..lines {
        writeln!(out, "{}", generate_request_line(rng, get_only))?;
    }
    out.flush()
}
