//! Positional extraction, kept as a reference to cross-check the field-based
//! pass.
//!
//! Lines are split on single spaces with no quote handling. The status is
//! the last token and the request path is the fourth token from the end.
//! That only holds while the quoted request is the sole field with embedded
//! spaces; any other spaced field silently shifts the columns. The method is
//! never inspected, so a successful non-GET request still contributes.

use std::io::BufRead;

use tracing::{debug, info};

use crate::{
    error::{ExtractError, Result},
    invariants::{GifFilename, GifSet},
    models::is_success,
};

const PATH_FROM_END: usize = 4;

pub fn extract_gifs(reader: impl BufRead) -> Result<GifSet> {
    let mut gifs = GifSet::new();
    let mut lines_read = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        lines_read = line_no;

        let tokens: Vec<&str> = line.split(' ').collect();
        // split always yields at least one token
        let status = tokens[tokens.len() - 1];
        if !is_success(status, line_no)? {
            debug!(line = line_no, status = %status.trim(), "skipping unsuccessful request");
            continue;
        }

        if tokens.len() < PATH_FROM_END {
            return Err(ExtractError::TooFewFields {
                line: line_no,
                expected: PATH_FROM_END,
                found: tokens.len(),
            });
        }
        let path = tokens[tokens.len() - PATH_FROM_END];
        if let Some(gif) = GifFilename::from_path(path) {
            debug!(line = line_no, %gif, "found gif");
            gifs.insert(gif);
        }
    }

    info!(lines = lines_read, gifs = gifs.len(), "positional pass complete");
    Ok(gifs)
}
