//! Field-based extraction: each line is tokenized into space-delimited
//! fields with double-quoted fields kept whole, then read by column index.
//! This is the authoritative strategy.

use std::io::BufRead;

use tracing::{debug, info};

use crate::{
    error::{ExtractError, Result},
    invariants::{GifFilename, GifSet},
    models::{Request, is_get, is_success},
};

const REQUEST_FIELD: usize = 3;
const STATUS_FIELD: usize = 5;
const MIN_FIELDS: usize = STATUS_FIELD + 1;

const DELIMITER: char = ' ';
const QUOTE: char = '"';

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Splits `line` on single spaces. A field opening with `"` runs to the
/// matching close quote and may contain spaces; `""` inside it is a literal
/// quote. Consecutive spaces produce empty fields. Returns `None` if a
/// quoted field is never closed.
pub fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;

    for c in line.chars() {
        state = match (state, c) {
            (State::FieldStart | State::Unquoted | State::QuoteInQuoted, DELIMITER) => {
                fields.push(std::mem::take(&mut field));
                State::FieldStart
            }
            (State::FieldStart, QUOTE) => State::Quoted,
            (State::Quoted, QUOTE) => State::QuoteInQuoted,
            (State::QuoteInQuoted, QUOTE) => {
                field.push(QUOTE);
                State::Quoted
            }
            (State::Quoted, c) => {
                field.push(c);
                State::Quoted
            }
            (State::FieldStart | State::Unquoted | State::QuoteInQuoted, c) => {
                field.push(c);
                State::Unquoted
            }
        };
    }

    match state {
        State::Quoted => None,
        _ => {
            fields.push(field);
            Some(fields)
        }
    }
}

pub fn extract_gifs(reader: impl BufRead) -> Result<GifSet> {
    let mut gifs = GifSet::new();
    let mut lines_read = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        lines_read = line_no;

        let fields = split_fields(line.trim_end_matches('\r'))
            .ok_or(ExtractError::UnterminatedQuote { line: line_no })?;
        if fields.len() < MIN_FIELDS {
            return Err(ExtractError::TooFewFields {
                line: line_no,
                expected: MIN_FIELDS,
                found: fields.len(),
            });
        }

        let status = &fields[STATUS_FIELD];
        if !is_success(status, line_no)? {
            debug!(line = line_no, status = %status.trim(), "skipping unsuccessful request");
            continue;
        }

        let request_field = &fields[REQUEST_FIELD];
        let method = request_field.split_whitespace().next().unwrap_or_default();
        if !is_get(method) {
            debug!(line = line_no, method, "skipping non-GET request");
            continue;
        }
        let request =
            Request::parse(request_field).ok_or_else(|| ExtractError::MalformedRequest {
                line: line_no,
                value: request_field.clone(),
            })?;

        if let Some(gif) = GifFilename::from_path(&request.path) {
            debug!(
                line = line_no,
                %gif,
                method = %request.method,
                version = %request.version,
                "found gif"
            );
            gifs.insert(gif);
        }
    }

    info!(lines = lines_read, gifs = gifs.len(), "field-based pass complete");
    Ok(gifs)
}
