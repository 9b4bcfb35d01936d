use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: status {value:?} is not numeric")]
    NonNumericStatus { line: usize, value: String },

    #[error("line {line}: request {value:?} has no path")]
    MalformedRequest { line: usize, value: String },

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("no input file name given")]
    MissingInput,

    #[error("{path} has no file name to prefix")]
    InvalidInputPath { path: PathBuf },
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
