use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{ExtractError, Result};

/// Uses `arg` when given, otherwise reads one line from `stdin`.
pub fn resolve_input(arg: Option<PathBuf>, mut stdin: impl BufRead) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    let name = line.trim_end_matches(['\r', '\n']);
    if name.is_empty() {
        return Err(ExtractError::MissingInput);
    }
    debug!(input = name, "read input file name from stdin");
    Ok(PathBuf::from(name))
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })
}
