use std::{
    fmt,
    fs::File,
    io::{BufRead, BufWriter, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    error::{ExtractError, Result},
    fields, legacy,
    invariants::{GifSet, SetDisplay},
};

pub const OUTPUT_PREFIX: &str = "gif_";

/// Results of both strategies over the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub field_based: GifSet,
    pub positional: GifSet,
}

impl Comparison {
    pub fn is_consistent(&self) -> bool {
        self.field_based == self.positional
    }

    /// The field-based set is the one written out, agreement or not.
    pub fn authoritative(&self) -> &GifSet {
        &self.field_based
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consistent() {
            return write!(
                f,
                "Results are the same for the field-based and positional approaches"
            );
        }
        writeln!(f, "Results are different between the approaches:")?;
        writeln!(f, "Field-based approach: {}", SetDisplay(&self.field_based))?;
        write!(f, "Positional approach: {}", SetDisplay(&self.positional))
    }
}

/// Runs both strategies over `reader`, rewinding to the start in between.
pub fn compare<R: BufRead + Seek>(mut reader: R) -> Result<Comparison> {
    let field_based = fields::extract_gifs(&mut reader)?;
    reader.seek(SeekFrom::Start(0))?;
    let positional = legacy::extract_gifs(&mut reader)?;

    let comparison = Comparison {
        field_based,
        positional,
    };
    if !comparison.is_consistent() {
        warn!("field-based and positional results differ");
    }
    Ok(comparison)
}

/// `gif_` prepended to the input's file name, in the same directory.
/// For a bare file name this is the same as prefixing the whole path.
pub fn output_path(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| ExtractError::InvalidInputPath {
            path: input.to_path_buf(),
        })?;
    let mut prefixed = std::ffi::OsString::from(OUTPUT_PREFIX);
    prefixed.push(name);
    Ok(input.with_file_name(prefixed))
}

/// Creates or truncates `path` and writes one name per line.
pub fn write_gifs(path: &Path, gifs: &GifSet) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for gif in gifs {
        writeln!(out, "{gif}")?;
    }
    out.flush()?;
    info!(path = %path.display(), count = gifs.len(), "wrote gif filenames");
    Ok(())
}
