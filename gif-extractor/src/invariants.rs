use std::{collections::BTreeSet, fmt, str::FromStr};

use derive_more::{AsRef, Debug, Display};

const GIF_EXTENSION: &str = "gif";

/// Final path segment of a requested resource whose extension is `gif`,
/// compared case-insensitively. The original casing is kept.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GifFilename(String);

impl GifFilename {
    pub fn from_path(path: &str) -> Option<Self> {
        basename(path).parse().ok()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for GifFilename {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A name without a dot is compared whole.
        let ext = s.rsplit('.').next().unwrap_or_default();
        if ext.eq_ignore_ascii_case(GIF_EXTENSION) {
            Ok(Self(s.into()))
        } else {
            Err(format!("{s:?} is not a gif filename"))
        }
    }
}

pub type GifSet = BTreeSet<GifFilename>;

/// Last `/`-separated segment of `path`.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Renders a set as `{a, b}` for diagnostics.
pub struct SetDisplay<'a>(pub &'a GifSet);

impl fmt::Display for SetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name.as_str())?;
        }
        f.write_str("}")
    }
}
