use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading the names file
#[derive(Debug, Error)]
pub enum NamesError {
    #[error("Failed to open names file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read names file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// Read newline-delimited names from `path` and return them shuffled
///
/// Lines are kept verbatim apart from the line terminator. Empty lines and
/// duplicates are preserved. The permutation comes from `rng`, so callers can
/// pass a seeded generator for reproducible order.
pub fn load_names<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Vec<String>, NamesError> {
    let file = File::open(path).map_err(|source| NamesError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = read_names(BufReader::new(file)).map_err(|source| NamesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    shuffle_names(&mut names, rng);

    tracing::debug!("Loaded {} names from {}", names.len(), path.display());
    Ok(names)
}

/// Split a reader into lines, dropping `\n` / `\r\n` terminators only
pub fn read_names<B: BufRead>(reader: B) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Uniform in-place Fisher-Yates shuffle
#[inline]
pub fn shuffle_names<R: Rng + ?Sized>(names: &mut [String], rng: &mut R) {
    names.shuffle(rng);
}
