//! Pickled p-value lists.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_pickle::{DeOptions, SerOptions};

use crate::error::{Error, Result};

/// Write `pvalues` to `path` as a pickled list of floats, creating parent
/// directories as needed. An existing file is replaced.
pub fn write_pvalues(path: &Path, pvalues: &[f64]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_pickle::to_writer(&mut writer, &pvalues, SerOptions::new()).map_err(|source| {
        Error::Pickle {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|e| Error::io(path, e))
}

/// Read a p-value list written by [`write_pvalues`].
pub fn read_pvalues(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    serde_pickle::from_reader(BufReader::new(file), DeOptions::new()).map_err(|source| {
        Error::Pickle {
            path: path.to_path_buf(),
            source,
        }
    })
}
