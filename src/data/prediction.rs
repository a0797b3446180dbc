//! Prediction archive reader.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use ndarray::Array2;
use ndarray_npy::NpzReader;

use super::PredictionRecord;
use crate::constants::{ACTUAL_KEY, PREDICTED_KEY};
use crate::error::{Error, Result};

/// Load a prediction record from an `.npz` archive.
///
/// Arrays are looked up as `preds_t`/`test_t`, with or without the `.npy`
/// suffix `numpy.savez` appends. `f32` arrays are widened to `f64`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid archive,
/// if either array is missing or not 2-D, or if the two shapes differ.
pub fn load_prediction_record(path: &Path) -> Result<PredictionRecord> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut npz = NpzReader::new(file).map_err(|source| Error::Npz {
        path: path.to_path_buf(),
        source,
    })?;
    let names = npz.names().map_err(|source| Error::Npz {
        path: path.to_path_buf(),
        source,
    })?;

    let predicted = read_matrix(&mut npz, &names, PREDICTED_KEY, path)?;
    let actual = read_matrix(&mut npz, &names, ACTUAL_KEY, path)?;
    PredictionRecord::new(predicted, actual)
}

fn read_matrix<R: Read + Seek>(
    npz: &mut NpzReader<R>,
    names: &[String],
    key: &str,
    path: &Path,
) -> Result<Array2<f64>> {
    let entry = names
        .iter()
        .find(|name| name.as_str() == key || name.strip_suffix(".npy") == Some(key))
        .ok_or_else(|| Error::MissingArray {
            path: path.to_path_buf(),
            key: key.to_string(),
            found: names.to_vec(),
        })?;

    let wide: Result<Array2<f64>, _> = npz.by_name(entry);
    match wide {
        Ok(matrix) => Ok(matrix),
        Err(source) => {
            // Encoding runs saved as float32 are common; retry before failing.
            let narrow: Result<Array2<f32>, _> = npz.by_name(entry);
            narrow.map(|m| m.mapv(f64::from)).map_err(|_| Error::Npz {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
