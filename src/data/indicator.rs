//! Discourse indicator reader.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use ndarray_npy::{read_npy, ReadNpyError};
use serde_pickle::{DeOptions, ErrorCode, Value};

use super::DiscourseIndicator;
use crate::error::{Error, Result};

/// Load the per-TR indicator of a discourse feature.
///
/// Reads the pickle at `path`. If it does not exist but a `.npy` file with the
/// same stem does, that array is read instead.
///
/// # Errors
///
/// A missing indicator is fatal: returns [`Error::Io`] when neither file
/// exists, and [`Error::InvalidIndicator`] when the pickle is not a flat
/// list of numbers. A pickled numpy array is an [`Error::InvalidIndicator`]
/// naming the `.npy` path to use instead.
pub fn load_indicator(path: &Path) -> Result<DiscourseIndicator> {
    if !path.exists() {
        let npy = path.with_extension("npy");
        if npy.exists() {
            return load_npy_indicator(&npy);
        }
    }
    load_pickle_indicator(path)
}

fn load_pickle_indicator(path: &Path) -> Result<DiscourseIndicator> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let value = serde_pickle::value_from_reader(BufReader::new(file), DeOptions::new())
        .map_err(|source| match source {
            // A pickled ndarray references numpy's reconstructor
            serde_pickle::Error::Eval(ErrorCode::UnresolvedGlobal, _)
            | serde_pickle::Error::Syntax(ErrorCode::UnresolvedGlobal) => invalid(
                path,
                format!(
                    "pickle references Python objects (a numpy array?); re-save it as a \
                     plain list or as {}",
                    path.with_extension("npy").display()
                ),
            ),
            source => Error::Pickle {
                path: path.to_path_buf(),
                source,
            },
        })?;

    let items = match value {
        Value::List(items) | Value::Tuple(items) => items,
        other => {
            return Err(invalid(
                path,
                format!("expected a flat list of 0/1 values, got {}", describe(&other)),
            ))
        }
    };

    let values = items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::I64(v) => Ok(*v as f64),
            Value::F64(v) => Ok(*v),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(invalid(
                path,
                format!("entry {} is {}, expected a number", i, describe(other)),
            )),
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(DiscourseIndicator::new(values))
}

fn load_npy_indicator(path: &Path) -> Result<DiscourseIndicator> {
    let as_float: Result<Array1<f64>, ReadNpyError> = read_npy(path);
    let source = match as_float {
        Ok(a) => return Ok(DiscourseIndicator::new(a.to_vec())),
        Err(source) => source,
    };

    let as_int: Result<Array1<i64>, ReadNpyError> = read_npy(path);
    if let Ok(a) = as_int {
        return Ok(DiscourseIndicator::new(a.iter().map(|&v| v as f64).collect()));
    }

    let as_bool: Result<Array1<bool>, ReadNpyError> = read_npy(path);
    match as_bool {
        Ok(a) => Ok(DiscourseIndicator::new(
            a.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect(),
        )),
        Err(_) => Err(Error::Npy {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn invalid(path: &Path, message: String) -> Error {
    Error::InvalidIndicator {
        path: PathBuf::from(path),
        message,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::None => "None",
        Value::Bool(_) => "a bool",
        Value::I64(_) | Value::Int(_) => "an int",
        Value::F64(_) => "a float",
        Value::Bytes(_) => "bytes",
        Value::String(_) => "a string",
        Value::List(_) => "a list",
        Value::Tuple(_) => "a tuple",
        Value::Set(_) | Value::FrozenSet(_) => "a set",
        Value::Dict(_) => "a dict",
        #[allow(unreachable_patterns)]
        _ => "an unsupported value",
    }
}
