pub mod record;

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::model::axis::AxisRole;

/// Why a single input line could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("malformed record: expected {expected} fields, found {found}")]
    Malformed { expected: usize, found: usize },
    #[error("invalid number in field {field} ({name}): {token:?}")]
    InvalidNumber {
        field: usize,
        name: &'static str,
        token: String,
    },
    #[error("invalid calibration for axis {}: min {min} == max {max}", axis.as_str())]
    InvalidCalibration { axis: AxisRole, min: f64, max: f64 },
}

/// Opens the record source: the given file, or stdin when absent.
pub fn open_reader(path: Option<&Path>) -> io::Result<Box<dyn io::BufRead>> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            Ok(Box::new(io::BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
