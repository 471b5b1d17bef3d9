//! Error types in iris-tree
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("split leaves an empty partition: {train} training and {test} test samples")]
    EmptyPartition { train: usize, test: usize },
    #[error("length mismatch: {left} != {right}")]
    MismatchedLengths { left: usize, right: usize },
    #[error("cannot evaluate on zero samples")]
    EmptyEvaluation,
    #[error("invalid class label {value} in row {row}")]
    InvalidLabel { row: usize, value: f64 },
    #[error(transparent)]
    Linfa(#[from] linfa::Error),
    #[error("could not parse CSV input: {0}")]
    Csv(#[from] ndarray_csv::ReadError),
    #[error("could not read CSV record: {0}")]
    CsvRecord(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
