//! Dataset acquisition
//!
//! A [`DatasetSource`] names where the samples come from. The default is the iris flower
//! dataset shipped with `linfa-datasets`: 150 samples, 4 features, 3 classes. Delimited text
//! files can be used instead, with the class label in the last column.
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use csv::ReaderBuilder;
use linfa::Dataset;
use ndarray::{s, Array1, Array2, Ix1};
use ndarray_csv::Array2Reader;

use crate::error::{Error, Result};

/// Sample matrix and label vector, kept aligned row by row
pub type Labelled = Dataset<f64, usize, Ix1>;

#[derive(Clone, Debug, PartialEq)]
pub enum DatasetSource {
    /// The built-in iris flower dataset
    Iris,
    /// A delimited file: every column but the last is a feature, the last one the class label
    Csv {
        path: PathBuf,
        has_headers: bool,
        separator: u8,
    },
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Iris
    }
}

impl DatasetSource {
    /// Comma separated file with a header row
    pub fn csv<P: Into<PathBuf>>(path: P) -> Self {
        DatasetSource::Csv {
            path: path.into(),
            has_headers: true,
            separator: b',',
        }
    }

    pub fn load(&self) -> Result<Labelled> {
        match self {
            DatasetSource::Iris => Ok(iris()),
            DatasetSource::Csv {
                path,
                has_headers,
                separator,
            } => {
                let file = File::open(path)?;
                from_csv_reader(file, *has_headers, *separator)
            }
        }
    }
}

/// Read in the iris flower dataset.
pub fn iris() -> Labelled {
    linfa_datasets::iris()
}

/// Build a labelled dataset from a sample matrix and a label vector of the same length
pub fn from_parts(records: Array2<f64>, targets: Array1<usize>) -> Result<Labelled> {
    if records.nrows() != targets.len() {
        return Err(Error::MismatchedLengths {
            left: records.nrows(),
            right: targets.len(),
        });
    }

    Ok(Dataset::new(records, targets))
}

/// Parse delimited text into a labelled dataset.
///
/// Feature names are taken from the header row when there is one.
pub fn from_csv_reader<R: Read>(csv: R, has_headers: bool, separator: u8) -> Result<Labelled> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .from_reader(csv);

    let headers = if has_headers {
        Some(reader.headers()?.clone())
    } else {
        None
    };

    let table: Array2<f64> = reader.deserialize_array2_dynamic()?;
    if table.ncols() < 2 {
        return Err(Error::Parameters(format!(
            "expected at least one feature and a label column, found {} column(s)",
            table.ncols()
        )));
    }
    if table.nrows() == 0 {
        return Err(Error::Parameters("input contains no samples".into()));
    }

    let nfeatures = table.ncols() - 1;
    let targets = table
        .column(nfeatures)
        .iter()
        .enumerate()
        .map(|(row, &value)| to_label(row, value))
        .collect::<Result<Array1<usize>>>()?;
    let records = table.slice(s![.., ..nfeatures]).to_owned();

    let dataset = from_parts(records, targets)?;
    Ok(match headers {
        Some(headers) => {
            let names = headers.iter().take(nfeatures).collect::<Vec<_>>();
            dataset.with_feature_names(names)
        }
        None => dataset,
    })
}

fn to_label(row: usize, value: f64) -> Result<usize> {
    if value.is_finite() && value >= 0.0 && value < usize::MAX as f64 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(Error::InvalidLabel { row, value })
    }
}
