//! Scoring of predicted against true labels
use std::fmt;

use linfa::prelude::{ConfusionMatrix, ToConfusionMatrix};
use ndarray::{ArrayBase, Data, Ix1};

use crate::dataset::Labelled;
use crate::error::{Error, Result};

/// Fraction of correctly predicted labels, always within `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Accuracy(f64);

impl Accuracy {
    /// Wraps a fraction of correct predictions
    pub fn new(fraction: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Accuracy(fraction))
        } else {
            Err(Error::Parameters(format!(
                "accuracy must lie within [0, 1], but was {}",
                fraction
            )))
        }
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

/// Proportion of positions where `predicted` and `truth` agree
pub fn accuracy<S, T>(predicted: &ArrayBase<S, Ix1>, truth: &ArrayBase<T, Ix1>) -> Result<Accuracy>
where
    S: Data<Elem = usize>,
    T: Data<Elem = usize>,
{
    if predicted.len() != truth.len() {
        return Err(Error::MismatchedLengths {
            left: predicted.len(),
            right: truth.len(),
        });
    }
    if truth.is_empty() {
        return Err(Error::EmptyEvaluation);
    }

    let correct = predicted
        .iter()
        .zip(truth.iter())
        .filter(|(p, t)| p == t)
        .count();

    Accuracy::new(correct as f64 / truth.len() as f64)
}

/// Confusion matrix of `predicted` against the labels of `test`.
///
/// Its classes are taken from the test labels only: a predicted class that never occurs in
/// `test` has no row or column and those predictions are left out of the matrix. Use
/// [`accuracy`] for the score, it counts every prediction.
pub fn confusion_matrix(
    predicted: &ndarray::Array1<usize>,
    test: &Labelled,
) -> Result<ConfusionMatrix<usize>> {
    Ok(predicted.confusion_matrix(test)?)
}
