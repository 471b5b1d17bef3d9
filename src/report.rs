//! Rendering of the final accuracy line
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::metrics::Accuracy;

/// Shape of the line printed after evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// `Accuracy: 95.50%`
    Percent,
    /// `The accuracy of the trained decision tree classifier is 95.5 %`
    Sentence,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Percent
    }
}

impl ReportFormat {
    pub fn render(&self, accuracy: Accuracy) -> String {
        match self {
            ReportFormat::Percent => format!("Accuracy: {}", accuracy),
            ReportFormat::Sentence => format!(
                "The accuracy of the trained decision tree classifier is {:.1} %",
                accuracy.percent()
            ),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "percent" => Ok(ReportFormat::Percent),
            "sentence" => Ok(ReportFormat::Sentence),
            other => Err(Error::Parameters(format!(
                "unknown report format `{}`, expected `percent` or `sentence`",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportFormat::Percent => write!(f, "percent"),
            ReportFormat::Sentence => write!(f, "sentence"),
        }
    }
}
