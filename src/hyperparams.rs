use linfa::ParamGuard;

use crate::classifier::TreeClassifier;
use crate::dataset::DatasetSource;
use crate::error::{Error, Result};
use crate::report::ReportFormat;

/// Checked parameters of the train/test split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitValidParams {
    test_fraction: f64,
    seed: Option<u64>,
}

impl SplitValidParams {
    pub fn test_fraction(&self) -> f64 {
        self.test_fraction
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// The set of parameters controlling how a dataset is cut into a training and a test
/// partition.
///
/// ### Example
///
/// ```rust
/// use iris_tree::SplitParams;
/// use linfa::ParamGuard;
///
/// let params = SplitParams::new().test_fraction(0.25).seed(Some(7));
/// let checked = params.check().unwrap();
/// assert_eq!(checked.seed(), Some(7));
///
/// assert!(SplitParams::new().test_fraction(1.0).check().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitParams(SplitValidParams);

impl SplitParams {
    pub fn new() -> Self {
        Self(SplitValidParams {
            test_fraction: 0.3,
            seed: None,
        })
    }

    /// Sets the fraction of samples placed in the test partition
    pub fn test_fraction(mut self, test_fraction: f64) -> Self {
        self.0.test_fraction = test_fraction;
        self
    }

    /// Sets the seed of the shuffle preceding the cut.
    ///
    /// Without a seed the shuffle is drawn from entropy and partitions differ from run to run.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.0.seed = seed;
        self
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamGuard for SplitParams {
    type Checked = SplitValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let fraction = self.0.test_fraction;
        if !fraction.is_finite() || fraction <= 0.0 || fraction >= 1.0 {
            Err(Error::Parameters(format!(
                "Test fraction should lie strictly between 0 and 1, but was {}",
                fraction
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Everything a single evaluation run needs: where the data comes from, how it is split,
/// how the tree is grown and how the result is printed.
///
/// Defaults reproduce the plain run: iris, 30% test samples, unseeded shuffle, a Gini tree
/// without depth limit and the two-decimal percentage line.
#[derive(Clone, Debug, Default)]
pub struct PipelineParams {
    pub dataset: DatasetSource,
    pub split: SplitParams,
    pub tree: TreeClassifier,
    pub format: ReportFormat,
}

impl PipelineParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(mut self, dataset: DatasetSource) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn split(mut self, split: SplitParams) -> Self {
        self.split = split;
        self
    }

    pub fn tree(mut self, tree: TreeClassifier) -> Self {
        self.tree = tree;
        self
    }

    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Checks split and tree parameters without running anything
    pub fn validate(&self) -> Result<()> {
        self.split.check_ref()?;
        self.tree.validate()
    }
}
