//! Decision tree classifier
//!
//! [`TreeClassifier`] is the unfit model: a set of induction parameters. Fitting it on a
//! training partition yields a [`FittedTree`], which can only be used for prediction and
//! inspection. Tree induction itself is done by `linfa-trees`.
use std::fmt;
use std::str::FromStr;

use linfa::prelude::{Fit, Predict};
use linfa::ParamGuard;
use linfa_trees::{DecisionTree, DecisionTreeParams, SplitQuality};
use ndarray::{Array1, Array2};

use crate::dataset::Labelled;
use crate::error::{Error, Result};

/// Impurity measure used to pick the split of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion {
    Gini,
    Entropy,
}

impl Default for Criterion {
    fn default() -> Self {
        Criterion::Gini
    }
}

impl From<Criterion> for SplitQuality {
    fn from(criterion: Criterion) -> Self {
        match criterion {
            Criterion::Gini => SplitQuality::Gini,
            Criterion::Entropy => SplitQuality::Entropy,
        }
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gini" => Ok(Criterion::Gini),
            "entropy" => Ok(Criterion::Entropy),
            other => Err(Error::Parameters(format!(
                "unknown split criterion `{}`, expected `gini` or `entropy`",
                other
            ))),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Criterion::Gini => write!(f, "gini"),
            Criterion::Entropy => write!(f, "entropy"),
        }
    }
}

/// An unfit decision tree classifier.
///
/// Defaults are those of the underlying tree learner:
/// * `criterion = Criterion::Gini`
/// * `max_depth = None`
/// * `min_weight_split = 2.0`
/// * `min_weight_leaf = 1.0`
/// * `min_impurity_decrease = 0.00001`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeClassifier {
    criterion: Criterion,
    max_depth: Option<usize>,
    min_weight_split: f32,
    min_weight_leaf: f32,
    min_impurity_decrease: f64,
}

impl Default for TreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeClassifier {
    pub fn new() -> Self {
        TreeClassifier {
            criterion: Criterion::Gini,
            max_depth: None,
            min_weight_split: 2.0,
            min_weight_leaf: 1.0,
            min_impurity_decrease: 0.00001,
        }
    }

    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Sets the optional limit to the depth of the tree
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the minimum number of samples required to split a node
    pub fn min_weight_split(mut self, min_weight_split: f32) -> Self {
        self.min_weight_split = min_weight_split;
        self
    }

    /// Sets the minimum number of samples a split has to place in each leaf
    pub fn min_weight_leaf(mut self, min_weight_leaf: f32) -> Self {
        self.min_weight_leaf = min_weight_leaf;
        self
    }

    /// Sets the minimum decrease in impurity a split needs to bring, must be positive
    pub fn min_impurity_decrease(mut self, min_impurity_decrease: f64) -> Self {
        self.min_impurity_decrease = min_impurity_decrease;
        self
    }

    pub fn get_criterion(&self) -> Criterion {
        self.criterion
    }

    fn params(&self) -> DecisionTreeParams<f64, usize> {
        DecisionTree::params()
            .split_quality(self.criterion.into())
            .max_depth(self.max_depth)
            .min_weight_split(self.min_weight_split)
            .min_weight_leaf(self.min_weight_leaf)
            .min_impurity_decrease(self.min_impurity_decrease)
    }

    pub fn validate(&self) -> Result<()> {
        self.params().check_ref()?;
        Ok(())
    }

    /// Grows a tree on the training partition
    pub fn fit(&self, train: &Labelled) -> Result<FittedTree> {
        if train.targets().is_empty() {
            return Err(Error::Parameters(
                "cannot fit a tree on an empty training set".into(),
            ));
        }

        let tree: std::result::Result<DecisionTree<f64, usize>, linfa::Error> =
            self.params().fit(train);
        Ok(FittedTree { tree: tree? })
    }
}

/// A trained decision tree, immutable after fitting
#[derive(Clone, Debug)]
pub struct FittedTree {
    tree: DecisionTree<f64, usize>,
}

impl FittedTree {
    /// One label per row of `records`
    pub fn predict(&self, records: &Array2<f64>) -> Array1<usize> {
        self.tree.predict(records)
    }

    pub fn depth(&self) -> usize {
        self.tree.max_depth()
    }

    pub fn num_leaves(&self) -> usize {
        self.tree.num_leaves()
    }

    /// Normalised impurity decrease contributed by each feature
    pub fn feature_importance(&self) -> Vec<f64> {
        self.tree.feature_importance()
    }
}
