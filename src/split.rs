//! Train/test partitioning
//!
//! A single random permutation of the row indices is cut in two. The first
//! `ceil(test_fraction * n)` indices form the test partition, the remaining ones the
//! training partition.
use linfa::Dataset;
use ndarray::Axis;
use rand::rngs::SmallRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::dataset::Labelled;
use crate::error::{Error, Result};
use crate::hyperparams::SplitValidParams;

/// Training and test subsets of one dataset
#[derive(Clone, Debug)]
pub struct Partition {
    pub train: Labelled,
    pub test: Labelled,
}

impl Partition {
    pub fn ntrain(&self) -> usize {
        self.train.targets().len()
    }

    pub fn ntest(&self) -> usize {
        self.test.targets().len()
    }
}

/// Number of samples placed in the test partition
pub fn test_size(nsamples: usize, test_fraction: f64) -> usize {
    let size = (test_fraction * nsamples as f64).ceil() as usize;
    size.min(nsamples)
}

/// RNG driving the shuffle: seeded when a seed is configured, from entropy otherwise
pub fn split_rng(params: &SplitValidParams) -> SmallRng {
    match params.seed() {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Shuffle and cut `dataset` as configured by `params`
pub fn partition(dataset: &Labelled, params: &SplitValidParams) -> Result<Partition> {
    let mut rng = split_rng(params);
    partition_using(dataset, params, &mut rng)
}

/// Shuffle and cut `dataset` drawing the permutation from `rng`.
///
/// The seed stored in `params` is ignored.
pub fn partition_using<R: Rng>(
    dataset: &Labelled,
    params: &SplitValidParams,
    rng: &mut R,
) -> Result<Partition> {
    let (records, targets) = (dataset.records(), dataset.targets());
    if records.nrows() != targets.len() {
        return Err(Error::MismatchedLengths {
            left: records.nrows(),
            right: targets.len(),
        });
    }

    let nsamples = targets.len();
    let ntest = test_size(nsamples, params.test_fraction());
    let ntrain = nsamples - ntest;
    if ntrain == 0 || ntest == 0 {
        return Err(Error::EmptyPartition {
            train: ntrain,
            test: ntest,
        });
    }

    let indices = sample(rng, nsamples, nsamples).into_vec();
    let (test_idx, train_idx) = indices.split_at(ntest);

    let feature_names = dataset.feature_names().to_vec();
    let subset = |idx: &[usize]| {
        Dataset::new(records.select(Axis(0), idx), targets.select(Axis(0), idx))
            .with_feature_names(feature_names.clone())
    };

    Ok(Partition {
        train: subset(train_idx),
        test: subset(test_idx),
    })
}
