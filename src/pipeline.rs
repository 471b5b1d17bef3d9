//! End-to-end evaluation: load, split, fit, predict, score
use linfa::prelude::ConfusionMatrix;
use linfa::ParamGuard;
use rand::Rng;
use tracing::{debug, info, info_span};

use crate::classifier::FittedTree;
use crate::error::Result;
use crate::hyperparams::PipelineParams;
use crate::metrics::{self, Accuracy};
use crate::split::{self, Partition};

/// Outcome of one run
#[derive(Debug)]
pub struct Evaluation {
    pub nsamples: usize,
    pub ntrain: usize,
    pub ntest: usize,
    pub accuracy: Accuracy,
    pub tree_depth: usize,
    pub tree_leaves: usize,
    pub confusion: ConfusionMatrix<usize>,
}

impl Evaluation {
    /// The single line printed for this run
    pub fn render(&self, params: &PipelineParams) -> String {
        params.format.render(self.accuracy)
    }
}

pub struct Pipeline {
    params: PipelineParams,
}

impl Pipeline {
    pub fn new(params: PipelineParams) -> Self {
        Pipeline { params }
    }

    /// Runs all stages, shuffling with the configured seed or from entropy
    pub fn run(&self) -> Result<Evaluation> {
        let split = self.params.split.check_ref()?;
        let mut rng = split::split_rng(split);
        self.run_with_rng(&mut rng)
    }

    /// Runs all stages, drawing the shuffle from `rng`
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Evaluation> {
        let split_params = self.params.split.check_ref()?;
        self.params.tree.validate()?;

        let dataset = {
            let _span = info_span!("load", source = ?self.params.dataset).entered();
            let dataset = self.params.dataset.load()?;
            debug!(
                samples = dataset.records().nrows(),
                features = dataset.records().ncols(),
                "dataset loaded"
            );
            dataset
        };

        let Partition { train, test } = {
            let _span = info_span!("split", test_fraction = split_params.test_fraction()).entered();
            let partition = split::partition_using(&dataset, split_params, rng)?;
            debug!(
                train = partition.ntrain(),
                test = partition.ntest(),
                seed = ?split_params.seed(),
                "partitioned"
            );
            partition
        };

        let model: FittedTree = {
            let _span = info_span!("fit", criterion = %self.params.tree.get_criterion()).entered();
            let model = self.params.tree.fit(&train)?;
            debug!(
                depth = model.depth(),
                leaves = model.num_leaves(),
                "tree fitted"
            );
            model
        };

        let _span = info_span!("evaluate").entered();
        let predicted = model.predict(test.records());
        let accuracy = metrics::accuracy(&predicted, test.targets())?;
        let confusion = metrics::confusion_matrix(&predicted, &test)?;
        debug!("confusion matrix\n{:?}", confusion);
        info!(accuracy = accuracy.fraction(), "evaluation finished");

        Ok(Evaluation {
            nsamples: dataset.records().nrows(),
            ntrain: train.targets().len(),
            ntest: test.targets().len(),
            accuracy,
            tree_depth: model.depth(),
            tree_leaves: model.num_leaves(),
            confusion,
        })
    }
}
