//! `iris-tree` trains a decision tree classifier on a labelled dataset and reports how well it
//! does on held out samples.
//!
//! ## The big picture
//!
//! The crate is a thin evaluation harness on top of the [`linfa`](https://crates.io/crates/linfa)
//! ecosystem. Tree induction is done by `linfa-trees`, the iris flower dataset comes from
//! `linfa-datasets`. What lives here is the pipeline around them:
//!
//! * [`dataset`]: acquisition of the sample matrix and label vector
//! * [`split`]: a shuffled train/test partition, optionally seeded
//! * [`classifier`]: unfit and fitted decision trees
//! * [`metrics`] and [`report`]: accuracy and the line printed for it
//! * [`pipeline`]: the four stages chained together
//!
//! ## Example
//!
//! ```rust
//! use iris_tree::{Pipeline, PipelineParams, SplitParams};
//!
//! let params = PipelineParams::new().split(SplitParams::new().test_fraction(0.3).seed(Some(42)));
//! let eval = Pipeline::new(params.clone()).run().unwrap();
//!
//! assert_eq!((eval.ntrain, eval.ntest), (105, 45));
//! println!("{}", eval.render(&params));
//! ```

pub mod classifier;
pub mod dataset;
pub mod error;
mod hyperparams;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod split;

pub use classifier::{Criterion, FittedTree, TreeClassifier};
pub use dataset::{DatasetSource, Labelled};
pub use error::{Error, Result};
pub use hyperparams::{PipelineParams, SplitParams, SplitValidParams};
pub use metrics::Accuracy;
pub use pipeline::{Evaluation, Pipeline};
pub use report::ReportFormat;
pub use split::Partition;
