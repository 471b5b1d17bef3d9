use std::path::PathBuf;

use structopt::StructOpt;
use tracing::info;

use iris_tree::{
    logging, Criterion, DatasetSource, Pipeline, PipelineParams, ReportFormat, SplitParams,
    TreeClassifier,
};

/// Train a decision tree classifier and print its accuracy on a held out test set
#[derive(Debug, StructOpt)]
#[structopt(name = "iris-tree")]
struct Options {
    #[structopt(short = "t", long = "test-fraction", default_value = "0.3")]
    /// Fraction of the samples held out for testing, strictly between 0 and 1
    test_fraction: f64,
    #[structopt(short = "s", long = "seed")]
    /// Seed of the train/test shuffle. Fixes the split only, tree tie-breaking may still vary
    seed: Option<u64>,
    #[structopt(short = "f", long = "format", default_value = "percent")]
    /// Output line, `percent` or `sentence`
    format: ReportFormat,
    #[structopt(short = "c", long = "criterion", default_value = "gini")]
    /// Split criterion, `gini` or `entropy`
    criterion: Criterion,
    #[structopt(long = "max-depth")]
    /// Limit to the depth of the tree
    max_depth: Option<usize>,
    #[structopt(short = "d", long = "dataset", parse(from_os_str))]
    /// CSV file to use instead of the iris dataset, class label in the last column
    dataset: Option<PathBuf>,
    #[structopt(long = "no-headers")]
    /// The CSV file has no header row
    no_headers: bool,
    #[structopt(long = "separator", default_value = ",", parse(try_from_str = parse_separator))]
    /// Field separator of the CSV file
    separator: u8,
    #[structopt(long = "log-level", default_value = "warn")]
    /// Log filter used when RUST_LOG is unset, logs go to stderr
    log_level: String,
}

fn parse_separator(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("separator must be a single ASCII character, got `{}`", s)),
    }
}

impl Options {
    fn pipeline_params(&self) -> PipelineParams {
        let dataset = match &self.dataset {
            Some(path) => DatasetSource::Csv {
                path: path.clone(),
                has_headers: !self.no_headers,
                separator: self.separator,
            },
            None => DatasetSource::Iris,
        };

        PipelineParams::new()
            .dataset(dataset)
            .split(
                SplitParams::new()
                    .test_fraction(self.test_fraction)
                    .seed(self.seed),
            )
            .tree(
                TreeClassifier::new()
                    .criterion(self.criterion)
                    .max_depth(self.max_depth),
            )
            .format(self.format)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Options::from_args();
    logging::init(&opt.log_level)?;

    let params = opt.pipeline_params();
    params.validate()?;

    let eval = Pipeline::new(params.clone()).run()?;
    info!(
        samples = eval.nsamples,
        train = eval.ntrain,
        test = eval.ntest,
        depth = eval.tree_depth,
        leaves = eval.tree_leaves,
        "done"
    );
    println!("{}", eval.render(&params));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduce_the_plain_run() {
        let opt = Options::from_iter(&["iris-tree"]);
        let params = opt.pipeline_params();

        assert_eq!(params.dataset, DatasetSource::Iris);
        assert_eq!(params.split, SplitParams::new());
        assert_eq!(params.tree, TreeClassifier::new());
        assert_eq!(params.format, ReportFormat::Percent);
    }

    #[test]
    fn parses_all_options() {
        let opt = Options::from_iter(&[
            "iris-tree",
            "-t",
            "0.25",
            "--seed",
            "7",
            "--format",
            "sentence",
            "--criterion",
            "entropy",
            "--max-depth",
            "3",
            "--dataset",
            "data.tsv",
            "--no-headers",
            "--separator",
            ";",
        ]);
        let params = opt.pipeline_params();

        assert_eq!(params.split, SplitParams::new().test_fraction(0.25).seed(Some(7)));
        assert_eq!(
            params.tree,
            TreeClassifier::new()
                .criterion(Criterion::Entropy)
                .max_depth(Some(3))
        );
        assert_eq!(params.format, ReportFormat::Sentence);
        assert_eq!(
            params.dataset,
            DatasetSource::Csv {
                path: "data.tsv".into(),
                has_headers: false,
                separator: b';',
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Options::from_iter_safe(&["iris-tree", "--format", "xml"]).is_err());
        assert!(Options::from_iter_safe(&["iris-tree", "--criterion", "mse"]).is_err());
        assert!(Options::from_iter_safe(&["iris-tree", "--separator", "ab"]).is_err());
    }

    #[test]
    fn out_of_range_fraction_fails_validation() {
        let opt = Options::from_iter(&["iris-tree", "--test-fraction", "1.2"]);
        assert!(opt.pipeline_params().validate().is_err());
    }
}
