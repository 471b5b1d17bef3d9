use std::io::Write;

use iris_tree::dataset::iris;
use iris_tree::split::partition;
use iris_tree::{
    metrics, Criterion, DatasetSource, Error, Pipeline, PipelineParams, ReportFormat, SplitParams,
    TreeClassifier,
};
use linfa::ParamGuard;

#[test]
fn iris_partition_sizes_and_accuracy_bounds() {
    for seed in 0..10 {
        let params = PipelineParams::new().split(SplitParams::new().seed(Some(seed)));
        let eval = Pipeline::new(params).run().expect("pipeline failed");

        assert_eq!(eval.nsamples, 150);
        assert_eq!(eval.ntrain + eval.ntest, eval.nsamples);
        assert_eq!(eval.ntest, 45);
        assert!((0.0..=1.0).contains(&eval.accuracy.fraction()));
    }
}

#[test]
fn unseeded_runs_still_produce_valid_partitions() {
    for _ in 0..3 {
        let eval = Pipeline::new(PipelineParams::new()).run().unwrap();
        assert_eq!((eval.ntrain, eval.ntest), (105, 45));
        assert!((0.0..=1.0).contains(&eval.accuracy.fraction()));
    }

    let params = SplitParams::new().check().unwrap();
    let a = partition(&iris(), &params).unwrap();
    let b = partition(&iris(), &params).unwrap();
    assert_ne!(a.test.records(), b.test.records());
}

#[test]
fn seeded_split_is_reproducible_across_calls() {
    let params = SplitParams::new().seed(Some(123)).check().unwrap();
    let a = partition(&iris(), &params).unwrap();
    let b = partition(&iris(), &params).unwrap();

    assert_eq!(a.train.records(), b.train.records());
    assert_eq!(a.test.targets(), b.test.targets());
}

#[test]
fn iris_tree_beats_chance_on_held_out_data() {
    let params = SplitParams::new().seed(Some(7)).check().unwrap();
    let split = partition(&iris(), &params).unwrap();

    let model = TreeClassifier::new().fit(&split.train).unwrap();
    let acc = metrics::accuracy(&model.predict(split.test.records()), split.test.targets()).unwrap();

    assert!(acc.fraction() > 0.8, "accuracy {} too low", acc.fraction());
}

#[test]
fn entropy_and_depth_limit_are_honoured() {
    let params = PipelineParams::new()
        .split(SplitParams::new().seed(Some(1)))
        .tree(
            TreeClassifier::new()
                .criterion(Criterion::Entropy)
                .max_depth(Some(2)),
        );
    let eval = Pipeline::new(params).run().unwrap();
    assert!(eval.tree_depth <= 2);
}

#[test]
fn report_lines_match_both_formats() {
    let accuracy = iris_tree::Accuracy::new(0.955).unwrap();
    assert_eq!(ReportFormat::Percent.render(accuracy), "Accuracy: 95.50%");
    assert_eq!(
        ReportFormat::Sentence.render(accuracy),
        "The accuracy of the trained decision tree classifier is 95.5 %"
    );
}

#[test]
fn runs_on_a_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x,y,label").unwrap();
    for i in 0..40 {
        let label = i % 2;
        writeln!(file, "{},{},{}", label as f64 * 10.0 + i as f64 * 0.01, i, label).unwrap();
    }

    let params = PipelineParams::new()
        .dataset(DatasetSource::csv(file.path()))
        .split(SplitParams::new().test_fraction(0.25).seed(Some(5)));
    let eval = Pipeline::new(params).run().unwrap();

    assert_eq!((eval.ntrain, eval.ntest), (30, 10));
    assert!((eval.accuracy.fraction() - 1.0).abs() < 1e-12);
}

#[test]
fn tiny_dataset_cannot_be_split() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x,label").unwrap();
    writeln!(file, "1.0,0").unwrap();

    let params = PipelineParams::new().dataset(DatasetSource::csv(file.path()));
    let res = Pipeline::new(params).run();
    assert!(matches!(res, Err(Error::EmptyPartition { .. })));
}
