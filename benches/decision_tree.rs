use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iris_tree::dataset::iris;
use iris_tree::split::partition;
use iris_tree::{Criterion as SplitCriterion, Pipeline, PipelineParams, SplitParams, TreeClassifier};
use linfa::ParamGuard;

fn fit_bench(c: &mut Criterion) {
    let params = SplitParams::new().seed(Some(42)).check().unwrap();
    let split = partition(&iris(), &params).unwrap();

    let mut group = c.benchmark_group("fit_iris");
    for criterion in [SplitCriterion::Gini, SplitCriterion::Entropy].iter() {
        let clf = TreeClassifier::new().criterion(*criterion);
        group.bench_with_input(BenchmarkId::from_parameter(criterion), &split, |b, s| {
            b.iter(|| clf.fit(&s.train))
        });
    }
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let pipeline = Pipeline::new(PipelineParams::new().split(SplitParams::new().seed(Some(42))));
    c.bench_function("pipeline_iris", |b| b.iter(|| pipeline.run()));
}

criterion_group!(benches, fit_bench, pipeline_bench);
criterion_main!(benches);
