//! Benchmarks for the full generation pipeline.
//!
//! Run with: `cargo bench -p sampler_engine`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_dist::{Joint, Normal, Uniform};
use sampler_engine::{Rule, SampleRequest, Sampler};

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut sampler = Sampler::from_seed(42);
    for rule in [Rule::Random, Rule::Halton, Rule::Sobol, Rule::LatinHypercube] {
        group.bench_with_input(
            BenchmarkId::new(rule.token(), "1024x4"),
            &rule,
            |b, &rule| {
                let request = SampleRequest::new(1024).domain(4).rule(rule);
                b.iter(|| sampler.generate(black_box(&request)));
            },
        );
    }
    group.finish();
}

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_halton");
    let mut sampler = Sampler::from_seed(42);
    for order in [64, 512, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            let request = SampleRequest::new(order).domain(4).rule(Rule::Halton);
            b.iter(|| sampler.generate(black_box(&request)));
        });
    }
    group.finish();
}

fn bench_antithetic(c: &mut Criterion) {
    let mut sampler = Sampler::from_seed(42);
    let plain = SampleRequest::new(1024).domain(2).rule(Rule::Halton);
    let mirrored = SampleRequest::new(1024)
        .domain(2)
        .rule(Rule::Halton)
        .antithetic(true);
    let mut group = c.benchmark_group("antithetic");
    group.bench_function("off_1024x2", |b| {
        b.iter(|| sampler.generate(black_box(&plain)));
    });
    group.bench_function("on_1024x2", |b| {
        b.iter(|| sampler.generate(black_box(&mirrored)));
    });
    group.finish();
}

fn bench_distribution_mapping(c: &mut Criterion) {
    let mut sampler = Sampler::from_seed(42);
    let joint = Joint::new(vec![
        Uniform::new(-1.0, 1.0).unwrap().into(),
        Normal::default().into(),
    ])
    .unwrap();
    let request = SampleRequest::new(1024).domain(&joint).rule(Rule::Sobol);
    c.bench_function("generate_joint_1024x2", |b| {
        b.iter(|| sampler.generate(black_box(&request)));
    });
}

criterion_group!(
    benches,
    bench_rules,
    bench_orders,
    bench_antithetic,
    bench_distribution_mapping
);
criterion_main!(benches);
