//! Benchmarks for parsing, precedence and validation
//!
//! These cover the operations a tool runs once per version in a large
//! listing, such as sorting release tags.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use semverkit_core::{normalize, SemVer};

fn sample_versions(count: usize) -> Vec<SemVer> {
    (0..count)
        .map(|i| {
            let pre = match i % 4 {
                0 => String::new(),
                1 => format!("alpha.{}", i % 7),
                2 => "beta".to_string(),
                _ => format!("rc.{}", i % 3),
            };
            SemVer::new((i / 100) as u32, ((i / 10) % 10) as u32, (i % 10) as u32).with_pre_release(&pre)
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for text in ["1.2.3", "1.0.0-alpha.beta.1+build.5114f85", "1.2.3----RC-SNAPSHOT.12.9.1--.12+788"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| SemVer::parse(black_box(text)))
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for size in [100, 1_000, 10_000] {
        let versions = sample_versions(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &versions, |b, versions| {
            b.iter(|| {
                let mut sorted = versions.clone();
                sorted.sort();
                sorted
            })
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let clean = SemVer::new(1, 0, 0).with_pre_release("rc.1").with_build("exp.sha.5114f85");
    let dirty = SemVer::new(1, 0, 0).with_pre_release("rc..01.a b").with_build("exp sha..");

    c.bench_function("validate_clean", |b| b.iter(|| black_box(&clean).validate()));
    c.bench_function("validate_dirty", |b| b.iter(|| black_box(&dirty).validate()));
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box("1.0.0-rc..01+exp sha"))));
}

criterion_group!(benches, bench_parse, bench_sort, bench_validate);
criterion_main!(benches);
