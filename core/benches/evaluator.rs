//! Benchmarks for parsing and evaluating expressions.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. eval_only: evaluation of a tree parsed once up front
//! 2. full_pipeline: parse + eval inside a region scope
//! 3. session: the same through `Session::evaluate`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tally_core::{
    api::{Session, SessionOptions},
    evaluator::evaluate,
    parser,
    region::Region,
};

/// Generate an arithmetic expression like "1 + 1 + 1 + ... + 1" with `n` additions.
fn generate_arithmetic_chain(n: usize) -> String {
    let mut expr = String::from("1");
    for _ in 0..n {
        expr.push_str(" + 1");
    }
    expr
}

/// Alternate precedence levels and groups so every parser routine is hit.
fn generate_mixed_chain(n: usize) -> String {
    let mut expr = String::from("(2 * 3)");
    for i in 0..n {
        match i % 3 {
            0 => expr.push_str(" + 4 / 2"),
            1 => expr.push_str(" - (1 + 1) * 3"),
            _ => expr.push_str(" + 0.5"),
        }
    }
    expr
}

// Chains are folded iteratively, so sizes are not limited by nesting depth.
const SIZES: [usize; 4] = [100, 200, 400, 800];

fn bench_eval_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_only");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let region = Region::default();
            let source = generate_arithmetic_chain(size);
            let parsed = parser::parse(&region, &source).expect("Parse failed");

            b.iter(|| black_box(evaluate(black_box(parsed.expr))));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in SIZES {
        let source = generate_mixed_chain(size);
        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            let mut region = Region::default();
            b.iter(|| {
                let scope = region.scope();
                let parsed = parser::parse(&scope, black_box(source)).expect("Parse failed");
                black_box(evaluate(parsed.expr))
            });
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for size in SIZES {
        let source = generate_mixed_chain(size);
        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            let mut session = Session::new(SessionOptions::default()).expect("Session failed");
            b.iter(|| black_box(session.evaluate(black_box(source)).expect("Eval failed")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eval_only, bench_full_pipeline, bench_session);
criterion_main!(benches);
