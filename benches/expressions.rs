//! Expression Engine Benchmarks
//!
//! This benchmark suite measures the three core operations of the engine on trees of
//! increasing size:
//!
//! - **Evaluation**: reducing a tree to a number under a fixed environment
//! - **Differentiation**: deriving (and thereby simplifying) a tree with respect to `x`
//! - **Simplification**: a single bottom-up simplification pass
//!
//! The test trees are nested products and sums of trigonometric terms, which produce
//! large intermediate derivatives through the product rule.
//!
//! ## Usage
//!
//! Run with: `cargo bench --bench expressions`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use symexpr::{expr::Expr, types::Environment};

/// Builds sin(x) * cos(y) + x * (...) nested `depth` times.
fn nested_expression(depth: usize) -> Expr {
    (0..depth).fold(Expr::variable("x"), |acc, i| {
        Expr::add(
            Expr::multiply(
                Expr::sine(Expr::variable("x")),
                Expr::cosine(Expr::multiply(Expr::number(i as f64), Expr::variable("y"))),
            ),
            Expr::multiply(Expr::variable("x"), acc),
        )
    })
}

fn environment() -> Environment {
    Environment::from([("x".to_string(), 0.5), ("y".to_string(), 1.5)])
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let env = environment();

    for depth in [1, 4, 16] {
        let expr = nested_expression(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &expr, |b, expr| {
            b.iter(|| black_box(expr).evaluate(black_box(&env)))
        });
    }

    group.finish();
}

fn benchmark_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for depth in [1, 4, 16] {
        let expr = nested_expression(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &expr, |b, expr| {
            b.iter(|| black_box(expr).derive("x"))
        });
    }

    group.finish();
}

fn benchmark_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for depth in [1, 4, 16] {
        // Raw product-rule output contains plenty of 0 and 1 terms to remove
        let expr = Expr::add(
            Expr::multiply(Expr::number(1.0), nested_expression(depth)),
            Expr::multiply(nested_expression(depth), Expr::number(0.0)),
        );
        group.bench_with_input(BenchmarkId::from_parameter(depth), &expr, |b, expr| {
            b.iter(|| black_box(expr).simplify())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_evaluate,
    benchmark_derive,
    benchmark_simplify
);
criterion_main!(benches);
