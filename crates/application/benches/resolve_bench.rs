//! Resolution throughput for request-sized workloads.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use stencil_application::variable_resolver::{VariableResolver, extract_variables, has_variables};
use stencil_domain::VariableSnapshot;

fn flat_workload() -> (String, VariableSnapshot) {
    let snapshot: VariableSnapshot = (0..100)
        .map(|i| {
            let value = if i == 0 {
                "x".repeat(10 * 1024)
            } else {
                format!("value-{i}")
            };
            (format!("var{i}"), value)
        })
        .collect();
    let text = (0..100)
        .map(|i| format!("{{{{var{i}}}}}"))
        .collect::<Vec<_>>()
        .join("/");
    (text, snapshot)
}

fn nested_workload() -> (String, VariableSnapshot) {
    let snapshot: VariableSnapshot = (1..=10)
        .map(|i| {
            let value = if i == 10 {
                "leaf".to_string()
            } else {
                format!("[{{{{n{}}}}}]", i + 1)
            };
            (format!("n{i}"), value)
        })
        .collect();
    ("{{n1}}".to_string(), snapshot)
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = VariableResolver::default();

    let (text, snapshot) = flat_workload();
    c.bench_function("resolve_100_refs_10kb_value", |b| {
        b.iter(|| resolver.resolve(black_box(&text), black_box(&snapshot)));
    });

    let (text, snapshot) = nested_workload();
    c.bench_function("resolve_10_pass_chain", |b| {
        b.iter(|| resolver.resolve(black_box(&text), black_box(&snapshot)));
    });
}

fn bench_scan(c: &mut Criterion) {
    let (text, _) = flat_workload();
    let braces = "{ {{ }} {".repeat(2048);

    c.bench_function("extract_100_refs", |b| {
        b.iter(|| extract_variables(black_box(&text)));
    });
    c.bench_function("has_variables_malformed_16kb", |b| {
        b.iter(|| has_variables(black_box(&braces)));
    });
}

criterion_group!(benches, bench_resolve, bench_scan);
criterion_main!(benches);
