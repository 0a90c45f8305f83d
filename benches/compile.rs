//! cargo bench --bench compile
//!
//! The classic pathological family for a backtracking engine is
//! `aⁿ?·aⁿ` matched against `aⁿ`: each `a?` can either consume or skip its
//! byte, so a backtracker tries every combination. This engine has no
//! backtracking (the NFA simulation carries at most `n` live states per
//! byte), so both patterns should scale linearly rather than
//! exponentially with `n`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tre::Regex;

fn pathological_pattern(n: usize) -> String {
    let mut pattern = "a?".repeat(n);
    pattern.push_str(&"a".repeat(n));
    pattern
}

fn flat_pattern(n: usize) -> String {
    "a".repeat(n)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for &n in &[8usize, 16, 24] {
        let haystack = "a".repeat(n);

        let pathological = pathological_pattern(n);
        c.bench_function(&format!("compile_pathological_{n}"), |b| {
            b.iter(|| Regex::new(black_box(&pathological)).unwrap())
        });
        let re = Regex::new(&pathological).unwrap();
        c.bench_function(&format!("match_pathological_{n}"), |b| {
            b.iter(|| re.is_match(black_box(haystack.as_bytes())))
        });

        let flat = flat_pattern(n);
        c.bench_function(&format!("compile_flat_{n}"), |b| {
            b.iter(|| Regex::new(black_box(&flat)).unwrap())
        });
        let re = Regex::new(&flat).unwrap();
        c.bench_function(&format!("match_flat_{n}"), |b| {
            b.iter(|| re.is_match(black_box(haystack.as_bytes())))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
