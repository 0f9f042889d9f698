//! # word-bloom Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `new(n, e)` | O(m + k) |
//! | `add(s)` | O(tokens × k) HMAC evaluations |
//! | `check(s)` | O(tokens × k), stops at the first unset bit |

use criterion::{criterion_group, criterion_main, Criterion};

fn filter_benchmarks(c: &mut Criterion) {
    word_bloom_tests::benchmarks::word_bloom::register_benchmarks(c);
}

criterion_group!(benches, filter_benchmarks);
criterion_main!(benches);
