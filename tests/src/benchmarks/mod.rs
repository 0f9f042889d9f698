//! # word-bloom Benchmarks
