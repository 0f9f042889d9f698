//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter over tokenized sentences
//! - Keyed hash functions and varint decoding
//! - Parameter derivation
//! - Tokenization
//! - Configuration
//!
//! RULES:
//! - No I/O beyond loading configuration files
//! - No async code

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;
pub mod tokenizer;
pub mod varint;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use hash_functions::{HasherSet, KeyedHasher};
pub use parameters::{derive_parameters, estimated_fpr, FilterParams};
pub use tokenizer::tokenize;
pub use varint::decode_uvarint;
