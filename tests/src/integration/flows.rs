//! # Integration Test Flows
//!
//! Exercises the public API the way a host application does: build a filter,
//! add sentences, query membership.
//!
//! ## Properties Tested:
//!
//! 1. **No false negatives**: every added sentence checks true
//! 2. **Per-token membership**: sentences built only from seen words check true
//! 3. **Case insensitivity**: sentences are lower-cased before hashing
//! 4. **Determinism**: independently built filters behave identically
//! 5. **Validation**: only construction can fail

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use word_bloom::{BloomFilter, FilterError, Metrics};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Filter holding the two demonstration sentences
    fn demo_filter() -> BloomFilter {
        let mut filter = BloomFilter::new(100, 0.001).expect("valid parameters");
        filter.add("aku mau makan");
        filter.add("aku mau mandi");
        filter
    }

    /// Random lowercase word of 3 to 10 letters
    fn random_word(rng: &mut StdRng) -> String {
        let len = rng.gen_range(3..=10);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }

    // =============================================================================
    // DEMONSTRATION FLOW
    // =============================================================================

    #[test]
    fn test_demo_sentences() {
        let filter = demo_filter();

        assert!(filter.check("aku mau makan"));
        assert!(filter.check("aku mau mandi"));
        assert!(filter.check("aku mau"));
    }

    #[test]
    fn test_sentence_of_seen_words_is_member() {
        let filter = demo_filter();

        // Never added verbatim, but every word was.
        assert!(filter.check("aku makan mandi"));
        assert!(filter.check("mandi mandi mandi"));
    }

    #[test]
    fn test_unseen_word_rejects_sentence() {
        let filter = demo_filter();

        assert!(!filter.check("kamu"));
        assert!(!filter.check("aku mau tidur"));
        assert!(!filter.check("tidur aku mau"));
    }

    #[test]
    fn test_case_insensitive_flow() {
        let mut filter = BloomFilter::new(100, 0.001).unwrap();
        filter.add("AKU MAU");

        assert!(filter.check("aku mau"));
        assert!(filter.check("aKu"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let filter = demo_filter();

        // A trailing space produces an empty token, which was never added.
        assert!(!filter.check("aku mau "));

        let mut filter = demo_filter();
        filter.add(" ");
        assert!(filter.check("aku mau "));
        assert!(filter.check("  aku"));
    }

    // =============================================================================
    // PROPERTIES AT SCALE
    // =============================================================================

    #[test]
    fn test_no_false_negatives_random_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut filter = BloomFilter::new(1_000, 0.01).unwrap();

        let sentences: Vec<String> = (0..300)
            .map(|_| {
                let words = rng.gen_range(1..6);
                (0..words)
                    .map(|_| random_word(&mut rng))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        for s in &sentences {
            filter.add(s);
        }
        for s in &sentences {
            assert!(filter.check(s), "False negative for {:?}", s);
        }
    }

    #[test]
    fn test_bits_never_cleared() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut filter = BloomFilter::new(200, 0.01).unwrap();
        let mut previous = filter.bits_set();

        for _ in 0..200 {
            let word = random_word(&mut rng);
            filter.check(&word);
            filter.add(&word);
            let current = filter.bits_set();
            assert!(current >= previous, "bits_set decreased");
            previous = current;
        }
    }

    #[test]
    fn test_independent_filters_are_identical() {
        let sentences = ["aku mau makan", "kamu mau minum", "dia pergi"];

        let mut a = BloomFilter::new(50, 0.01).unwrap();
        let mut b = BloomFilter::new(50, 0.01).unwrap();
        for s in sentences {
            a.add(s);
            b.add(s);
        }

        let bits_a: Vec<bool> = (0..a.size_bits()).map(|i| a.is_bit_set(i)).collect();
        let bits_b: Vec<bool> = (0..b.size_bits()).map(|i| b.is_bit_set(i)).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_hashers_shared_across_sizes() {
        // Same k, different m: identical digests, different reductions.
        let small = BloomFilter::new(10, 0.01).unwrap();
        let large = BloomFilter::new(1_000, 0.01).unwrap();
        assert_eq!(small.hash_count(), large.hash_count());

        for i in 0..small.hash_count() {
            let a = small.hashers().get(i).unwrap();
            let b = large.hashers().get(i).unwrap();
            assert_eq!(a.digest(b"aku"), b.digest(b"aku"));
        }
    }

    // =============================================================================
    // VALIDATION BOUNDARY
    // =============================================================================

    #[test]
    fn test_construction_validation() {
        assert!(matches!(
            BloomFilter::new(0, 0.001),
            Err(FilterError::InvalidCapacity { .. })
        ));
        for e in [0.0, 1.0, 100.0, f64::NAN, -1.0] {
            assert!(
                matches!(BloomFilter::new(1, e), Err(FilterError::InvalidErrorRate { .. })),
                "error rate {} should be rejected",
                e
            );
        }
        assert!(BloomFilter::new(1, 0.5).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = BloomFilter::new(0, 0.1).unwrap_err();
        assert!(err.to_string().contains("capacity must be greater than 0"));

        let err = BloomFilter::new(1, 2.0).unwrap_err();
        assert!(err.to_string().contains("error rate must be between 0 and 1"));
    }

    // =============================================================================
    // CALLER-SIDE SYNCHRONIZATION
    // =============================================================================

    #[test]
    fn test_shared_filter_behind_mutex() {
        let metrics = Arc::new(Metrics::new());
        let filter = Arc::new(Mutex::new(
            BloomFilter::with_metrics(500, 0.01, metrics.clone()).unwrap(),
        ));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for i in 0..25 {
                        filter.lock().unwrap().add(&format!("thread{} word{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let filter = filter.lock().unwrap();
        for t in 0..4 {
            for i in 0..25 {
                assert!(filter.check(&format!("thread{} word{}", t, i)));
            }
        }
        assert_eq!(metrics.snapshot().sentences_added, 100);
    }
}
