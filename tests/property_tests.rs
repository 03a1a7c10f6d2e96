//! Property-based tests for rasch_rs
//!
//! Uses proptest to verify invariants of the probability model, the
//! estimator and the recommender.

use proptest::prelude::*;
use rasch_rs::{estimate, rasch_probability, recommend_item, EstimatorConfig, ResponseMatrix};

fn binary_matrix() -> impl Strategy<Value = Vec<Vec<i32>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(n, m)| {
        prop::collection::vec(prop::collection::vec(0i32..=1, m), n)
    })
}

proptest! {
    // ==================== Probability Properties ====================

    #[test]
    fn probability_in_open_interval(t in -1e6f64..1e6, b in -1e6f64..1e6) {
        let p = rasch_probability(t, b);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn probability_complement(t in -50.0f64..50.0, b in -50.0f64..50.0) {
        let sum = rasch_probability(t, b) + rasch_probability(b, t);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn probability_increasing_in_theta(
        t in -10.0f64..10.0,
        delta in 0.01f64..5.0,
        b in -5.0f64..5.0
    ) {
        prop_assert!(rasch_probability(t, b) < rasch_probability(t + delta, b));
    }

    #[test]
    fn probability_shift_invariant(t in -10.0f64..10.0, b in -10.0f64..10.0, c in -10.0f64..10.0) {
        let diff = rasch_probability(t, b) - rasch_probability(t + c, b + c);
        prop_assert!(diff.abs() < 1e-9);
    }

    // ==================== Estimator Properties ====================

    #[test]
    fn estimates_have_matrix_shape_and_are_finite(rows in binary_matrix()) {
        let responses = ResponseMatrix::from_rows(&rows).unwrap();
        let fit = estimate(&responses, &EstimatorConfig::new(100, 0.01)).unwrap();
        prop_assert_eq!(fit.abilities.len(), rows.len());
        prop_assert_eq!(fit.difficulties.len(), rows[0].len());
        prop_assert!(fit.abilities.iter().chain(fit.difficulties.iter()).all(|x| x.is_finite()));
    }

    #[test]
    fn abilities_follow_raw_scores(rows in binary_matrix()) {
        let responses = ResponseMatrix::from_rows(&rows).unwrap();
        let fit = estimate(&responses, &EstimatorConfig::new(200, 0.01)).unwrap();
        let scores = responses.person_scores();
        for a in 0..rows.len() {
            for c in 0..rows.len() {
                if scores[a] > scores[c] {
                    prop_assert!(fit.abilities[a] > fit.abilities[c]);
                }
            }
        }
    }

    #[test]
    fn difficulties_follow_item_scores(rows in binary_matrix()) {
        let responses = ResponseMatrix::from_rows(&rows).unwrap();
        let fit = estimate(&responses, &EstimatorConfig::new(200, 0.01)).unwrap();
        let scores = responses.item_scores();
        for a in 0..rows[0].len() {
            for c in 0..rows[0].len() {
                if scores[a] > scores[c] {
                    prop_assert!(fit.difficulties[a] < fit.difficulties[c]);
                }
            }
        }
    }

    #[test]
    fn serial_and_parallel_agree(rows in binary_matrix()) {
        let responses = ResponseMatrix::from_rows(&rows).unwrap();
        let config = EstimatorConfig::new(50, 0.02);
        let serial = estimate(&responses, &config).unwrap();
        let parallel = estimate(&responses, &config.with_parallel(true)).unwrap();
        prop_assert_eq!(serial, parallel);
    }

    // ==================== Recommender Properties ====================

    #[test]
    fn recommendation_is_first_closest(
        theta in -5.0f64..5.0,
        difficulties in prop::collection::vec(-5.0f64..5.0, 1..20)
    ) {
        let k = recommend_item(theta, &difficulties).unwrap();
        let best = (theta - difficulties[k]).abs();
        for (j, &b) in difficulties.iter().enumerate() {
            let d = (theta - b).abs();
            if j < k {
                prop_assert!(d > best);
            } else {
                prop_assert!(d >= best);
            }
        }
    }

    #[test]
    fn recommendation_exact_match(
        difficulties in prop::collection::vec(-5.0f64..5.0, 1..20),
        pick in any::<prop::sample::Index>()
    ) {
        let k = pick.index(difficulties.len());
        let chosen = recommend_item(difficulties[k], &difficulties).unwrap();
        // An earlier duplicate of the same value wins the tie.
        prop_assert_eq!(difficulties[chosen], difficulties[k]);
        prop_assert!(chosen <= k);
    }
}
