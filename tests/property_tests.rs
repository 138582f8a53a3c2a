//! Property-based tests for closures and combinators.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use purity::closures::{call_twice, constant, counter_from, getter, is_referentially_stable};
use purity::combinators::{identity, k, one, reciprocal, FixedPointExperiment, Value};

prop_compose! {
    fn finite_number()(n in -1.0e9..1.0e9f64) -> f64 {
        n
    }
}

proptest! {
    #[test]
    fn counter_calls_differ(seed in any::<i64>()) {
        let (first, second) = call_twice(counter_from(seed));
        prop_assert_ne!(first, second);
    }

    #[test]
    fn counter_strictly_increases(seed in -1_000_000i64..1_000_000, calls in 2usize..50) {
        let mut next = counter_from(seed);
        let mut previous = next();
        for _ in 1..calls {
            let current = next();
            prop_assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn getbad_calls_differ(seed in any::<i64>()) {
        let mut record = getter(seed);
        let first = record.getbad();
        let second = record.getbad();
        prop_assert_ne!(first, second);
    }

    #[test]
    fn constant_is_stable(x in any::<i64>(), calls in 0usize..100) {
        let p = constant(x);
        prop_assert!(is_referentially_stable(&p, calls));
        prop_assert_eq!(p(), x);
    }

    #[test]
    fn identity_returns_any_number(n in finite_number()) {
        let i = identity().unwrap();
        prop_assert_eq!(i.apply(n).unwrap(), Value::Number(n));
    }

    #[test]
    fn k_discards_second_argument(x in finite_number(), y in finite_number()) {
        let result = k().apply(x).unwrap().apply(y).unwrap();
        prop_assert_eq!(result, Value::Number(x));
    }

    #[test]
    fn reciprocal_is_an_involution_away_from_zero(n in 1.0..1.0e6f64) {
        let twice = reciprocal().apply(reciprocal().apply(n).unwrap()).unwrap();
        let back = twice.as_number().unwrap();
        prop_assert!((back - n).abs() <= n * 1e-12);
    }

    #[test]
    fn one_never_settles(a in finite_number(), b in finite_number()) {
        prop_assume!(a != b);
        let one = one().unwrap();
        prop_assert_ne!(one.apply(a), one.apply(b));
    }

    #[test]
    fn experiment_diverges_iff_probes_differ(a in finite_number(), b in finite_number()) {
        let outcome = FixedPointExperiment::new(a, b).run().unwrap();
        prop_assert_eq!(outcome.diverges(), a != b);
    }
}
