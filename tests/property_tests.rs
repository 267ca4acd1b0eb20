//! Property-based tests using proptest.
//!
//! Invariants of the ensemble engine over arbitrary streams and
//! configurations: pool size is constant, accuracies stay within [0, 1],
//! and the replacement window fires on schedule.

use corriente::error::Result;
use corriente::prelude::*;
use proptest::prelude::*;

/// Constant one-class voter that never abstains.
struct OneClass;

impl OnlineModel for OneClass {
    fn reset(&mut self) {}

    fn train(&mut self, _x: &[f64], _y: usize) -> Result<()> {
        Ok(())
    }

    fn votes(&self, _x: &[f64]) -> Result<Vec<f64>> {
        Ok(vec![1.0])
    }

    fn fresh_clone(&self) -> Box<dyn OnlineModel> {
        Box::new(OneClass)
    }

    fn set_hyperparam(&mut self, _key: HyperParamKey, _value: f64) {}
}

fn engine(n: usize, w: u64, template: Box<dyn OnlineModel>) -> CandidateEnsemble {
    let config = EnsembleConfig::default()
        .with_ensemble_size(n)
        .with_window_length(w)
        .with_seed(5);
    CandidateEnsemble::new(template, config).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn pool_size_holds_after_every_instance(
        n in 1usize..6,
        w in 1u64..10,
        labels in prop::collection::vec(0usize..4, 1..120),
    ) {
        let mut eng = engine(n, w, Box::new(MajorityClass::new()));
        for (i, &y) in labels.iter().enumerate() {
            eng.train_on(&[i as f64], y).unwrap();
            prop_assert_eq!(eng.ensemble_size(), n);
        }
    }

    #[test]
    fn accuracies_stay_in_unit_interval(
        n in 1usize..6,
        w in 1u64..10,
        labels in prop::collection::vec(0usize..4, 1..120),
    ) {
        let mut eng = engine(n, w, Box::new(MajorityClass::new()));
        for (i, &y) in labels.iter().enumerate() {
            eng.train_on(&[i as f64], y).unwrap();
            for acc in eng.slot_accuracies() {
                prop_assert!((0.0..=1.0).contains(&acc));
            }
            prop_assert!((0.0..=1.0).contains(&eng.candidate().accuracy()));
        }
    }

    #[test]
    fn candidate_tested_tracks_window_position(
        n in 1usize..6,
        w in 1u64..10,
        labels in prop::collection::vec(0usize..3, 1..120),
    ) {
        // With a never-abstaining learner, the candidate is scored on every
        // instance since the last window boundary and nothing else.
        let mut eng = engine(n, w, Box::new(OneClass));
        for (i, &y) in labels.iter().enumerate() {
            eng.train_on(&[i as f64], y).unwrap();
            prop_assert_eq!(eng.candidate().tested(), eng.instances_processed() % w);
        }
    }

    #[test]
    fn prediction_mass_bounded_by_pool_weight(
        n in 1usize..6,
        labels in prop::collection::vec(0usize..4, 1..80),
    ) {
        // Each slot contributes at most its accuracy (votes are normalized
        // to sum 1 before weighting), so total predicted mass is bounded by
        // the sum of slot accuracies.
        let mut eng = engine(n, 7, Box::new(MajorityClass::new()));
        for (i, &y) in labels.iter().enumerate() {
            eng.train_on(&[i as f64], y).unwrap();
        }
        let mass: f64 = eng.predict(&[0.0]).unwrap().iter().sum();
        let weight: f64 = eng.slot_accuracies().iter().sum();
        prop_assert!(mass <= weight + 1e-9);
    }

    #[test]
    fn prediction_width_covers_observed_classes(
        labels in prop::collection::vec(0usize..5, 1..80),
    ) {
        let mut eng = engine(3, 11, Box::new(MajorityClass::new()));
        let mut max_class = 0;
        for (i, &y) in labels.iter().enumerate() {
            eng.train_on(&[i as f64], y).unwrap();
            max_class = max_class.max(y);
            let scores = eng.predict(&[i as f64]).unwrap();
            prop_assert!(scores.len() >= max_class + 1);
        }
    }
}
