//! Baseline learners.
//!
//! [`MajorityClass`] is the classic no-information baseline: it ignores the
//! attributes and votes the class frequencies it has observed. It exists so
//! the ensemble engine can be exercised end to end without a heavyweight
//! base learner; production deployments plug in an incremental tree or any
//! other [`OnlineModel`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::{HyperParamKey, OnlineModel};

/// Majority-class baseline classifier.
///
/// Votes the raw class counts seen so far and abstains until it has been
/// trained at least once. It has no tunable hyperparameters, so sampled
/// keys are ignored.
///
/// # Examples
///
/// ```
/// use corriente::prelude::*;
///
/// let mut model = MajorityClass::new();
/// model.train(&[0.3], 1).unwrap();
/// model.train(&[0.7], 1).unwrap();
/// model.train(&[0.1], 0).unwrap();
///
/// let votes = model.votes(&[0.5]).unwrap();
/// assert_eq!(votes, vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MajorityClass {
    counts: Vec<u64>,
}

impl MajorityClass {
    /// Create an untrained baseline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total instances trained on.
    #[must_use]
    pub fn n_trained(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl OnlineModel for MajorityClass {
    fn reset(&mut self) {
        self.counts.clear();
    }

    fn train(&mut self, _x: &[f64], y: usize) -> Result<()> {
        if y >= self.counts.len() {
            self.counts.resize(y + 1, 0);
        }
        self.counts[y] += 1;
        Ok(())
    }

    fn votes(&self, _x: &[f64]) -> Result<Vec<f64>> {
        Ok(self.counts.iter().map(|&c| c as f64).collect())
    }

    fn fresh_clone(&self) -> Box<dyn OnlineModel> {
        Box::new(Self::default())
    }

    fn set_hyperparam(&mut self, _key: HyperParamKey, _value: f64) {}
}
