//! Core trait for pluggable incremental learners.
//!
//! The ensemble engine treats its base learners as opaque capabilities:
//! anything that can be reset, trained one instance at a time, queried for
//! a per-class vote vector, and cloned with fresh learning state can be
//! managed by [`crate::ensemble::CandidateEnsemble`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Target kind a learner declares itself capable of.
///
/// The ensemble engine handles multi-class classification only; templates
/// declaring any other kind are rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Single categorical class label per instance.
    MultiClass,
    /// Continuous numeric target.
    Regression,
    /// Multiple simultaneous labels per instance.
    MultiLabel,
}

impl TargetKind {
    /// Human-readable name, used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::MultiClass => "multi-class",
            TargetKind::Regression => "regression",
            TargetKind::MultiLabel => "multi-label",
        }
    }
}

/// Tunable hyperparameter identifiers understood by tree-like learners.
///
/// The keys mirror the knobs of an incremental Hoeffding tree
/// [Domingos & Hulten 2000]: how many instances a leaf accumulates before
/// evaluating a split, the confidence bound on split selection, and the
/// tie-breaking threshold. Learners without a given knob simply ignore the
/// key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HyperParamKey {
    /// Instances a leaf observes between split attempts.
    GracePeriod,
    /// One minus the desired split-selection confidence.
    SplitConfidence,
    /// Hoeffding-bound tie-breaking threshold.
    TieThreshold,
}

/// Incremental classification model managed by the ensemble.
///
/// Implementations must keep `votes` free of side effects: scoring an
/// instance must not change what the model would predict for it, because
/// the engine evaluates prequentially (test before train).
///
/// # Example
///
/// ```
/// use corriente::prelude::*;
///
/// let mut model = MajorityClass::new();
/// assert!(model.votes(&[0.0]).unwrap().is_empty()); // abstains untrained
/// model.train(&[0.0], 1).unwrap();
/// let votes = model.votes(&[0.0]).unwrap();
/// assert!(votes[1] > 0.0);
/// ```
pub trait OnlineModel: Send + Sync {
    /// Discard all learned state, keeping hyperparameters.
    fn reset(&mut self);

    /// Update the model with a single labeled instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the learner cannot apply the update; the engine
    /// treats this as fatal and propagates it.
    fn train(&mut self, x: &[f64], y: usize) -> Result<()>;

    /// Per-class vote vector for an instance.
    ///
    /// A vector summing to zero (including the empty vector) signals
    /// abstention: the model is excluded from scoring and voting for this
    /// instance. Votes need not be normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the learner cannot evaluate the instance.
    fn votes(&self, x: &[f64]) -> Result<Vec<f64>>;

    /// Independent clone carrying the same hyperparameters with fresh
    /// (untrained) learning state.
    fn fresh_clone(&self) -> Box<dyn OnlineModel>;

    /// Apply a sampled hyperparameter value.
    ///
    /// Learners ignore keys they do not expose.
    fn set_hyperparam(&mut self, key: HyperParamKey, value: f64);

    /// Capability declaration, checked once when an engine is built.
    fn target(&self) -> TargetKind {
        TargetKind::MultiClass
    }
}
