//! Model slots: one trainable model paired with its running performance.
//!
//! Prequential (test-then-train) accuracy [Gama et al. 2013]: each instance
//! scores a model using the vote computed *before* that instance trains it,
//! which keeps the running estimate unbiased. Bundling the model with its
//! record in one struct means the find-minimum and replace operations act
//! on a single collection and indices cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::OnlineModel;
use crate::vote::{argmax, total};

/// Running prequential accuracy of one model.
///
/// `accuracy` is the exact incremental mean of prediction correctness over
/// every instance the model was scored on; `tested` counts those instances.
/// Abstentions (all-zero votes) change neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    accuracy: f64,
    tested: u64,
}

impl PerformanceRecord {
    /// Fresh record: accuracy 0, nothing tested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Running accuracy in `[0, 1]`.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Instances scored, excluding abstentions.
    #[must_use]
    pub fn tested(&self) -> u64 {
        self.tested
    }

    /// Fold one pre-training vote into the running mean.
    ///
    /// No-op when the model abstained (vote mass zero). Otherwise the
    /// argmax prediction (ties toward the lowest class index) is compared
    /// against `true_class` and the exact mean is updated: no decay, no
    /// windowing of past observations.
    pub fn record(&mut self, votes: &[f64], true_class: usize) {
        if total(votes) <= 0.0 {
            return;
        }
        let correct = if argmax(votes) == Some(true_class) {
            1.0
        } else {
            0.0
        };
        self.accuracy =
            (self.accuracy * self.tested as f64 + correct) / (self.tested as f64 + 1.0);
        self.tested += 1;
    }
}

/// One trainable model paired with its performance record.
///
/// The unit stored in the ensemble pool and used for the candidate; on
/// replacement the whole slot moves, so a model and its statistics always
/// travel together.
pub struct ModelSlot {
    model: Box<dyn OnlineModel>,
    record: PerformanceRecord,
}

impl ModelSlot {
    /// Wrap a model with a fresh record.
    #[must_use]
    pub fn new(model: Box<dyn OnlineModel>) -> Self {
        Self {
            model,
            record: PerformanceRecord::new(),
        }
    }

    /// Running accuracy of this slot's model.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.record.accuracy()
    }

    /// Instances this slot's model has been scored on.
    #[must_use]
    pub fn tested(&self) -> u64 {
        self.record.tested()
    }

    /// The full performance record.
    #[must_use]
    pub fn record(&self) -> PerformanceRecord {
        self.record
    }

    /// The model's vote vector for an instance.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying model.
    pub fn votes(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.model.votes(x)
    }

    /// Score this slot on an instance using its pre-training vote.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying model.
    pub fn score_on(&mut self, x: &[f64], y: usize) -> Result<()> {
        let votes = self.model.votes(x)?;
        self.record.record(&votes, y);
        Ok(())
    }

    /// Train this slot's model on an instance. Never touches the record.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying model.
    pub fn train_on(&mut self, x: &[f64], y: usize) -> Result<()> {
        self.model.train(x, y)
    }
}

impl std::fmt::Debug for ModelSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSlot")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}
