//! The candidate-replacement ensemble engine.
//!
//! A fixed pool of incrementally trained classifiers plus one held-out
//! "candidate" model carrying a freshly sampled hyperparameter
//! configuration. Every labeled instance is scored prequentially and then
//! trained on by the whole pool and the candidate; every `window_length`
//! instances the candidate's accuracy is compared against the pool's
//! weakest member and either takes its seat or is discarded. Either way a
//! new candidate is sampled, so exploration never pauses and the pool
//! never loses its best configurations. Predictions are an
//! accuracy-weighted vote over the pool [Wang et al. 2003]; the candidate
//! never votes.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ensemble::hyperparams::HyperParamSpace;
use crate::ensemble::slot::ModelSlot;
use crate::error::{CorrienteError, Result};
use crate::traits::{OnlineModel, TargetKind};
use crate::vote::VoteAccumulator;

/// How the engine's random number generator is seeded at reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedMode {
    /// Explicit seed; identical seeds reproduce identical runs.
    Fixed(u64),
    /// Wall-clock-derived seed, fresh on every reset.
    SystemTime,
}

/// Configuration for [`CandidateEnsemble`].
///
/// # Examples
///
/// ```
/// use corriente::prelude::*;
///
/// let config = EnsembleConfig::default()
///     .with_ensemble_size(20)
///     .with_window_length(500)
///     .with_seed(42);
/// assert_eq!(config.ensemble_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Number of models in the pool (>= 1).
    pub ensemble_size: usize,
    /// Instances between replacement decisions (>= 1).
    pub window_length: u64,
    /// RNG seeding strategy.
    pub seed: SeedMode,
    /// Hyperparameter space candidates are sampled from.
    pub space: HyperParamSpace,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            ensemble_size: 10,
            window_length: 1000,
            seed: SeedMode::Fixed(1),
            space: HyperParamSpace::default(),
        }
    }
}

impl EnsembleConfig {
    /// Set the pool size.
    #[must_use]
    pub fn with_ensemble_size(mut self, n: usize) -> Self {
        self.ensemble_size = n;
        self
    }

    /// Set the replacement window length.
    #[must_use]
    pub fn with_window_length(mut self, w: u64) -> Self {
        self.window_length = w;
        self
    }

    /// Seed the RNG with a fixed value.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedMode::Fixed(seed);
        self
    }

    /// Derive the RNG seed from the wall clock at each reset.
    #[must_use]
    pub fn with_system_time_seed(mut self) -> Self {
        self.seed = SeedMode::SystemTime;
        self
    }

    /// Set the hyperparameter sampling space.
    #[must_use]
    pub fn with_space(mut self, space: HyperParamSpace) -> Self {
        self.space = space;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.ensemble_size < 1 {
            return Err(CorrienteError::invalid_config(
                "ensemble_size",
                self.ensemble_size,
                ">= 1",
            ));
        }
        if self.window_length < 1 {
            return Err(CorrienteError::invalid_config(
                "window_length",
                self.window_length,
                ">= 1",
            ));
        }
        Ok(())
    }
}

/// Online ensemble classifier with periodic candidate replacement.
///
/// Processing is strictly sequential: each labeled instance is fully
/// handled (scored, trained, counted, possibly swapped) before the next is
/// accepted, so state is always consistent at instance boundaries.
///
/// # Examples
///
/// ```
/// use corriente::prelude::*;
///
/// let config = EnsembleConfig::default()
///     .with_ensemble_size(5)
///     .with_window_length(50)
///     .with_seed(9);
/// let mut engine = CandidateEnsemble::new(Box::new(MajorityClass::new()), config).unwrap();
///
/// for i in 0..200u32 {
///     let x = [f64::from(i % 2)];
///     engine.train_on(&x, (i % 2) as usize).unwrap();
/// }
///
/// let scores = engine.predict(&[1.0]).unwrap();
/// assert_eq!(scores.len(), 2);
/// assert_eq!(engine.ensemble_size(), 5);
/// ```
pub struct CandidateEnsemble {
    template: Box<dyn OnlineModel>,
    config: EnsembleConfig,
    rng: StdRng,
    slots: Vec<ModelSlot>,
    candidate: ModelSlot,
    instances_processed: u64,
    n_classes_seen: usize,
}

impl CandidateEnsemble {
    /// Build an engine from a template model and a configuration.
    ///
    /// The template is reset and kept as the prototype every pool member
    /// and candidate is cloned and hyperparameter-perturbed from.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `ensemble_size` or `window_length`
    /// is below 1, or if the template declares a target kind other than
    /// multi-class.
    pub fn new(mut template: Box<dyn OnlineModel>, config: EnsembleConfig) -> Result<Self> {
        config.validate()?;
        if template.target() != TargetKind::MultiClass {
            return Err(CorrienteError::UnsupportedTarget {
                found: template.target().name().to_string(),
            });
        }
        template.reset();

        let mut rng = Self::seed_rng(config.seed);
        let mut slots = Vec::with_capacity(config.ensemble_size);
        for _ in 0..config.ensemble_size {
            slots.push(ModelSlot::new(
                config.space.sample_model(template.as_ref(), &mut rng),
            ));
        }
        // The candidate is sampled last, after the pool.
        let candidate = ModelSlot::new(config.space.sample_model(template.as_ref(), &mut rng));

        Ok(Self {
            template,
            config,
            rng,
            slots,
            candidate,
            instances_processed: 0,
            n_classes_seen: 0,
        })
    }

    /// Discard all learned state and start over.
    ///
    /// Re-seeds the RNG (wall-clock seeding draws a fresh seed), zeroes the
    /// instance counter, and samples a fresh pool and candidate. No slot
    /// survives a reset.
    pub fn reset(&mut self) {
        self.rng = Self::seed_rng(self.config.seed);
        self.instances_processed = 0;
        self.n_classes_seen = 0;
        self.template.reset();
        self.slots.clear();
        for _ in 0..self.config.ensemble_size {
            let slot = self.sample_slot();
            self.slots.push(slot);
        }
        self.candidate = self.sample_slot();
    }

    /// Process one labeled instance: test, then train, then check.
    ///
    /// Scores the candidate and every pool slot with their pre-training
    /// votes, trains them all on the instance, advances the instance
    /// counter, and runs the replacement decision when the counter reaches
    /// a multiple of the window length.
    ///
    /// # Errors
    ///
    /// Propagates the first failure raised by any underlying model; no
    /// retry is attempted.
    pub fn train_on(&mut self, x: &[f64], y: usize) -> Result<()> {
        self.candidate.score_on(x, y)?;
        for slot in &mut self.slots {
            slot.score_on(x, y)?;
        }

        self.candidate.train_on(x, y)?;
        for slot in &mut self.slots {
            slot.train_on(x, y)?;
        }

        self.n_classes_seen = self.n_classes_seen.max(y + 1);
        self.instances_processed += 1;
        if self.instances_processed % self.config.window_length == 0 {
            self.replacement_check();
        }
        Ok(())
    }

    /// Combined score vector for an instance. Pure: never mutates state.
    ///
    /// Each non-abstaining pool model contributes its vote, normalized to
    /// sum 1 and weighted by that model's running accuracy. The result is
    /// the raw weighted sum, zero-padded to the number of classes observed
    /// so far; if every model abstains it is all zeros. The candidate
    /// never contributes.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by an underlying model.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let mut combined = VoteAccumulator::new();
        for slot in &self.slots {
            let votes = slot.votes(x)?;
            combined.add_normalized(&votes, slot.accuracy());
        }
        combined.pad_to(self.n_classes_seen);
        Ok(combined.into_scores())
    }

    /// Current pool size; always equals the configured `ensemble_size`.
    #[must_use]
    pub fn ensemble_size(&self) -> usize {
        self.slots.len()
    }

    /// Instances processed since the last reset.
    #[must_use]
    pub fn instances_processed(&self) -> u64 {
        self.instances_processed
    }

    /// Distinct classes observed in training so far.
    #[must_use]
    pub fn n_classes_seen(&self) -> usize {
        self.n_classes_seen
    }

    /// The pool, in slot order.
    #[must_use]
    pub fn slots(&self) -> &[ModelSlot] {
        &self.slots
    }

    /// The held-out candidate slot.
    #[must_use]
    pub fn candidate(&self) -> &ModelSlot {
        &self.candidate
    }

    /// Running accuracy of every pool slot, in slot order.
    #[must_use]
    pub fn slot_accuracies(&self) -> Vec<f64> {
        self.slots.iter().map(ModelSlot::accuracy).collect()
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }

    // Window-boundary decision: the candidate takes the weakest seat only
    // if its accuracy is strictly greater; a fresh candidate is sampled
    // either way.
    fn replacement_check(&mut self) {
        let mut min_index = 0usize;
        let mut min_accuracy = f64::INFINITY;
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.accuracy() < min_accuracy {
                min_index = i;
                min_accuracy = slot.accuracy();
            }
        }

        let fresh = self.sample_slot();
        let outgoing = std::mem::replace(&mut self.candidate, fresh);
        if outgoing.accuracy() > min_accuracy {
            self.slots[min_index] = outgoing;
        }
    }

    fn sample_slot(&mut self) -> ModelSlot {
        ModelSlot::new(
            self.config
                .space
                .sample_model(self.template.as_ref(), &mut self.rng),
        )
    }

    fn seed_rng(mode: SeedMode) -> StdRng {
        match mode {
            SeedMode::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedMode::SystemTime => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0);
                StdRng::seed_from_u64(nanos)
            }
        }
    }
}

impl std::fmt::Debug for CandidateEnsemble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateEnsemble")
            .field("config", &self.config)
            .field("instances_processed", &self.instances_processed)
            .field("n_classes_seen", &self.n_classes_seen)
            .field("slots", &self.slots)
            .field("candidate", &self.candidate)
            .finish_non_exhaustive()
    }
}
