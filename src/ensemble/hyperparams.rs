//! Randomized hyperparameter sampling for candidate models.
//!
//! Random search over discrete grids is a strong default for
//! hyperparameter exploration [Bergstra & Bengio 2012]. Each candidate
//! model drawn by the engine carries one configuration sampled from a
//! [`HyperParamSpace`]; the stream itself then decides which
//! configurations survive.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CorrienteError, Result};
use crate::traits::{HyperParamKey, OnlineModel};

/// Discrete sampling range `{min, min + step, ..., max}` for one
/// hyperparameter.
///
/// Validated once at construction; sampling never fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    min: f64,
    max: f64,
    step: f64,
}

impl ParamRange {
    /// Create a range, validating `step > 0` and `max >= min`.
    ///
    /// # Errors
    ///
    /// Returns [`CorrienteError::InvalidRange`] on a degenerate range.
    pub fn new(param: &str, min: f64, max: f64, step: f64) -> Result<Self> {
        if step <= 0.0 || max < min || !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(CorrienteError::InvalidRange {
                param: param.to_string(),
                min,
                max,
                step,
            });
        }
        Ok(Self { min, max, step })
    }

    /// Range minimum.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Range maximum.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Range step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of values in the grid.
    ///
    /// The step count gets a tiny epsilon before flooring so that grids
    /// whose exact count is integral (e.g. 1.0 / 0.05) are not truncated
    /// by floating-point noise.
    #[must_use]
    pub fn choices(&self) -> u64 {
        ((self.max - self.min) / self.step + 1e-9).floor() as u64 + 1
    }

    /// Draw one grid value: `min + step * uniform_int(0..choices)`.
    #[must_use]
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        self.min + self.step * rng.gen_range(0..self.choices()) as f64
    }
}

/// The set of `(key, range)` pairs a candidate model is perturbed over.
///
/// The default space targets an incremental Hoeffding tree: grace period
/// 10..=200 step 10, split confidence 0..=1 step 0.05, tie threshold
/// 0..=1 step 0.05.
///
/// # Examples
///
/// ```
/// use corriente::prelude::*;
///
/// let space = HyperParamSpace::default();
/// assert_eq!(space.len(), 3);
///
/// // A custom space: only explore the grace period.
/// let space = HyperParamSpace::new()
///     .with_param(
///         HyperParamKey::GracePeriod,
///         ParamRange::new("grace_period", 25.0, 100.0, 25.0).unwrap(),
///     );
/// assert_eq!(space.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperParamSpace {
    params: Vec<(HyperParamKey, ParamRange)>,
}

impl Default for HyperParamSpace {
    fn default() -> Self {
        Self {
            params: vec![
                (
                    HyperParamKey::GracePeriod,
                    ParamRange {
                        min: 10.0,
                        max: 200.0,
                        step: 10.0,
                    },
                ),
                (
                    HyperParamKey::SplitConfidence,
                    ParamRange {
                        min: 0.0,
                        max: 1.0,
                        step: 0.05,
                    },
                ),
                (
                    HyperParamKey::TieThreshold,
                    ParamRange {
                        min: 0.0,
                        max: 1.0,
                        step: 0.05,
                    },
                ),
            ],
        }
    }
}

impl HyperParamSpace {
    /// Create an empty space (sampled models keep the template's values).
    #[must_use]
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add or replace the range for a key.
    #[must_use]
    pub fn with_param(mut self, key: HyperParamKey, range: ParamRange) -> Self {
        if let Some(entry) = self.params.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = range;
        } else {
            self.params.push((key, range));
        }
        self
    }

    /// Number of tunable keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when no keys are tunable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Configured `(key, range)` pairs, in sampling order.
    #[must_use]
    pub fn params(&self) -> &[(HyperParamKey, ParamRange)] {
        &self.params
    }

    /// Clone the template and apply one fresh draw per configured key.
    ///
    /// Deterministic given the RNG state: the same seed and call sequence
    /// produce the same configurations. Advancing the RNG is the only
    /// observable side effect.
    #[must_use]
    pub fn sample_model(
        &self,
        template: &dyn OnlineModel,
        rng: &mut impl Rng,
    ) -> Box<dyn OnlineModel> {
        let mut model = template.fresh_clone();
        for (key, range) in &self.params {
            model.set_hyperparam(*key, range.sample(rng));
        }
        model
    }
}
