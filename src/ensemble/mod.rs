//! Online ensemble with held-out candidate replacement.
//!
//! The pool is a fixed-size collection of incrementally trained
//! classifiers; a single candidate model with freshly sampled
//! hyperparameters is evaluated alongside it and, at every window
//! boundary, either replaces the pool's weakest member or is discarded.
//! Scoring is prequential [Gama et al. 2013]; voting is accuracy-weighted
//! [Wang et al. 2003]; candidate configurations come from random search
//! over discrete grids [Bergstra & Bengio 2012].

mod candidate;
mod hyperparams;
mod slot;

pub use candidate::{CandidateEnsemble, EnsembleConfig, SeedMode};
pub use hyperparams::{HyperParamSpace, ParamRange};
pub use slot::{ModelSlot, PerformanceRecord};
