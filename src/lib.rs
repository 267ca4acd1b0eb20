//! Corriente: online ensemble learning for data streams in pure Rust.
//!
//! Corriente maintains a fixed-size pool of incrementally trained
//! classifiers and continuously races a held-out "candidate" model with
//! freshly sampled hyperparameters against the pool's weakest member. When
//! the candidate wins, it takes the seat; either way a new candidate is
//! sampled and the race continues. The stream never pauses, the best
//! configurations are never discarded, and hyperparameter exploration is
//! free of any offline tuning phase.
//!
//! Evaluation is prequential: every model is scored on each instance with
//! the vote it produced *before* training on it, so running accuracies are
//! unbiased [Gama et al. 2013].
//!
//! # Quick Start
//!
//! ```
//! use corriente::prelude::*;
//!
//! let config = EnsembleConfig::default()
//!     .with_ensemble_size(5)
//!     .with_window_length(100)
//!     .with_seed(7);
//! let mut engine = CandidateEnsemble::new(Box::new(MajorityClass::new()), config).unwrap();
//!
//! // Feed the stream one labeled instance at a time.
//! for i in 0..500u32 {
//!     let x = [f64::from(i % 2)];
//!     engine.train_on(&x, (i % 2) as usize).unwrap();
//! }
//!
//! // Accuracy-weighted combined scores over the pool.
//! let scores = engine.predict(&[1.0]).unwrap();
//! assert_eq!(scores.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`ensemble`]: the candidate-replacement engine, hyperparameter
//!   sampling, and per-model performance records
//! - [`traits`]: the [`traits::OnlineModel`] contract pluggable learners implement
//! - [`baseline`]: minimal reference learners
//! - [`vote`]: vote-vector helpers
//! - [`error`]: error types
//!
//! # References
//!
//! - [Gama et al. 2013] "On evaluating stream learning algorithms"
//! - [Wang et al. 2003] "Mining concept-drifting data streams using
//!   ensemble classifiers"
//! - [Bergstra & Bengio 2012] "Random Search for Hyper-Parameter
//!   Optimization"
//! - [Domingos & Hulten 2000] "Mining High-Speed Data Streams"

pub mod baseline;
pub mod ensemble;
pub mod error;
pub mod prelude;
pub mod traits;
pub mod vote;

pub use baseline::MajorityClass;
pub use ensemble::{CandidateEnsemble, EnsembleConfig, SeedMode};
pub use error::{CorrienteError, Result};
pub use traits::{HyperParamKey, OnlineModel, TargetKind};
