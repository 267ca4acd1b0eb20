//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use corriente::prelude::*;
//! ```

pub use crate::baseline::MajorityClass;
pub use crate::ensemble::{
    CandidateEnsemble, EnsembleConfig, HyperParamSpace, ModelSlot, ParamRange, PerformanceRecord,
    SeedMode,
};
pub use crate::error::{CorrienteError, Result};
pub use crate::traits::{HyperParamKey, OnlineModel, TargetKind};
