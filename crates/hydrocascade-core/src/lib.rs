//! hydrocascade: per-time-step transition of a lumped reservoir-cascade
//! rainfall-runoff model.
//!
//! The crate owns the water-balance arithmetic of a single step and the
//! data it operates on. Reading forcing, calibration and the time loop are
//! left to the caller.
pub mod config;
pub mod error;
pub mod forcing;
pub mod sma;
pub mod traits;

pub use config::{DelayRounding, NegativeForcing, StepConfig};
pub use error::{ConfigError, DomainError, ModelError};
