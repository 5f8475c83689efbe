//! Error types for model setup and stepping.
//!
//! A step either returns a complete new state or one of these errors;
//! the caller's state is never touched on failure.
use thiserror::Error;

use crate::config::DelayRounding;

/// A parameter value makes the water-balance arithmetic undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("parameter `{name}` is used as a divisor and must be > 0, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("overflow thresholds xf1 + xf2 must be > 0, got {xf1} + {xf2}")]
    NonPositiveThresholdSum { xf1: f64, xf2: f64 },
}

/// The shape of the simulation does not match its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("delay {delay} does not give a positive buffer length under {rounding:?} rounding")]
    InvalidDelayLength { delay: f64, rounding: DelayRounding },

    #[error("delay buffer has {actual} slots, run was prepared for {expected}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("expected {expected} {what} elements, got {actual}")]
    ArrayLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Any failure raised by the model core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
