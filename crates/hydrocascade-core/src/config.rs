//! Run configuration for the step transition.
//!
//! Bundles the policies a driver picks once per simulation. Defaults are
//! what a driver gets when it has no opinion.

/// Maximum number of delay-buffer slots accepted for a run.
pub const MAX_DELAY_SLOTS: usize = 1000;

/// How the real-valued delay parameter becomes an integer buffer length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelayRounding {
    /// Smallest integer >= delay. A delay of 2.1 gives 3 slots.
    #[default]
    Ceil,
    /// Nearest integer, halves away from zero. A delay of 2.5 gives 3 slots.
    Round,
    /// Integer part. A delay of 2.9 gives 2 slots.
    Truncate,
}

impl DelayRounding {
    /// Buffer length for `delay`, or `None` if it is not a usable positive count.
    pub fn buffer_len(self, delay: f64) -> Option<usize> {
        if !delay.is_finite() {
            return None;
        }
        let n = match self {
            DelayRounding::Ceil => delay.ceil(),
            DelayRounding::Round => delay.round(),
            DelayRounding::Truncate => delay.trunc(),
        };
        if n < 1.0 || n > MAX_DELAY_SLOTS as f64 {
            return None;
        }
        Some(n as usize)
    }
}

/// What to do with negative precipitation or evapotranspiration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NegativeForcing {
    /// Negative depths are replaced with 0.
    #[default]
    Clamp,
    /// Values are used as given.
    Propagate,
}

/// Policies fixed for the life of one simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepConfig {
    pub delay_rounding: DelayRounding,
    pub negative_forcing: NegativeForcing,
}

impl StepConfig {
    pub fn with_delay_rounding(mut self, rounding: DelayRounding) -> Self {
        self.delay_rounding = rounding;
        self
    }

    pub fn with_negative_forcing(mut self, policy: NegativeForcing) -> Self {
        self.negative_forcing = policy;
        self
    }
}
