use crate::config::StepConfig;
use crate::error::ModelError;

/// Core trait for lumped single-step models.
///
/// Prepare a run context once, build an initial state, then step. The time
/// loop belongs to the caller, which threads the returned state forward.
pub trait HydrologicalModel {
    type Params;
    type State: Clone;
    type Forcing: Copy;
    type Fluxes;
    /// Run-constant data derived from params and config.
    type Context;

    /// Validate parameters and fix run-constant data (e.g. buffer lengths).
    fn prepare(params: &Self::Params, config: &StepConfig) -> Result<Self::Context, ModelError>;

    /// Cold-start state shaped for the prepared run.
    fn initialize_state(context: &Self::Context) -> Self::State;

    /// Execute one timestep. The input state is left untouched; on success
    /// the new state and the step's fluxes are returned.
    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
        context: &Self::Context,
    ) -> Result<(Self::State, Self::Fluxes), ModelError>;
}

/// Flat-array view of a parameter set.
pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];

    fn from_array(arr: &[f64]) -> Result<Self, ModelError>;
    fn to_array(&self) -> Vec<f64>;
}

/// Flat-array view of a model state.
pub trait ModelState: Sized {
    fn to_vec(&self) -> Vec<f64>;
    fn from_slice(arr: &[f64]) -> Result<Self, ModelError>;
    fn array_len(&self) -> usize;
}
