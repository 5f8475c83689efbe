/// SMA cascade orchestration.
///
/// - `prepare()`: validate params and fix the delay-buffer length for a run
/// - `step()`: advance the five stores and the delay line by one interval
///
/// The time loop itself stays with the caller.
use tracing::{debug, trace};

use super::fluxes::Fluxes;
use super::params::Parameters;
use super::processes;
use super::state::State;
use crate::config::StepConfig;
use crate::error::{ConfigError, ModelError};
use crate::forcing::Forcing;
use crate::traits::HydrologicalModel;

/// Run-constant data fixed by `prepare()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    buffer_len: usize,
    config: StepConfig,
}

impl Context {
    /// Delay-buffer length every state of this run must carry.
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }
}

/// Validate parameters and derive the run context.
pub fn prepare(params: &Parameters, config: &StepConfig) -> Result<Context, ModelError> {
    params.validate()?;
    let buffer_len = params.buffer_len(config.delay_rounding)?;
    debug!(
        delay = params.delay,
        buffer_len,
        rounding = ?config.delay_rounding,
        "prepared SMA run context"
    );
    Ok(Context {
        buffer_len,
        config: *config,
    })
}

/// Execute one timestep of the SMA cascade.
///
/// Parameters are re-checked on every call so a bad set never produces
/// NaN or infinite stores. On error the input state is untouched.
pub fn step(
    state: &State,
    params: &Parameters,
    precip: f64,
    pet: f64,
    context: &Context,
) -> Result<(State, Fluxes), ModelError> {
    params.validate()?;
    if state.delay_line.len() != context.buffer_len {
        return Err(ConfigError::BufferLengthMismatch {
            expected: context.buffer_len,
            actual: state.delay_line.len(),
        }
        .into());
    }

    let forcing = Forcing::new(precip, pet).apply(context.config.negative_forcing);

    // 1. Interception store
    let (s, interception_et, residual_demand, interception_overflow) = processes::interception(
        forcing.precip,
        forcing.pet,
        state.interception_store,
        params.xf1,
    );

    // 2. Soil store, throttled by the ground reservoir level at step start
    let t = state.soil_store + interception_overflow;
    let (t, infiltration) = processes::soil_infiltration(
        t,
        state.ground_store,
        params.infiltration,
        params.ground_capacity,
        params.percolation,
    );
    let (t, interflow) = processes::interflow(t, params.hypodermic_emptying);
    let (t, soil_et, unmet_demand) =
        processes::soil_evaporation(residual_demand, t, params.percolation);
    let (t, soil_overflow) = processes::soil_overflow(t, params.percolation);

    // 3. Groundwater: split, deep loss, reclaim, ground discharge
    let (l, r, ground_routing_overflow) = processes::groundwater_split(
        infiltration,
        state.ground_routing_store,
        state.ground_store,
        params.partition,
        params.xf2,
    );
    let (l, deep_loss) = processes::deep_loss(l, unmet_demand, params.xf1, params.xf2);
    let (l, r, ground_reclaim) =
        processes::reclaim_from_ground(l, r, params.ground_capacity, params.xf2);
    if l < 0.0 {
        debug!(
            ground_routing_store = l,
            ground_store = r,
            "ground-routing store still negative after reclaim"
        );
    }
    let r_before_discharge = r;
    let (r, ground_discharge) =
        processes::ground_discharge(r, params.ground_emptying, params.deep_percolation);
    let deep_percolation_loss = (r_before_discharge - r) - ground_discharge;

    // 4. Direct routing store
    let (m, direct_discharge) = processes::direct_routing(
        state.direct_routing_store,
        soil_overflow,
        params.routing_capacity,
    );

    // 5. Delay line
    let routed_flow = ground_discharge + direct_discharge + interflow;
    let mut delay_line = state.delay_line.clone();
    let streamflow = delay_line.advance(routed_flow, params.delay_scale);

    trace!(
        streamflow,
        interception_store = s,
        soil_store = t,
        ground_store = r,
        ground_routing_store = l,
        direct_routing_store = m,
        "SMA step"
    );

    let new_state = State {
        interception_store: s,
        soil_store: t,
        ground_store: r,
        ground_routing_store: l,
        direct_routing_store: m,
        delay_line,
    };

    let fluxes = Fluxes {
        precip: forcing.precip,
        pet: forcing.pet,
        interception_store: s,
        soil_store: t,
        ground_store: r,
        ground_routing_store: l,
        direct_routing_store: m,
        interception_et,
        soil_et,
        unmet_demand,
        interception_overflow,
        infiltration,
        interflow,
        soil_overflow,
        ground_routing_overflow,
        deep_loss,
        ground_reclaim,
        ground_discharge,
        deep_percolation_loss,
        direct_discharge,
        routed_flow,
        streamflow,
    };

    Ok((new_state, fluxes))
}

/// The SMA cascade as a `HydrologicalModel`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sma;

impl HydrologicalModel for Sma {
    type Params = Parameters;
    type State = State;
    type Forcing = Forcing;
    type Fluxes = Fluxes;
    type Context = Context;

    fn prepare(params: &Parameters, config: &StepConfig) -> Result<Context, ModelError> {
        prepare(params, config)
    }

    fn initialize_state(context: &Context) -> State {
        State::initialize(context)
    }

    fn step(
        state: &State,
        params: &Parameters,
        forcing: &Forcing,
        context: &Context,
    ) -> Result<(State, Fluxes), ModelError> {
        step(state, params, forcing.precip, forcing.pet, context)
    }
}
