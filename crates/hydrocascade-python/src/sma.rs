use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{checked_slice, contiguous_slice, model_err};

use hydrocascade_core::sma::constants::{N_PARAMS, PARAM_NAMES};
use hydrocascade_core::sma::fluxes::{Diagnostics, FlowComponents, Fluxes};
use hydrocascade_core::sma::params::Parameters;
use hydrocascade_core::sma::run::{self, Context};
use hydrocascade_core::sma::state::State;
use hydrocascade_core::traits::{ModelParams, ModelState};
use hydrocascade_core::{DelayRounding, NegativeForcing, StepConfig};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_step_result! {
    /// SMA single-timestep flux results.
    pub struct SmaStepFluxes from Fluxes {
        precip, pet, interception_store, soil_store, ground_store,
        ground_routing_store, direct_routing_store, interception_et, soil_et,
        unmet_demand, interception_overflow, infiltration, interflow,
        soil_overflow, ground_routing_overflow, deep_loss, ground_reclaim,
        ground_discharge, deep_percolation_loss, direct_discharge,
        routed_flow, streamflow,
    }
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

fn parse_config(delay_rounding: &str, negative_forcing: &str) -> PyResult<StepConfig> {
    let rounding = match delay_rounding {
        "ceil" => DelayRounding::Ceil,
        "round" => DelayRounding::Round,
        "truncate" => DelayRounding::Truncate,
        other => {
            return Err(pyo3::exceptions::PyValueError::new_err(format!(
                "delay_rounding must be 'ceil', 'round' or 'truncate', got '{other}'"
            )))
        }
    };
    let forcing = match negative_forcing {
        "clamp" => NegativeForcing::Clamp,
        "propagate" => NegativeForcing::Propagate,
        other => {
            return Err(pyo3::exceptions::PyValueError::new_err(format!(
                "negative_forcing must be 'clamp' or 'propagate', got '{other}'"
            )))
        }
    };
    Ok(StepConfig::default()
        .with_delay_rounding(rounding)
        .with_negative_forcing(forcing))
}

fn parse_params(params: &PyReadonlyArray1<'_, f64>) -> PyResult<Parameters> {
    let p_slice = checked_slice(params, N_PARAMS, "params")?;
    <Parameters as ModelParams>::from_array(p_slice).map_err(model_err)
}

fn prepare(params: &Parameters, config: &StepConfig) -> PyResult<Context> {
    run::prepare(params, config).map_err(model_err)
}

fn step_inner(
    state: &PyReadonlyArray1<'_, f64>,
    params: &PyReadonlyArray1<'_, f64>,
    precip: f64,
    pet: f64,
    config: &StepConfig,
) -> PyResult<(State, Fluxes)> {
    let p = parse_params(params)?;
    let ctx = prepare(&p, config)?;
    let s = State::from_slice(contiguous_slice(state)?).map_err(model_err)?;
    run::step(&s, &p, precip, pet, &ctx).map_err(model_err)
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

#[pyfunction]
fn sma_param_names() -> Vec<&'static str> {
    PARAM_NAMES.to_vec()
}

#[pyfunction]
fn sma_flow_component_names() -> Vec<&'static str> {
    FlowComponents::field_names().to_vec()
}

#[pyfunction]
#[pyo3(signature = (params, delay_rounding="ceil"))]
fn sma_buffer_len(params: PyReadonlyArray1<'_, f64>, delay_rounding: &str) -> PyResult<usize> {
    let config = parse_config(delay_rounding, "clamp")?;
    let p = parse_params(&params)?;
    Ok(prepare(&p, &config)?.buffer_len())
}

#[pyfunction]
#[pyo3(signature = (params, delay_rounding="ceil"))]
fn sma_initial_state<'py>(
    py: Python<'py>,
    params: PyReadonlyArray1<'py, f64>,
    delay_rounding: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let config = parse_config(delay_rounding, "clamp")?;
    let p = parse_params(&params)?;
    let ctx = prepare(&p, &config)?;
    Ok(PyArray1::from_vec(py, State::initialize(&ctx).to_vec()))
}

#[pyfunction]
#[pyo3(signature = (state, params, precip, pet, delay_rounding="ceil", negative_forcing="clamp"))]
fn sma_step<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    params: PyReadonlyArray1<'py, f64>,
    precip: f64,
    pet: f64,
    delay_rounding: &str,
    negative_forcing: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyDict>)> {
    let config = parse_config(delay_rounding, negative_forcing)?;
    let (new_state, fluxes) = step_inner(&state, &params, precip, pet, &config)?;

    let state_arr = PyArray1::from_vec(py, new_state.to_vec());
    let dict = record_to_dict!(py, fluxes, Fluxes);
    Ok((state_arr, dict))
}

#[pyfunction]
#[pyo3(signature = (state, params, precip, pet, delay_rounding="ceil", negative_forcing="clamp"))]
fn sma_step_typed<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    params: PyReadonlyArray1<'py, f64>,
    precip: f64,
    pet: f64,
    delay_rounding: &str,
    negative_forcing: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, SmaStepFluxes)> {
    let config = parse_config(delay_rounding, negative_forcing)?;
    let (new_state, fluxes) = step_inner(&state, &params, precip, pet, &config)?;

    let state_arr = PyArray1::from_vec(py, new_state.to_vec());
    Ok((state_arr, SmaStepFluxes::from_fluxes(&fluxes)))
}

/// One step returning (state, qsim, diagnostics dict, flow-component array).
#[pyfunction]
#[pyo3(signature = (state, params, precip, pet, delay_rounding="ceil", negative_forcing="clamp"))]
#[allow(clippy::type_complexity)]
fn sma_step_diagnostics<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    params: PyReadonlyArray1<'py, f64>,
    precip: f64,
    pet: f64,
    delay_rounding: &str,
    negative_forcing: &str,
) -> PyResult<(
    Bound<'py, PyArray1<f64>>,
    f64,
    Bound<'py, PyDict>,
    Bound<'py, PyArray1<f64>>,
)> {
    let config = parse_config(delay_rounding, negative_forcing)?;
    let (new_state, fluxes) = step_inner(&state, &params, precip, pet, &config)?;

    let state_arr = PyArray1::from_vec(py, new_state.to_vec());
    let diagnostics = record_to_dict!(py, fluxes.diagnostics(), Diagnostics);
    let components = PyArray1::from_vec(py, fluxes.flow_components().to_array().to_vec());
    Ok((state_arr, fluxes.streamflow, diagnostics, components))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "sma")?;
    m.add_function(wrap_pyfunction!(sma_param_names, &m)?)?;
    m.add_function(wrap_pyfunction!(sma_flow_component_names, &m)?)?;
    m.add_function(wrap_pyfunction!(sma_buffer_len, &m)?)?;
    m.add_function(wrap_pyfunction!(sma_initial_state, &m)?)?;
    m.add_function(wrap_pyfunction!(sma_step, &m)?)?;
    m.add_function(wrap_pyfunction!(sma_step_typed, &m)?)?;
    m.add_function(wrap_pyfunction!(sma_step_diagnostics, &m)?)?;
    m.add_class::<SmaStepFluxes>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
