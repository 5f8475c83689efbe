//! SMA cascade, a lumped reservoir-cascade soil moisture accounting model.
//!
//! Five stores (interception, soil, ground, ground-routing, direct-routing)
//! and a fixed-length delay line. One call to `run::step` advances the
//! model by one interval; the caller owns the time loop and the state.
pub mod constants;
pub mod delay;
pub mod fluxes;
pub mod params;
pub mod processes;
pub mod run;
pub mod state;
