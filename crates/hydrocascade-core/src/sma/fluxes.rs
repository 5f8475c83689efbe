//! SMA cascade flux outputs.
//!
//! `Fluxes` holds every intermediate value of one step. Two fixed-shape
//! views are cut from it on request: `Diagnostics` (the eleven store levels
//! and fluxes after all updates) and `FlowComponents` (the fifteen-slot
//! breakdown of routed flow).
use hydrocascade_macros::FluxRecord;

/// Single-timestep fluxes, returned by `step()`.
#[derive(Debug, Clone, Copy, PartialEq, FluxRecord)]
pub struct Fluxes {
    pub precip: f64,
    pub pet: f64,
    pub interception_store: f64,
    pub soil_store: f64,
    pub ground_store: f64,
    pub ground_routing_store: f64,
    pub direct_routing_store: f64,
    pub interception_et: f64,
    pub soil_et: f64,
    pub unmet_demand: f64,
    pub interception_overflow: f64,
    pub infiltration: f64,
    pub interflow: f64,
    pub soil_overflow: f64,
    pub ground_routing_overflow: f64,
    pub deep_loss: f64,
    pub ground_reclaim: f64,
    pub ground_discharge: f64,
    pub deep_percolation_loss: f64,
    pub direct_discharge: f64,
    pub routed_flow: f64,
    pub streamflow: f64,
}

impl Fluxes {
    /// Evaporation actually taken from interception and soil (Es + Et).
    pub fn actual_et(&self) -> f64 {
        self.interception_et + self.soil_et
    }

    /// Water leaving the system other than as routed flow.
    pub fn total_loss(&self) -> f64 {
        self.actual_et() + self.deep_loss + self.deep_percolation_loss
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            interception_store: self.interception_store,
            soil_store: self.soil_store,
            ground_store: self.ground_store,
            ground_routing_store: self.ground_routing_store,
            direct_routing_store: self.direct_routing_store,
            interception_overflow: self.interception_overflow,
            infiltration: self.infiltration,
            soil_overflow: self.soil_overflow,
            interflow: self.interflow,
            ground_discharge: self.ground_discharge,
            direct_discharge: self.direct_discharge,
        }
    }

    pub fn flow_components(&self) -> FlowComponents {
        FlowComponents::from_routed(self.interflow, self.direct_discharge, self.ground_discharge)
    }
}

/// Store levels and fluxes after all updates of a step.
#[derive(Debug, Clone, Copy, PartialEq, FluxRecord)]
pub struct Diagnostics {
    #[flux(name = "S")]
    pub interception_store: f64,
    #[flux(name = "T")]
    pub soil_store: f64,
    #[flux(name = "R")]
    pub ground_store: f64,
    #[flux(name = "L")]
    pub ground_routing_store: f64,
    #[flux(name = "M")]
    pub direct_routing_store: f64,
    #[flux(name = "Is")]
    pub interception_overflow: f64,
    #[flux(name = "It")]
    pub infiltration: f64,
    #[flux(name = "Qt0")]
    pub soil_overflow: f64,
    #[flux(name = "Qt1")]
    pub interflow: f64,
    #[flux(name = "Qr")]
    pub ground_discharge: f64,
    #[flux(name = "Qm")]
    pub direct_discharge: f64,
}

/// Routed flow broken down by pathway, before the delay line.
///
/// The layout is shared with the wider multi-path family of this model.
/// Only three pathways exist here, so `qs2`, `qrs2`, every `qss*` and
/// every `qrss*` slot is always zero. They are kept so downstream readers
/// see a fixed fifteen-slot vector.
#[derive(Debug, Clone, Copy, PartialEq, FluxRecord)]
pub struct FlowComponents {
    /// Quick interflow, Qt1.
    pub qs1: f64,
    pub qs2: f64,
    pub qs: f64,
    /// Direct-routing discharge, Qm.
    pub qrs1: f64,
    pub qrs2: f64,
    pub qrs: f64,
    pub qss1: f64,
    pub qss2: f64,
    pub qss3: f64,
    pub qss: f64,
    pub qrss1: f64,
    pub qrss2: f64,
    pub qrss3: f64,
    pub qrss: f64,
    /// Ground discharge, Qr after the deep-percolation divisor.
    pub qg: f64,
}

impl FlowComponents {
    pub fn from_routed(interflow: f64, direct_discharge: f64, ground_discharge: f64) -> Self {
        let qs2 = 0.0;
        let qrs2 = 0.0;
        let (qss1, qss2, qss3) = (0.0, 0.0, 0.0);
        let (qrss1, qrss2, qrss3) = (0.0, 0.0, 0.0);
        Self {
            qs1: interflow,
            qs2,
            qs: interflow + qs2,
            qrs1: direct_discharge,
            qrs2,
            qrs: direct_discharge + qrs2,
            qss1,
            qss2,
            qss3,
            qss: qss1 + qss2 + qss3,
            qrss1,
            qrss2,
            qrss3,
            qrss: qrss1 + qrss2 + qrss3,
            qg: ground_discharge,
        }
    }

    /// Sum of the pathway totals; equals the flow entering the delay line.
    pub fn total(&self) -> f64 {
        self.qs + self.qrs + self.qss + self.qrss + self.qg
    }
}
