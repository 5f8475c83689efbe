//! SMA cascade process functions.
//!
//! Pure functions for each storage update of a step, in the order the step
//! applies them. All depths are mm. Every clamp here is part of the water
//! balance: moving or dropping one changes the model.

// -- Interception store (S) --

/// Add rainfall to the interception store, evaporate, then spill overflow.
///
/// Returns (s, es, er, is):
/// - s: store after overflow, at most `xf1`
/// - es: evaporation from interception
/// - er: evaporative demand left for the soil
/// - is: overflow sent to the soil store
pub fn interception(precip: f64, pet: f64, store: f64, xf1: f64) -> (f64, f64, f64, f64) {
    let s = store + precip;

    let es = pet.min(s);
    let s = s - es;
    let er = pet - es;

    let is = (s - xf1).max(0.0);
    let s = s - is;

    (s, es, er, is)
}

// -- Soil store (T) --

/// Infiltration from the soil into groundwater.
///
/// Throttled by the ground reservoir fill (`ground / ground_capacity`) and
/// by the soil fill (`soil / percolation`). Never more than the soil holds.
/// Returns (t, it).
pub fn soil_infiltration(
    soil: f64,
    ground: f64,
    infiltration: f64,
    ground_capacity: f64,
    percolation: f64,
) -> (f64, f64) {
    let rate = infiltration * (1.0 - ground / ground_capacity) * (soil / percolation);
    let it = soil.min(rate).max(0.0);
    (soil - it, it)
}

/// Quick interflow (hypodermic flow) as a linear reservoir.
///
/// Returns (t, qt1).
pub fn interflow(soil: f64, hypodermic_emptying: f64) -> (f64, f64) {
    let qt1 = soil / hypodermic_emptying;
    (soil - qt1, qt1)
}

/// Soil evaporation, limited by soil fill and by the soil content.
///
/// Returns (t, et, ez) where ez is the demand still unmet.
pub fn soil_evaporation(residual_demand: f64, soil: f64, percolation: f64) -> (f64, f64, f64) {
    let et = (residual_demand * (soil / percolation).min(1.0)).min(soil);
    (soil - et, et, residual_demand - et)
}

/// Spill the soil content above `percolation` to direct routing.
///
/// Returns (t, qt0).
pub fn soil_overflow(soil: f64, percolation: f64) -> (f64, f64) {
    let qt0 = (soil - percolation).max(0.0);
    (soil - qt0, qt0)
}

// -- Groundwater stores (L and R) --

/// Split infiltration between L and R, then spill L above `xf2` into R.
///
/// Returns (l, r, il).
pub fn groundwater_split(
    infiltrated: f64,
    ground_routing: f64,
    ground: f64,
    partition: f64,
    xf2: f64,
) -> (f64, f64, f64) {
    let l = ground_routing + partition * infiltrated;
    let r = ground + (1.0 - partition) * infiltrated;

    let il = (l - xf2).max(0.0);

    (l - il, r + il, il)
}

/// Remove the deep-loss term driven by unmet evaporative demand.
///
/// Unguarded: L may go negative here. Returns (l, el).
pub fn deep_loss(ground_routing: f64, unmet_demand: f64, xf1: f64, xf2: f64) -> (f64, f64) {
    let el = unmet_demand / (xf1 + xf2);
    (ground_routing - el, el)
}

/// Refill a negative L from R's content above `ground_capacity - xf2`.
///
/// Leaves both stores alone when L is not negative. L stays negative when
/// R has too little slack to cover the deficit. Returns (l, r, ir).
pub fn reclaim_from_ground(
    ground_routing: f64,
    ground: f64,
    ground_capacity: f64,
    xf2: f64,
) -> (f64, f64, f64) {
    if ground_routing >= 0.0 {
        return (ground_routing, ground, 0.0);
    }
    let slack = (ground - (ground_capacity - xf2)).max(0.0);
    let ir = (-ground_routing).min(slack);
    (ground_routing + ir, ground - ir, ir)
}

/// Drain the ground reservoir, then scale the discharge by `deep_percolation`.
///
/// The full `ground / ground_emptying` leaves R; only the scaled part is
/// returned as discharge. Returns (r, qr).
pub fn ground_discharge(ground: f64, ground_emptying: f64, deep_percolation: f64) -> (f64, f64) {
    let drained = ground / ground_emptying;
    (ground - drained, drained / deep_percolation)
}

// -- Direct routing store (M) --

/// Add soil overflow to the direct-routing store and release a linear share.
///
/// Returns (m, qm).
pub fn direct_routing(store: f64, inflow: f64, routing_capacity: f64) -> (f64, f64) {
    let m = store + inflow;
    let qm = m / routing_capacity;
    (m - qm, qm)
}
