//! SMA cascade constants and model contract.
//!
//! Centralises the fixed values shared by params, state and the Python layer.

// -- Model contract constants --

/// Parameter names in flat-array order: the nine model parameters, then
/// the two overflow thresholds and the delay scale.
pub const PARAM_NAMES: &[&str] = &[
    "routing_capacity",
    "ground_capacity",
    "ground_emptying",
    "percolation",
    "infiltration",
    "hypodermic_emptying",
    "partition",
    "deep_percolation",
    "delay",
    "xf1",
    "xf2",
    "delay_scale",
];

/// Number of parameters in the flat-array representation.
pub const N_PARAMS: usize = 12;

/// Number of scalar stores (S, T, R, L, M) leading the flat state array.
/// The delay buffer follows them.
pub const N_STORES: usize = 5;

// -- Delay buffer --

/// Delay-buffer slots kept inline before spilling to the heap.
pub const DELAY_INLINE_SLOTS: usize = 8;
