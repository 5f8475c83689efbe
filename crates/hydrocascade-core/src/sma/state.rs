/// SMA cascade state variables.
///
/// Owned by the caller and threaded through every step:
/// - `interception_store`: S, interception store [mm]
/// - `soil_store`: T, soil store [mm]
/// - `ground_store`: R, ground reservoir [mm]
/// - `ground_routing_store`: L, ground-routing store, may go negative [mm]
/// - `direct_routing_store`: M, direct-routing store [mm]
/// - `delay_line`: HY, discharge in transit, fixed length for the run
use super::constants::N_STORES;
use super::delay::DelayLine;
use super::run::Context;
use crate::error::{ConfigError, ModelError};
use crate::traits::ModelState;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub interception_store: f64,
    pub soil_store: f64,
    pub ground_store: f64,
    pub ground_routing_store: f64,
    pub direct_routing_store: f64,
    pub delay_line: DelayLine,
}

impl State {
    /// Cold start: every store and delay slot at zero.
    pub fn initialize(context: &Context) -> Self {
        Self::zeros(context.buffer_len())
    }

    /// All-zero state with `buffer_len` delay slots.
    pub fn zeros(buffer_len: usize) -> Self {
        Self {
            interception_store: 0.0,
            soil_store: 0.0,
            ground_store: 0.0,
            ground_routing_store: 0.0,
            direct_routing_store: 0.0,
            delay_line: DelayLine::zeros(buffer_len),
        }
    }

    /// Water held by the five stores plus the delay line's in-transit slots [mm].
    pub fn total_storage(&self) -> f64 {
        self.interception_store
            + self.soil_store
            + self.ground_store
            + self.ground_routing_store
            + self.direct_routing_store
            + self.delay_line.in_transit()
    }
}

impl ModelState for State {
    /// Layout: [S, T, R, L, M, HY...]
    fn to_vec(&self) -> Vec<f64> {
        let mut arr = Vec::with_capacity(self.array_len());
        arr.extend_from_slice(&[
            self.interception_store,
            self.soil_store,
            self.ground_store,
            self.ground_routing_store,
            self.direct_routing_store,
        ]);
        arr.extend_from_slice(self.delay_line.as_slice());
        arr
    }

    fn from_slice(arr: &[f64]) -> Result<Self, ModelError> {
        if arr.len() <= N_STORES {
            return Err(ConfigError::ArrayLength {
                what: "state",
                expected: N_STORES + 1,
                actual: arr.len(),
            }
            .into());
        }
        Ok(Self {
            interception_store: arr[0],
            soil_store: arr[1],
            ground_store: arr[2],
            ground_routing_store: arr[3],
            direct_routing_store: arr[4],
            delay_line: DelayLine::from_slots(&arr[N_STORES..]),
        })
    }

    fn array_len(&self) -> usize {
        N_STORES + self.delay_line.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ModelState;

    #[test]
    fn zeros_is_cold_start() {
        let s = State::zeros(3);
        assert_eq!(s.interception_store, 0.0);
        assert_eq!(s.ground_routing_store, 0.0);
        assert_eq!(s.delay_line.len(), 3);
        assert_eq!(s.total_storage(), 0.0);
    }

    #[test]
    fn total_storage_skips_emitted_slot() {
        let mut s = State::zeros(2);
        s.soil_store = 1.5;
        s.ground_store = 2.0;
        s.delay_line = DelayLine::from_slots(&[0.4, 0.6]);
        assert!((s.total_storage() - 4.1).abs() < 1e-12);
    }

    #[test]
    fn model_state_roundtrip() {
        let mut s = State::zeros(2);
        s.interception_store = 1.0;
        s.direct_routing_store = 4.0;
        s.delay_line = DelayLine::from_slots(&[0.25, 0.75]);
        let v = s.to_vec();
        assert_eq!(v, vec![1.0, 0.0, 0.0, 0.0, 4.0, 0.25, 0.75]);
        assert_eq!(State::from_slice(&v).unwrap(), s);
    }

    #[test]
    fn from_slice_needs_a_delay_slot() {
        assert!(State::from_slice(&[0.0; 5]).is_err());
        assert!(State::from_slice(&[0.0; 3]).is_err());
        assert_eq!(State::from_slice(&[0.0; 6]).unwrap().delay_line.len(), 1);
    }
}
