/// Delay line for routed discharge.
///
/// A fixed-length shift register. Slot 0 holds the discharge emitted on
/// the most recent step; slots 1.. hold water still in transit. Each
/// advance drops slot 0, shifts the rest left, opens an empty last slot,
/// then adds the scaled inflow to every slot.
use smallvec::SmallVec;

use super::constants::DELAY_INLINE_SLOTS;

#[derive(Debug, Clone, PartialEq)]
pub struct DelayLine {
    slots: SmallVec<[f64; DELAY_INLINE_SLOTS]>,
}

impl DelayLine {
    /// Empty line with `len` slots.
    pub fn zeros(len: usize) -> Self {
        Self {
            slots: smallvec::smallvec![0.0; len],
        }
    }

    /// Line holding the given slot values.
    pub fn from_slots(slots: &[f64]) -> Self {
        Self {
            slots: SmallVec::from_slice(slots),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.slots
    }

    /// Water still in transit: every slot except the one already emitted.
    pub fn in_transit(&self) -> f64 {
        self.slots.iter().skip(1).sum()
    }

    /// Advance one step and return the discharge for this step.
    ///
    /// `scale * inflow` is added to every slot after the shift. The returned
    /// discharge is slot 0 floored at zero; the slot itself keeps its raw value
    /// until the next advance drops it.
    pub fn advance(&mut self, inflow: f64, scale: f64) -> f64 {
        let n = self.slots.len();
        if n == 0 {
            return 0.0;
        }
        self.slots.rotate_left(1);
        self.slots[n - 1] = 0.0;

        let contribution = scale * inflow;
        for slot in self.slots.iter_mut() {
            *slot += contribution;
        }

        self.slots[0].max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} +/- {tol}, got {actual}"
        );
    }

    #[test]
    fn zeros_has_requested_length() {
        let line = DelayLine::zeros(3);
        assert_eq!(line.len(), 3);
        assert!(line.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn advance_shifts_left_and_opens_last_slot() {
        let mut line = DelayLine::from_slots(&[4.0, 3.0, 2.0]);
        let q = line.advance(0.0, 0.5);
        assert_eq!(q, 3.0);
        assert_eq!(line.as_slice(), &[3.0, 2.0, 0.0]);
    }

    #[test]
    fn advance_adds_scaled_inflow_to_every_slot() {
        let mut line = DelayLine::zeros(4);
        let q = line.advance(10.0, 0.25);
        assert_approx(q, 2.5, 1e-12);
        assert_eq!(line.as_slice(), &[2.5, 2.5, 2.5, 2.5]);
    }

    #[test]
    fn impulse_drains_after_len_steps() {
        let mut line = DelayLine::zeros(3);
        let scale = 1.0 / 3.0;
        let mut emitted = vec![line.advance(9.0, scale)];
        for _ in 0..5 {
            emitted.push(line.advance(0.0, scale));
        }
        for q in &emitted[..3] {
            assert_approx(*q, 3.0, 1e-12);
        }
        assert!(emitted[3..].iter().all(|&q| q == 0.0));
        assert_approx(emitted.iter().sum(), 9.0, 1e-12);
    }

    #[test]
    fn output_floored_at_zero() {
        let mut line = DelayLine::from_slots(&[0.0, -1.0]);
        let q = line.advance(0.0, 1.0);
        assert_eq!(q, 0.0);
        assert_eq!(line.as_slice()[0], -1.0);
    }

    #[test]
    fn in_transit_excludes_emitted_slot() {
        let line = DelayLine::from_slots(&[5.0, 1.0, 2.0]);
        assert_approx(line.in_transit(), 3.0, 1e-12);
    }

    #[test]
    fn single_slot_line_emits_immediately() {
        let mut line = DelayLine::zeros(1);
        assert_eq!(line.advance(6.0, 1.0), 6.0);
        assert_eq!(line.advance(0.0, 1.0), 0.0);
    }
}
