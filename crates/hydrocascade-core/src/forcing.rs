/// Forcing for a single time step.
///
/// Areal depths over the interval, both in mm. Reading whole series from
/// disk belongs to the driver, not the core.
use tracing::debug;

use crate::config::NegativeForcing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forcing {
    /// Precipitation P [mm].
    pub precip: f64,
    /// Potential evapotranspiration E [mm].
    pub pet: f64,
}

impl Forcing {
    pub fn new(precip: f64, pet: f64) -> Self {
        Self { precip, pet }
    }

    /// Apply the negative-forcing policy.
    ///
    /// NaN is not negative and passes through under either policy.
    pub fn apply(self, policy: NegativeForcing) -> Self {
        match policy {
            NegativeForcing::Propagate => self,
            NegativeForcing::Clamp => {
                if self.precip < 0.0 || self.pet < 0.0 {
                    debug!(
                        precip = self.precip,
                        pet = self.pet,
                        "clamping negative forcing to zero"
                    );
                }
                Self {
                    precip: clamp_negative(self.precip),
                    pet: clamp_negative(self.pet),
                }
            }
        }
    }
}

fn clamp_negative(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_zeroes_negative_values() {
        let f = Forcing::new(-3.0, -1.0).apply(NegativeForcing::Clamp);
        assert_eq!(f, Forcing::new(0.0, 0.0));
    }

    #[test]
    fn clamp_keeps_positive_values() {
        let f = Forcing::new(12.5, 3.0).apply(NegativeForcing::Clamp);
        assert_eq!(f, Forcing::new(12.5, 3.0));
    }

    #[test]
    fn propagate_keeps_negative_values() {
        let f = Forcing::new(-3.0, -1.0).apply(NegativeForcing::Propagate);
        assert_eq!(f, Forcing::new(-3.0, -1.0));
    }

    #[test]
    fn nan_passes_through_clamp() {
        let f = Forcing::new(f64::NAN, 2.0).apply(NegativeForcing::Clamp);
        assert!(f.precip.is_nan());
        assert_eq!(f.pet, 2.0);
    }
}
