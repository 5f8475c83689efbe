/// SMA cascade parameters.
///
/// Nine model parameters plus the two overflow thresholds and the delay
/// scale, all constant over a run:
/// - `routing_capacity`: direct-routing reservoir constant, Qm = M / routing_capacity
/// - `ground_capacity`: ground reservoir capacity [mm]
/// - `ground_emptying`: ground reservoir emptying constant, Qr = R / ground_emptying
/// - `percolation`: soil capacity and percolation scale [mm]
/// - `infiltration`: maximum soil-to-groundwater infiltration rate [mm/step]
/// - `hypodermic_emptying`: interflow emptying constant, Qt1 = T / hypodermic_emptying
/// - `partition`: share of infiltration sent to the ground-routing store L [-]
/// - `deep_percolation`: divisor applied to ground discharge [-]
/// - `delay`: delay count, converted to the delay-buffer length at prepare time
/// - `xf1`: interception overflow threshold [mm]
/// - `xf2`: ground-routing overflow threshold [mm]
/// - `delay_scale`: weight of routed flux added to each delay slot [-]
use super::constants::{N_PARAMS, PARAM_NAMES};
use crate::config::DelayRounding;
use crate::error::{ConfigError, DomainError, ModelError};
use crate::traits::ModelParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub routing_capacity: f64,
    pub ground_capacity: f64,
    pub ground_emptying: f64,
    pub percolation: f64,
    pub infiltration: f64,
    pub hypodermic_emptying: f64,
    pub partition: f64,
    pub deep_percolation: f64,
    pub delay: f64,
    pub xf1: f64,
    pub xf2: f64,
    pub delay_scale: f64,
}

impl Parameters {
    /// Check every value the step divides by.
    ///
    /// NaN fails the same way as zero.
    pub fn validate(&self) -> Result<(), DomainError> {
        let divisors = [
            ("routing_capacity", self.routing_capacity),
            ("ground_capacity", self.ground_capacity),
            ("ground_emptying", self.ground_emptying),
            ("percolation", self.percolation),
            ("hypodermic_emptying", self.hypodermic_emptying),
            ("deep_percolation", self.deep_percolation),
        ];
        for (name, value) in divisors {
            if !(value > 0.0) {
                return Err(DomainError::NonPositiveParameter { name, value });
            }
        }
        if !(self.xf1 + self.xf2 > 0.0) {
            return Err(DomainError::NonPositiveThresholdSum {
                xf1: self.xf1,
                xf2: self.xf2,
            });
        }
        Ok(())
    }

    /// Delay-buffer length implied by `delay` under `rounding`.
    pub fn buffer_len(&self, rounding: DelayRounding) -> Result<usize, ConfigError> {
        rounding
            .buffer_len(self.delay)
            .ok_or(ConfigError::InvalidDelayLength {
                delay: self.delay,
                rounding,
            })
    }

    /// Delay scale that spreads each routed flux evenly, conserving mass.
    pub fn unit_delay_scale(buffer_len: usize) -> f64 {
        1.0 / buffer_len as f64
    }
}

impl ModelParams for Parameters {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;

    fn from_array(arr: &[f64]) -> Result<Self, ModelError> {
        if arr.len() != Self::N_PARAMS {
            return Err(ConfigError::ArrayLength {
                what: "parameter",
                expected: Self::N_PARAMS,
                actual: arr.len(),
            }
            .into());
        }
        Ok(Self {
            routing_capacity: arr[0],
            ground_capacity: arr[1],
            ground_emptying: arr[2],
            percolation: arr[3],
            infiltration: arr[4],
            hypodermic_emptying: arr[5],
            partition: arr[6],
            deep_percolation: arr[7],
            delay: arr[8],
            xf1: arr[9],
            xf2: arr[10],
            delay_scale: arr[11],
        })
    }

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.routing_capacity,
            self.ground_capacity,
            self.ground_emptying,
            self.percolation,
            self.infiltration,
            self.hypodermic_emptying,
            self.partition,
            self.deep_percolation,
            self.delay,
            self.xf1,
            self.xf2,
            self.delay_scale,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> Parameters {
        Parameters {
            routing_capacity: 10.0,
            ground_capacity: 50.0,
            ground_emptying: 5.0,
            percolation: 20.0,
            infiltration: 4.0,
            hypodermic_emptying: 3.0,
            partition: 0.3,
            deep_percolation: 1.0,
            delay: 2.0,
            xf1: 5.0,
            xf2: 10.0,
            delay_scale: 0.5,
        }
    }

    #[test]
    fn valid_parameters() {
        assert!(test_params().validate().is_ok());
    }

    #[test]
    fn zero_divisor_rejected() {
        let mut p = test_params();
        p.ground_emptying = 0.0;
        assert_eq!(
            p.validate(),
            Err(DomainError::NonPositiveParameter {
                name: "ground_emptying",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_divisor_rejected() {
        let mut p = test_params();
        p.percolation = -20.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_divisor_rejected() {
        let mut p = test_params();
        p.routing_capacity = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_infiltration_and_partition_allowed() {
        let mut p = test_params();
        p.infiltration = 0.0;
        p.partition = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn zero_threshold_sum_rejected() {
        let mut p = test_params();
        p.xf1 = 0.0;
        p.xf2 = 0.0;
        assert!(matches!(
            p.validate(),
            Err(DomainError::NonPositiveThresholdSum { .. })
        ));
    }

    #[test]
    fn one_zero_threshold_allowed() {
        let mut p = test_params();
        p.xf1 = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn buffer_len_from_delay() {
        let mut p = test_params();
        assert_eq!(p.buffer_len(DelayRounding::Ceil), Ok(2));
        p.delay = 0.0;
        assert_eq!(
            p.buffer_len(DelayRounding::Ceil),
            Err(ConfigError::InvalidDelayLength {
                delay: 0.0,
                rounding: DelayRounding::Ceil
            })
        );
    }

    #[test]
    fn unit_delay_scale_sums_to_one() {
        assert_eq!(Parameters::unit_delay_scale(4), 0.25);
    }

    #[test]
    fn from_array_valid() {
        let arr = test_params().to_array();
        let p = <Parameters as ModelParams>::from_array(&arr).unwrap();
        assert_eq!(p, test_params());
    }

    #[test]
    fn from_array_wrong_length() {
        assert!(<Parameters as ModelParams>::from_array(&[10.0, 50.0]).is_err());
        assert!(<Parameters as ModelParams>::from_array(&[1.0; 13]).is_err());
    }

    #[test]
    fn names_match_array_order() {
        assert_eq!(PARAM_NAMES.len(), N_PARAMS);
        assert_eq!(test_params().to_array().len(), N_PARAMS);
    }
}
