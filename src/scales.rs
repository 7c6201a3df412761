// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use plotters::coord::combinators::{BindKeyPoints, WithKeyPoints};
use plotters::coord::types::RangedCoordf64;

// upper bound on minor steps along one axis before the steps are widened
const MAX_STEPS: u64 = 200;

/// A linear axis starting at zero with labelled ticks every `major` units
/// and grid lines every `minor` units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticks {
    major: u64,
    minor: u64,
}

impl Ticks {
    /// Both steps must be non-zero.
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// The axis end for data reaching `max`: the next multiple of the minor
    /// step, and never less than one step.
    pub fn limit(&self, max: u64) -> u64 {
        self.steps(max).max(1).saturating_mul(self.minor)
    }

    fn steps(&self, max: u64) -> u64 {
        max / self.minor + u64::from(max % self.minor != 0)
    }

    /// Ticks for data reaching `max`. Both steps are scaled by the same
    /// factor when the axis would otherwise need more than `MAX_STEPS` minor
    /// steps.
    pub fn fit(&self, max: u64) -> Ticks {
        let steps = self.steps(max);
        if steps <= MAX_STEPS {
            return *self;
        }
        let factor = steps / MAX_STEPS + u64::from(steps % MAX_STEPS != 0);
        Ticks {
            major: self.major.saturating_mul(factor),
            minor: self.minor.saturating_mul(factor),
        }
    }

    pub fn major_points(&self, limit: u64) -> Vec<f64> {
        (0..=limit)
            .step_by(self.major as usize)
            .map(|v| v as f64)
            .collect()
    }

    /// Minor positions which do not coincide with a major one.
    pub fn minor_points(&self, limit: u64) -> Vec<f64> {
        (0..=limit)
            .step_by(self.minor as usize)
            .filter(|v| v % self.major != 0)
            .map(|v| v as f64)
            .collect()
    }

    pub fn range(&self, max: u64) -> WithKeyPoints<RangedCoordf64> {
        let ticks = self.fit(max);
        let limit = ticks.limit(max);
        (0f64..limit as f64)
            .with_key_points(ticks.major_points(limit))
            .with_light_points(ticks.minor_points(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_rounds_up_to_minor_step() {
        let ticks = Ticks::new(20, 10);
        assert_eq!(ticks.limit(0), 10);
        assert_eq!(ticks.limit(1), 10);
        assert_eq!(ticks.limit(150), 150);
        assert_eq!(ticks.limit(151), 160);
        assert_eq!(ticks.limit(u64::MAX), u64::MAX);
    }

    #[test]
    fn fit_widens_steps_for_large_values() {
        let ticks = Ticks::new(4000, 2000);
        assert_eq!(ticks.fit(17_300), ticks);

        let wide = ticks.fit(u64::MAX);
        let limit = wide.limit(u64::MAX);
        assert!(wide.major_points(limit).len() <= MAX_STEPS as usize + 1);
        assert!(wide.minor_points(limit).len() <= MAX_STEPS as usize + 1);

        let ticks = Ticks::new(20, 10);
        let wide = ticks.fit(5000);
        assert_eq!(wide, Ticks::new(60, 30));
        assert_eq!(wide.limit(5000), 5010);
    }

    #[test]
    fn flow_axis() {
        let ticks = Ticks::new(4000, 2000);
        let limit = ticks.limit(17_300);
        assert_eq!(limit, 18_000);
        assert_eq!(
            ticks.major_points(limit),
            vec![0.0, 4000.0, 8000.0, 12000.0, 16000.0]
        );
        assert_eq!(
            ticks.minor_points(limit),
            vec![2000.0, 6000.0, 10000.0, 14000.0, 18000.0]
        );
    }

    #[test]
    fn time_axis() {
        let ticks = Ticks::new(20, 10);
        let limit = ticks.limit(159);
        assert_eq!(ticks.major_points(limit).len(), 9);
        assert_eq!(ticks.minor_points(limit).len(), 8);
        assert_eq!(ticks.minor_points(limit)[0], 10.0);
    }
}
