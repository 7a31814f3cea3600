//! Fixed-step accumulator
//!
//! Converts variable frame times into a whole number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame time credited at once (seconds)
pub const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    dt: f32,
    max_substeps: u32,
    max_frame_time: f32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS, MAX_FRAME_TIME)
    }
}

impl FixedStep {
    pub fn new(dt: f32, max_substeps: u32, max_frame_time: f32) -> Self {
        Self {
            dt,
            max_substeps,
            max_frame_time,
            accumulator: 0.0,
        }
    }

    /// Credit `frame_dt` seconds and return how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_frame_time)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            self.accumulator -= self.dt;
            substeps += 1;
        }
        substeps
    }

    /// Seconds banked toward the next tick
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_nominal_frame() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(SIM_DT), 1);
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
        assert_eq!(clock.advance(SIM_DT * 0.5), 1);
    }

    #[test]
    fn test_substep_cap_keeps_remainder() {
        let mut clock = FixedStep::new(0.25, 2, 1.0);
        assert_eq!(clock.advance(1.0), 2);
        assert_eq!(clock.pending(), 0.5);
        assert_eq!(clock.advance(0.0), 2);
        assert_eq!(clock.pending(), 0.0);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut clock = FixedStep::new(0.25, 8, 0.5);
        assert_eq!(clock.advance(10.0), 2);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(-1.0), 0);
    }
}
