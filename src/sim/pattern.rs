//! Laser spawn patterns
//!
//! A pattern is a stateless rule from a frame number to the lasers fired on
//! that frame. All timing comes from the frame value via modulo arithmetic;
//! the only other input is the random source for patterns that scatter.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::laser::{Laser, LaserStyle};

/// Radial: frames between bursts
pub const RADIAL_PERIOD: u32 = 60;
/// Radial: lasers per burst
pub const RADIAL_COUNT: usize = 8;
/// Radial: height of the emitter below the top edge
pub const RADIAL_ORIGIN_Y: f32 = 100.0;

/// Sweeping: frames between shots
pub const SWEEP_PERIOD: u32 = 10;
/// Sweeping: keep spawn x this far from the side edges
pub const SWEEP_EDGE_MARGIN: f32 = 100.0;

/// Random burst: frames between bursts
pub const BURST_PERIOD: u32 = 90;
/// Random burst: lasers per burst
pub const BURST_COUNT: usize = 12;

/// Built-in spawn patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// Eight-way ring from the top center, once per second
    Radial,
    /// Single lasers raining from the top edge, swaying side to side
    Sweeping,
    /// Twelve lasers in random directions from the field center
    RandomBurst,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Radial, Pattern::Sweeping, Pattern::RandomBurst];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Radial => "Radial",
            Pattern::Sweeping => "Sweeping",
            Pattern::RandomBurst => "Random Burst",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "radial" => Some(Pattern::Radial),
            "sweeping" | "sweep" => Some(Pattern::Sweeping),
            "randomburst" | "burst" => Some(Pattern::RandomBurst),
            _ => None,
        }
    }

    /// Lasers fired on `frame`
    pub fn spawn<R: Rng + ?Sized>(&self, frame: u32, bounds: &Bounds, rng: &mut R) -> Vec<Laser> {
        match self {
            Pattern::Radial => radial(frame, bounds),
            Pattern::Sweeping => sweeping(frame, bounds, rng),
            Pattern::RandomBurst => random_burst(frame, bounds, rng),
        }
    }
}

pub fn radial(frame: u32, bounds: &Bounds) -> Vec<Laser> {
    if frame % RADIAL_PERIOD != 0 {
        return Vec::new();
    }
    let origin = Vec2::new(bounds.center().x, RADIAL_ORIGIN_Y);
    let step = TAU / RADIAL_COUNT as f32;
    (0..RADIAL_COUNT)
        .map(|i| Laser::new(origin, i as f32 * step, LaserStyle::DEFAULT))
        .collect()
}

pub fn sweeping<R: Rng + ?Sized>(frame: u32, bounds: &Bounds, rng: &mut R) -> Vec<Laser> {
    if frame % SWEEP_PERIOD != 0 {
        return Vec::new();
    }
    let angle = FRAC_PI_2 + (frame as f32 / 60.0).sin() * FRAC_PI_4;

    // Whole-pixel x in [margin, width - margin]; narrow fields use the center
    let lo = SWEEP_EDGE_MARGIN as i32;
    let hi = (bounds.width - SWEEP_EDGE_MARGIN) as i32;
    let x = if lo <= hi {
        rng.random_range(lo..=hi) as f32
    } else {
        bounds.center().x
    };

    vec![Laser::new(Vec2::new(x, 0.0), angle, LaserStyle::SWEEP)]
}

pub fn random_burst<R: Rng + ?Sized>(frame: u32, bounds: &Bounds, rng: &mut R) -> Vec<Laser> {
    if frame % BURST_PERIOD != 0 {
        return Vec::new();
    }
    let origin = bounds.center();
    (0..BURST_COUNT)
        .map(|_| Laser::new(origin, rng.random_range(0.0..TAU), LaserStyle::BURST))
        .collect()
}
