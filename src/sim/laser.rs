//! Laser projectiles
//!
//! A laser is a line segment that starts at `pos` and extends `length` pixels
//! along its heading. It travels `speed` pixels per tick and dies once it
//! leaves the play field grown by its own length.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::heading;

/// Color tag for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserColor {
    Red,
    Blue,
    Green,
}

/// Speed and shape shared by every laser a pattern fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserStyle {
    pub speed: f32,
    pub width: f32,
    pub length: f32,
    pub color: LaserColor,
}

impl LaserStyle {
    pub const DEFAULT: Self = Self {
        speed: 6.0,
        width: 4.0,
        length: 32.0,
        color: LaserColor::Red,
    };
    /// Fast, wide sweep
    pub const SWEEP: Self = Self {
        speed: 8.0,
        width: 6.0,
        length: 48.0,
        color: LaserColor::Blue,
    };
    /// Slow, thin scatter
    pub const BURST: Self = Self {
        speed: 4.0,
        width: 3.0,
        length: 24.0,
        color: LaserColor::Green,
    };
}

impl Default for LaserStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A laser entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    /// Tail of the segment
    pub pos: Vec2,
    /// Heading (radians)
    pub angle: f32,
    /// Pixels per tick
    pub speed: f32,
    pub width: f32,
    pub length: f32,
    pub color: LaserColor,
    /// False once the laser has left the field
    pub active: bool,
}

impl Laser {
    pub fn new(pos: Vec2, angle: f32, style: LaserStyle) -> Self {
        Self {
            pos,
            angle,
            speed: style.speed,
            width: style.width,
            length: style.length,
            color: style.color,
            active: true,
        }
    }

    /// Move one tick along the heading, deactivating once out of bounds
    pub fn advance(&mut self, bounds: &Bounds) {
        if !self.active {
            return;
        }
        self.pos += heading(self.angle) * self.speed;
        if !bounds.contains_expanded(self.pos, self.length) {
            self.active = false;
        }
    }

    /// Head of the segment
    #[inline]
    pub fn endpoint(&self) -> Vec2 {
        self.pos + heading(self.angle) * self.length
    }
}
