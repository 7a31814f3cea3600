//! Play field rectangle
//!
//! Screen coordinates: origin at the top-left corner, +y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_inside;
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Axis-aligned play field `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point, snapped to whole pixels
    pub fn center(&self) -> Vec2 {
        (self.size() / 2.0).floor()
    }

    /// Check if a point lies inside the rectangle grown by `margin` on all sides
    pub fn contains_expanded(&self, point: Vec2, margin: f32) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }

    /// Keep a circle of `radius` fully inside the field
    #[inline]
    pub fn clamp_circle(&self, center: Vec2, radius: f32) -> Vec2 {
        clamp_inside(center, radius, self.size())
    }
}
