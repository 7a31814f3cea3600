//! Laser Dodge - A bullet-hell arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, lasers, patterns, game session)
//! - `input`: Logical actions and key bindings
//! - `settings`: Persisted preferences (volume, screen size, key bindings)
//! - `error`: Errors raised by the settings and input layers

pub mod error;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::LaserDodgeError;
pub use input::{Action, ActionState, KeyBindings};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play field dimensions
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 800.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_HITBOX_RADIUS: f32 = 4.0;
    /// Movement per tick (pixels)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const DASH_DISTANCE: f32 = 80.0;
    /// Ticks between dashes (1 second)
    pub const DASH_COOLDOWN_TICKS: u32 = 60;

    /// Delay between death and the dead screen
    pub const DEATH_SCREEN_DELAY_SECS: u32 = 1;
}

/// Unit vector for a heading angle (radians)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Clamp a point so a circle of `radius` stays inside `[0, size]` on both axes
#[inline]
pub fn clamp_inside(pos: Vec2, radius: f32, size: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.min(size.x - radius).max(radius),
        pos.y.min(size.y - radius).max(radius),
    )
}
