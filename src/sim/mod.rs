//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod bounds;
pub mod clock;
pub mod collision;
pub mod laser;
pub mod pattern;
pub mod player;
pub mod schedule;
pub mod state;
pub mod tick;

pub use bounds::Bounds;
pub use clock::FixedStep;
pub use collision::{laser_hits_circle, point_segment_distance};
pub use laser::{Laser, LaserColor, LaserStyle};
pub use pattern::Pattern;
pub use player::{MoveIntent, Player};
pub use schedule::{PatternScheduler, ScheduleEntry};
pub use state::{GameEvent, GamePhase, GameState, SessionConfig, Snapshot};
pub use tick::{TickInput, tick};
