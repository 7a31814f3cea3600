//! Game session state and core simulation types
//!
//! Everything a session needs between ticks lives here. The session owns the
//! player, the pattern scheduler, the live lasers and the random source.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::laser::{Laser, LaserColor};
use super::pattern::Pattern;
use super::player::Player;
use super::schedule::{DEFAULT_SCHEDULE, PatternScheduler, ScheduleEntry};
use crate::consts::{DEATH_SCREEN_DELAY_SECS, TICKS_PER_SECOND};
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Active,
    /// Player was hit; waiting before the dead screen
    Dying,
    /// Waiting for retry or quit
    DeadScreen,
    /// Session ended, no more ticks
    Quit,
}

/// Something that happened during a tick, for audio/log/UI collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PatternChanged { index: usize, pattern: Pattern },
    Dashed { from: Vec2, to: Vec2 },
    PlayerDied { tick: u64 },
    DeathScreenShown,
    Retried { attempt: u32 },
    Quit,
}

/// Static parameters of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub bounds: Bounds,
    pub schedule: Vec<ScheduleEntry>,
    pub ticks_per_second: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            schedule: DEFAULT_SCHEDULE.to_vec(),
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl SessionConfig {
    /// Field size comes from the settings; the rotation is the default one
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bounds: Bounds::new(settings.screen_width as f32, settings.screen_height as f32),
            ..Self::default()
        }
    }

    /// Ticks spent dying before the dead screen
    pub fn death_screen_delay_ticks(&self) -> u64 {
        u64::from(DEATH_SCREEN_DELAY_SECS) * u64::from(self.ticks_per_second)
    }

    /// Same field, single pattern on repeat
    pub fn single_pattern(mut self, pattern: Pattern) -> Self {
        self.schedule = vec![ScheduleEntry::new(pattern, u32::MAX / self.ticks_per_second.max(1))];
        self
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: SessionConfig,
    pub phase: GamePhase,
    pub player: Player,
    pub scheduler: PatternScheduler,
    /// Live lasers (every entry is active between ticks)
    pub lasers: Vec<Laser>,
    /// Ticks simulated in Active and Dying, across retries
    pub time_ticks: u64,
    /// Tick on which the player died
    pub death_tick: Option<u64>,
    /// 1 for the first run, +1 per retry
    pub attempt: u32,
    /// Dash key state on the previous tick (edge detection)
    pub(crate) dash_held: bool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, config: SessionConfig) -> Self {
        let player = Player::spawn(&config.bounds);
        let scheduler = PatternScheduler::new(config.schedule.clone(), config.ticks_per_second);
        log::info!(
            "Session started: seed {seed}, field {}x{}, {} patterns",
            config.bounds.width,
            config.bounds.height,
            scheduler.len()
        );
        Self {
            seed,
            config,
            phase: GamePhase::Active,
            player,
            scheduler,
            lasers: Vec::new(),
            time_ticks: 0,
            death_tick: None,
            attempt: 1,
            dash_held: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, SessionConfig::default())
    }

    /// Fresh player, scheduler and empty field; the random stream continues
    pub fn restart_round(&mut self) {
        self.player = Player::spawn(&self.config.bounds);
        self.scheduler =
            PatternScheduler::new(self.config.schedule.clone(), self.config.ticks_per_second);
        self.lasers.clear();
        self.death_tick = None;
        self.attempt += 1;
        self.phase = GamePhase::Active;
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Quit
    }

    /// Everything the renderer needs for this tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            attempt: self.attempt,
            pattern: self.scheduler.current(),
            player: PlayerView {
                pos: self.player.pos,
                radius: self.player.radius,
                hitbox_radius: self.player.hitbox_radius,
                alive: self.player.alive,
                dash_cooldown_ticks: self.player.dash_timer,
            },
            lasers: self
                .lasers
                .iter()
                .map(|l| LaserView {
                    start: l.pos,
                    end: l.endpoint(),
                    width: l.width,
                    color: l.color,
                })
                .collect(),
        }
    }
}

/// Player as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub hitbox_radius: f32,
    pub alive: bool,
    pub dash_cooldown_ticks: u32,
}

/// Laser as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserView {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: LaserColor,
}

/// Read-only view of a session for drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub attempt: u32,
    pub pattern: Pattern,
    pub player: PlayerView,
    pub lasers: Vec<LaserView>,
}
