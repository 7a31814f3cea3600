//! Laser Dodge headless runner
//!
//! Runs the simulation without a window: loads settings, plays a session with
//! scripted or autopilot input and reports what happened. Useful for soak
//! testing patterns and for replaying a seed.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use laser_dodge::sim::{
    FixedStep, GameEvent, GamePhase, GameState, SessionConfig, TickInput, laser_hits_circle, tick,
};
use laser_dodge::{Action, ActionState, KeyBindings, Settings};

#[derive(Parser, Debug)]
#[command(name = "laser-dodge")]
#[command(about = "Run a headless Laser Dodge session")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, default_value = laser_dodge::settings::SETTINGS_FILE)]
    settings: PathBuf,
    /// Run seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Ticks to simulate before quitting
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Automatic retries from the dead screen
    #[arg(long, default_value_t = 0)]
    retries: u32,
    /// Pace ticks by the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Random-walk input with reactive dashes instead of standing still
    #[arg(long)]
    autopilot: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
    /// Write the merged settings back to disk
    #[arg(long)]
    write_settings: bool,
}

/// Scripted player that picks a heading now and then and dashes away from
/// lasers that get close
struct Autopilot {
    rng: Pcg32,
    held: Vec<Action>,
    dash_held: bool,
}

impl Autopilot {
    /// Distance at which a laser triggers a dash
    const PANIC_RADIUS: f32 = 24.0;
    /// Ticks between heading changes
    const WANDER_TICKS: u64 = 30;

    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5EED),
            held: Vec::new(),
            dash_held: false,
        }
    }

    /// Physical keys held this tick
    fn keys(&mut self, state: &GameState, bindings: &KeyBindings) -> HashSet<String> {
        if state.time_ticks % Self::WANDER_TICKS == 0 {
            self.held = [Action::MoveLeft, Action::MoveRight, Action::MoveUp, Action::MoveDown]
                .into_iter()
                .filter(|_| self.rng.random_bool(0.35))
                .collect();
        }

        let threatened = state
            .lasers
            .iter()
            .any(|l| laser_hits_circle(state.player.pos, Self::PANIC_RADIUS, l));
        // Release for a tick between presses so each one is a fresh edge
        let dash = threatened && !self.dash_held;
        self.dash_held = dash;

        let mut keys: HashSet<String> = self
            .held
            .iter()
            .map(|a| bindings.key_for(*a).to_string())
            .collect();
        if dash {
            keys.insert(bindings.key_for(Action::Dash).to_string());
        }
        keys
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::load_from(&args.settings);
    if args.write_settings {
        if let Err(e) = settings.save_to(&args.settings) {
            log::error!("{e}");
        }
    }

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Laser Dodge (headless) starting with seed {seed}");

    let mut state = GameState::new(seed, SessionConfig::from_settings(&settings));
    let mut autopilot = args.autopilot.then(|| Autopilot::new(seed));
    let mut clock = FixedStep::default();
    let mut last_frame = Instant::now();
    let mut retries_left = args.retries;
    let mut deaths = 0u32;
    let mut ticks_run = 0u64;

    while !state.is_over() {
        let steps = if args.realtime {
            std::thread::sleep(Duration::from_millis(1));
            let now = Instant::now();
            let frame_dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            clock.advance(frame_dt)
        } else {
            1
        };

        for _ in 0..steps {
            let keys = match autopilot.as_mut() {
                Some(pilot) => pilot.keys(&state, &settings.key_bindings),
                None => HashSet::new(),
            };
            let mut input = TickInput {
                actions: ActionState::from_pressed_keys(&settings.key_bindings, &keys),
                ..Default::default()
            };
            if state.phase == GamePhase::DeadScreen {
                if retries_left > 0 {
                    retries_left -= 1;
                    input.retry = true;
                } else {
                    input.quit = true;
                }
            } else if ticks_run >= args.ticks {
                input.quit = true;
            }

            for event in tick(&mut state, &input) {
                match event {
                    GameEvent::PlayerDied { tick } => {
                        deaths += 1;
                        println!("attempt {}: hit on tick {tick}", state.attempt);
                    }
                    GameEvent::PatternChanged { index, pattern } => {
                        log::debug!("pattern #{index}: {}", pattern.as_str());
                    }
                    _ => {}
                }
            }
            ticks_run += 1;
            if state.is_over() {
                break;
            }
        }
    }

    println!(
        "seed {seed}: {} ticks simulated, {deaths} deaths over {} attempts",
        state.time_ticks, state.attempt
    );

    if args.snapshot {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Snapshot failed: {e}"),
        }
    }
}
