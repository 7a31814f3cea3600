//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically.

use super::state::{GameEvent, GamePhase, GameState};
use crate::input::ActionState;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held logical actions (dash fires on the press, not while held)
    pub actions: ActionState,
    /// Jump to the next pattern (debug/testing)
    pub skip_pattern: bool,
    /// Start over from the dead screen
    pub retry: bool,
    /// Leave the session (during play or from the dead screen)
    pub quit: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let dash_pressed = input.actions.dash && !state.dash_held;
    state.dash_held = input.actions.dash;

    match state.phase {
        GamePhase::Quit => {}

        GamePhase::Active => {
            if input.quit {
                quit(state, &mut events);
                return events;
            }
            state.time_ticks += 1;
            step_active(state, input, dash_pressed, &mut events);
        }

        GamePhase::Dying => {
            state.time_ticks += 1;
            let died_at = state.death_tick.unwrap_or(state.time_ticks);
            if state.time_ticks - died_at >= state.config.death_screen_delay_ticks() {
                state.phase = GamePhase::DeadScreen;
                events.push(GameEvent::DeathScreenShown);
            }
        }

        GamePhase::DeadScreen => {
            if input.retry {
                state.restart_round();
                log::info!("Retry (attempt {})", state.attempt);
                events.push(GameEvent::Retried {
                    attempt: state.attempt,
                });
            } else if input.quit {
                quit(state, &mut events);
            }
        }
    }

    events
}

fn quit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    log::info!("Session quit after {} ticks", state.time_ticks);
    state.phase = GamePhase::Quit;
    events.push(GameEvent::Quit);
}

fn step_active(
    state: &mut GameState,
    input: &TickInput,
    dash_pressed: bool,
    events: &mut Vec<GameEvent>,
) {
    let bounds = state.config.bounds;

    // Player
    let intent = input.actions.movement();
    state.player.handle_input(&intent, &bounds);
    state.player.tick_cooldown();
    if dash_pressed {
        let from = state.player.pos;
        if state.player.try_dash(&intent, &bounds) {
            log::debug!("Dash {from} -> {}", state.player.pos);
            events.push(GameEvent::Dashed {
                from,
                to: state.player.pos,
            });
        }
    }

    // Patterns
    if input.skip_pattern {
        state.scheduler.skip();
    }
    let switches_before = state.scheduler.switches();
    let (pattern, frame) = state.scheduler.advance_and_get();
    if input.skip_pattern || state.scheduler.switches() != switches_before {
        log::info!("Pattern -> {}", pattern.as_str());
        events.push(GameEvent::PatternChanged {
            index: state.scheduler.index(),
            pattern,
        });
    }

    let spawned = pattern.spawn(frame, &bounds, &mut state.rng);
    if !spawned.is_empty() {
        log::debug!("{} fired {} lasers on frame {frame}", pattern.as_str(), spawned.len());
        state.lasers.extend(spawned);
    }

    // Lasers
    for laser in &mut state.lasers {
        laser.advance(&bounds);
    }
    state.lasers.retain(|l| l.active);

    // Collision
    if state.player.check_collision(&state.lasers) {
        state.player.kill();
        state.phase = GamePhase::Dying;
        state.death_tick = Some(state.time_ticks);
        log::info!(
            "Player hit on tick {} ({} lasers live)",
            state.time_ticks,
            state.lasers.len()
        );
        events.push(GameEvent::PlayerDied {
            tick: state.time_ticks,
        });
    }
}
