//! The player avatar: movement, dash and hitbox

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::collision::laser_hits_circle;
use super::laser::Laser;
use crate::consts::*;

/// Directions held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn is_empty(&self) -> bool {
        self.direction() == Vec2::ZERO
    }

    /// Direction with unit axis components, scaled by 1/√2 on diagonals.
    /// Opposite keys cancel out.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= FRAC_1_SQRT_2;
        }
        dir
    }

    /// Like [`direction`](Self::direction), but straight up when nothing is held
    pub fn dash_direction(&self) -> Vec2 {
        let dir = self.direction();
        if dir == Vec2::ZERO {
            Vec2::new(0.0, -1.0)
        } else {
            dir
        }
    }
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Visual radius (also used for clamping to the field)
    pub radius: f32,
    /// Collision radius
    pub hitbox_radius: f32,
    /// Pixels per tick
    pub speed: f32,
    pub dash_distance: f32,
    /// Full cooldown after a dash (ticks)
    pub dash_cooldown: u32,
    /// Ticks until the next dash is allowed
    pub dash_timer: u32,
    pub alive: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            hitbox_radius: PLAYER_HITBOX_RADIUS,
            speed: PLAYER_SPEED,
            dash_distance: DASH_DISTANCE,
            dash_cooldown: DASH_COOLDOWN_TICKS,
            dash_timer: 0,
            alive: true,
        }
    }

    /// Spawn at the center of the field
    pub fn spawn(bounds: &Bounds) -> Self {
        let mut player = Self::new(bounds.center());
        player.pos = bounds.clamp_circle(player.pos, player.radius);
        player
    }

    /// Walk one tick in the held direction
    pub fn handle_input(&mut self, intent: &MoveIntent, bounds: &Bounds) {
        if !self.alive {
            return;
        }
        self.pos = bounds.clamp_circle(self.pos + intent.direction() * self.speed, self.radius);
    }

    pub fn can_dash(&self) -> bool {
        self.alive && self.dash_timer == 0
    }

    /// Teleport `dash_distance` in the held direction (up if none).
    /// Returns true if the dash happened.
    pub fn try_dash(&mut self, intent: &MoveIntent, bounds: &Bounds) -> bool {
        if !self.can_dash() {
            return false;
        }
        let target = self.pos + intent.dash_direction() * self.dash_distance;
        self.pos = bounds.clamp_circle(target, self.radius);
        self.dash_timer = self.dash_cooldown;
        true
    }

    pub fn tick_cooldown(&mut self) {
        if self.dash_timer > 0 {
            self.dash_timer -= 1;
        }
    }

    /// Whole seconds of cooldown left, rounded up (for the HUD)
    pub fn cooldown_secs(&self) -> u32 {
        self.dash_timer.div_ceil(TICKS_PER_SECOND)
    }

    /// Check the hitbox against every live laser
    pub fn check_collision(&self, lasers: &[Laser]) -> bool {
        if !self.alive {
            return false;
        }
        lasers
            .iter()
            .any(|laser| laser_hits_circle(self.pos, self.hitbox_radius, laser))
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::laser::LaserStyle;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const LEFT: MoveIntent = MoveIntent {
        left: true,
        right: false,
        up: false,
        down: false,
    };
    const UP_RIGHT: MoveIntent = MoveIntent {
        left: false,
        right: true,
        up: true,
        down: false,
    };

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_direction_normalization() {
        assert_eq!(MoveIntent::default().direction(), Vec2::ZERO);
        assert_eq!(LEFT.direction(), Vec2::new(-1.0, 0.0));
        let diag = UP_RIGHT.direction();
        assert!((diag.length() - 1.0).abs() < 1e-6);
        assert!(diag.x > 0.0 && diag.y < 0.0);

        let opposed = MoveIntent {
            left: true,
            right: true,
            ..Default::default()
        };
        assert!(opposed.is_empty());
    }

    #[test]
    fn test_move_and_clamp() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.handle_input(&LEFT, &bounds());
        assert_eq!(player.pos, Vec2::new(395.0, 300.0));

        let mut player = Player::new(Vec2::new(18.0, 300.0));
        player.handle_input(&LEFT, &bounds());
        assert_eq!(player.pos.x, player.radius);
    }

    #[test]
    fn test_dead_player_ignores_input() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.kill();
        player.handle_input(&LEFT, &bounds());
        assert!(!player.try_dash(&LEFT, &bounds()));
        assert_eq!(player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_dash_distance_and_default_up() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        assert!(player.try_dash(&MoveIntent::default(), &bounds()));
        assert_eq!(player.pos, Vec2::new(400.0, 220.0));
        assert_eq!(player.dash_timer, DASH_COOLDOWN_TICKS);

        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.try_dash(&UP_RIGHT, &bounds());
        let moved = player.pos - Vec2::new(400.0, 300.0);
        assert!((moved.length() - DASH_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_dash_blocked_during_cooldown() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        assert!(player.try_dash(&LEFT, &bounds()));
        let after_first = player.pos;
        player.tick_cooldown();
        assert!(!player.try_dash(&LEFT, &bounds()));
        assert_eq!(player.pos, after_first);
        assert_eq!(player.dash_timer, DASH_COOLDOWN_TICKS - 1);
    }

    #[test]
    fn test_cooldown_reaches_zero_after_full_duration() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.try_dash(&LEFT, &bounds());
        for elapsed in 1..=DASH_COOLDOWN_TICKS {
            player.tick_cooldown();
            assert_eq!(player.dash_timer, DASH_COOLDOWN_TICKS - elapsed);
        }
        player.tick_cooldown();
        assert_eq!(player.dash_timer, 0);
        assert!(player.can_dash());
    }

    #[test]
    fn test_cooldown_secs_rounds_up() {
        let mut player = Player::new(Vec2::ZERO);
        player.dash_timer = 60;
        assert_eq!(player.cooldown_secs(), 1);
        player.dash_timer = 59;
        assert_eq!(player.cooldown_secs(), 1);
        player.dash_timer = 0;
        assert_eq!(player.cooldown_secs(), 0);
    }

    #[test]
    fn test_collision_with_lasers() {
        let player = Player::new(Vec2::new(400.0, 300.0));
        let far = Laser::new(Vec2::new(0.0, 0.0), 0.0, LaserStyle::DEFAULT);
        let through = Laser::new(Vec2::new(400.0, 280.0), PI / 2.0, LaserStyle::DEFAULT);
        assert!(!player.check_collision(std::slice::from_ref(&far)));
        assert!(player.check_collision(&[far, through.clone()]));

        let mut dead = player.clone();
        dead.kill();
        assert!(!dead.check_collision(&[through]));
    }

    fn intent_strategy() -> impl Strategy<Value = (MoveIntent, bool)> {
        (any::<[bool; 4]>(), any::<bool>()).prop_map(|(keys, dash)| {
            (
                MoveIntent {
                    left: keys[0],
                    right: keys[1],
                    up: keys[2],
                    down: keys[3],
                },
                dash,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            steps in prop::collection::vec(intent_strategy(), 1..400),
            start_x in 0.0f32..800.0,
            start_y in 0.0f32..600.0,
        ) {
            let bounds = bounds();
            let mut player = Player::new(bounds.clamp_circle(Vec2::new(start_x, start_y), PLAYER_RADIUS));
            for (intent, dash) in steps {
                player.handle_input(&intent, &bounds);
                player.tick_cooldown();
                if dash {
                    player.try_dash(&intent, &bounds);
                }
                prop_assert!(player.pos.x >= player.radius && player.pos.x <= bounds.width - player.radius);
                prop_assert!(player.pos.y >= player.radius && player.pos.y <= bounds.height - player.radius);
                prop_assert!(player.dash_timer <= player.dash_cooldown);
            }
        }

        #[test]
        fn prop_cooldown_decays_by_one(ticks in 0u32..200) {
            let mut player = Player::new(Vec2::new(400.0, 300.0));
            player.try_dash(&MoveIntent::default(), &bounds());
            for _ in 0..ticks {
                let before = player.dash_timer;
                player.tick_cooldown();
                prop_assert_eq!(player.dash_timer, before.saturating_sub(1));
            }
        }
    }
}
