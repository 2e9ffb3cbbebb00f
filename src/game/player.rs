//! Player entity
//!
//! A box that walks left and right, falls under constant gravity and bounces
//! off any platform it lands on. There is no grounded state: the player is
//! always either rising from a bounce or falling toward the next platform.

use super::collision::{lands_on, Aabb};
use super::platform::Platform;
use crate::settings::{LandingMode, Settings};

/// Horizontal input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,

    /// Current sprite frame, always < `frame_count`
    pub current_frame: usize,
    pub frame_count: usize,

    step: f32,
    gravity: f32,
    jump_power: f32,
    max_x: f32,
    landing: LandingMode,
}

impl Player {
    /// Spawn at the settings' start position, at rest
    pub fn new(settings: &Settings) -> Self {
        let (x, y) = settings.player_start();
        Self {
            x,
            y,
            width: settings.player_width,
            height: settings.player_height,
            velocity_y: 0.0,
            current_frame: 0,
            frame_count: settings.animation_frames.max(1),
            step: settings.player_step,
            gravity: settings.gravity,
            jump_power: settings.jump_power,
            max_x: settings.player_max_x(),
            landing: settings.landing,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    fn advance_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.frame_count;
    }

    /// Walk one step in each held direction that isn't blocked by a screen
    /// edge. Every step taken advances the walk animation.
    pub fn move_horizontal(&mut self, input: MoveInput) {
        if input.left && self.x > 0.0 {
            self.x = (self.x - self.step).clamp(0.0, self.max_x);
            self.advance_frame();
        }
        if input.right && self.x < self.max_x {
            self.x = (self.x + self.step).clamp(0.0, self.max_x);
            self.advance_frame();
        }
    }

    /// Accelerate downward and move by the new velocity
    pub fn apply_gravity(&mut self) {
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;
    }

    /// Launch upward. Valid in any state, including mid-air.
    pub fn jump(&mut self) {
        self.velocity_y = self.jump_power;
    }

    /// Bounce off the first platform (in field order) the player lands on.
    ///
    /// Returns true if a landing happened this frame.
    pub fn check_collision(&mut self, platforms: &[Platform]) -> bool {
        self.landing_slot(platforms).is_some()
    }

    /// Like [`Player::check_collision`], but reports which slot was hit
    pub fn landing_slot(&mut self, platforms: &[Platform]) -> Option<usize> {
        let body = self.bounds();
        let slot = platforms
            .iter()
            .position(|p| lands_on(&body, self.velocity_y, &p.bounds(), self.landing))?;
        self.jump();
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings() -> Settings {
        Settings::default()
    }

    fn player_at(x: f32, y: f32, velocity_y: f32) -> Player {
        let mut p = Player::new(&settings());
        p.x = x;
        p.y = y;
        p.velocity_y = velocity_y;
        p
    }

    #[test]
    fn test_spawn() {
        let p = Player::new(&settings());
        assert_eq!((p.x, p.y), (180.0, 540.0));
        assert_eq!((p.width, p.height), (40.0, 40.0));
        assert_eq!(p.velocity_y, 0.0);
        assert_eq!(p.current_frame, 0);
    }

    #[test]
    fn test_move_and_animate() {
        let mut p = Player::new(&settings());
        p.move_horizontal(MoveInput { left: true, right: false });
        assert_eq!(p.x, 175.0);
        assert_eq!(p.current_frame, 1);

        p.move_horizontal(MoveInput { left: false, right: true });
        p.move_horizontal(MoveInput { left: false, right: true });
        assert_eq!(p.x, 185.0);
        assert_eq!(p.current_frame, 0);
    }

    #[test]
    fn test_both_directions_cancel_but_animate_twice() {
        let mut p = Player::new(&settings());
        p.move_horizontal(MoveInput { left: true, right: true });
        assert_eq!(p.x, 180.0);
        assert_eq!(p.current_frame, 2);
    }

    #[test]
    fn test_blocked_at_edges() {
        let mut p = player_at(0.0, 300.0, 0.0);
        p.move_horizontal(MoveInput { left: true, right: false });
        assert_eq!(p.x, 0.0);
        assert_eq!(p.current_frame, 0);

        let mut p = player_at(360.0, 300.0, 0.0);
        p.move_horizontal(MoveInput { left: false, right: true });
        assert_eq!(p.x, 360.0);
        assert_eq!(p.current_frame, 0);
    }

    #[test]
    fn test_step_clamped_to_edge() {
        let mut p = player_at(2.0, 300.0, 0.0);
        p.move_horizontal(MoveInput { left: true, right: false });
        assert_eq!(p.x, 0.0);

        let mut p = player_at(358.0, 300.0, 0.0);
        p.move_horizontal(MoveInput { left: false, right: true });
        assert_eq!(p.x, 360.0);
    }

    #[test]
    fn test_negative_step_still_clamped() {
        let mut s = settings();
        s.player_step = -5.0;

        let mut p = Player::new(&s);
        p.x = 358.0;
        p.move_horizontal(MoveInput { left: true, right: false });
        assert_eq!(p.x, 360.0);

        let mut p = Player::new(&s);
        p.x = 2.0;
        p.move_horizontal(MoveInput { left: false, right: true });
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn test_gravity_arc() {
        let mut p = Player::new(&settings());
        p.apply_gravity();
        assert_eq!((p.velocity_y, p.y), (1.0, 541.0));

        let mut p = player_at(180.0, 300.0, 0.0);
        p.jump();
        assert_eq!(p.velocity_y, -15.0);
        // Apex after 15 frames, back at the start height 14 frames later
        for _ in 0..15 {
            p.apply_gravity();
        }
        assert_eq!(p.velocity_y, 0.0);
        assert_eq!(p.y, 300.0 - 105.0);
        for _ in 0..14 {
            p.apply_gravity();
        }
        assert_eq!(p.y, 300.0);
    }

    #[test]
    fn test_landing_bounces() {
        let s = settings();
        let platform = Platform { x: 40.0, y: 110.0, width: 100.0, height: 10.0 };
        let mut p = player_at(50.0, 60.0, 10.0);

        assert!(p.check_collision(&[platform]));
        assert_eq!(p.velocity_y, s.jump_power);
    }

    #[test]
    fn test_no_horizontal_overlap() {
        let platform = Platform { x: 40.0, y: 110.0, width: 100.0, height: 10.0 };
        for x in [0.0, 140.0, 300.0] {
            let mut p = player_at(x, 60.0, 10.0);
            assert!(!p.check_collision(&[platform]));
            assert_eq!(p.velocity_y, 10.0);
        }
    }

    #[test]
    fn test_first_platform_in_order_wins() {
        let a = Platform { x: 0.0, y: 110.0, width: 100.0, height: 10.0 };
        let b = Platform { x: 20.0, y: 105.0, width: 100.0, height: 10.0 };
        let mut p = player_at(50.0, 60.0, 10.0);
        assert_eq!(p.landing_slot(&[a, b]), Some(0));

        let mut p = player_at(50.0, 60.0, 10.0);
        assert_eq!(p.landing_slot(&[b, a]), Some(0));
    }

    #[test]
    fn test_swept_landing_mode() {
        let mut s = settings();
        s.landing = LandingMode::Swept;
        let platform = Platform { x: 40.0, y: 110.0, width: 100.0, height: 10.0 };

        let mut p = Player::new(&s);
        p.x = 50.0;
        p.y = 72.0;
        p.velocity_y = 12.0;
        assert!(p.check_collision(&[platform]));
        assert_eq!(p.velocity_y, -15.0);
    }

    proptest! {
        #[test]
        fn prop_x_stays_on_screen(
            start in 0.0f32..=360.0,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..200),
        ) {
            let mut p = player_at(start, 300.0, 0.0);
            for (left, right) in moves {
                p.move_horizontal(MoveInput { left, right });
                prop_assert!(p.x >= 0.0 && p.x <= 360.0);
                prop_assert!(p.current_frame < p.frame_count);
            }
        }
    }
}
