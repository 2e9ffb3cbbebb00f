//! Input state management
//!
//! Polls both keyboard (macroquad) and gamepad (gilrs) input, combining them
//! into one snapshot per frame.

use macroquad::prelude::*;

use super::gamepad::{button, Gamepad};
use super::Action;
use crate::game::MoveInput;

/// Stick deflection past which the stick counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Everything the game needs to know about input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

impl FrameInput {
    /// The part of the snapshot the player entity consumes
    pub fn movement(&self) -> MoveInput {
        MoveInput {
            left: self.left,
            right: self.right,
        }
    }
}

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        // Window close must reach the game loop as a quit request instead of
        // tearing the process down behind its back.
        prevent_quit();
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame, then read the snapshot
    pub fn poll(&mut self) -> FrameInput {
        self.gamepad.poll();
        FrameInput {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            quit: self.action_down(Action::Quit) || is_quit_requested(),
        }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            Action::Quit => is_key_down(KeyCode::Escape),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let stick = self.gamepad.left_stick();
        match action {
            Action::MoveLeft => {
                self.gamepad.is_button_down(button::DPAD_LEFT) || stick.x < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                self.gamepad.is_button_down(button::DPAD_RIGHT) || stick.x > STICK_THRESHOLD
            }
            Action::Quit => {
                self.gamepad.is_button_down(button::START)
                    && self.gamepad.is_button_down(button::SELECT)
            }
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
