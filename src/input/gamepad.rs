//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad; every query reports nothing pressed

use macroquad::prelude::Vec2;

// Button indices (Xbox layout, matches the Web Gamepad API standard mapping)
pub mod button {
    pub const SELECT: u32 = 8;
    pub const START: u32 = 9;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform's gamepad backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
            }
        }

        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Events are processed internally by gilrs
            while gilrs.next_event().is_some() {}
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .is_some_and(|g| g.gamepads().next().is_some())
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            let Some(gp) = self.active() else { return false };
            let mapped = match button {
                super::button::SELECT => GilrsButton::Select,
                super::button::START => GilrsButton::Start,
                super::button::DPAD_LEFT => GilrsButton::DPadLeft,
                super::button::DPAD_RIGHT => GilrsButton::DPadRight,
                _ => return false,
            };
            gp.is_pressed(mapped)
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY); // Invert Y to match Web API
            apply_deadzone(x, y, self.deadzone)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// WASM: keyboard only
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    #[derive(Default)]
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Apply radial deadzone with linear rescaling
pub fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;
