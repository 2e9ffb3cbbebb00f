//! Input handling with gamepad support
//!
//! Keyboard and gamepad are polled once per frame and folded into a plain
//! [`FrameInput`] snapshot that the simulation consumes.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::Action;
pub use gamepad::Gamepad;
pub use state::{FrameInput, InputState};
