//! Game Module
//!
//! The bouncing-platformer simulation and its presentation.
//!
//! Key concepts:
//! - Player: box with walk, gravity and bounce
//! - PlatformField: fixed arena of platforms recycled as the world scrolls
//! - GameState: one run; `tick` advances it a frame, headless
//! - Events: what happened during the last tick
//! - Renderer / FrameClock: the parts that need a window

pub mod clock;
pub mod collision;
pub mod event;
pub mod platform;
pub mod player;
pub mod renderer;
pub mod runtime;

// Re-export main types
pub use clock::FrameClock;
pub use event::Events;
pub use platform::{Platform, PlatformField, PLATFORM_COUNT};
pub use player::{MoveInput, Player};
pub use renderer::RenderContext;
pub use runtime::{GamePhase, GameState, TickOutcome};
