//! Jump King: an endless vertical platformer
//!
//! Core modules:
//! - `game`: simulation (player, platforms, scrolling, scoring) and drawing
//! - `asset`: image loading, sprite-sheet slicing, texture upload
//! - `input`: keyboard and gamepad folded into one per-frame snapshot
//! - `settings`: tunable constants, optionally read from a RON file

pub mod asset;
pub mod game;
pub mod input;
pub mod settings;

pub use settings::Settings;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
