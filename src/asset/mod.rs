//! Image assets
//!
//! Loading by name, sprite-sheet slicing and scaling, and upload to GPU
//! textures.

pub mod library;
pub mod sprite;

pub use library::{GameAssets, ImageSet};
pub use sprite::AssetError;
