//! Game asset set
//!
//! The three images the game needs, loaded by name from the asset directory.
//! [`ImageSet`] holds decoded CPU images ready for upload; [`GameAssets`]
//! holds the GPU textures the renderer draws with.

use image::RgbaImage;
use macroquad::prelude::{FilterMode, Texture2D};
use std::path::{Path, PathBuf};

use super::sprite::{load_image, scale, slice_strip, texture_size, AssetError};
use crate::settings::Settings;

pub const CHARACTER_SHEET: &str = "character_spritesheet.png";
pub const PLATFORM_TEXTURE: &str = "platform_texture.png";
pub const BACKGROUND: &str = "sky_background.png";

/// Decoded images, already sliced and sized for drawing
#[derive(Debug, Clone)]
pub struct ImageSet {
    /// Walk animation, each frame player-sized
    pub player_frames: Vec<RgbaImage>,
    /// Platform texture at source size (stretched when drawn)
    pub platform: RgbaImage,
    /// Background, screen-sized
    pub background: RgbaImage,
}

impl ImageSet {
    /// Load every image from `dir`. The first failure aborts the load.
    pub fn load(dir: &Path, settings: &Settings) -> Result<Self, AssetError> {
        let path = |name: &str| -> PathBuf { dir.join(name) };

        let sheet = load_image(&path(CHARACTER_SHEET))?;
        let (frame_w, frame_h) = (
            settings.player_width.round() as u32,
            settings.player_height.round() as u32,
        );
        let player_frames = slice_strip(&sheet, settings.sprite_size, settings.animation_frames)?
            .iter()
            .map(|frame| scale(frame, frame_w, frame_h))
            .collect();

        let platform = load_image(&path(PLATFORM_TEXTURE))?;

        let background = scale(
            &load_image(&path(BACKGROUND))?,
            settings.screen_width.round() as u32,
            settings.screen_height.round() as u32,
        );

        Ok(Self {
            player_frames,
            platform,
            background,
        })
    }
}

/// GPU textures for one run
pub struct GameAssets {
    pub player_frames: Vec<Texture2D>,
    pub platform: Texture2D,
    pub background: Texture2D,
}

impl GameAssets {
    /// Upload decoded images. Needs a live graphics context.
    pub fn upload(images: &ImageSet) -> Result<Self, AssetError> {
        Ok(Self {
            player_frames: images
                .player_frames
                .iter()
                .map(to_texture)
                .collect::<Result<_, _>>()?,
            platform: to_texture(&images.platform)?,
            background: to_texture(&images.background)?,
        })
    }

    /// Load from the settings' asset directory and upload
    pub fn load(settings: &Settings) -> Result<Self, AssetError> {
        let dir = Path::new(&settings.asset_dir);
        log::info!("Loading assets from {}", dir.display());
        let images = ImageSet::load(dir, settings)?;
        log::info!(
            "Loaded {} player frames, platform {}x{}, background {}x{}",
            images.player_frames.len(),
            images.platform.width(),
            images.platform.height(),
            images.background.width(),
            images.background.height(),
        );
        Self::upload(&images)
    }

    /// Animation frame, wrapping out-of-range indices
    pub fn player_frame(&self, index: usize) -> Option<&Texture2D> {
        if self.player_frames.is_empty() {
            return None;
        }
        self.player_frames.get(index % self.player_frames.len())
    }
}

fn to_texture(image: &RgbaImage) -> Result<Texture2D, AssetError> {
    let (width, height) = texture_size(image)?;
    let texture = Texture2D::from_rgba8(width, height, image.as_raw());
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
