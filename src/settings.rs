//! Game settings
//!
//! Every tunable constant of the game lives here. Settings are read from an
//! optional RON file next to the executable's working directory; any field
//! missing from the file falls back to its default, so an empty `()` file is
//! a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "jump_king.ron";

/// Largest texture side the renderer can upload
pub const MAX_TEXTURE_SIZE: u32 = u16::MAX as u32;

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        SettingsError::SerializeError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

/// When the landing test is evaluated relative to the gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandingMode {
    /// Test the fall the player is *about* to make: the already-moved bottom
    /// edge must be above the platform and reach it after one more velocity
    /// step. Bounces one frame before contact.
    #[default]
    Predictive,
    /// Test the fall the player *just* made: the bottom edge was above the
    /// platform before this frame's gravity step and is at or below it now.
    Swept,
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS (physics runs at half speed)
    Fps30,
    /// 60 FPS (the rate all physics constants are tuned for)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// All game tuning parameters.
///
/// Units are pixels and frames: velocities are pixels per frame and gravity
/// is pixels per frame squared. There is no delta-time scaling anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Window / playfield width
    pub screen_width: f32,
    /// Window / playfield height
    pub screen_height: f32,

    /// Player bounding box width
    pub player_width: f32,
    /// Player bounding box height
    pub player_height: f32,
    /// Horizontal step per frame while a direction is held
    pub player_step: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set on landing (negative = up)
    pub jump_power: f32,

    /// Platform width
    pub platform_width: f32,
    /// Platform height
    pub platform_height: f32,

    /// Scroll starts when the player is above `screen_height / scroll_divisor`
    pub scroll_divisor: f32,
    /// World shift per scrolling frame
    pub scroll_speed: f32,

    /// Number of frames in the character sprite sheet
    pub animation_frames: usize,
    /// Size of one frame in the sprite sheet (square)
    pub sprite_size: u32,

    /// Landing test timing
    pub landing: LandingMode,
    /// Frame pacing
    pub fps_limit: FpsLimit,
    /// Fixed RNG seed for platform placement (None = random each run)
    pub seed: Option<u64>,

    /// Directory holding the image assets
    pub asset_dir: String,
    /// Score overlay font size
    pub score_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 400.0,
            screen_height: 600.0,
            player_width: 40.0,
            player_height: 40.0,
            player_step: 5.0,
            gravity: 1.0,
            jump_power: -15.0,
            platform_width: 100.0,
            platform_height: 10.0,
            scroll_divisor: 4.0,
            scroll_speed: 5.0,
            animation_frames: 3,
            sprite_size: 32,
            landing: LandingMode::default(),
            fps_limit: FpsLimit::default(),
            seed: None,
            asset_dir: "assets".to_string(),
            score_font_size: 36.0,
        }
    }
}

impl Settings {
    /// Where the player spawns: horizontally centred, one and a half player
    /// heights above the bottom edge.
    pub fn player_start(&self) -> (f32, f32) {
        (
            (self.screen_width / 2.0).floor() - self.player_width / 2.0,
            self.screen_height - self.player_height * 1.5,
        )
    }

    /// Largest legal player x
    pub fn player_max_x(&self) -> f32 {
        self.screen_width - self.player_width
    }

    /// Largest legal platform x
    pub fn platform_max_x(&self) -> f32 {
        self.screen_width - self.platform_width
    }

    /// Player y below which the world scrolls
    pub fn scroll_threshold(&self) -> f32 {
        (self.screen_height / self.scroll_divisor).floor()
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("scroll_divisor", self.scroll_divisor),
            ("score_font_size", self.score_font_size),
            ("gravity", self.gravity),
            ("scroll_speed", self.scroll_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !self.player_step.is_finite() || self.player_step < 0.0 {
            return Err(SettingsError::ValidationError(format!(
                "player_step must be zero or positive, got {}",
                self.player_step
            )));
        }
        if !self.jump_power.is_finite() {
            return Err(SettingsError::ValidationError(format!(
                "jump_power must be finite, got {}",
                self.jump_power
            )));
        }

        // Textures are uploaded with u16 dimensions
        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ] {
            if value.round() > MAX_TEXTURE_SIZE as f32 {
                return Err(SettingsError::ValidationError(format!(
                    "{} ({}) larger than {}",
                    name, value, MAX_TEXTURE_SIZE
                )));
            }
        }

        if self.platform_width > self.screen_width {
            return Err(SettingsError::ValidationError(format!(
                "platform_width ({}) wider than screen ({})",
                self.platform_width, self.screen_width
            )));
        }
        if self.player_width > self.screen_width {
            return Err(SettingsError::ValidationError(format!(
                "player_width ({}) wider than screen ({})",
                self.player_width, self.screen_width
            )));
        }
        if self.animation_frames == 0 {
            return Err(SettingsError::ValidationError(
                "animation_frames must be at least 1".to_string(),
            ));
        }
        if self.sprite_size == 0 {
            return Err(SettingsError::ValidationError(
                "sprite_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse settings from a RON string
    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        let settings: Settings = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to pretty RON
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let config = ron::ser::PrettyConfig::new().depth_limit(2);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    /// Load settings from `path` if it exists, defaults otherwise.
    ///
    /// A file that exists but can't be parsed is logged and ignored so a bad
    /// edit never keeps the game from starting.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_classic_game() {
        let s = Settings::default();
        assert_eq!(s.player_start(), (180.0, 540.0));
        assert_eq!(s.player_max_x(), 360.0);
        assert_eq!(s.platform_max_x(), 300.0);
        assert_eq!(s.scroll_threshold(), 150.0);
        assert_eq!(s.fps_limit.frame_time(), Some(1.0 / 60.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let s = Settings::from_ron("(gravity: 2.0, seed: Some(7), landing: Swept)").unwrap();
        assert_eq!(s.gravity, 2.0);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.landing, LandingMode::Swept);
        assert_eq!(s.screen_width, 400.0);
        assert_eq!(s.jump_power, -15.0);
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut s = Settings::default();
        s.fps_limit = FpsLimit::Fps30;
        let text = s.to_ron().unwrap();
        assert_eq!(Settings::from_ron(&text).unwrap(), s);
    }

    #[test]
    fn test_validation_rejects_wide_platform() {
        let result = Settings::from_ron("(platform_width: 500.0)");
        assert!(matches!(result, Err(SettingsError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_zero_frames() {
        let result = Settings::from_ron("(animation_frames: 0)");
        assert!(matches!(result, Err(SettingsError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_negative_step() {
        let result = Settings::from_ron("(player_step: -5.0)");
        assert!(matches!(result, Err(SettingsError::ValidationError(_))));
        // Standing still is allowed
        assert!(Settings::from_ron("(player_step: 0.0)").is_ok());
    }

    #[test]
    fn test_validation_rejects_non_positive_gravity() {
        for source in ["(gravity: 0.0)", "(gravity: -1.0)"] {
            let result = Settings::from_ron(source);
            assert!(matches!(result, Err(SettingsError::ValidationError(_))), "{}", source);
        }
    }

    #[test]
    fn test_validation_rejects_non_positive_scroll_speed() {
        for source in ["(scroll_speed: 0.0)", "(scroll_speed: -5.0)"] {
            let result = Settings::from_ron(source);
            assert!(matches!(result, Err(SettingsError::ValidationError(_))), "{}", source);
        }
    }

    #[test]
    fn test_validation_rejects_oversized_screen() {
        let result = Settings::from_ron("(screen_width: 70000.0)");
        assert!(matches!(result, Err(SettingsError::ValidationError(_))));
        assert!(Settings::from_ron("(screen_height: 65535.0)").is_ok());
    }

    #[test]
    fn test_parse_error() {
        let result = Settings::from_ron("(gravity: \"heavy\")");
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("missing.ron");
        assert_eq!(Settings::load_or_default(&missing), Settings::default());

        let broken = dir.path().join("broken.ron");
        std::fs::write(&broken, "(((").unwrap();
        assert_eq!(Settings::load_or_default(&broken), Settings::default());

        let good = dir.path().join("good.ron");
        std::fs::write(&good, "(scroll_speed: 3.0)").unwrap();
        assert_eq!(Settings::load_or_default(&good).scroll_speed, 3.0);
    }
}
