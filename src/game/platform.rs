//! Platforms and the platform field
//!
//! The field is a fixed arena of slots. Platforms are never created or
//! destroyed after startup: when one scrolls off the bottom it is moved back
//! to the top in place, so slot indices stay stable for the whole run.

use rand::Rng;

use super::collision::Aabb;
use crate::settings::Settings;

/// Number of platform slots in the field
pub const PLATFORM_COUNT: usize = 6;

/// A static one-way platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            x,
            y,
            width: settings.platform_width,
            height: settings.platform_height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Pick a random whole-pixel x that keeps a platform fully on screen
pub fn random_platform_x<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> f32 {
    let max_x = settings.platform_max_x().floor().max(0.0) as u32;
    rng.gen_range(0..=max_x) as f32
}

/// Fixed-size arena of platforms, iterated in slot order
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformField {
    slots: [Platform; PLATFORM_COUNT],
    screen_height: f32,
}

impl PlatformField {
    /// Lay out one platform per horizontal band, top to bottom, each at a
    /// random x.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> Self {
        let band = (settings.screen_height / PLATFORM_COUNT as f32).floor();
        let slots = std::array::from_fn(|i| {
            let x = random_platform_x(rng, settings);
            Platform::new(x, i as f32 * band, settings)
        });
        Self {
            slots,
            screen_height: settings.screen_height,
        }
    }

    /// Build a field from explicit platforms (fixtures, replays)
    pub fn from_platforms(slots: [Platform; PLATFORM_COUNT], settings: &Settings) -> Self {
        Self {
            slots,
            screen_height: settings.screen_height,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Platform> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.slots
    }

    /// Move every platform down by `dy` and recycle the ones that left the
    /// screen. Returns the slots that were recycled, in slot order.
    pub fn scroll<R: Rng + ?Sized>(
        &mut self,
        dy: f32,
        rng: &mut R,
        settings: &Settings,
    ) -> Vec<usize> {
        let mut recycled = Vec::new();
        for (slot, platform) in self.slots.iter_mut().enumerate() {
            platform.y += dy;
            if platform.y > self.screen_height {
                platform.y = 0.0;
                platform.x = random_platform_x(rng, settings);
                recycled.push(slot);
            }
        }
        recycled
    }
}
