//! Collision System
//!
//! Axis-aligned boxes and the one-way platform landing test. Platforms are
//! only solid from above: the player passes through them going up and lands
//! on them coming down.

use crate::settings::LandingMode;

/// Axis-aligned rectangle, origin at the top-left, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap on the x axis (touching edges don't count)
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.right() > other.x && self.x < other.right()
    }
}

/// Does a falling body land on `platform` this frame?
///
/// `body` is the body's box *after* this frame's gravity step, and
/// `velocity_y` the velocity that step used.
pub fn lands_on(body: &Aabb, velocity_y: f32, platform: &Aabb, mode: LandingMode) -> bool {
    if !body.overlaps_x(platform) {
        return false;
    }
    let top = platform.y;
    match mode {
        LandingMode::Predictive => {
            body.bottom() <= top && body.bottom() + velocity_y >= top
        }
        LandingMode::Swept => {
            body.bottom() - velocity_y <= top && body.bottom() >= top
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Aabb {
        Aabb::new(40.0, 110.0, 100.0, 10.0)
    }

    #[test]
    fn test_overlap_is_strict() {
        let p = platform();
        assert!(Aabb::new(0.0, 0.0, 41.0, 40.0).overlaps_x(&p));
        assert!(!Aabb::new(0.0, 0.0, 40.0, 40.0).overlaps_x(&p));
        assert!(Aabb::new(139.0, 0.0, 40.0, 40.0).overlaps_x(&p));
        assert!(!Aabb::new(140.0, 0.0, 40.0, 40.0).overlaps_x(&p));
    }

    #[test]
    fn test_predictive_lands_before_contact() {
        // Bottom at 100, next step of 10 reaches the top at 110
        let body = Aabb::new(50.0, 60.0, 40.0, 40.0);
        assert!(lands_on(&body, 10.0, &platform(), LandingMode::Predictive));
        // One pixel short
        assert!(!lands_on(&body, 9.0, &platform(), LandingMode::Predictive));
    }

    #[test]
    fn test_predictive_ignores_body_already_below_top() {
        let body = Aabb::new(50.0, 100.0, 40.0, 40.0);
        assert!(!lands_on(&body, 10.0, &platform(), LandingMode::Predictive));
    }

    #[test]
    fn test_swept_lands_after_crossing() {
        // Moved from bottom 100 to bottom 112 this frame
        let body = Aabb::new(50.0, 72.0, 40.0, 40.0);
        assert!(lands_on(&body, 12.0, &platform(), LandingMode::Swept));
        // The predictive rule has already missed this one
        assert!(!lands_on(&body, 12.0, &platform(), LandingMode::Predictive));
    }

    #[test]
    fn test_rising_body_never_lands() {
        let body = Aabb::new(50.0, 75.0, 40.0, 40.0);
        assert!(!lands_on(&body, -10.0, &platform(), LandingMode::Predictive));
        assert!(!lands_on(&body, -10.0, &platform(), LandingMode::Swept));
    }

    #[test]
    fn test_no_horizontal_overlap_never_lands() {
        let body = Aabb::new(200.0, 60.0, 40.0, 40.0);
        assert!(!lands_on(&body, 10.0, &platform(), LandingMode::Predictive));
        assert!(!lands_on(&body, 10.0, &platform(), LandingMode::Swept));
    }
}
