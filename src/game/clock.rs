//! Frame pacing
//!
//! All physics constants are per frame, so the loop must not run faster than
//! the configured rate. Pacing only enforces a minimum frame interval; a slow
//! frame is never made up for.

use crate::settings::FpsLimit;

/// Native sleeps until this close to the deadline, then spins
#[cfg(not(target_arch = "wasm32"))]
const SPIN_MARGIN: f64 = 0.002;

pub struct FrameClock {
    limit: FpsLimit,
    frame_start: f64,
}

impl FrameClock {
    pub fn new(limit: FpsLimit) -> Self {
        Self {
            limit,
            frame_start: macroquad::prelude::get_time(),
        }
    }

    pub fn limit(&self) -> FpsLimit {
        self.limit
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = macroquad::prelude::get_time();
    }

    /// Seconds left until the frame deadline (None = unlocked)
    pub fn remaining(&self, now: f64) -> Option<f64> {
        let target = self.limit.frame_time()?;
        Some(target - (now - self.frame_start))
    }

    /// Block until the frame deadline.
    ///
    /// Native: sleep for the bulk, then spin-wait for precision.
    /// WASM: the browser paces frames; returns immediately.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait(&self) {
        let now = macroquad::prelude::get_time;
        while self.remaining(now()).is_some_and(|left| left > SPIN_MARGIN) {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while self.remaining(now()).is_some_and(|left| left > 0.0) {
            std::hint::spin_loop();
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn wait(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_started_at(limit: FpsLimit, start: f64) -> FrameClock {
        FrameClock {
            limit,
            frame_start: start,
        }
    }

    #[test]
    fn test_remaining() {
        let clock = clock_started_at(FpsLimit::Fps60, 10.0);
        let left = clock.remaining(10.006).unwrap();
        assert!((left - (1.0 / 60.0 - 0.006)).abs() < 1e-9);

        // Overran the frame: negative, never padded
        assert!(clock.remaining(10.05).unwrap() < 0.0);
    }

    #[test]
    fn test_unlocked_never_waits() {
        let clock = clock_started_at(FpsLimit::Unlocked, 0.0);
        assert_eq!(clock.remaining(0.0), None);
        assert_eq!(clock.limit().label(), "Unlocked");
    }
}
