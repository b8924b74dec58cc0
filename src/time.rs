//! Time sources for pulse animation.
//!
//! Energy and glow particles animate with a sine wave driven by a
//! monotonic millisecond clock. The clock is passed into
//! [`ParticleSystem::update`](crate::ParticleSystem::update) so that tests
//! can pin it with [`FixedClock`] while games use the frame-driven [`Time`].
//!
//! # Example
//!
//! ```ignore
//! use sparkfield::time::Time;
//!
//! let mut time = Time::new();
//!
//! // In your game loop:
//! time.tick();
//! particles.update(&time);
//!
//! println!("Elapsed: {:.0}ms", time.elapsed_ms());
//! println!("Frame: {}", time.frame());
//! println!("FPS: {:.1}", time.fps());
//! ```

use std::time::{Duration, Instant};

/// A monotonic millisecond clock.
///
/// Only the phase of the value matters to particles; its epoch is arbitrary.
/// Implementations must never go backwards.
pub trait Clock {
    /// Milliseconds since the clock's epoch.
    fn now_ms(&self) -> f64;
}

/// A clock frozen at a given millisecond value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedClock(pub f64);

impl FixedClock {
    /// Move the clock forward by `ms`.
    pub fn advance(&mut self, ms: f64) {
        self.0 += ms.max(0.0);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        self.0
    }
}

/// Frame clock for game loops.
///
/// Elapsed time accumulates scaled frame deltas, so pausing or slowing time
/// also pauses or slows the pulse animation of live particles.
#[derive(Debug)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Accumulated, scaled time in milliseconds.
    elapsed_ms: f64,
    /// Scaled time since the previous frame in milliseconds.
    delta_ms: f64,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
    /// Fixed delta for deterministic replays (optional).
    fixed_delta_ms: Option<f64>,
    time_scale: f64,
}

impl Time {
    /// Create a new clock starting at zero.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            elapsed_ms: 0.0,
            delta_ms: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
            fixed_delta_ms: None,
            time_scale: 1.0,
        }
    }

    /// Advance one frame. Call once per frame, before updating particles.
    ///
    /// Returns the elapsed time in milliseconds.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame).as_secs_f64() * 1000.0;
        self.last_frame = now;

        if self.paused {
            self.delta_ms = 0.0;
            return self.elapsed_ms;
        }

        self.delta_ms = self.fixed_delta_ms.unwrap_or(raw_delta) * self.time_scale;
        self.elapsed_ms += self.delta_ms;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.elapsed_ms
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    #[inline]
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Frames ticked while not paused.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Stop elapsed time from advancing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Use a fixed per-frame delta instead of wall time. `None` restores
    /// real frame timing.
    pub fn set_fixed_delta(&mut self, delta_ms: Option<f64>) {
        self.fixed_delta_ms = delta_ms;
    }

    /// Set the time scale multiplier. Negative values clamp to zero.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset to zero elapsed time and zero frames.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.last_frame = now;
        self.elapsed_ms = 0.0;
        self.delta_ms = 0.0;
        self.frame_count = 0;
        self.fps = 0.0;
        self.fps_frame_count = 0;
        self.fps_update_time = now;
        self.paused = false;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for Time {
    fn now_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.now_ms(), 0.0);
        assert!(!time.is_paused());
        assert_eq!(time.time_scale(), 1.0);
    }

    #[test]
    fn test_time_tick() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let elapsed = time.tick();

        assert!(elapsed >= 10.0);
        assert!(time.delta_ms() > 0.0);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_time_pause() {
        let mut time = Time::new();
        time.tick();

        time.pause();
        let before = time.now_ms();
        thread::sleep(Duration::from_millis(10));
        time.tick();

        assert_eq!(time.now_ms(), before);
        assert_eq!(time.delta_ms(), 0.0);

        // The paused span is not counted after resuming
        time.resume();
        time.set_fixed_delta(Some(5.0));
        time.tick();
        assert_eq!(time.now_ms(), before + 5.0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = Time::new();
        time.set_time_scale(2.0);
        time.set_fixed_delta(Some(16.0));
        time.tick();
        assert_eq!(time.now_ms(), 32.0);

        time.set_time_scale(-1.0);
        assert_eq!(time.time_scale(), 0.0);
    }

    #[test]
    fn test_fixed_clock_is_monotonic() {
        let mut clock = FixedClock(100.0);
        clock.advance(-5.0);
        assert_eq!(clock.now_ms(), 100.0);
        clock.advance(16.5);
        assert_eq!(clock.now_ms(), 116.5);
    }
}
