use std::time::Instant;

use crate::frame::FrameInfo;

/// Wall clock for a live host loop
///
/// Elapsed time is measured from construction (or the last reset), deltas
/// are clamped to `max_delta` so a stalled window does not teleport objects.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
    max_delta: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new(max_delta: f32) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
            max_delta,
        }
    }

    /// Advance the clock and describe the frame that starts now
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        let time = now.duration_since(self.start).as_secs_f32();
        self.last_tick = now;

        let info = FrameInfo::new(self.frame_number, time, delta).sanitized(self.max_delta);
        self.frame_number += 1;
        info
    }

    /// Restart elapsed time from zero
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
        self.frame_number = 0;
    }
}

/// Hand-driven clock for tests and scripted hosts
#[derive(Debug, Clone)]
pub struct ManualClock {
    time: f32,
    frame_number: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            frame_number: 0,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Move forward by `dt` seconds
    pub fn advance(&mut self, dt: f32) -> FrameInfo {
        self.set(self.time + dt)
    }

    /// Jump to an absolute time; delta is whatever the jump was
    pub fn set(&mut self, time: f32) -> FrameInfo {
        let info = FrameInfo::new(self.frame_number, time, time - self.time);
        self.time = time;
        self.frame_number += 1;
        info
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new(1.0);

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        assert!(frame.delta >= 0.009 && frame.delta <= 0.5);
        assert!(frame.time >= frame.delta);
        assert_eq!(frame.number, 0);
    }

    #[test]
    fn clock_clamps_stall() {
        let mut clock = Clock::new(0.001);

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        assert_eq!(frame.delta, 0.001);
        assert!(frame.time >= 0.009);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new(1.0);

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let frame = clock.tick();
        assert!(frame.time < 0.005);
        assert_eq!(frame.number, 0);
    }

    #[test]
    fn manual_clock_advances_and_jumps() {
        let mut clock = ManualClock::new();

        let a = clock.advance(0.5);
        assert_eq!(a.time, 0.5);
        assert_eq!(a.delta, 0.5);

        let b = clock.set(2.0);
        assert_eq!(b.time, 2.0);
        assert_eq!(b.delta, 1.5);
        assert_eq!(b.number, 1);

        let back = clock.set(1.0);
        assert_eq!(back.delta, -1.0);
    }
}
