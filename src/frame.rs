/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the scene started
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }

    /// Clamp delta into `[0, max_delta]`.
    ///
    /// A negative delta means the host clock went backwards; it is treated as
    /// a zero-length frame rather than running animations in reverse.
    pub fn sanitized(self, max_delta: f32) -> Self {
        let delta = if !self.delta.is_finite() {
            log::warn!("frame {}: non-finite delta {}, using 0", self.number, self.delta);
            0.0
        } else if self.delta < 0.0 {
            log::warn!("frame {}: clock went backwards by {}s", self.number, -self.delta);
            0.0
        } else {
            self.delta.min(max_delta)
        };

        Self { delta, ..self }
    }
}

/// Fixed-step frame source for headless hosts and benchmarks
///
/// Yields `frames` frames spaced `1 / fps` apart, starting at time zero.
#[derive(Debug, Clone)]
pub struct FrameIterator {
    frame_number: u64,
    frames: u64,
    step: f32,
}

impl FrameIterator {
    pub fn new(fps: f32, frames: u64) -> Self {
        Self {
            frame_number: 0,
            frames,
            step: 1.0 / fps,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.frame_number as f32 * self.step
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.frame_number >= self.frames {
            return None;
        }

        let delta = if self.frame_number == 0 { 0.0 } else { self.step };
        let info = FrameInfo::new(self.frame_number, self.time(), delta);
        self.frame_number += 1;

        Some(info)
    }
}
