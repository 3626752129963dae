use instant::Instant;
use std::time::Duration;

/// Wall-clock source for animation time. Works on native and wasm targets.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Advance one frame; returns `(elapsed_sec, dt)`.
    pub fn tick(&mut self) -> (f32, Duration) {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        ((now - self.start).as_secs_f32(), dt)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
