use std::time::{Duration, Instant};

/// Paces the render loop with a fixed delay after each frame and tracks
/// the time elapsed since the loop started.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    frame_delay: Duration,
    frames: u64,
}

impl FrameClock {
    /// Starts a clock sleeping `frame_delay` after every frame.
    pub fn new(frame_delay: Duration) -> FrameClock {
        FrameClock {
            start: Instant::now(),
            frame_delay,
            frames: 0,
        }
    }

    /// The delay applied after each frame.
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Changes the delay applied after each frame.
    #[inline]
    pub fn set_frame_delay(&mut self, frame_delay: Duration) {
        self.frame_delay = frame_delay;
    }

    /// Milliseconds elapsed since the clock started.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Number of frames completed.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Ends a frame: sleeps for the frame delay.
    pub fn end_frame(&mut self) {
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_frame_sleeps_and_counts() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let before = Instant::now();
        clock.end_frame();
        clock.end_frame();
        assert!(before.elapsed() >= Duration::from_millis(10));
        assert_eq!(clock.frames(), 2);
        assert!(clock.ticks() >= 10);
    }

    #[test]
    fn zero_delay_does_not_sleep() {
        let mut clock = FrameClock::new(Duration::ZERO);
        clock.set_frame_delay(Duration::ZERO);
        clock.end_frame();
        assert_eq!(clock.frames(), 1);
        assert_eq!(clock.frame_delay(), Duration::ZERO);
    }
}
