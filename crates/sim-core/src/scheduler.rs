use types::MAX_FPS;

/// Fixed-rate tick gate over a caller-supplied monotonic clock (seconds).
///
/// Running/Paused is the whole state machine. Pausing freezes elapsed time;
/// resuming restarts the interval from the resume instant, so an arbitrarily
/// long pause never produces a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct StepScheduler {
    fps: u32,
    paused: bool,
    last_tick: f64,
}

impl StepScheduler {
    /// Starts paused with `last_tick` at `now`.
    pub fn new(fps: u32, now: f64) -> Self {
        Self {
            fps: fps.min(MAX_FPS),
            paused: true,
            last_tick: now,
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Clamped to 0..=60. 0 disables ticking entirely.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.min(MAX_FPS);
    }

    pub fn set_paused(&mut self, paused: bool, now: f64) {
        if self.paused && !paused {
            // Resuming: the next tick needs a full fresh interval.
            self.last_tick = now;
        }
        self.paused = paused;
    }

    /// Checked once per frame. Fires at most one tick per call, when a full
    /// interval has elapsed since the last consumed tick. fps 0 never ticks
    /// and never divides.
    pub fn tick_due(&mut self, now: f64) -> bool {
        if self.paused || self.fps == 0 {
            return false;
        }
        let interval = 1.0 / self.fps as f64;
        if now - self.last_tick >= interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(fps: u32) -> StepScheduler {
        let mut s = StepScheduler::new(fps, 0.0);
        s.set_paused(false, 0.0);
        s
    }

    #[test]
    fn ten_fps_fed_fifty_ms_frames() {
        // One tick per 100 ms of accumulated time, never more than one per
        // check.
        let mut s = running(10);
        let mut ticks = 0;
        for frame in 1..=40 {
            let now = frame as f64 * 0.05;
            if s.tick_due(now) {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 20); // 2 seconds at 10 Hz
    }

    #[test]
    fn at_most_one_tick_per_check() {
        let mut s = running(10);
        // 1 full second elapsed: still a single tick on the next check.
        assert!(s.tick_due(1.0));
        assert!(!s.tick_due(1.0));
    }

    #[test]
    fn fps_zero_never_ticks() {
        let mut s = running(0);
        for now in [0.1, 1.0, 100.0, 1.0e9] {
            assert!(!s.tick_due(now));
        }
    }

    #[test]
    fn fps_clamps_to_sixty() {
        let mut s = StepScheduler::new(144, 0.0);
        assert_eq!(s.fps(), 60);
        s.set_fps(1000);
        assert_eq!(s.fps(), 60);
    }

    #[test]
    fn paused_scheduler_holds_still() {
        let mut s = StepScheduler::new(10, 0.0);
        assert!(s.is_paused());
        for now in [0.5, 5.0, 50.0] {
            assert!(!s.tick_due(now));
        }
    }

    #[test]
    fn resume_after_long_pause_has_no_burst() {
        let mut s = running(10);
        assert!(s.tick_due(0.1));
        s.set_paused(true, 0.15);
        // A very long pause...
        s.set_paused(false, 1000.0);
        // ...yields no immediate tick and at most one once a full interval
        // has passed.
        assert!(!s.tick_due(1000.0));
        assert!(!s.tick_due(1000.05));
        assert!(s.tick_due(1000.1));
        assert!(!s.tick_due(1000.1));
    }

    #[test]
    fn pause_while_paused_keeps_interval_on_resume() {
        let mut s = running(10);
        s.set_paused(true, 0.05);
        s.set_paused(true, 0.09);
        s.set_paused(false, 0.2);
        assert!(!s.tick_due(0.25));
        assert!(s.tick_due(0.3));
    }
}
