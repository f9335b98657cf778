/// Global animation clock.
///
/// Animation is frame-driven: every periodic motion in the scene is a
/// function of the frame counter, not of elapsed seconds. The millisecond
/// clock only exists to schedule deferred one-shot work.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Frames rendered so far.
    frame: u64,
    /// Host time accumulated from per-frame deltas.
    now_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. `dt_ms` is the host's frame delta; negative or
    /// non-finite deltas are treated as zero.
    pub fn tick(&mut self, dt_ms: f64) {
        self.frame += 1;
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
    }

    /// Frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frame counter as animation time. Kept in `f64` so whole frames stay
    /// distinct for the life of the page.
    pub fn time(&self) -> f64 {
        self.frame as f64
    }

    /// Accumulated host time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// A deferred task that fires exactly once when its deadline passes.
/// Not cancellable, never re-armed.
#[derive(Debug, Clone)]
pub struct OneShot {
    deadline_ms: f64,
    fired: bool,
}

impl OneShot {
    /// Arm a timer `delay_ms` after `now_ms`.
    pub fn after(now_ms: f64, delay_ms: f64) -> Self {
        Self {
            deadline_ms: now_ms + delay_ms.max(0.0),
            fired: false,
        }
    }

    /// Returns true on the first poll at or past the deadline, false forever after.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.fired || now_ms < self.deadline_ms {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn deadline_ms(&self) -> f64 {
        self.deadline_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_frame_and_time() {
        let mut clock = FrameClock::new();
        clock.tick(16.0);
        clock.tick(17.0);
        assert_eq!(clock.frame(), 2);
        assert_eq!(clock.time(), 2.0);
        assert!((clock.now_ms() - 33.0).abs() < 1e-9);
    }

    #[test]
    fn time_resolves_single_frames_after_days() {
        let mut clock = FrameClock { frame: 60 * 60 * 60 * 24 * 30, now_ms: 0.0 };
        let before = clock.time();
        clock.tick(16.0);
        assert_eq!(clock.time() - before, 1.0);
    }

    #[test]
    fn bad_deltas_still_count_frames() {
        let mut clock = FrameClock::new();
        clock.tick(-5.0);
        clock.tick(f64::NAN);
        assert_eq!(clock.frame(), 2);
        assert_eq!(clock.now_ms(), 0.0);
    }

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let mut timer = OneShot::after(500.0, 1000.0);
        assert!(!timer.poll(1499.0));
        assert!(timer.poll(1500.0));
        assert!(timer.has_fired());
        assert!(!timer.poll(1500.0));
        assert!(!timer.poll(99999.0));
    }

    #[test]
    fn late_poll_still_fires() {
        let mut timer = OneShot::after(0.0, 1000.0);
        assert!(timer.poll(4000.0));
    }
}
