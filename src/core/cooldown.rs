//! Timestamp-based cooldowns measured against the monotonic game clock.

use std::time::Duration;

/// A cooldown window started at a point on the game clock.
///
/// Unlike a frame-ticked `Timer`, a cooldown only stores the timestamp it was
/// started at, so its state is the same no matter how many frames elapsed in
/// between. A cooldown started at `t` with duration `d` is running for every
/// `now` in `[t, t + d)` and finished from `t + d` on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cooldown {
    duration: Duration,
    started: Option<Duration>,
}

impl Cooldown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Start (or restart) the window at `now`.
    pub fn start(&mut self, now: Duration) {
        self.started = Some(now);
    }

    /// Forget the start timestamp.
    pub fn clear(&mut self) {
        self.started = None;
    }

    /// Whether the cooldown was started and has not been cleared since.
    pub fn is_armed(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_running(&self, now: Duration) -> bool {
        match self.started {
            Some(started) => now.saturating_sub(started) < self.duration,
            None => false,
        }
    }

    pub fn is_ready(&self, now: Duration) -> bool {
        !self.is_running(now)
    }

    /// Time since the window started, zero if it never did.
    pub fn elapsed(&self, now: Duration) -> Duration {
        self.started
            .map_or(Duration::ZERO, |started| now.saturating_sub(started))
    }

    /// Armed and fully elapsed. Callers use this to fire a one-shot
    /// "window closed" transition and then `clear()`.
    pub fn has_elapsed(&self, now: Duration) -> bool {
        self.is_armed() && !self.is_running(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn unstarted_cooldown_is_ready() {
        let cooldown = Cooldown::from_millis(500);
        assert!(cooldown.is_ready(ms(0)));
        assert!(!cooldown.has_elapsed(ms(10_000)));
    }

    #[test]
    fn window_is_half_open() {
        let mut cooldown = Cooldown::from_millis(500);
        cooldown.start(ms(1_000));

        for now in [1_000, 1_001, 1_250, 1_499] {
            assert!(cooldown.is_running(ms(now)), "expected running at {now}");
        }
        assert!(cooldown.is_ready(ms(1_500)));
        assert!(cooldown.has_elapsed(ms(1_500)));
    }

    #[test]
    fn restart_extends_window() {
        let mut cooldown = Cooldown::from_millis(200);
        cooldown.start(ms(0));
        cooldown.start(ms(150));
        assert!(cooldown.is_running(ms(300)));
        assert!(cooldown.is_ready(ms(350)));
    }

    #[test]
    fn clear_disarms() {
        let mut cooldown = Cooldown::from_millis(200);
        cooldown.start(ms(0));
        cooldown.clear();
        assert!(!cooldown.is_armed());
        assert!(cooldown.is_ready(ms(10)));
    }
}
