use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

/// Blocks the game loop until the next fixed-rate tick.
///
/// Ticks are scheduled a whole period apart from the previous deadline, not
/// from when the frame finished, so the rate does not drift with frame cost.
/// A loop that falls more than a period behind drops the missed ticks
/// instead of running them back to back.
pub struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / frames_per_second.max(1);
        FrameClock {
            period,
            next_tick: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep until the current deadline, then schedule the next one
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_tick.checked_duration_since(now) {
            thread::sleep(remaining);
        }

        let woke = Instant::now();
        let next = next_deadline(self.next_tick, woke, self.period);
        if next != self.next_tick + self.period {
            warn!(
                behind_ms = woke.duration_since(self.next_tick).as_millis() as u64,
                "frame overran, skipping missed ticks"
            );
        }
        self.next_tick = next;
    }
}

/// Deadline following `deadline`, re-anchored to `now` once a full period late
fn next_deadline(deadline: Instant, now: Instant, period: Duration) -> Instant {
    let next = deadline + period;
    if next <= now { now + period } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_for_fifteen_fps() {
        let clock = FrameClock::new(15);
        assert_eq!(clock.period(), Duration::from_nanos(66_666_666));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.period(), Duration::from_secs(1));
    }

    #[test]
    fn test_on_time_keeps_fixed_spacing() {
        let period = Duration::from_millis(66);
        let start = Instant::now();
        let woke = start + Duration::from_millis(1);
        assert_eq!(next_deadline(start, woke, period), start + period);
    }

    #[test]
    fn test_slightly_late_does_not_drift() {
        let period = Duration::from_millis(66);
        let start = Instant::now();
        let woke = start + Duration::from_millis(40);
        assert_eq!(next_deadline(start, woke, period), start + period);
    }

    #[test]
    fn test_far_behind_drops_missed_ticks() {
        let period = Duration::from_millis(66);
        let start = Instant::now();
        let woke = start + Duration::from_millis(500);
        assert_eq!(next_deadline(start, woke, period), woke + period);
    }

    #[test]
    fn test_wait_returns_after_deadline() {
        let mut clock = FrameClock::new(200);
        let before = Instant::now();
        clock.wait();
        assert!(before.elapsed() >= Duration::from_millis(4));
    }
}
