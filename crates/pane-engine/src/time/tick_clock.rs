use std::time::{Duration, Instant};

/// Tick timing snapshot handed to `App::on_tick`.
#[derive(Debug, Copy, Clone)]
pub struct TickTime {
    /// Time elapsed since the previous tick, in seconds.
    ///
    /// The first tick reports the time since the schedule was armed.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic tick counter, starting at zero.
    pub index: u64,
}

/// Tick clock producing `TickTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct TickClock {
    last: Instant,
    index: u64,
    dt_max: Duration,
}

impl TickClock {
    /// Creates a new clock whose baseline is `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    /// Creates a clock with a custom delta-time ceiling.
    pub fn with_max_dt(now: Instant, dt_max: Duration) -> Self {
        Self {
            last: now,
            index: 0,
            dt_max,
        }
    }

    /// Resets the clock baseline without touching the tick counter.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// Number of ticks produced so far.
    pub fn ticks(&self) -> u64 {
        self.index
    }

    /// Advances the clock to `now` and returns a new `TickTime`.
    pub fn tick(&mut self, now: Instant) -> TickTime {
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let tt = TickTime {
            dt: dt.as_secs_f32(),
            now,
            index: self.index,
        };

        self.index = self.index.wrapping_add(1);

        tt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_sequential() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(t0);

        let a = clock.tick(t0 + Duration::from_millis(16));
        let b = clock.tick(t0 + Duration::from_millis(32));

        assert_eq!(a.index, 0);
        assert_eq!(b.index, 1);
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn dt_measures_gap_between_ticks() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(t0);

        clock.tick(t0 + Duration::from_millis(10));
        let tt = clock.tick(t0 + Duration::from_millis(40));

        assert!((tt.dt - 0.030).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped_after_a_stall() {
        let t0 = Instant::now();
        let mut clock = TickClock::with_max_dt(t0, Duration::from_millis(100));

        let tt = clock.tick(t0 + Duration::from_secs(5));
        assert!((tt.dt - 0.100).abs() < 1e-6);
    }

    #[test]
    fn reset_moves_baseline_only() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(t0);
        clock.tick(t0 + Duration::from_millis(5));

        clock.reset(t0 + Duration::from_millis(200));
        let tt = clock.tick(t0 + Duration::from_millis(210));

        assert!((tt.dt - 0.010).abs() < 1e-6);
        assert_eq!(tt.index, 1);
    }
}
