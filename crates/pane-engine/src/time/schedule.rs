use std::time::{Duration, Instant};

/// Interval between two ticks for a rate of `fps` ticks per second.
///
/// Computed as `1000 / fps` whole milliseconds (truncating), so 30 fps ticks every
/// 33 ms and 60 fps every 16 ms. The achieved rate is therefore slightly above the
/// requested one for rates that do not divide 1000.
///
/// Rates above 1000 would truncate to a zero interval; the interval is floored at
/// 1 ms instead. `fps` must be non-zero (validated by `DisplayConfig`).
pub fn tick_interval(fps: u32) -> Duration {
    debug_assert!(fps > 0, "tick_interval: fps must be non-zero");
    let millis = 1000 / u64::from(fps.max(1));
    Duration::from_millis(millis.max(1))
}

/// Fixed-rate deadline schedule driving `App::on_tick`.
///
/// The schedule does not own a thread. The event loop asks for the next deadline,
/// sleeps until then, and calls [`poll`](Self::poll) on wake-up. At most one firing
/// is reported per poll: when the loop stalled for several intervals the missed
/// firings are coalesced into one and the schedule rebases on the wake-up time.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    next: Option<Instant>,
    fired: u64,
    coalesced: u64,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            next: None,
            fired: 0,
            coalesced: 0,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(tick_interval(fps))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Arms the schedule; the first firing is due one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Cancels all future firings.
    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Deadline of the next firing, `None` while disarmed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Total number of firings reported by `poll`.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Number of firings dropped because the loop fell behind.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    /// Returns `true` when a firing is due at `now`, advancing the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else {
            return false;
        };

        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            let behind = now.saturating_duration_since(due).as_nanos() / self.interval.as_nanos();
            let skipped = u64::try_from(behind).unwrap_or(u64::MAX);
            self.coalesced = self.coalesced.saturating_add(skipped);
            log::trace!("tick schedule fell behind, coalescing {skipped} firing(s)");
            next = now + self.interval;
        }

        self.next = Some(next);
        self.fired += 1;
        true
    }
}
