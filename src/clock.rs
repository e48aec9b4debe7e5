use embassy_time::Instant;

const MICROS_PER_TENTH: u64 = 100_000;

/// Elapsed time of the current event, resolved to a tenth of a second.
///
/// Time is always derived from instants, never from a tick count, so missed
/// or coalesced ticks do not skew it.
#[derive(Debug, Clone, Copy)]
pub struct EventClock {
    start: Instant,
    now: Instant,
    elapsed_tenths: u64,
}

impl EventClock {
    pub const fn new(now: Instant) -> Self {
        Self {
            start: now,
            now,
            elapsed_tenths: 0,
        }
    }

    /// Restart the clock at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.start = now;
        self.now = now;
        self.elapsed_tenths = 0;
    }

    /// Advance to `now`, rounding elapsed time to the nearest tenth.
    pub fn update(&mut self, now: Instant) {
        self.now = now;
        let micros = now.saturating_duration_since(self.start).as_micros();
        self.elapsed_tenths = (micros + MICROS_PER_TENTH / 2) / MICROS_PER_TENTH;
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub const fn now(&self) -> Instant {
        self.now
    }

    /// Elapsed time in tenths of a second.
    pub const fn elapsed_tenths(&self) -> u64 {
        self.elapsed_tenths
    }

    /// Elapsed whole seconds (rounded time, truncated).
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed_tenths / 10
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_tenths as f32 / 10.0
    }

    /// Whether at least `secs` seconds have elapsed.
    pub const fn has_reached(&self, secs: u32) -> bool {
        self.elapsed_tenths >= secs as u64 * 10
    }
}
