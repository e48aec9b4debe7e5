//! Producer and consumer halves of the tick loop.
//!
//! The producer ([`TickSource`]) runs from the periodic 24 Hz timer. It owns
//! the gesture counters and nothing else. The consumer ([`TickLoop`]) owns
//! the phase, clock and display, and only touches them after it wakes.
//!
//! On an async executor the consumer blocks on the signal with a liveness
//! timeout:
//!
//! ```ignore
//! let mut tick_loop = TickLoop::new(timer, &WAKE, Instant::now());
//!
//! loop {
//!     tick_loop.wait_tick().await?;
//! }
//! ```
//!
//! Without one, [`TickLoop::poll`] does a single non-blocking step and
//! returns the deadline the caller should sleep until.

use embassy_time::{Duration, Instant, with_timeout};
use embedded_io::Write;

use crate::OutputDriver;
use crate::config::{GestureThresholds, STRIP_LEDS, WAKE_TIMEOUT};
use crate::error::Error;
use crate::gesture::{Gesture, GestureDecoder};
use crate::signal::WakeSignal;
use crate::timer::EventTimer;

/// Periodic producer: samples the button and wakes the consumer.
pub struct TickSource<'a> {
    decoder: GestureDecoder,
    signal: &'a WakeSignal,
}

impl<'a> TickSource<'a> {
    pub const fn new(thresholds: GestureThresholds, signal: &'a WakeSignal) -> Self {
        Self {
            decoder: GestureDecoder::new(thresholds),
            signal,
        }
    }

    /// Handle one timer tick. `pressed` is the sampled button state.
    pub fn on_tick(&mut self, pressed: bool) -> Option<Gesture> {
        let gesture = self.decoder.sample(pressed);
        self.signal.raise(gesture);
        gesture
    }

    pub const fn decoder(&self) -> &GestureDecoder {
        &self.decoder
    }
}

/// Why the consumer ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeReason {
    /// The tick source raised the signal
    Signal,
    /// No signal within [`WAKE_TIMEOUT`]; run anyway
    Timeout,
}

/// Result of a poll.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// Set when the timer was stepped
    pub woke: Option<WakeReason>,
    /// Latest instant to poll again
    pub next_deadline: Instant,
    /// How long to wait until the deadline (zero if already due)
    pub sleep_duration: Duration,
}

/// Consumer loop around an [`EventTimer`].
pub struct TickLoop<'a, O: OutputDriver, S: Write, const MAX_LEDS: usize = STRIP_LEDS> {
    timer: EventTimer<O, S, MAX_LEDS>,
    signal: &'a WakeSignal,
    deadline: Instant,
    timeout: Duration,
}

impl<'a, O: OutputDriver, S: Write, const MAX_LEDS: usize> TickLoop<'a, O, S, MAX_LEDS> {
    pub fn new(timer: EventTimer<O, S, MAX_LEDS>, signal: &'a WakeSignal, now: Instant) -> Self {
        Self {
            timer,
            signal,
            deadline: now + WAKE_TIMEOUT,
            timeout: WAKE_TIMEOUT,
        }
    }

    /// Step the timer if the signal was raised or the liveness deadline passed.
    ///
    /// Ticks raised while the consumer was busy are coalesced into one step.
    pub fn poll(&mut self, now: Instant) -> Result<PollResult, Error> {
        let woke = if let Some(wake) = self.signal.take() {
            self.timer.tick(now, wake.gesture)?;
            Some(WakeReason::Signal)
        } else if now >= self.deadline {
            self.timer.tick(now, None)?;
            Some(WakeReason::Timeout)
        } else {
            None
        };

        if woke.is_some() {
            self.deadline = now + self.timeout;
        }

        Ok(PollResult {
            woke,
            next_deadline: self.deadline,
            sleep_duration: self.deadline.saturating_duration_since(now),
        })
    }

    /// Block until the signal is raised or [`WAKE_TIMEOUT`] passes, then step
    /// the timer at the current time.
    pub async fn wait_tick(&mut self) -> Result<WakeReason, Error> {
        let (reason, gesture) = match with_timeout(self.timeout, self.signal.wait()).await {
            Ok(wake) => (WakeReason::Signal, wake.gesture),
            Err(_) => (WakeReason::Timeout, None),
        };
        let now = Instant::now();
        self.timer.tick(now, gesture)?;
        self.deadline = now + self.timeout;
        Ok(reason)
    }

    pub const fn timer(&self) -> &EventTimer<O, S, MAX_LEDS> {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut EventTimer<O, S, MAX_LEDS> {
        &mut self.timer
    }
}
