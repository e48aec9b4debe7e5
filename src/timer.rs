//! Event state machine.
//!
//! Runs on the consumer side once per wake. Gestures are applied first, then
//! the current phase is entered (if it was just switched to), its time gate is
//! checked, and finally it renders. Every transition is rendered in the same
//! tick it happens.

use embassy_time::Instant;
use embedded_io::Write;
use log::info;

use crate::OutputDriver;
use crate::audio::AudioCueDispatcher;
use crate::clock::EventClock;
use crate::config::{STRIP_LEDS, TimerConfig};
use crate::display::{BANNER, RenderKey, SegmentDisplay};
use crate::error::Error;
use crate::gesture::Gesture;
use crate::glyph::two_digits;
use crate::phase::{Phase, RenderMode};

/// Owns the phase, the event clock and both output channels.
pub struct EventTimer<O: OutputDriver, S: Write, const MAX_LEDS: usize = STRIP_LEDS> {
    config: TimerConfig,
    banner: &'static str,

    phase: Phase,
    just_entered: bool,
    clock: EventClock,

    display: SegmentDisplay<O, MAX_LEDS>,
    audio: AudioCueDispatcher<S>,
}

impl<O: OutputDriver, S: Write, const MAX_LEDS: usize> EventTimer<O, S, MAX_LEDS> {
    /// Create the timer in [`Phase::Attract`]. Nothing is drawn or played
    /// until the first tick.
    pub fn new(
        display: SegmentDisplay<O, MAX_LEDS>,
        audio: AudioCueDispatcher<S>,
        config: TimerConfig,
        now: Instant,
    ) -> Self {
        Self {
            config,
            banner: BANNER,
            phase: Phase::Attract,
            just_entered: true,
            clock: EventClock::new(now),
            display,
            audio,
        }
    }

    /// Replace the attract mode banner.
    #[must_use]
    pub fn with_banner(mut self, banner: &'static str) -> Self {
        self.banner = banner;
        self
    }

    /// Process one wake-up.
    ///
    /// `now` is the actual current time; the caller must not assume exactly
    /// one tick passed since the previous call.
    pub fn tick(&mut self, now: Instant, gesture: Option<Gesture>) -> Result<(), Error> {
        if let Some(gesture) = gesture {
            self.apply_gesture(gesture);
        }

        self.clock.update(now);
        self.enter();

        if let Some(gate) = self.phase.time_gate(&self.config.schedule) {
            if self.clock.has_reached(gate.limit_secs) {
                info!(
                    "{:?} ended at {:.1}s, switching to {:?}",
                    self.phase,
                    self.clock.elapsed_seconds(),
                    gate.next
                );
                if let Some(cue) = gate.cue {
                    self.audio.play(cue);
                }
                self.switch_to(gate.next);
                self.enter();
            }
        }

        self.render()
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        if let Some(next) = self.phase.on_gesture(gesture) {
            info!("{:?} in {:?}, switching to {:?}", gesture, self.phase, next);
            self.switch_to(next);
        }
    }

    /// Self-transitions also count as a fresh entry.
    fn switch_to(&mut self, phase: Phase) {
        self.phase = phase;
        self.just_entered = true;
    }

    /// One-time initialization of a freshly entered phase.
    fn enter(&mut self) {
        if !self.just_entered {
            return;
        }
        self.just_entered = false;

        if self.phase.owns_clock() {
            self.clock.reset(self.clock.now());
        }
        self.display.invalidate();
        if let Some(cue) = self.phase.entry_cue() {
            self.audio.play(cue);
        }
    }

    fn render(&mut self) -> Result<(), Error> {
        let color = self.phase.color();
        let schedule = &self.config.schedule;
        match self.phase.render_mode() {
            RenderMode::Scroll => self.display.scroll(self.banner, &self.clock, color)?,
            RenderMode::EventLength => {
                let digits = two_digits(schedule.event_minutes());
                self.display.show(RenderKey::Static, digits, color)?
            }
            RenderMode::Minutes => self.display.minutes(schedule, &self.clock, color)?,
            RenderMode::Tenths => self.display.tenths(schedule, &self.clock, color)?,
            RenderMode::Finished => self.display.show(RenderKey::Static, two_digits(0), color)?,
            RenderMode::Hold => {
                let digits = self.display.digits();
                self.display.show(RenderKey::Static, digits, color)?
            }
        };
        Ok(())
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn clock(&self) -> &EventClock {
        &self.clock
    }

    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub const fn display(&self) -> &SegmentDisplay<O, MAX_LEDS> {
        &self.display
    }

    pub const fn audio(&self) -> &AudioCueDispatcher<S> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioCueDispatcher<S> {
        &mut self.audio
    }
}
