//! Button gesture decoding.
//!
//! The push button is sampled once per tick. Run lengths of pressed and
//! released samples are turned into discrete, edge-triggered gestures.

use crate::config::GestureThresholds;

/// Discrete operator gesture, at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Short press: start the event, or leave the completed screen
    StartResume,
    /// Two-second hold: back to the waiting screen
    HardReset,
    /// Five-second hold: configuration mode
    EnterConfig,
    /// Double tap: end the event immediately
    Abort,
}

impl Gesture {
    /// Rank used when two gestures are merged into one wake. Holds escalate
    /// in threshold order; an abort outranks all of them.
    pub const fn priority(self) -> u8 {
        match self {
            Self::StartResume => 0,
            Self::HardReset => 1,
            Self::EnterConfig => 2,
            Self::Abort => 3,
        }
    }
}

/// Turns raw per-tick button samples into [`Gesture`]s.
///
/// Exactly one of the two counters advances per tick; the other is cleared.
#[derive(Debug, Clone)]
pub struct GestureDecoder {
    thresholds: GestureThresholds,
    pressed_ticks: u32,
    released_ticks: u32,
}

impl GestureDecoder {
    pub const fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            pressed_ticks: 0,
            released_ticks: 0,
        }
    }

    /// Feed one tick's sample. `pressed` is already inverted from the
    /// active-low line.
    pub fn sample(&mut self, pressed: bool) -> Option<Gesture> {
        if !pressed {
            self.pressed_ticks = 0;
            self.released_ticks = self.released_ticks.saturating_add(1);
            return None;
        }

        self.pressed_ticks = self.pressed_ticks.saturating_add(1);
        let released = self.released_ticks;
        self.released_ticks = 0;

        // A short release that just ended wins over any hold threshold.
        if released > 0 && released < self.thresholds.double_tap_ticks {
            return Some(Gesture::Abort);
        }

        // Equality, not >=: each threshold fires once per continuous press.
        match self.pressed_ticks {
            n if n == self.thresholds.press_ticks => Some(Gesture::StartResume),
            n if n == self.thresholds.reset_ticks => Some(Gesture::HardReset),
            n if n == self.thresholds.config_ticks => Some(Gesture::EnterConfig),
            _ => None,
        }
    }

    /// Consecutive ticks the button has been held.
    pub const fn pressed_ticks(&self) -> u32 {
        self.pressed_ticks
    }

    /// Consecutive ticks the button has been released.
    pub const fn released_ticks(&self) -> u32 {
        self.released_ticks
    }
}

impl Default for GestureDecoder {
    fn default() -> Self {
        Self::new(GestureThresholds::DEFAULT)
    }
}
