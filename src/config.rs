//! Compile-time configuration.
//!
//! Every tunable of the timer lives here: tick timing, button gesture
//! thresholds, the event schedule, audio module bring-up and the LED layout.

use embassy_time::Duration;

/// Rate of the periodic tick source.
pub const TICKS_PER_SECOND: u32 = 24;

/// Period of one tick (~41.6 ms).
pub const TICK_PERIOD: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND as u64);

/// The consumer never waits longer than two ticks for a wake signal.
pub const WAKE_TIMEOUT: Duration = Duration::from_micros(2 * (1_000_000 / TICKS_PER_SECOND as u64));

/// Audio module serial line settings (8N1, write only).
pub const SERIAL_BAUD_RATE: u32 = 9600;

/// Number of seven-segment digits on the display.
pub const DISPLAY_DIGITS: usize = 2;

/// Segments per digit, including the decimal point.
pub const DIGIT_SEGMENTS: usize = 8;

/// Default number of LEDs that make up one bar segment.
pub const DEFAULT_LEDS_PER_SEGMENT: u8 = 7;

/// Strip length for the default layout (100 pixels).
pub const STRIP_LEDS: usize = DisplayLayout::DEFAULT.strip_len();

/// Button gesture thresholds, in ticks.
///
/// Hold thresholds must be strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureThresholds {
    /// Held ticks for Start/Resume
    pub press_ticks: u32,
    /// Releases shorter than this, followed by a press, abort the event
    pub double_tap_ticks: u32,
    /// Held ticks for a hard reset
    pub reset_ticks: u32,
    /// Held ticks to enter configuration mode
    pub config_ticks: u32,
}

impl GestureThresholds {
    pub const DEFAULT: Self = Self {
        press_ticks: 2,
        double_tap_ticks: 10,
        reset_ticks: TICKS_PER_SECOND * 2,
        config_ticks: TICKS_PER_SECOND * 5,
    };
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Phase boundaries of the event, in seconds since the timed question started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    /// End of the timed question (10:00)
    pub end_timed_question: u32,
    /// "25 minutes remain" announcement (25:00)
    pub announce_25_minutes: u32,
    /// "10 minutes remain" announcement (40:00)
    pub announce_10_minutes: u32,
    /// "2 minutes remain" announcement (48:00)
    pub announce_2_minutes: u32,
    /// Start of the tenths countdown (49:50)
    pub final_seconds: u32,
    /// Total event length (50:00)
    pub event_length: u32,
    /// Multiplier applied to remaining seconds before they are shown as minutes
    pub scale_speed: u32,
}

impl EventSchedule {
    pub const DEFAULT: Self = Self {
        end_timed_question: 10 * 60,
        announce_25_minutes: 25 * 60,
        announce_10_minutes: 40 * 60,
        announce_2_minutes: 48 * 60,
        final_seconds: 50 * 60 - 10,
        event_length: 50 * 60,
        scale_speed: 1,
    };

    /// Whole event in 50 seconds, displayed as if it were 50 minutes.
    pub const COMPRESSED: Self = Self {
        end_timed_question: 10,
        announce_25_minutes: 15,
        announce_10_minutes: 30,
        announce_2_minutes: 38,
        final_seconds: 40,
        event_length: 50,
        scale_speed: 60,
    };

    /// Event length as shown on the display, in whole minutes.
    pub const fn event_minutes(&self) -> u32 {
        (self.event_length * self.scale_speed).div_ceil(60)
    }
}

impl Default for EventSchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Audio module bring-up parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    /// Initial volume (0-30)
    pub volume: u8,
    /// Wait for the module to power up before the first command
    pub power_up_delay_ms: u32,
    /// Pause after setting the volume
    pub settle_delay_ms: u32,
    /// Pause after each welcome attempt
    pub retry_delay_ms: u32,
    /// How many times the welcome track is sent at bring-up
    pub welcome_attempts: u8,
}

impl AudioConfig {
    pub const DEFAULT: Self = Self {
        volume: 30,
        power_up_delay_ms: 2000,
        settle_delay_ms: 100,
        retry_delay_ms: 100,
        welcome_attempts: 2,
    };
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Physical layout of the LED strip behind the two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    /// LEDs in each of the seven bar segments; the decimal point is always one LED
    pub leds_per_segment: u8,
}

impl DisplayLayout {
    pub const DEFAULT: Self = Self {
        leds_per_segment: DEFAULT_LEDS_PER_SEGMENT,
    };

    /// LEDs used by a single digit.
    pub const fn digit_len(&self) -> usize {
        (DIGIT_SEGMENTS - 1) * self.leds_per_segment as usize + 1
    }

    /// Total LEDs in the strip.
    pub const fn strip_len(&self) -> usize {
        DISPLAY_DIGITS * self.digit_len()
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerConfig {
    pub gestures: GestureThresholds,
    pub schedule: EventSchedule,
    pub audio: AudioConfig,
    pub layout: DisplayLayout,
}

impl TimerConfig {
    pub const DEFAULT: Self = Self {
        gestures: GestureThresholds::DEFAULT,
        schedule: EventSchedule::DEFAULT,
        audio: AudioConfig::DEFAULT,
        layout: DisplayLayout::DEFAULT,
    };
}
