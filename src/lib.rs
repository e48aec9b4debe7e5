#![no_std]

pub mod audio;
pub mod clock;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod gesture;
pub mod glyph;
#[cfg(feature = "esp32-log")]
pub mod logging;
pub mod phase;
pub mod signal;
pub mod tick;
pub mod timer;

pub use audio::{AudioCueDispatcher, Command, Cue};
pub use clock::EventClock;
pub use config::{
    AudioConfig, DisplayLayout, EventSchedule, GestureThresholds, TICK_PERIOD, TimerConfig,
    WAKE_TIMEOUT,
};
pub use display::{SegmentDisplay, SmartLedsOutput};
pub use error::{Error, OutputError};
pub use gesture::{Gesture, GestureDecoder};
pub use phase::Phase;
pub use signal::WakeSignal;
pub use tick::{TickLoop, TickSource};
pub use timer::EventTimer;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms. One call
/// writes the whole strip and refreshes it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), OutputError>;
}
