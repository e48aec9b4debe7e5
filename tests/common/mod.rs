#![allow(dead_code)]

use core::convert::Infallible;

use embassy_time::Instant;
use embedded_hal::delay::DelayNs;
use embedded_io::{ErrorType, Write};
use myrtio_event_timer::audio::FRAME_LEN;
use myrtio_event_timer::{
    AudioCueDispatcher, DisplayLayout, EventTimer, OutputDriver, OutputError, Rgb, SegmentDisplay,
    TimerConfig,
};

/// LED strip that keeps every committed frame.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub commits: Vec<Vec<Rgb>>,
    pub fail: bool,
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) -> Result<(), OutputError> {
        if self.fail {
            return Err(OutputError);
        }
        self.commits.push(colors.to_vec());
        Ok(())
    }
}

/// Serial port that keeps every written byte.
#[derive(Debug, Default)]
pub struct RecordingSerial {
    pub bytes: Vec<u8>,
}

impl RecordingSerial {
    pub fn frames(&self) -> Vec<[u8; FRAME_LEN]> {
        self.bytes
            .chunks(FRAME_LEN)
            .map(|chunk| chunk.try_into().unwrap())
            .collect()
    }

    /// Track numbers of every play command sent.
    pub fn played_tracks(&self) -> Vec<u16> {
        self.frames()
            .iter()
            .filter(|frame| frame[3] == 0x03)
            .map(|frame| u16::from_be_bytes([frame[5], frame[6]]))
            .collect()
    }
}

impl ErrorType for RecordingSerial {
    type Error = Infallible;
}

impl Write for RecordingSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delay that records requested waits instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

pub type TestTimer = EventTimer<RecordingOutput, RecordingSerial>;

pub fn timer_with(config: TimerConfig) -> TestTimer {
    let display = SegmentDisplay::new(RecordingOutput::default(), DisplayLayout::DEFAULT).unwrap();
    let audio = AudioCueDispatcher::new(RecordingSerial::default());
    EventTimer::new(display, audio, config, Instant::from_millis(0))
}

pub fn timer() -> TestTimer {
    timer_with(TimerConfig::DEFAULT)
}

pub const fn secs(s: u64) -> Instant {
    Instant::from_secs(s)
}
