//! Audio cues over the serial MP3 module protocol.
//!
//! Every command is a fixed 10-byte frame:
//!
//! ```text
//! 7E FF 06 CMD 00 PARAM_HI PARAM_LO CHK_HI CHK_LO EF
//! ```
//!
//! The checksum is the two's complement of the sum of bytes 1..=6. Frames are
//! fire-and-forget: nothing is read back and write errors are ignored.

use embedded_hal::delay::DelayNs;
use embedded_io::Write;
use log::{debug, info, trace};

use crate::config::AudioConfig;

pub const FRAME_LEN: usize = 10;

const START_BYTE: u8 = 0x7E;
const VERSION: u8 = 0xFF;
const PAYLOAD_LEN: u8 = 0x06;
const NO_FEEDBACK: u8 = 0x00;
const END_BYTE: u8 = 0xEF;

const CMD_PLAY_TRACK: u8 = 0x03;
const CMD_SET_VOLUME: u8 = 0x06;

/// Loudest volume the module accepts.
pub const MAX_VOLUME: u8 = 30;

/// Module command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Volume level 0-30
    SetVolume(u8),
    /// Play a track by number
    PlayTrack(u16),
}

impl Command {
    pub const fn code(self) -> u8 {
        match self {
            Self::SetVolume(_) => CMD_SET_VOLUME,
            Self::PlayTrack(_) => CMD_PLAY_TRACK,
        }
    }

    pub const fn param(self) -> u16 {
        match self {
            Self::SetVolume(level) => level as u16,
            Self::PlayTrack(track) => track,
        }
    }

    /// Encode into a complete frame.
    pub const fn encode(self) -> [u8; FRAME_LEN] {
        let [param_hi, param_lo] = self.param().to_be_bytes();
        let mut frame = [
            START_BYTE,
            VERSION,
            PAYLOAD_LEN,
            self.code(),
            NO_FEEDBACK,
            param_hi,
            param_lo,
            0,
            0,
            END_BYTE,
        ];
        let [chk_hi, chk_lo] = checksum(&frame).to_be_bytes();
        frame[7] = chk_hi;
        frame[8] = chk_lo;
        frame
    }
}

/// Two's complement of the sum over version, length, command, feedback flag
/// and both parameter bytes.
pub const fn checksum(frame: &[u8; FRAME_LEN]) -> u16 {
    let mut sum: u16 = 0;
    let mut i = 1;
    while i < 7 {
        sum = sum.wrapping_add(frame[i] as u16);
        i += 1;
    }
    0u16.wrapping_sub(sum)
}

/// Semantic audio events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Welcome,
    NoMoreBonus,
    TwentyFiveMinRemain,
    TenMinRemain,
    TwoMinRemain,
    TimesUp,
}

impl Cue {
    /// Track number on the module's storage card.
    pub const fn track(self) -> u16 {
        match self {
            Self::NoMoreBonus => 1,
            Self::Welcome => 2,
            Self::TwentyFiveMinRemain => 3,
            Self::TenMinRemain => 4,
            Self::TwoMinRemain => 5,
            Self::TimesUp => 6,
        }
    }
}

/// Sends cues to the audio module over a write-only serial line.
pub struct AudioCueDispatcher<S: Write> {
    serial: S,
}

impl<S: Write> AudioCueDispatcher<S> {
    pub const fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Encode and write one command. Open loop: errors are not reported.
    pub fn send(&mut self, command: Command) {
        let frame = command.encode();
        trace!("audio frame: {:02X?}", frame);
        let _ = self.serial.write_all(&frame);
    }

    pub fn play(&mut self, cue: Cue) {
        debug!("audio: cue {:?} (track {})", cue, cue.track());
        self.send(Command::PlayTrack(cue.track()));
    }

    pub fn set_volume(&mut self, level: u8) {
        self.send(Command::SetVolume(level.min(MAX_VOLUME)));
    }

    /// Bring the module up: wait for power, set the volume, then send the
    /// welcome track `welcome_attempts` times.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D, config: &AudioConfig) {
        info!(
            "audio: waiting {} ms for module power-up",
            config.power_up_delay_ms
        );
        delay.delay_ms(config.power_up_delay_ms);

        self.set_volume(config.volume);
        delay.delay_ms(config.settle_delay_ms);

        for attempt in 1..=config.welcome_attempts {
            info!(
                "audio: playing track {} (attempt {})",
                Cue::Welcome.track(),
                attempt
            );
            self.play(Cue::Welcome);
            delay.delay_ms(config.retry_delay_ms);
        }
        info!("audio: init complete");
    }

    pub const fn serial(&self) -> &S {
        &self.serial
    }

    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }
}
