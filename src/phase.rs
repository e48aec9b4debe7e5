//! Event phases and their transition tables.
//!
//! Every phase answers every gesture (possibly with "stay") and declares at
//! most one time gate, so the whole sequencer can be read off this file.

use crate::audio::Cue;
use crate::color::{self, Rgb};
use crate::config::EventSchedule;
use crate::gesture::Gesture;

/// One state of the event sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Scrolling banner between events
    Attract,
    /// Showing the event length, waiting for the start press
    ReadyWait,
    /// First ten minutes, with the timed bonus question
    TimedQuestion,
    /// Waiting for the 25 minutes remaining mark
    PostTimed1,
    /// Waiting for the 10 minutes remaining mark
    PostTimed2,
    /// Waiting for the 2 minutes remaining mark
    PostTimed3,
    /// Waiting for the final ten seconds
    FinalWait,
    /// Final ten seconds, shown in tenths
    FinalCountdown,
    /// Event over
    Complete,
    /// Configuration mode (no behavior yet)
    Config,
}

/// How a phase draws itself each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Circular banner, two characters at a time
    Scroll,
    /// Fixed event length in minutes
    EventLength,
    /// Whole minutes remaining
    Minutes,
    /// Seconds and tenths remaining
    Tenths,
    /// "00", drawn once on entry
    Finished,
    /// Current digits recolored once on entry
    Hold,
}

/// Time-gated exit of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGate {
    /// Elapsed seconds at which the gate opens
    pub limit_secs: u32,
    /// Cue played on the way out
    pub cue: Option<Cue>,
    /// Phase entered when the gate opens
    pub next: Phase,
}

impl Phase {
    /// Phase entered for a gesture, or `None` to stay.
    pub const fn on_gesture(self, gesture: Gesture) -> Option<Self> {
        match (self, gesture) {
            (Self::Attract, Gesture::HardReset) => Some(Self::ReadyWait),
            (Self::Attract, Gesture::EnterConfig) => Some(Self::Config),
            (Self::ReadyWait, Gesture::StartResume) => Some(Self::TimedQuestion),
            (Self::Complete, Gesture::StartResume) => Some(Self::Attract),
            (Self::Complete | Self::Config, Gesture::HardReset) => Some(Self::ReadyWait),
            (phase, Gesture::HardReset) if phase.is_running() => Some(Self::ReadyWait),
            (phase, Gesture::Abort) if phase.is_running() => Some(Self::Complete),
            _ => None,
        }
    }

    /// Time gate of this phase for the given schedule.
    pub const fn time_gate(self, schedule: &EventSchedule) -> Option<TimeGate> {
        let (limit_secs, cue, next) = match self {
            Self::TimedQuestion => (
                schedule.end_timed_question,
                Some(Cue::NoMoreBonus),
                Self::PostTimed1,
            ),
            Self::PostTimed1 => (
                schedule.announce_25_minutes,
                Some(Cue::TwentyFiveMinRemain),
                Self::PostTimed2,
            ),
            Self::PostTimed2 => (
                schedule.announce_10_minutes,
                Some(Cue::TenMinRemain),
                Self::PostTimed3,
            ),
            Self::PostTimed3 => (
                schedule.announce_2_minutes,
                Some(Cue::TwoMinRemain),
                Self::FinalWait,
            ),
            Self::FinalWait => (schedule.final_seconds, None, Self::FinalCountdown),
            Self::FinalCountdown => (schedule.event_length, Some(Cue::TimesUp), Self::Complete),
            Self::Attract | Self::ReadyWait | Self::Complete | Self::Config => return None,
        };
        Some(TimeGate {
            limit_secs,
            cue,
            next,
        })
    }

    /// Phases that restart the event clock when entered.
    pub const fn owns_clock(self) -> bool {
        matches!(self, Self::Attract | Self::TimedQuestion | Self::Complete)
    }

    /// Phases during which the event is counting down.
    pub const fn is_running(self) -> bool {
        matches!(
            self,
            Self::TimedQuestion
                | Self::PostTimed1
                | Self::PostTimed2
                | Self::PostTimed3
                | Self::FinalWait
                | Self::FinalCountdown
        )
    }

    /// Cue played when the phase is entered.
    pub const fn entry_cue(self) -> Option<Cue> {
        match self {
            Self::Attract => Some(Cue::Welcome),
            _ => None,
        }
    }

    pub const fn render_mode(self) -> RenderMode {
        match self {
            Self::Attract => RenderMode::Scroll,
            Self::ReadyWait => RenderMode::EventLength,
            Self::TimedQuestion
            | Self::PostTimed1
            | Self::PostTimed2
            | Self::PostTimed3
            | Self::FinalWait => RenderMode::Minutes,
            Self::FinalCountdown => RenderMode::Tenths,
            Self::Complete => RenderMode::Finished,
            Self::Config => RenderMode::Hold,
        }
    }

    /// Color of lit segments while in this phase.
    pub const fn color(self) -> Rgb {
        match self {
            Self::Attract => color::ORANGE,
            Self::ReadyWait | Self::Complete => color::RED,
            Self::TimedQuestion => color::GREEN,
            Self::PostTimed1 | Self::PostTimed2 | Self::PostTimed3 | Self::FinalWait => {
                color::WHITE
            }
            Self::FinalCountdown => color::YELLOW,
            Self::Config => color::PURPLE,
        }
    }
}
