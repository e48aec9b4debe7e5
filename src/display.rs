//! Two-digit seven-segment display on an addressable LED strip.
//!
//! Each bar segment is a run of `leds_per_segment` LEDs, the decimal point a
//! single LED. A whole frame is built before one atomic strip refresh, and a
//! frame is only committed when the value it was computed from changes.

use log::debug;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::clock::EventClock;
use crate::color::{BLACK, Rgb};
use crate::config::{DIGIT_SEGMENTS, DISPLAY_DIGITS, DisplayLayout, EventSchedule, STRIP_LEDS};
use crate::error::{Error, OutputError};
use crate::glyph::{SEG_ALL, SEG_DOT, SegmentMask, char_mask, digit_mask, two_digits};

/// Banner scrolled while idle.
pub const BANNER: &str = "COdEbuST^ERS  ";

/// Value a render was computed from. Renders with an unchanged key are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKey {
    /// Banner window start index
    Scroll(usize),
    /// Whole elapsed seconds
    Minutes(u64),
    /// Tenths of a second remaining
    Tenths(u64),
    /// Content fixed for the lifetime of a phase
    Static,
}

/// Adapts any `smart-leds` driver (e.g. an RMT WS2812 driver) to [`OutputDriver`].
pub struct SmartLedsOutput<W>(pub W);

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) -> Result<(), OutputError> {
        self.0.write(colors.iter().copied()).map_err(|_| OutputError)
    }
}

/// Segment display renderer.
///
/// `MAX_LEDS` is the frame buffer capacity; the layout decides how much of it
/// is used.
pub struct SegmentDisplay<O: OutputDriver, const MAX_LEDS: usize = STRIP_LEDS> {
    output: O,
    layout: DisplayLayout,
    digits: [SegmentMask; DISPLAY_DIGITS],
    color: Rgb,
    last_rendered: Option<RenderKey>,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<O: OutputDriver, const MAX_LEDS: usize> SegmentDisplay<O, MAX_LEDS> {
    /// Create a display with every segment lit, nothing committed yet.
    pub fn new(output: O, layout: DisplayLayout) -> Result<Self, Error> {
        let required = layout.strip_len();
        if required > MAX_LEDS {
            return Err(Error::LayoutTooLarge {
                required,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            output,
            layout,
            digits: [SEG_ALL; DISPLAY_DIGITS],
            color: BLACK,
            last_rendered: None,
            frame_buffer: [BLACK; MAX_LEDS],
        })
    }

    /// Forget the last rendered value so the next render always commits.
    pub fn invalidate(&mut self) {
        self.last_rendered = None;
    }

    /// Show `digits` in `color` unless `key` matches the previous render.
    ///
    /// Returns whether the strip was refreshed.
    pub fn show(
        &mut self,
        key: RenderKey,
        digits: [SegmentMask; DISPLAY_DIGITS],
        color: Rgb,
    ) -> Result<bool, Error> {
        if self.last_rendered == Some(key) {
            return Ok(false);
        }
        self.last_rendered = Some(key);
        self.digits = digits;
        self.color = color;
        self.commit()?;
        Ok(true)
    }

    /// Scroll `banner` as a circular buffer, one character every half second.
    pub fn scroll(&mut self, banner: &str, clock: &EventClock, color: Rgb) -> Result<bool, Error> {
        let len = banner.chars().count();
        if len == 0 {
            return self.show(RenderKey::Static, [0; DISPLAY_DIGITS], color);
        }
        #[allow(clippy::cast_possible_truncation)]
        let half_seconds = ((clock.elapsed_tenths() * 2 + 5) / 10) as usize;
        let slot = (half_seconds % len + len - 1) % len;
        let next = (slot + 1) % len;

        let glyph = |index: usize| banner.chars().nth(index).map_or(0, char_mask);
        self.show(RenderKey::Scroll(slot), [glyph(slot), glyph(next)], color)
    }

    /// Whole minutes remaining, rounded up. Recomputed once per elapsed second.
    pub fn minutes(
        &mut self,
        schedule: &EventSchedule,
        clock: &EventClock,
        color: Rgb,
    ) -> Result<bool, Error> {
        let key = RenderKey::Minutes(clock.elapsed_secs());
        if self.last_rendered == Some(key) {
            return Ok(false);
        }
        let length_tenths = u64::from(schedule.event_length) * 10;
        let seconds_remain = length_tenths
            .saturating_sub(clock.elapsed_tenths())
            .div_ceil(10);
        let minutes_remain = (seconds_remain * u64::from(schedule.scale_speed)).div_ceil(60);
        debug!(
            "remain: {:02}:{:02} time: {:.1}",
            minutes_remain,
            seconds_remain % 60,
            clock.elapsed_seconds()
        );
        #[allow(clippy::cast_possible_truncation)]
        let digits = two_digits((minutes_remain % 100) as u32);
        self.show(key, digits, color)
    }

    /// Seconds and tenths remaining, with the decimal point on the left digit.
    pub fn tenths(
        &mut self,
        schedule: &EventSchedule,
        clock: &EventClock,
        color: Rgb,
    ) -> Result<bool, Error> {
        let tenths_remain =
            (u64::from(schedule.event_length) * 10).saturating_sub(clock.elapsed_tenths());
        // 10.0 s is drawn as hex "A.0"; past 15.9 s the left digit falls back
        let seconds = u32::try_from(tenths_remain / 10).unwrap_or(u32::MAX);
        #[allow(clippy::cast_possible_truncation)]
        let tenths = (tenths_remain % 10) as u32;
        let digits = [digit_mask(seconds) | SEG_DOT, digit_mask(tenths)];
        self.show(RenderKey::Tenths(tenths_remain), digits, color)
    }

    /// Build the whole frame and refresh the strip once.
    pub fn commit(&mut self) -> Result<(), Error> {
        let on = self.color;
        let per_segment = usize::from(self.layout.leds_per_segment);
        let mut led = 0;
        for mask in self.digits {
            for segment in 0..DIGIT_SEGMENTS {
                let color = if mask & (1 << segment) != 0 { on } else { BLACK };
                let run = if segment == DIGIT_SEGMENTS - 1 {
                    1
                } else {
                    per_segment
                };
                self.frame_buffer[led..led + run].fill(color);
                led += run;
            }
        }
        self.output.write(&self.frame_buffer[..led])?;
        Ok(())
    }

    /// Digits currently shown.
    pub const fn digits(&self) -> [SegmentMask; DISPLAY_DIGITS] {
        self.digits
    }

    /// Color of lit segments currently shown.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn layout(&self) -> DisplayLayout {
        self.layout
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
