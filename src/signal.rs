//! Single-slot wake signal between the tick source and the consumer loop.
//!
//! Built on `critical-section`, so it can be raised from a timer interrupt or
//! another task. There is no queue: raising the signal while a wake is still
//! pending coalesces the two. The consumer can poll it with
//! [`WakeSignal::take`] or block on it with [`WakeSignal::wait`].

use core::cell::Cell;

use critical_section::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::gesture::Gesture;

/// A pending wake-up, optionally carrying the gesture decoded on that tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wake {
    pub gesture: Option<Gesture>,
}

/// Presence-only wake signal.
///
/// Field ownership: only the producer calls [`WakeSignal::raise`], only the
/// consumer calls [`WakeSignal::take`] and [`WakeSignal::wait`].
pub struct WakeSignal {
    slot: Mutex<Cell<Option<Wake>>>,
    ready: Signal<CriticalSectionRawMutex, ()>,
}

impl WakeSignal {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
            ready: Signal::new(),
        }
    }

    /// Raise the signal.
    ///
    /// A pending gesture is never lost: when two gestures meet in one wake
    /// the higher [`Gesture::priority`] is kept, and an empty wake keeps
    /// whatever is pending.
    pub fn raise(&self, gesture: Option<Gesture>) {
        critical_section::with(|cs| {
            let slot = self.slot.borrow(cs);
            let pending = slot.get().and_then(|wake| wake.gesture);
            slot.set(Some(Wake {
                gesture: merge(pending, gesture),
            }));
        });
        self.ready.signal(());
    }

    /// Take the pending wake, leaving the signal cleared.
    pub fn take(&self) -> Option<Wake> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// Wait until a wake is pending and take it.
    pub async fn wait(&self) -> Wake {
        loop {
            self.ready.wait().await;
            // The slot may already have been drained by `take`.
            if let Some(wake) = self.take() {
                return wake;
            }
        }
    }

    /// Whether a wake is pending.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).get().is_some())
    }
}

impl Default for WakeSignal {
    fn default() -> Self {
        Self::new()
    }
}

fn merge(pending: Option<Gesture>, new: Option<Gesture>) -> Option<Gesture> {
    match (pending, new) {
        (Some(pending), Some(new)) if pending.priority() > new.priority() => Some(pending),
        (pending, new) => new.or(pending),
    }
}
