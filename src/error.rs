use core::fmt;

/// The LED strip rejected a pixel write or refresh.
///
/// There is no recovery path for display hardware; callers treat this as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputError;

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LED strip write failed")
    }
}

/// Errors raised by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Committing a frame to the LED strip failed
    Output(OutputError),
    /// The configured layout needs more LEDs than the frame buffer holds
    LayoutTooLarge { required: usize, capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output(err) => write!(f, "display output: {err}"),
            Self::LayoutTooLarge { required, capacity } => write!(
                f,
                "layout needs {required} LEDs, frame buffer holds {capacity}"
            ),
        }
    }
}

impl From<OutputError> for Error {
    fn from(err: OutputError) -> Self {
        Self::Output(err)
    }
}
