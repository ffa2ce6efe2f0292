use crate::{ast::AngleMode, error::DiagnosticSink, evaluate_mode_aware, evaluate_mode_blind};

/// Which entry point a session feeds its lines to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryPoint {
    /// Tracks the angle mode; `DEG` and `RAD` rescale the accumulator.
    #[default]
    ModeAware,
    /// Trig in radians; `DEG` and `RAD` do nothing.
    ModeBlind,
}

/// The caller-side state of an interactive calculation.
///
/// Owns the accumulator and the angle mode and threads both through the
/// chosen entry point, one line at a time. The entry point is fixed for the
/// lifetime of the session.
///
/// # Example
/// ```
/// use accumula::{error::Discard, interpreter::session::Session};
///
/// let mut session = Session::mode_aware();
/// session.feed("90", &mut Discard);
/// let sine = session.feed("SIN", &mut Discard);
/// assert!((sine - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    accumulator: f64,
    angle_mode:  AngleMode,
    entry:       EntryPoint,
}

impl Session {
    /// Creates a session with a zero accumulator, in degrees.
    #[must_use]
    pub const fn new(entry: EntryPoint) -> Self {
        Self { accumulator: 0.0,
               angle_mode: AngleMode::Degrees,
               entry }
    }

    /// Creates a session that tracks the angle mode.
    #[must_use]
    pub const fn mode_aware() -> Self {
        Self::new(EntryPoint::ModeAware)
    }

    /// Creates a session that ignores the angle mode.
    #[must_use]
    pub const fn mode_blind() -> Self {
        Self::new(EntryPoint::ModeBlind)
    }

    /// Replaces the starting accumulator.
    #[must_use]
    pub const fn with_accumulator(mut self, accumulator: f64) -> Self {
        self.accumulator = accumulator;
        self
    }

    /// The current accumulator.
    #[must_use]
    pub const fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The current angle mode. Never changes in a mode-blind session.
    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// The entry point lines are fed to.
    #[must_use]
    pub const fn entry_point(&self) -> EntryPoint {
        self.entry
    }

    /// Processes one command line and returns the new accumulator.
    pub fn feed(&mut self, line: &str, sink: &mut dyn DiagnosticSink) -> f64 {
        self.accumulator = match self.entry {
            EntryPoint::ModeAware => {
                evaluate_mode_aware(self.accumulator, &mut self.angle_mode, line, sink)
            },
            EntryPoint::ModeBlind => evaluate_mode_blind(self.accumulator, line, sink),
        };
        self.accumulator
    }

    /// Processes every line of `source` in order and returns the final
    /// accumulator.
    pub fn run(&mut self, source: &str, sink: &mut dyn DiagnosticSink) -> f64 {
        for line in source.lines() {
            self.feed(line, sink);
        }
        self.accumulator
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::mode_aware()
    }
}
