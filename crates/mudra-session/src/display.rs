//! Display state for the most recent recognition
//!
//! Overlays poll this once per rendered frame instead of subscribing to
//! recognition events. A recognition stays visible for a hold window and
//! then silently ages out; nothing runs between polls.

use std::time::Duration;

use mudra_core::{FrameTime, GestureKind, Recognition};

/// How long a recognition stays visible
pub const DEFAULT_HOLD: Duration = Duration::from_secs(2);

/// Pull-based view of the latest recognition
#[derive(Debug)]
pub struct RecognitionDisplay {
    last: Option<Recognition>,
    hold: Duration,
}

impl Default for RecognitionDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionDisplay {
    pub fn new() -> Self {
        Self {
            last: None,
            hold: DEFAULT_HOLD,
        }
    }

    /// Display with a custom hold window
    pub fn with_hold(hold: Duration) -> Self {
        Self { last: None, hold }
    }

    /// Record a recognition; replaces whatever was showing
    pub fn note(&mut self, recognition: Recognition) {
        self.last = Some(recognition);
    }

    /// The recognition still inside its hold window, if any
    pub fn current(&self, now: FrameTime) -> Option<&Recognition> {
        self.last
            .as_ref()
            .filter(|recognition| now - recognition.at < self.hold)
    }

    /// Text for an overlay: the gesture's display name, or the idle label
    pub fn label(&self, now: FrameTime) -> &str {
        match self.current(now) {
            Some(recognition) => recognition.id.display_name(),
            None => GestureKind::None.display_name(),
        }
    }

    /// Forget the last recognition immediately
    pub fn clear(&mut self) {
        self.last = None;
    }
}
