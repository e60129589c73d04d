//! Hand grip tracking
//!
//! The sensor reports grips as discrete per-hand events, but segments
//! evaluate a persistent [`GripState`] every frame. The tracker latches
//! each event until the opposite event for the same hand arrives.

use tracing::trace;

use mudra_core::{GripState, HandEvent, HandEventKind, HandSide};

/// Latches discrete hand events into per-frame grip state
#[derive(Debug, Default, Clone, Copy)]
pub struct HandTracker {
    state: GripState,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one hand event
    pub fn handle(&mut self, event: HandEvent) {
        let gripped = match event.kind {
            HandEventKind::Grip => true,
            HandEventKind::GripRelease => false,
        };
        match event.side {
            HandSide::Left => self.state.left = gripped,
            HandSide::Right => self.state.right = gripped,
        }
        trace!(side = event.side.as_str(), gripped, "hand state latched");
    }

    /// Grip state as of the last handled event
    #[inline]
    pub fn state(&self) -> GripState {
        self.state
    }

    /// Drop both grips, as if both hands released
    pub fn reset(&mut self) {
        self.state = GripState::released();
    }
}
