//! Interaction session facade
//!
//! One value owning the whole pipeline: hand events latch into grip
//! state, and each sensor tick picks the primary body and drives exactly
//! one controller update. Completed gestures land in the display state.

use tracing::info;

use mudra_core::{FrameTime, GripState, HandEvent, Recognition, SkeletalFrame};
use mudra_engine::GestureController;

use crate::display::RecognitionDisplay;
use crate::hands::HandTracker;
use crate::primary::primary_body;

/// Frame-driven interaction pipeline
#[derive(Default)]
pub struct InteractionSession {
    controller: GestureController,
    hands: HandTracker,
    display: RecognitionDisplay,
}

impl InteractionSession {
    /// Session with no gestures registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with the full built-in catalog registered
    pub fn with_catalog() -> Self {
        let mut session = Self::new();
        session.controller.register_all();
        session
    }

    /// The controller, for registering additional gestures
    pub fn controller(&mut self) -> &mut GestureController {
        &mut self.controller
    }

    /// Grip state that the next `process` call will see
    #[inline]
    pub fn grip(&self) -> GripState {
        self.hands.state()
    }

    /// Latch a hand event into the grip state
    pub fn handle_hand_event(&mut self, event: HandEvent) {
        self.hands.handle(event);
    }

    /// Process one sensor tick
    ///
    /// Picks the primary body among `frames` and drives every machine
    /// once with it. Ticks with no qualifying body recognize nothing and
    /// leave all machine progress untouched.
    pub fn process(&mut self, frames: &[SkeletalFrame]) -> Vec<Recognition> {
        let Some(frame) = primary_body(frames) else {
            return Vec::new();
        };
        let recognized = self.controller.update(frame, self.hands.state());
        for recognition in &recognized {
            info!(gesture = %recognition.id, body = %recognition.body, "gesture recognized");
            self.display.note(recognition.clone());
        }
        recognized
    }

    /// Overlay text as of `now`
    pub fn label(&self, now: FrameTime) -> &str {
        self.display.label(now)
    }

    /// Display state, for overlays that want more than the label
    pub fn display(&self) -> &RecognitionDisplay {
        &self.display
    }

    /// Drop all machine progress, grips, and display state
    pub fn reset(&mut self) {
        self.controller.reset_all();
        self.hands.reset();
        self.display.clear();
    }
}
