//! Gesture controller - fans frames out to every registered machine
//!
//! The controller owns the machines and drives them all from a single
//! `update` call per frame. Recognitions are collected and returned
//! synchronously; any completion also resets every machine, so one
//! physical motion never reports twice through overlapping chains.

use tracing::debug;

use mudra_core::{
    GestureId, GestureKind, GestureResult, GripState, Recognition, SkeletalFrame,
};

use crate::catalog;
use crate::machine::{GestureDefinition, GestureMachine};

/// Owns and drives the registered gesture machines
#[derive(Default)]
pub struct GestureController {
    machines: Vec<GestureMachine>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built-in gesture
    ///
    /// Pseudo-values (`All`, `None`) are not registrable and return
    /// [`GestureError::PseudoKind`](mudra_core::GestureError::PseudoKind);
    /// use [`register_all`](Self::register_all) for the full catalog.
    pub fn register(&mut self, kind: GestureKind) -> GestureResult<()> {
        let definition = catalog::builtin_definition(kind)?;
        debug!(gesture = %kind, stages = definition.len(), "gesture registered");
        self.machines.push(GestureMachine::new(kind, definition));
        Ok(())
    }

    /// Register every concrete built-in gesture
    pub fn register_all(&mut self) {
        for &kind in GestureKind::concrete() {
            // concrete kinds always carry a catalog entry
            if let Ok(definition) = catalog::builtin_definition(kind) {
                debug!(gesture = %kind, stages = definition.len(), "gesture registered");
                self.machines.push(GestureMachine::new(kind, definition));
            }
        }
    }

    /// Register a caller-defined gesture under its own name
    ///
    /// Registering the same name twice creates two independent machines.
    pub fn register_custom(&mut self, name: impl Into<String>, definition: GestureDefinition) {
        let id = GestureId::Custom(name.into());
        debug!(gesture = %id, stages = definition.len(), "gesture registered");
        self.machines.push(GestureMachine::new(id, definition));
    }

    /// Drive every machine with one frame
    ///
    /// Returns the gestures that completed on this frame, in no
    /// particular order. If any completed, all machines reset before
    /// this call returns, discarding partial progress everywhere.
    pub fn update(&mut self, frame: &SkeletalFrame, grip: GripState) -> Vec<Recognition> {
        let mut recognized = Vec::new();
        for machine in &mut self.machines {
            if let Some(recognition) = machine.update(frame, grip) {
                recognized.push(recognition);
            }
        }
        if !recognized.is_empty() {
            debug!(completed = recognized.len(), "resetting all machines");
            self.reset_all();
        }
        recognized
    }

    /// Force every machine back to idle
    pub fn reset_all(&mut self) {
        for machine in &mut self.machines {
            machine.reset();
        }
    }

    /// Registered machines, in registration order
    pub fn machines(&self) -> impl Iterator<Item = &GestureMachine> {
        self.machines.iter()
    }

    /// Number of registered machines
    #[inline]
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mudra_core::{BodyId, FrameTime, GestureError, Joint, SegmentResult};

    use super::*;
    use crate::segment::{GestureSegment, Segment};

    struct Always(SegmentResult);

    impl GestureSegment for Always {
        fn required_joints(&self) -> &'static [Joint] {
            &[]
        }

        fn check(&self, _frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
            self.0
        }
    }

    fn frame() -> SkeletalFrame {
        SkeletalFrame::new(BodyId::new(4), FrameTime::from_millis(500))
    }

    fn chain(stages: usize) -> GestureDefinition {
        GestureDefinition::sustained(Arc::new(Always(SegmentResult::Succeed)) as Segment, stages)
            .unwrap()
    }

    #[test]
    fn test_register_rejects_pseudo_kinds() {
        let mut controller = GestureController::new();
        assert_eq!(
            controller.register(GestureKind::All).unwrap_err(),
            GestureError::PseudoKind(GestureKind::All)
        );
        assert_eq!(
            controller.register(GestureKind::None).unwrap_err(),
            GestureError::PseudoKind(GestureKind::None)
        );
        assert!(controller.is_empty());
    }

    #[test]
    fn test_register_all_covers_catalog() {
        let mut controller = GestureController::new();
        controller.register_all();
        assert_eq!(controller.len(), GestureKind::concrete().len());

        let ids: Vec<&GestureId> = controller.machines().map(|m| m.id()).collect();
        for (id, kind) in ids.iter().zip(GestureKind::concrete()) {
            assert_eq!(**id, GestureId::Builtin(*kind));
        }
    }

    #[test]
    fn test_recognition_carries_frame_identity() {
        let mut controller = GestureController::new();
        controller.register_custom("snap", chain(1));

        let recognized = controller.update(&frame(), GripState::released());
        assert_eq!(recognized.len(), 1);
        assert_eq!(recognized[0].id.name(), "snap");
        assert_eq!(recognized[0].body, BodyId::new(4));
        assert_eq!(recognized[0].at, FrameTime::from_millis(500));
    }

    #[test]
    fn test_simultaneous_completions_all_reported() {
        let mut controller = GestureController::new();
        controller.register_custom("one", chain(1));
        controller.register_custom("two", chain(1));

        let mut names: Vec<String> = controller
            .update(&frame(), GripState::released())
            .iter()
            .map(|r| r.id.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["one", "two"]);
    }

    #[test]
    fn test_completion_resets_every_machine() {
        let mut controller = GestureController::new();
        controller.register_custom("slow", chain(3));
        controller.register_custom("fast", chain(2));

        assert!(controller.update(&frame(), GripState::released()).is_empty());
        let progressed: Vec<usize> = controller.machines().map(|m| m.current_index()).collect();
        assert_eq!(progressed, [1, 1]);

        // "fast" completes on the second frame and wipes "slow" too
        let recognized = controller.update(&frame(), GripState::released());
        assert_eq!(recognized.len(), 1);
        assert_eq!(recognized[0].id.name(), "fast");
        assert!(controller.machines().all(|m| m.is_idle()));
    }

    #[test]
    fn test_duplicate_registrations_run_independently() {
        let mut controller = GestureController::new();
        controller.register_custom("twin", chain(1));
        controller.register_custom("twin", chain(1));

        let recognized = controller.update(&frame(), GripState::released());
        assert_eq!(recognized.len(), 2);
        assert!(recognized.iter().all(|r| r.id.name() == "twin"));
    }

    #[test]
    fn test_reset_all_discards_progress() {
        let mut controller = GestureController::new();
        controller.register_custom("hold", chain(5));
        controller.update(&frame(), GripState::released());
        controller.update(&frame(), GripState::released());
        assert!(controller.machines().any(|m| !m.is_idle()));

        controller.reset_all();
        assert!(controller.machines().all(|m| m.is_idle()));
    }
}
