//! Per-gesture state machine
//!
//! A machine owns one ordered segment chain and a current-stage index.
//! Each frame advances, holds, or resets the index based on the current
//! segment's outcome; completing the chain reports a recognition and the
//! index collapses back to idle within the same update call.

use std::fmt;

use tracing::{debug, trace};

use mudra_core::{
    GestureError, GestureId, GestureResult, GripState, Recognition, SegmentResult, SkeletalFrame,
    TrackingState,
};

use crate::segment::Segment;

/// Ordered segment chain, fixed at registration time
///
/// Never empty: an empty chain would complete on the very first frame.
pub struct GestureDefinition {
    segments: Vec<Segment>,
}

impl GestureDefinition {
    /// Build a definition from an ordered segment list
    pub fn new(segments: Vec<Segment>) -> GestureResult<Self> {
        if segments.is_empty() {
            return Err(GestureError::EmptyDefinition);
        }
        Ok(Self { segments })
    }

    /// `repeats` copies of one segment: a pose held across that many
    /// consecutive satisfying frames
    pub fn sustained(segment: Segment, repeats: usize) -> GestureResult<Self> {
        if repeats == 0 {
            return Err(GestureError::EmptyDefinition);
        }
        Ok(Self {
            segments: vec![segment; repeats],
        })
    }

    /// Number of stages
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    fn stage(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

impl fmt::Debug for GestureDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureDefinition")
            .field("stages", &self.segments.len())
            .finish()
    }
}

/// State machine for one registered gesture
pub struct GestureMachine {
    id: GestureId,
    definition: GestureDefinition,
    current_index: usize,
}

impl GestureMachine {
    pub fn new(id: impl Into<GestureId>, definition: GestureDefinition) -> Self {
        Self {
            id: id.into(),
            definition,
            current_index: 0,
        }
    }

    /// Identity this machine recognizes under
    #[inline]
    pub fn id(&self) -> &GestureId {
        &self.id
    }

    /// Current stage index, always below the stage count between updates
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of stages in the chain
    #[inline]
    pub fn stage_count(&self) -> usize {
        self.definition.len()
    }

    /// Whether no progress has been made
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current_index == 0
    }

    /// Evaluate the current stage against one frame
    ///
    /// `Succeed` advances by exactly one stage; completing the chain
    /// returns the recognition and resets to idle in this same call.
    /// `Pausing` holds the stage. `Fail` and `NotAvailable` reset to idle.
    pub fn update(&mut self, frame: &SkeletalFrame, grip: GripState) -> Option<Recognition> {
        let segment = self.definition.stage(self.current_index);

        // availability gate: never evaluate geometry over untracked joints
        let result = if segment
            .required_joints()
            .iter()
            .any(|&joint| frame.tracking(joint) == TrackingState::NotTracked)
        {
            SegmentResult::NotAvailable
        } else {
            segment.check(frame, grip)
        };
        trace!(gesture = %self.id, stage = self.current_index, ?result, "segment checked");

        match result {
            SegmentResult::Succeed => {
                self.current_index += 1;
                if self.current_index == self.definition.len() {
                    self.current_index = 0;
                    debug!(gesture = %self.id, body = %frame.body, "gesture recognized");
                    return Some(Recognition {
                        id: self.id.clone(),
                        body: frame.body,
                        at: frame.timestamp,
                    });
                }
                debug!(gesture = %self.id, stage = self.current_index, "stage advanced");
            }
            SegmentResult::Pausing => {}
            SegmentResult::Fail | SegmentResult::NotAvailable => {
                if self.current_index != 0 {
                    debug!(gesture = %self.id, from_stage = self.current_index, "progress reset");
                    self.current_index = 0;
                }
            }
        }
        None
    }

    /// Force the machine back to idle
    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use mudra_core::{BodyId, FrameTime, GestureKind, Joint, JointState};

    use super::*;
    use crate::segment::GestureSegment;

    /// Test segment returning a fixed result
    struct Always(SegmentResult);

    impl GestureSegment for Always {
        fn required_joints(&self) -> &'static [Joint] {
            &[]
        }

        fn check(&self, _frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
            self.0
        }
    }

    /// Test segment satisfied only while both hands grip
    struct BothHandsGripped;

    impl GestureSegment for BothHandsGripped {
        fn required_joints(&self) -> &'static [Joint] {
            &[]
        }

        fn check(&self, _frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
            if grip.left && grip.right {
                SegmentResult::Succeed
            } else {
                SegmentResult::Fail
            }
        }
    }

    /// Test segment that would succeed, gated on the head joint
    struct NeedsHead;

    impl GestureSegment for NeedsHead {
        fn required_joints(&self) -> &'static [Joint] {
            &[Joint::Head]
        }

        fn check(&self, _frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
            SegmentResult::Succeed
        }
    }

    fn frame() -> SkeletalFrame {
        SkeletalFrame::new(BodyId::new(1), FrameTime::ZERO)
    }

    fn machine_of(results: &[SegmentResult]) -> GestureMachine {
        let segments = results
            .iter()
            .map(|&r| Arc::new(Always(r)) as Segment)
            .collect();
        GestureMachine::new(
            GestureId::Custom("test".to_string()),
            GestureDefinition::new(segments).unwrap(),
        )
    }

    #[test]
    fn test_empty_definition_rejected() {
        assert_eq!(
            GestureDefinition::new(Vec::new()).unwrap_err(),
            GestureError::EmptyDefinition
        );
        assert_eq!(
            GestureDefinition::sustained(Arc::new(Always(SegmentResult::Succeed)), 0).unwrap_err(),
            GestureError::EmptyDefinition
        );
    }

    #[test]
    fn test_succeed_advances_and_completion_normalizes() {
        let mut machine = machine_of(&[SegmentResult::Succeed, SegmentResult::Succeed]);
        let grip = GripState::released();

        assert!(machine.update(&frame(), grip).is_none());
        assert_eq!(machine.current_index(), 1);

        let recognition = machine.update(&frame(), grip).expect("chain completed");
        assert_eq!(recognition.id.name(), "test");
        // transient completion collapsed back to idle within the same call
        assert_eq!(machine.current_index(), 0);
    }

    #[test]
    fn test_pausing_holds_progress() {
        let mut machine = machine_of(&[SegmentResult::Succeed, SegmentResult::Pausing]);
        let grip = GripState::released();

        machine.update(&frame(), grip);
        assert_eq!(machine.current_index(), 1);
        for _ in 0..50 {
            assert!(machine.update(&frame(), grip).is_none());
            assert_eq!(machine.current_index(), 1);
        }
    }

    #[test]
    fn test_fail_resets_progress() {
        let mut machine = machine_of(&[SegmentResult::Succeed, SegmentResult::Fail]);
        let grip = GripState::released();

        machine.update(&frame(), grip);
        assert_eq!(machine.current_index(), 1);
        machine.update(&frame(), grip);
        assert_eq!(machine.current_index(), 0);
    }

    #[test]
    fn test_untracked_required_joint_reads_not_available() {
        // NeedsHead would succeed, but the default frame leaves every joint
        // untracked, so the gate reports NotAvailable and progress resets
        let definition = GestureDefinition::new(vec![
            Arc::new(Always(SegmentResult::Succeed)) as Segment,
            Arc::new(NeedsHead) as Segment,
        ])
        .unwrap();
        let mut machine = GestureMachine::new(GestureKind::Menu, definition);
        let grip = GripState::released();

        machine.update(&frame(), grip);
        assert_eq!(machine.current_index(), 1);
        assert!(machine.update(&frame(), grip).is_none());
        assert_eq!(machine.current_index(), 0);

        // with the head tracked the same chain completes
        let mut tracked = frame();
        tracked.set_joint(Joint::Head, JointState::tracked(0.0, 1.6, 2.5));
        machine.update(&tracked, grip);
        assert!(machine.update(&tracked, grip).is_some());
    }

    #[test]
    fn test_reset_forces_idle() {
        let mut machine = machine_of(&[SegmentResult::Succeed, SegmentResult::Pausing]);
        machine.update(&frame(), GripState::released());
        assert_eq!(machine.current_index(), 1);
        machine.reset();
        assert!(machine.is_idle());
    }

    #[test]
    fn test_sustained_needs_consecutive_succeeds() {
        let mut machine = GestureMachine::new(
            GestureId::Custom("hold".to_string()),
            GestureDefinition::sustained(Arc::new(BothHandsGripped), 5).unwrap(),
        );

        // four frames of progress, then a released frame resets everything
        for _ in 0..4 {
            assert!(machine.update(&frame(), GripState::both()).is_none());
        }
        assert_eq!(machine.current_index(), 4);
        machine.update(&frame(), GripState::released());
        assert_eq!(machine.current_index(), 0);

        // five straight gripped frames complete on the fifth
        for i in 0..5 {
            let recognition = machine.update(&frame(), GripState::both());
            assert_eq!(recognition.is_some(), i == 4);
        }
        assert_eq!(machine.current_index(), 0);
    }

    proptest! {
        /// Index tracks the trailing run of gripped frames, modulo the
        /// chain length, and never reaches the length between updates
        #[test]
        fn prop_index_matches_grip_run_model(grips in prop::collection::vec(any::<bool>(), 1..200)) {
            let repeats = 7;
            let mut machine = GestureMachine::new(
                GestureId::Custom("prop".to_string()),
                GestureDefinition::sustained(Arc::new(BothHandsGripped), repeats).unwrap(),
            );

            let mut run = 0usize;
            for &gripped in &grips {
                let grip = if gripped { GripState::both() } else { GripState::released() };
                let recognition = machine.update(&frame(), grip);

                if gripped {
                    run += 1;
                    if run == repeats {
                        prop_assert!(recognition.is_some());
                        run = 0;
                    } else {
                        prop_assert!(recognition.is_none());
                    }
                } else {
                    prop_assert!(recognition.is_none());
                    run = 0;
                }

                prop_assert_eq!(machine.current_index(), run);
                prop_assert!(machine.current_index() < machine.stage_count());
            }
        }
    }
}
