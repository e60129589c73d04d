//! End-to-end recognition scenarios
//!
//! The helpers here are shared with the benches and the property tests:
//! a fully registered controller, plus grip-driven segments for custom
//! definitions that need no particular pose.

use std::sync::Arc;

use mudra_core::{GestureResult, GripState, Joint, SegmentResult, SkeletalFrame};
use mudra_engine::{GestureController, GestureDefinition, GestureSegment, Segment};

/// Controller with the full built-in catalog registered
pub fn catalog_controller() -> GestureController {
    let mut controller = GestureController::new();
    controller.register_all();
    controller
}

/// Succeeds while both hands grip, fails the moment either releases
pub struct GripHeld;

impl GestureSegment for GripHeld {
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

/// Succeeds when the both-hands grip flag matches `gripped`, waits otherwise
pub struct GripPhase {
    pub gripped: bool,
}

impl GestureSegment for GripPhase {
    fn required_joints(&self) -> &'static [Joint] {
        &[]
    }

    fn check(&self, _frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if (grip.left && grip.right) == self.gripped {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Grip-pump definition: both hands gripped then released, `cycles` times
pub fn grip_pump_definition(cycles: usize) -> GestureResult<GestureDefinition> {
    let gripped: Segment = Arc::new(GripPhase { gripped: true });
    let released: Segment = Arc::new(GripPhase { gripped: false });
    let mut segments = Vec::with_capacity(cycles * 2);
    for _ in 0..cycles {
        segments.push(gripped.clone());
        segments.push(released.clone());
    }
    GestureDefinition::new(segments)
}
