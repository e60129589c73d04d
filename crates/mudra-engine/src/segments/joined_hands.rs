//! Joined-hands segment: both hands brought together at chest height
//!
//! Registered as a sustained pose like the menu stance.

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

/// Hands closer than this count as joined (meters)
pub const JOINED_SPAN: f32 = 0.1;

const JOINED_JOINTS: &[Joint] = &[
    Joint::HandLeft,
    Joint::HandRight,
    Joint::ShoulderCenter,
    Joint::HipCenter,
];

/// Both hands together in front of the chest
pub struct JoinedHandsTouch;

impl GestureSegment for JoinedHandsTouch {
    fn required_joints(&self) -> &'static [Joint] {
        JOINED_JOINTS
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        let top = frame.position(Joint::ShoulderCenter).y;
        let bottom = frame.position(Joint::HipCenter).y;
        let left = frame.position(Joint::HandLeft);
        let right = frame.position(Joint::HandRight);

        // both hands inside the chest band
        if left.y >= top || left.y <= bottom || right.y >= top || right.y <= bottom {
            return SegmentResult::Fail;
        }

        if (right.x - left.x).abs() < JOINED_SPAN {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}
