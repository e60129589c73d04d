//! Menu segment: console-style pose, hands low with the right held out
//!
//! Registered as a sustained pose, so the stance must hold across many
//! consecutive frames before it reads as deliberate.

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

/// How far sideways from the hip the held-out hand must reach (meters)
pub const MENU_REACH: f32 = 0.3;

const MENU_JOINTS: &[Joint] = &[
    Joint::HandLeft,
    Joint::HandRight,
    Joint::HipCenter,
    Joint::HipRight,
];

/// Both hands low, right hand held out from the hip
pub struct MenuPose;

impl GestureSegment for MenuPose {
    fn required_joints(&self) -> &'static [Joint] {
        MENU_JOINTS
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        let hip_y = frame.position(Joint::HipCenter).y;

        // both hands kept below the hips
        if frame.position(Joint::HandLeft).y >= hip_y
            || frame.position(Joint::HandRight).y >= hip_y
        {
            return SegmentResult::Fail;
        }

        let reach = frame.position(Joint::HandRight).x - frame.position(Joint::HipRight).x;
        if reach > MENU_REACH {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}
