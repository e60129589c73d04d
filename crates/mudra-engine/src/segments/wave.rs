//! Wave segments: hand raised above the elbow, swinging past it
//!
//! A full wave alternates the outward and inward stages three times.

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

const RIGHT_ARM: &[Joint] = &[Joint::HandRight, Joint::ElbowRight];
const LEFT_ARM: &[Joint] = &[Joint::HandLeft, Joint::ElbowLeft];

/// Right hand raised, swung out past the elbow
pub struct WaveRightOut;

impl GestureSegment for WaveRightOut {
    fn required_joints(&self) -> &'static [Joint] {
        RIGHT_ARM
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        let hand = frame.position(Joint::HandRight);
        let elbow = frame.position(Joint::ElbowRight);

        // hand above the elbow
        if hand.y <= elbow.y {
            return SegmentResult::Fail;
        }
        if hand.x > elbow.x {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Right hand raised, swung back across the elbow
pub struct WaveRightIn;

impl GestureSegment for WaveRightIn {
    fn required_joints(&self) -> &'static [Joint] {
        RIGHT_ARM
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        let hand = frame.position(Joint::HandRight);
        let elbow = frame.position(Joint::ElbowRight);

        if hand.y <= elbow.y {
            return SegmentResult::Fail;
        }
        if hand.x < elbow.x {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Left hand raised, swung out past the elbow
pub struct WaveLeftOut;

impl GestureSegment for WaveLeftOut {
    fn required_joints(&self) -> &'static [Joint] {
        LEFT_ARM
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        let hand = frame.position(Joint::HandLeft);
        let elbow = frame.position(Joint::ElbowLeft);

        if hand.y <= elbow.y {
            return SegmentResult::Fail;
        }
        if hand.x < elbow.x {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Left hand raised, swung back across the elbow
pub struct WaveLeftIn;

impl GestureSegment for WaveLeftIn {
    fn required_joints(&self) -> &'static [Joint] {
        LEFT_ARM
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        let hand = frame.position(Joint::HandLeft);
        let elbow = frame.position(Joint::ElbowLeft);

        if hand.y <= elbow.y {
            return SegmentResult::Fail;
        }
        if hand.x > elbow.x {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}
