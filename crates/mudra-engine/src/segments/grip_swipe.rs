//! Grip-swipe segments: one gripped hand dragged across the body
//!
//! The grip requirement makes these deliberate drag motions, so the chains
//! are shorter than the open-hand swipes: start position, then across.

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

const GRIP_SWIPE_LEFT_START: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::ShoulderCenter,
    Joint::ShoulderRight,
];
const GRIP_SWIPE_LEFT_ACROSS: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::ShoulderCenter,
    Joint::ShoulderLeft,
    Joint::ShoulderRight,
];
const GRIP_SWIPE_RIGHT_START: &[Joint] = &[
    Joint::HandLeft,
    Joint::ElbowLeft,
    Joint::HandRight,
    Joint::HipCenter,
    Joint::ShoulderLeft,
];
const GRIP_SWIPE_RIGHT_ACROSS: &[Joint] = &[
    Joint::HandLeft,
    Joint::ElbowLeft,
    Joint::HandRight,
    Joint::HipCenter,
    Joint::ShoulderLeft,
    Joint::ShoulderRight,
];

/// Gripped right hand forward of the elbow, left hand kept below the
/// shoulder line
fn right_drag_posture(frame: &SkeletalFrame) -> bool {
    frame.position(Joint::HandRight).z < frame.position(Joint::ElbowRight).z
        && frame.position(Joint::HandLeft).y < frame.position(Joint::ShoulderCenter).y
}

/// Gripped left hand forward of the elbow, right hand kept down at the hip
fn left_drag_posture(frame: &SkeletalFrame) -> bool {
    frame.position(Joint::HandLeft).z < frame.position(Joint::ElbowLeft).z
        && frame.position(Joint::HandRight).y < frame.position(Joint::HipCenter).y
}

/// Gripped right hand out past the right shoulder
pub struct GripSwipeLeftStart;

impl GestureSegment for GripSwipeLeftStart {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_SWIPE_LEFT_START
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.right || !right_drag_posture(frame) {
            return SegmentResult::Fail;
        }
        if frame.position(Joint::HandRight).x > frame.position(Joint::ShoulderRight).x {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Gripped right hand dragged between the shoulders
pub struct GripSwipeLeftAcross;

impl GestureSegment for GripSwipeLeftAcross {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_SWIPE_LEFT_ACROSS
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.right || !right_drag_posture(frame) {
            return SegmentResult::Fail;
        }
        let hand_x = frame.position(Joint::HandRight).x;
        if hand_x < frame.position(Joint::ShoulderRight).x
            && hand_x > frame.position(Joint::ShoulderLeft).x
        {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Gripped left hand out past the left shoulder
pub struct GripSwipeRightStart;

impl GestureSegment for GripSwipeRightStart {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_SWIPE_RIGHT_START
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.left || !left_drag_posture(frame) {
            return SegmentResult::Fail;
        }
        if frame.position(Joint::HandLeft).x < frame.position(Joint::ShoulderLeft).x {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Gripped left hand dragged between the shoulders
pub struct GripSwipeRightAcross;

impl GestureSegment for GripSwipeRightAcross {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_SWIPE_RIGHT_ACROSS
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.left || !left_drag_posture(frame) {
            return SegmentResult::Fail;
        }
        let hand_x = frame.position(Joint::HandLeft).x;
        if hand_x < frame.position(Joint::ShoulderRight).x
            && hand_x > frame.position(Joint::ShoulderLeft).x
        {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}
