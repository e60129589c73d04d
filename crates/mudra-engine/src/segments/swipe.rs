//! Swipe segments: one hand sweeping across or up/down the body
//!
//! Horizontal swipes are named for the travel direction, so SwipeLeft is
//! the right hand sweeping toward the left. All stages require the acting
//! hand held forward of its elbow with the off hand kept down at the hip,
//! which keeps casual two-handed motion from reading as a swipe.

use mudra_core::{GripState, Joint, Position3, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

const SWIPE_LEFT_START: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::HipCenter,
    Joint::Head,
    Joint::ShoulderRight,
];
const SWIPE_LEFT_ACROSS: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::HipCenter,
    Joint::Head,
    Joint::ShoulderLeft,
    Joint::ShoulderRight,
];
const SWIPE_LEFT_END: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::HipCenter,
    Joint::Head,
    Joint::ShoulderLeft,
];

const SWIPE_RIGHT_START: &[Joint] = &[
    Joint::HandLeft,
    Joint::ElbowLeft,
    Joint::HandRight,
    Joint::HipCenter,
    Joint::Head,
    Joint::ShoulderLeft,
];
const SWIPE_RIGHT_ACROSS: &[Joint] = &[
    Joint::HandLeft,
    Joint::ElbowLeft,
    Joint::HandRight,
    Joint::HipCenter,
    Joint::Head,
    Joint::ShoulderLeft,
    Joint::ShoulderRight,
];
const SWIPE_RIGHT_END: &[Joint] = &[
    Joint::HandLeft,
    Joint::ElbowLeft,
    Joint::HandRight,
    Joint::HipCenter,
    Joint::Head,
    Joint::ShoulderRight,
];

const SWIPE_LOW: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::HipCenter,
    Joint::ShoulderCenter,
];
const SWIPE_MID: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::HipCenter,
    Joint::ShoulderCenter,
    Joint::Head,
];
const SWIPE_HIGH: &[Joint] = &[
    Joint::HandRight,
    Joint::ElbowRight,
    Joint::HandLeft,
    Joint::HipCenter,
    Joint::Head,
];

/// Right hand forward of the elbow, left hand kept down at the hip
fn right_sweep_posture(frame: &SkeletalFrame) -> bool {
    frame.position(Joint::HandRight).z < frame.position(Joint::ElbowRight).z
        && frame.position(Joint::HandLeft).y < frame.position(Joint::HipCenter).y
}

/// Right hand between hip and head height
fn right_hand_in_band(frame: &SkeletalFrame) -> bool {
    let y = frame.position(Joint::HandRight).y;
    y < frame.position(Joint::Head).y && y > frame.position(Joint::HipCenter).y
}

/// Left hand forward of the elbow, right hand kept down at the hip
fn left_sweep_posture(frame: &SkeletalFrame) -> bool {
    frame.position(Joint::HandLeft).z < frame.position(Joint::ElbowLeft).z
        && frame.position(Joint::HandRight).y < frame.position(Joint::HipCenter).y
}

/// Left hand between hip and head height
fn left_hand_in_band(frame: &SkeletalFrame) -> bool {
    let y = frame.position(Joint::HandLeft).y;
    y < frame.position(Joint::Head).y && y > frame.position(Joint::HipCenter).y
}

fn succeed_when(condition: bool) -> SegmentResult {
    if condition {
        SegmentResult::Succeed
    } else {
        SegmentResult::Pausing
    }
}

/// Right hand out past the right shoulder
pub struct SwipeLeftStart;

impl GestureSegment for SwipeLeftStart {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_LEFT_START
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !right_sweep_posture(frame) || !right_hand_in_band(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(frame.position(Joint::HandRight).x > frame.position(Joint::ShoulderRight).x)
    }
}

/// Right hand crossing between the shoulders
pub struct SwipeLeftAcross;

impl GestureSegment for SwipeLeftAcross {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_LEFT_ACROSS
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !right_sweep_posture(frame) || !right_hand_in_band(frame) {
            return SegmentResult::Fail;
        }
        let hand: Position3 = frame.position(Joint::HandRight);
        succeed_when(
            hand.x < frame.position(Joint::ShoulderRight).x
                && hand.x > frame.position(Joint::ShoulderLeft).x,
        )
    }
}

/// Right hand carried past the left shoulder
pub struct SwipeLeftEnd;

impl GestureSegment for SwipeLeftEnd {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_LEFT_END
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !right_sweep_posture(frame) || !right_hand_in_band(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(frame.position(Joint::HandRight).x < frame.position(Joint::ShoulderLeft).x)
    }
}

/// Left hand out past the left shoulder
pub struct SwipeRightStart;

impl GestureSegment for SwipeRightStart {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_RIGHT_START
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !left_sweep_posture(frame) || !left_hand_in_band(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(frame.position(Joint::HandLeft).x < frame.position(Joint::ShoulderLeft).x)
    }
}

/// Left hand crossing between the shoulders
pub struct SwipeRightAcross;

impl GestureSegment for SwipeRightAcross {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_RIGHT_ACROSS
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !left_sweep_posture(frame) || !left_hand_in_band(frame) {
            return SegmentResult::Fail;
        }
        let hand = frame.position(Joint::HandLeft);
        succeed_when(
            hand.x > frame.position(Joint::ShoulderLeft).x
                && hand.x < frame.position(Joint::ShoulderRight).x,
        )
    }
}

/// Left hand carried past the right shoulder
pub struct SwipeRightEnd;

impl GestureSegment for SwipeRightEnd {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_RIGHT_END
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !left_sweep_posture(frame) || !left_hand_in_band(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(frame.position(Joint::HandLeft).x > frame.position(Joint::ShoulderRight).x)
    }
}

/// Right hand between hip and shoulder height
///
/// The vertical stages chain low-mid-high for SwipeUp and high-mid-low for
/// SwipeDown.
pub struct SwipeLow;

impl GestureSegment for SwipeLow {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_LOW
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !right_sweep_posture(frame) {
            return SegmentResult::Fail;
        }
        let y = frame.position(Joint::HandRight).y;
        succeed_when(
            y > frame.position(Joint::HipCenter).y && y < frame.position(Joint::ShoulderCenter).y,
        )
    }
}

/// Right hand between shoulder and head height
pub struct SwipeMid;

impl GestureSegment for SwipeMid {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_MID
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !right_sweep_posture(frame) {
            return SegmentResult::Fail;
        }
        let y = frame.position(Joint::HandRight).y;
        succeed_when(
            y > frame.position(Joint::ShoulderCenter).y && y < frame.position(Joint::Head).y,
        )
    }
}

/// Right hand above the head
pub struct SwipeHigh;

impl GestureSegment for SwipeHigh {
    fn required_joints(&self) -> &'static [Joint] {
        SWIPE_HIGH
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !right_sweep_posture(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(frame.position(Joint::HandRight).y > frame.position(Joint::Head).y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mudra_core::{BodyId, FrameTime, JointState};

    /// Torso fixture with the right hand forward and the left hand down
    fn sweep_frame(hand_x: f32, hand_y: f32) -> SkeletalFrame {
        let mut frame = SkeletalFrame::new(BodyId::new(1), FrameTime::ZERO);
        frame.set_joint(Joint::HipCenter, JointState::tracked(0.0, 0.9, 2.5));
        frame.set_joint(Joint::ShoulderCenter, JointState::tracked(0.0, 1.35, 2.5));
        frame.set_joint(Joint::Head, JointState::tracked(0.0, 1.6, 2.5));
        frame.set_joint(Joint::ShoulderLeft, JointState::tracked(-0.2, 1.3, 2.5));
        frame.set_joint(Joint::ShoulderRight, JointState::tracked(0.2, 1.3, 2.5));
        frame.set_joint(Joint::ElbowRight, JointState::tracked(0.3, 1.05, 2.5));
        frame.set_joint(Joint::HandLeft, JointState::tracked(-0.35, 0.78, 2.5));
        frame.set_joint(Joint::HandRight, JointState::tracked(hand_x, hand_y, 2.3));
        frame
    }

    #[test]
    fn test_swipe_left_stages() {
        let grip = GripState::released();

        let start = sweep_frame(0.35, 1.0);
        assert_eq!(SwipeLeftStart.check(&start, grip), SegmentResult::Succeed);
        assert_eq!(SwipeLeftAcross.check(&start, grip), SegmentResult::Pausing);

        let across = sweep_frame(0.0, 1.0);
        assert_eq!(SwipeLeftAcross.check(&across, grip), SegmentResult::Succeed);
        assert_eq!(SwipeLeftEnd.check(&across, grip), SegmentResult::Pausing);

        let end = sweep_frame(-0.35, 1.0);
        assert_eq!(SwipeLeftEnd.check(&end, grip), SegmentResult::Succeed);
    }

    #[test]
    fn test_swipe_fails_when_hand_leaves_band() {
        let grip = GripState::released();
        // above the head
        let frame = sweep_frame(0.35, 1.7);
        assert_eq!(SwipeLeftStart.check(&frame, grip), SegmentResult::Fail);
        // below the hip
        let frame = sweep_frame(0.35, 0.8);
        assert_eq!(SwipeLeftStart.check(&frame, grip), SegmentResult::Fail);
    }

    #[test]
    fn test_swipe_fails_when_hand_not_forward() {
        let grip = GripState::released();
        let mut frame = sweep_frame(0.35, 1.0);
        // hand pulled back behind the elbow
        frame.set_joint(Joint::HandRight, JointState::tracked(0.35, 1.0, 2.6));
        assert_eq!(SwipeLeftStart.check(&frame, grip), SegmentResult::Fail);
    }

    #[test]
    fn test_swipe_fails_when_off_hand_raised() {
        let grip = GripState::released();
        let mut frame = sweep_frame(0.35, 1.0);
        frame.set_joint(Joint::HandLeft, JointState::tracked(-0.35, 1.2, 2.5));
        assert_eq!(SwipeLeftStart.check(&frame, grip), SegmentResult::Fail);
    }

    #[test]
    fn test_vertical_bands() {
        let grip = GripState::released();

        let low = sweep_frame(0.3, 1.1);
        assert_eq!(SwipeLow.check(&low, grip), SegmentResult::Succeed);
        assert_eq!(SwipeMid.check(&low, grip), SegmentResult::Pausing);
        assert_eq!(SwipeHigh.check(&low, grip), SegmentResult::Pausing);

        let mid = sweep_frame(0.3, 1.45);
        assert_eq!(SwipeMid.check(&mid, grip), SegmentResult::Succeed);
        assert_eq!(SwipeLow.check(&mid, grip), SegmentResult::Pausing);

        let high = sweep_frame(0.3, 1.75);
        assert_eq!(SwipeHigh.check(&high, grip), SegmentResult::Succeed);
        assert_eq!(SwipeLow.check(&high, grip), SegmentResult::Pausing);
    }

    #[test]
    fn test_swipe_right_mirrors_left() {
        let grip = GripState::released();
        let mut frame = SkeletalFrame::new(BodyId::new(1), FrameTime::ZERO);
        frame.set_joint(Joint::HipCenter, JointState::tracked(0.0, 0.9, 2.5));
        frame.set_joint(Joint::Head, JointState::tracked(0.0, 1.6, 2.5));
        frame.set_joint(Joint::ShoulderLeft, JointState::tracked(-0.2, 1.3, 2.5));
        frame.set_joint(Joint::ShoulderRight, JointState::tracked(0.2, 1.3, 2.5));
        frame.set_joint(Joint::ElbowLeft, JointState::tracked(-0.3, 1.05, 2.5));
        frame.set_joint(Joint::HandRight, JointState::tracked(0.35, 0.78, 2.5));
        frame.set_joint(Joint::HandLeft, JointState::tracked(-0.35, 1.0, 2.3));

        assert_eq!(SwipeRightStart.check(&frame, grip), SegmentResult::Succeed);

        frame.set_joint(Joint::HandLeft, JointState::tracked(0.0, 1.0, 2.3));
        assert_eq!(SwipeRightAcross.check(&frame, grip), SegmentResult::Succeed);

        frame.set_joint(Joint::HandLeft, JointState::tracked(0.35, 1.0, 2.3));
        assert_eq!(SwipeRightEnd.check(&frame, grip), SegmentResult::Succeed);
    }
}
