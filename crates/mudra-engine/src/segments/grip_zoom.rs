//! Grip-zoom segments: both hands gripped, pushed apart or drawn together
//!
//! GripZoomIn chains narrow-spread-wide, GripZoomOut the same stages
//! reversed. Unlike the open-hand zoom, the reference widths are the
//! performer's own shoulders and elbows rather than fixed spans.

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

const GRIP_ZOOM_SHOULDERS: &[Joint] = &[
    Joint::HandLeft,
    Joint::HandRight,
    Joint::ElbowLeft,
    Joint::ElbowRight,
    Joint::ShoulderLeft,
    Joint::ShoulderRight,
];
const GRIP_ZOOM_ELBOWS: &[Joint] = &[
    Joint::HandLeft,
    Joint::HandRight,
    Joint::ElbowLeft,
    Joint::ElbowRight,
];

/// Both gripped hands held forward of their elbows
fn hands_forward(frame: &SkeletalFrame) -> bool {
    frame.position(Joint::HandLeft).z < frame.position(Joint::ElbowLeft).z
        && frame.position(Joint::HandRight).z < frame.position(Joint::ElbowRight).z
}

/// Both hands between the shoulders
pub struct GripZoomNarrow;

impl GestureSegment for GripZoomNarrow {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_ZOOM_SHOULDERS
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.left || !grip.right || !hands_forward(frame) {
            return SegmentResult::Fail;
        }
        let left_bound = frame.position(Joint::ShoulderLeft).x;
        let right_bound = frame.position(Joint::ShoulderRight).x;
        let left = frame.position(Joint::HandLeft).x;
        let right = frame.position(Joint::HandRight).x;
        if right < right_bound && right > left_bound && left > left_bound && left < right_bound {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Hands pushed outside the shoulders
pub struct GripZoomSpread;

impl GestureSegment for GripZoomSpread {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_ZOOM_SHOULDERS
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.left || !grip.right || !hands_forward(frame) {
            return SegmentResult::Fail;
        }
        if frame.position(Joint::HandRight).x > frame.position(Joint::ShoulderRight).x
            && frame.position(Joint::HandLeft).x < frame.position(Joint::ShoulderLeft).x
        {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}

/// Hands pushed outside the elbows
pub struct GripZoomWide;

impl GestureSegment for GripZoomWide {
    fn required_joints(&self) -> &'static [Joint] {
        GRIP_ZOOM_ELBOWS
    }

    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult {
        if !grip.left || !grip.right || !hands_forward(frame) {
            return SegmentResult::Fail;
        }
        if frame.position(Joint::HandRight).x > frame.position(Joint::ElbowRight).x
            && frame.position(Joint::HandLeft).x < frame.position(Joint::ElbowLeft).x
        {
            SegmentResult::Succeed
        } else {
            SegmentResult::Pausing
        }
    }
}
