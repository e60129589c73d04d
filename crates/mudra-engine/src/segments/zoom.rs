//! Zoom segments: both hands at chest height, tracked by their spread
//!
//! ZoomIn chains narrow-spread-wide, ZoomOut the same stages reversed.

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

use crate::segment::GestureSegment;

/// Hands closer than this count as together (meters)
pub const ZOOM_NARROW_SPAN: f32 = 0.2;
/// Hands farther apart than this count as fully spread (meters)
pub const ZOOM_WIDE_SPAN: f32 = 0.7;

const BOTH_HANDS_CHEST: &[Joint] = &[
    Joint::HandLeft,
    Joint::HandRight,
    Joint::ShoulderCenter,
    Joint::HipCenter,
];

/// Both hands inside the chest band
fn hands_at_chest(frame: &SkeletalFrame) -> bool {
    let top = frame.position(Joint::ShoulderCenter).y;
    let bottom = frame.position(Joint::HipCenter).y;
    let left = frame.position(Joint::HandLeft).y;
    let right = frame.position(Joint::HandRight).y;
    left < top && left > bottom && right < top && right > bottom
}

fn hand_span(frame: &SkeletalFrame) -> f32 {
    (frame.position(Joint::HandRight).x - frame.position(Joint::HandLeft).x).abs()
}

fn succeed_when(condition: bool) -> SegmentResult {
    if condition {
        SegmentResult::Succeed
    } else {
        SegmentResult::Pausing
    }
}

/// Hands together in front of the chest
pub struct ZoomNarrow;

impl GestureSegment for ZoomNarrow {
    fn required_joints(&self) -> &'static [Joint] {
        BOTH_HANDS_CHEST
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !hands_at_chest(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(hand_span(frame) < ZOOM_NARROW_SPAN)
    }
}

/// Hands partway apart
pub struct ZoomSpread;

impl GestureSegment for ZoomSpread {
    fn required_joints(&self) -> &'static [Joint] {
        BOTH_HANDS_CHEST
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !hands_at_chest(frame) {
            return SegmentResult::Fail;
        }
        let span = hand_span(frame);
        succeed_when((ZOOM_NARROW_SPAN..ZOOM_WIDE_SPAN).contains(&span))
    }
}

/// Hands fully spread
pub struct ZoomWide;

impl GestureSegment for ZoomWide {
    fn required_joints(&self) -> &'static [Joint] {
        BOTH_HANDS_CHEST
    }

    fn check(&self, frame: &SkeletalFrame, _grip: GripState) -> SegmentResult {
        if !hands_at_chest(frame) {
            return SegmentResult::Fail;
        }
        succeed_when(hand_span(frame) >= ZOOM_WIDE_SPAN)
    }
}
