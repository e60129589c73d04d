//! Primary body selection
//!
//! The sensor can track several bodies at once but the session drives
//! gestures from exactly one. The closest body wins: smallest hip-center
//! depth among bodies whose hip center is fully tracked.

use mudra_core::{Joint, SkeletalFrame, TrackingState};

/// Pick the frame to drive recognition from, if any body qualifies
///
/// A body qualifies only when its hip center is `Tracked`; inferred or
/// missing hips cannot anchor a depth comparison.
pub fn primary_body(frames: &[SkeletalFrame]) -> Option<&SkeletalFrame> {
    frames
        .iter()
        .filter(|frame| frame.tracking(Joint::HipCenter) == TrackingState::Tracked)
        .min_by(|a, b| {
            let za = a.position(Joint::HipCenter).z;
            let zb = b.position(Joint::HipCenter).z;
            za.total_cmp(&zb)
        })
}
