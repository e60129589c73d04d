//! The segment capability: one geometric predicate stage
//!
//! A segment is a pure function of a single frame and the frame's grip
//! flags. It carries no memory of prior frames; multi-frame motion emerges
//! from the machine stepping through a chain of segments.

use std::sync::Arc;

use mudra_core::{GripState, Joint, SegmentResult, SkeletalFrame};

/// One predicate stage within a gesture definition
pub trait GestureSegment: Send + Sync {
    /// Joints this predicate reads
    ///
    /// The machine consults this before calling [`check`](Self::check): if
    /// any listed joint is untracked in the frame, the stage's outcome is
    /// [`SegmentResult::NotAvailable`] and `check` is never invoked, so
    /// predicates can read positions unconditionally.
    fn required_joints(&self) -> &'static [Joint];

    /// Evaluate this stage against one frame
    fn check(&self, frame: &SkeletalFrame, grip: GripState) -> SegmentResult;
}

/// Shared segment handle
///
/// Definitions clone the handle to repeat a stage, so a pose held for K
/// frames is one segment value appearing K times.
pub type Segment = Arc<dyn GestureSegment>;
