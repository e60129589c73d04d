//! Built-in gesture catalog
//!
//! Maps each concrete [`GestureKind`] to its segment chain:
//!
//! - `Menu`, `JoinedHands`: one pose held for [`HOLD_FRAMES`] frames
//! - `WaveRight`, `WaveLeft`: out/in alternation, [`WAVE_CYCLES`] cycles
//! - `SwipeLeft`, `SwipeRight`: three horizontal stages
//! - `SwipeUp`, `SwipeDown`: three height bands, mirrored orderings
//! - `ZoomIn`, `ZoomOut`: three hand spans, mirrored orderings
//! - grip variants: the same motions gated on held grips

use std::sync::Arc;

use mudra_core::{GestureError, GestureKind, GestureResult};

use crate::machine::GestureDefinition;
use crate::segment::Segment;
use crate::segments::{
    GripSwipeLeftAcross, GripSwipeLeftStart, GripSwipeRightAcross, GripSwipeRightStart,
    GripZoomNarrow, GripZoomSpread, GripZoomWide, JoinedHandsTouch, MenuPose, SwipeHigh,
    SwipeLeftAcross, SwipeLeftEnd, SwipeLeftStart, SwipeLow, SwipeMid, SwipeRightAcross,
    SwipeRightEnd, SwipeRightStart, WaveLeftIn, WaveLeftOut, WaveRightIn, WaveRightOut, ZoomNarrow,
    ZoomSpread, ZoomWide,
};

/// Frames a sustained pose must persist, about 0.6 s at the sensor's 30 Hz
pub const HOLD_FRAMES: usize = 20;

/// Out/in round trips a wave must complete
pub const WAVE_CYCLES: usize = 3;

/// Segment chain for a built-in gesture
///
/// The pseudo-values `All` and `None` have no chain and return
/// [`GestureError::PseudoKind`].
pub fn builtin_definition(kind: GestureKind) -> GestureResult<GestureDefinition> {
    match kind {
        GestureKind::Menu => GestureDefinition::sustained(Arc::new(MenuPose), HOLD_FRAMES),
        GestureKind::WaveRight => {
            alternating(Arc::new(WaveRightOut), Arc::new(WaveRightIn), WAVE_CYCLES)
        }
        GestureKind::WaveLeft => {
            alternating(Arc::new(WaveLeftOut), Arc::new(WaveLeftIn), WAVE_CYCLES)
        }
        GestureKind::JoinedHands => {
            GestureDefinition::sustained(Arc::new(JoinedHandsTouch), HOLD_FRAMES)
        }
        GestureKind::SwipeLeft => GestureDefinition::new(vec![
            Arc::new(SwipeLeftStart),
            Arc::new(SwipeLeftAcross),
            Arc::new(SwipeLeftEnd),
        ]),
        GestureKind::SwipeRight => GestureDefinition::new(vec![
            Arc::new(SwipeRightStart),
            Arc::new(SwipeRightAcross),
            Arc::new(SwipeRightEnd),
        ]),
        GestureKind::SwipeUp => GestureDefinition::new(vec![
            Arc::new(SwipeLow),
            Arc::new(SwipeMid),
            Arc::new(SwipeHigh),
        ]),
        GestureKind::SwipeDown => GestureDefinition::new(vec![
            Arc::new(SwipeHigh),
            Arc::new(SwipeMid),
            Arc::new(SwipeLow),
        ]),
        GestureKind::ZoomIn => GestureDefinition::new(vec![
            Arc::new(ZoomNarrow),
            Arc::new(ZoomSpread),
            Arc::new(ZoomWide),
        ]),
        GestureKind::ZoomOut => GestureDefinition::new(vec![
            Arc::new(ZoomWide),
            Arc::new(ZoomSpread),
            Arc::new(ZoomNarrow),
        ]),
        GestureKind::GripSwipeLeft => GestureDefinition::new(vec![
            Arc::new(GripSwipeLeftStart),
            Arc::new(GripSwipeLeftAcross),
        ]),
        GestureKind::GripSwipeRight => GestureDefinition::new(vec![
            Arc::new(GripSwipeRightStart),
            Arc::new(GripSwipeRightAcross),
        ]),
        GestureKind::GripZoomIn => GestureDefinition::new(vec![
            Arc::new(GripZoomNarrow),
            Arc::new(GripZoomSpread),
            Arc::new(GripZoomWide),
        ]),
        GestureKind::GripZoomOut => GestureDefinition::new(vec![
            Arc::new(GripZoomWide),
            Arc::new(GripZoomSpread),
            Arc::new(GripZoomNarrow),
        ]),
        GestureKind::All | GestureKind::None => Err(GestureError::PseudoKind(kind)),
    }
}

/// `cycles` repetitions of a two-stage round trip, sharing the two
/// segment instances across every cycle
fn alternating(first: Segment, second: Segment, cycles: usize) -> GestureResult<GestureDefinition> {
    let mut segments = Vec::with_capacity(cycles * 2);
    for _ in 0..cycles {
        segments.push(first.clone());
        segments.push(second.clone());
    }
    GestureDefinition::new(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_stage_counts() {
        let expected = [
            (GestureKind::Menu, HOLD_FRAMES),
            (GestureKind::WaveRight, WAVE_CYCLES * 2),
            (GestureKind::WaveLeft, WAVE_CYCLES * 2),
            (GestureKind::JoinedHands, HOLD_FRAMES),
            (GestureKind::SwipeLeft, 3),
            (GestureKind::SwipeRight, 3),
            (GestureKind::SwipeUp, 3),
            (GestureKind::SwipeDown, 3),
            (GestureKind::ZoomIn, 3),
            (GestureKind::ZoomOut, 3),
            (GestureKind::GripSwipeLeft, 2),
            (GestureKind::GripSwipeRight, 2),
            (GestureKind::GripZoomIn, 3),
            (GestureKind::GripZoomOut, 3),
        ];
        assert_eq!(expected.len(), GestureKind::concrete().len());
        for (kind, stages) in expected {
            let definition = builtin_definition(kind).unwrap();
            assert_eq!(definition.len(), stages, "{kind}");
        }
    }

    #[test]
    fn test_pseudo_kinds_have_no_definition() {
        for kind in [GestureKind::All, GestureKind::None] {
            assert_eq!(
                builtin_definition(kind).unwrap_err(),
                GestureError::PseudoKind(kind)
            );
        }
    }
}
