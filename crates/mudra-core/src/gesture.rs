//! Gesture identities and recognition results

use std::fmt;
use std::str::FromStr;

use crate::error::GestureError;
use crate::frame::{BodyId, FrameTime};

/// The built-in gesture set
///
/// `All` and `None` are pseudo-values: `All` means "every concrete gesture"
/// at registration surfaces that accept it, `None` means "nothing detected"
/// in display contexts. Neither ever backs an actual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Console-style menu pose, hands low with one held out
    Menu,
    /// Wave the right hand
    WaveRight,
    /// Wave the left hand
    WaveLeft,
    /// Bring both hands together in front of the chest
    JoinedHands,
    /// Sweep the right hand from the right side across to the left
    SwipeLeft,
    /// Sweep the left hand from the left side across to the right
    SwipeRight,
    /// Raise a hand from hip height to above the head
    SwipeUp,
    /// Lower a hand from above the head to hip height
    SwipeDown,
    /// Spread both hands apart in front of the chest
    ZoomIn,
    /// Draw both hands together in front of the chest
    ZoomOut,
    /// Grip the right hand and sweep it to the left
    GripSwipeLeft,
    /// Grip the left hand and sweep it to the right
    GripSwipeRight,
    /// Grip both hands and push them outward from the chest
    GripZoomIn,
    /// Grip both hands and draw them back toward the chest center
    GripZoomOut,
    /// Every concrete gesture (registration pseudo-value)
    All,
    /// No gesture (display pseudo-value)
    None,
}

impl GestureKind {
    /// The concrete gestures, in registration order; excludes `All`/`None`
    pub fn concrete() -> &'static [GestureKind] {
        &[
            GestureKind::Menu,
            GestureKind::WaveRight,
            GestureKind::WaveLeft,
            GestureKind::JoinedHands,
            GestureKind::SwipeLeft,
            GestureKind::SwipeRight,
            GestureKind::SwipeUp,
            GestureKind::SwipeDown,
            GestureKind::ZoomIn,
            GestureKind::ZoomOut,
            GestureKind::GripSwipeLeft,
            GestureKind::GripSwipeRight,
            GestureKind::GripZoomIn,
            GestureKind::GripZoomOut,
        ]
    }

    /// Whether this is one of the pseudo-values that never backs a machine
    #[inline]
    pub fn is_pseudo(self) -> bool {
        matches!(self, GestureKind::All | GestureKind::None)
    }

    /// Stable name, matching the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureKind::Menu => "Menu",
            GestureKind::WaveRight => "WaveRight",
            GestureKind::WaveLeft => "WaveLeft",
            GestureKind::JoinedHands => "JoinedHands",
            GestureKind::SwipeLeft => "SwipeLeft",
            GestureKind::SwipeRight => "SwipeRight",
            GestureKind::SwipeUp => "SwipeUp",
            GestureKind::SwipeDown => "SwipeDown",
            GestureKind::ZoomIn => "ZoomIn",
            GestureKind::ZoomOut => "ZoomOut",
            GestureKind::GripSwipeLeft => "GripSwipeLeft",
            GestureKind::GripSwipeRight => "GripSwipeRight",
            GestureKind::GripZoomIn => "GripZoomIn",
            GestureKind::GripZoomOut => "GripZoomOut",
            GestureKind::All => "All",
            GestureKind::None => "None",
        }
    }

    /// Human-readable label for display surfaces
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureKind::Menu => "Menu",
            GestureKind::WaveRight => "Wave Right",
            GestureKind::WaveLeft => "Wave Left",
            GestureKind::JoinedHands => "Joined Hands",
            GestureKind::SwipeLeft => "Swipe Left",
            GestureKind::SwipeRight => "Swipe Right",
            GestureKind::SwipeUp => "Swipe Up",
            GestureKind::SwipeDown => "Swipe Down",
            GestureKind::ZoomIn => "Zoom In",
            GestureKind::ZoomOut => "Zoom Out",
            GestureKind::GripSwipeLeft => "Grip Swipe Left",
            GestureKind::GripSwipeRight => "Grip Swipe Right",
            GestureKind::GripZoomIn => "Grip Zoom In",
            GestureKind::GripZoomOut => "Grip Zoom Out",
            GestureKind::All => "All",
            GestureKind::None => "None",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureKind {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Menu" => Ok(GestureKind::Menu),
            "WaveRight" => Ok(GestureKind::WaveRight),
            "WaveLeft" => Ok(GestureKind::WaveLeft),
            "JoinedHands" => Ok(GestureKind::JoinedHands),
            "SwipeLeft" => Ok(GestureKind::SwipeLeft),
            "SwipeRight" => Ok(GestureKind::SwipeRight),
            "SwipeUp" => Ok(GestureKind::SwipeUp),
            "SwipeDown" => Ok(GestureKind::SwipeDown),
            "ZoomIn" => Ok(GestureKind::ZoomIn),
            "ZoomOut" => Ok(GestureKind::ZoomOut),
            "GripSwipeLeft" => Ok(GestureKind::GripSwipeLeft),
            "GripSwipeRight" => Ok(GestureKind::GripSwipeRight),
            "GripZoomIn" => Ok(GestureKind::GripZoomIn),
            "GripZoomOut" => Ok(GestureKind::GripZoomOut),
            "All" => Ok(GestureKind::All),
            "None" => Ok(GestureKind::None),
            other => Err(GestureError::UnknownGesture(other.to_string())),
        }
    }
}

/// Identity a machine recognizes under: a built-in kind, or the caller's
/// name for an ad-hoc definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GestureId {
    Builtin(GestureKind),
    Custom(String),
}

impl GestureId {
    /// Stable name for logs and matching
    pub fn name(&self) -> &str {
        match self {
            GestureId::Builtin(kind) => kind.as_str(),
            GestureId::Custom(name) => name,
        }
    }

    /// Human-readable label for display surfaces
    pub fn display_name(&self) -> &str {
        match self {
            GestureId::Builtin(kind) => kind.display_name(),
            GestureId::Custom(name) => name,
        }
    }
}

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<GestureKind> for GestureId {
    fn from(kind: GestureKind) -> Self {
        GestureId::Builtin(kind)
    }
}

/// Outcome of evaluating one segment against one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentResult {
    /// Condition actively violated; the owning machine resets
    Fail,
    /// Condition fully met this frame; the owning machine advances
    Succeed,
    /// In transition; the owning machine holds its stage
    Pausing,
    /// Required input missing this frame; treated like `Fail`
    NotAvailable,
}

/// A completed gesture chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// Which gesture completed
    pub id: GestureId,
    /// Which body performed it
    pub body: BodyId,
    /// Timestamp of the completing frame
    pub at: FrameTime,
}
