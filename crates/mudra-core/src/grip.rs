//! Hand grip state and the interaction-stream events that drive it
//!
//! Grip detection itself happens upstream, in the layer fusing depth and
//! skeleton data. The engine only sees the result: a pair of booleans,
//! computed once per frame and passed by value into every segment check.

/// Which hand an interaction event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandSide::Left => "left",
            HandSide::Right => "right",
        }
    }
}

/// Hand interaction event kind, as reported by the interaction stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandEventKind {
    /// Hand closed into a grip
    Grip,
    /// Hand opened again
    GripRelease,
}

/// One hand interaction event pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandEvent {
    pub side: HandSide,
    pub kind: HandEventKind,
}

impl HandEvent {
    #[inline]
    pub fn new(side: HandSide, kind: HandEventKind) -> Self {
        Self { side, kind }
    }

    #[inline]
    pub fn grip(side: HandSide) -> Self {
        Self::new(side, HandEventKind::Grip)
    }

    #[inline]
    pub fn release(side: HandSide) -> Self {
        Self::new(side, HandEventKind::GripRelease)
    }
}

/// Per-hand grip flags for one frame
///
/// Computed before the frame's update call and threaded as an explicit
/// argument; segments never read ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GripState {
    pub left: bool,
    pub right: bool,
}

impl GripState {
    #[inline]
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Both hands open
    #[inline]
    pub fn released() -> Self {
        Self::default()
    }

    /// Both hands gripped
    #[inline]
    pub fn both() -> Self {
        Self::new(true, true)
    }

    /// Grip flag for one side
    #[inline]
    pub fn hand(self, side: HandSide) -> bool {
        match side {
            HandSide::Left => self.left,
            HandSide::Right => self.right,
        }
    }
}
