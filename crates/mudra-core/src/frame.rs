//! Skeletal frames - one sampled pose per body per sensor tick

use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

use crate::joint::{Joint, JointState, Position3, TrackingState};

/// Tracking identity assigned to a body by the sensor
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn new(id: u32) -> Self {
        BodyId(id)
    }
}

impl fmt::Debug for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frame timestamp - microseconds since session start
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameTime(pub i64);

impl FrameTime {
    pub const ZERO: FrameTime = FrameTime(0);

    #[inline]
    pub fn from_micros(micros: i64) -> Self {
        FrameTime(micros)
    }

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        FrameTime(millis * 1000)
    }

    #[inline]
    pub fn as_micros(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0 / 1000
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

impl Add<Duration> for FrameTime {
    type Output = FrameTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        FrameTime(self.0 + rhs.as_micros() as i64)
    }
}

impl Sub<Duration> for FrameTime {
    type Output = FrameTime;

    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        FrameTime(self.0 - rhs.as_micros() as i64)
    }
}

impl Sub<FrameTime> for FrameTime {
    type Output = Duration;

    /// Elapsed time since `rhs`, saturating at zero
    #[inline]
    fn sub(self, rhs: FrameTime) -> Self::Output {
        let diff = self.0 - rhs.0;
        if diff >= 0 {
            Duration::from_micros(diff as u64)
        } else {
            Duration::ZERO
        }
    }
}

impl fmt::Debug for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{:.1}ms", self.0 as f64 / 1000.0)
    }
}

/// One sampled skeletal pose: per-joint position and tracking state,
/// a timestamp, and the body's tracking identity
#[derive(Debug, Clone)]
pub struct SkeletalFrame {
    /// Which tracked body this pose belongs to
    pub body: BodyId,

    /// When the sensor sampled this pose
    pub timestamp: FrameTime,

    /// Joint samples, indexed by [`Joint`]
    joints: [JointState; Joint::count()],
}

impl SkeletalFrame {
    /// Create a frame with every joint at the origin and untracked
    pub fn new(body: BodyId, timestamp: FrameTime) -> Self {
        Self {
            body,
            timestamp,
            joints: [JointState::default(); Joint::count()],
        }
    }

    /// Joint sample by joint type
    #[inline]
    pub fn joint(&self, joint: Joint) -> &JointState {
        &self.joints[joint as usize]
    }

    /// Joint position by joint type
    #[inline]
    pub fn position(&self, joint: Joint) -> Position3 {
        self.joints[joint as usize].position
    }

    /// Joint tracking state by joint type
    #[inline]
    pub fn tracking(&self, joint: Joint) -> TrackingState {
        self.joints[joint as usize].tracking
    }

    /// Replace a joint sample
    #[inline]
    pub fn set_joint(&mut self, joint: Joint, state: JointState) {
        self.joints[joint as usize] = state;
    }

    /// Move a joint, leaving its tracking state alone
    #[inline]
    pub fn set_position(&mut self, joint: Joint, position: Position3) {
        self.joints[joint as usize].position = position;
    }

    /// Set a joint's tracking state, leaving its position alone
    #[inline]
    pub fn set_tracking(&mut self, joint: Joint, tracking: TrackingState) {
        self.joints[joint as usize].tracking = tracking;
    }
}
