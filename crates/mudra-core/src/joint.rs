//! Skeletal joint identifiers and per-joint sample state
//!
//! The joint set matches the 20-joint sensor skeleton: four spine joints,
//! four joints per limb. Coordinates are meters in sensor space: X grows to
//! the skeleton's right as seen by the sensor, Y grows upward, Z grows away
//! from the sensor.

/// Joint identifier for the tracked body skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    // Spine
    HipCenter,
    Spine,
    ShoulderCenter,
    Head,

    // Left arm
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,

    // Right arm
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,

    // Left leg
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,

    // Right leg
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
}

impl Joint {
    /// All joints in index order
    pub fn all() -> &'static [Joint] {
        &[
            Joint::HipCenter,
            Joint::Spine,
            Joint::ShoulderCenter,
            Joint::Head,
            Joint::ShoulderLeft,
            Joint::ElbowLeft,
            Joint::WristLeft,
            Joint::HandLeft,
            Joint::ShoulderRight,
            Joint::ElbowRight,
            Joint::WristRight,
            Joint::HandRight,
            Joint::HipLeft,
            Joint::KneeLeft,
            Joint::AnkleLeft,
            Joint::FootLeft,
            Joint::HipRight,
            Joint::KneeRight,
            Joint::AnkleRight,
            Joint::FootRight,
        ]
    }

    /// Number of joints
    pub const fn count() -> usize {
        20
    }

    /// Stable name, matching the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Joint::HipCenter => "HipCenter",
            Joint::Spine => "Spine",
            Joint::ShoulderCenter => "ShoulderCenter",
            Joint::Head => "Head",
            Joint::ShoulderLeft => "ShoulderLeft",
            Joint::ElbowLeft => "ElbowLeft",
            Joint::WristLeft => "WristLeft",
            Joint::HandLeft => "HandLeft",
            Joint::ShoulderRight => "ShoulderRight",
            Joint::ElbowRight => "ElbowRight",
            Joint::WristRight => "WristRight",
            Joint::HandRight => "HandRight",
            Joint::HipLeft => "HipLeft",
            Joint::KneeLeft => "KneeLeft",
            Joint::AnkleLeft => "AnkleLeft",
            Joint::FootLeft => "FootLeft",
            Joint::HipRight => "HipRight",
            Joint::KneeRight => "KneeRight",
            Joint::AnkleRight => "AnkleRight",
            Joint::FootRight => "FootRight",
        }
    }
}

/// How confidently the sensor tracked a joint this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackingState {
    /// Joint position observed directly
    Tracked,
    /// Joint position inferred from neighboring joints
    Inferred,
    /// No usable position this frame
    #[default]
    NotTracked,
}

impl TrackingState {
    /// Whether the position carries any signal at all
    #[inline]
    pub fn has_position(self) -> bool {
        self != TrackingState::NotTracked
    }
}

/// 3D position in sensor space (meters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Distance to another position
    pub fn distance(&self, other: &Position3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Linear interpolation
    pub fn lerp(&self, other: &Position3, t: f32) -> Position3 {
        Position3 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// One joint's sample for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct JointState {
    pub position: Position3,
    pub tracking: TrackingState,
}

impl JointState {
    #[inline]
    pub fn new(position: Position3, tracking: TrackingState) -> Self {
        Self { position, tracking }
    }

    /// A directly observed sample
    #[inline]
    pub fn tracked(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Position3::new(x, y, z),
            tracking: TrackingState::Tracked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_order_matches_discriminants() {
        for (idx, joint) in Joint::all().iter().enumerate() {
            assert_eq!(*joint as usize, idx);
        }
        assert_eq!(Joint::all().len(), Joint::count());
    }

    #[test]
    fn test_position_distance() {
        let a = Position3::new(0.0, 0.0, 0.0);
        let b = Position3::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_lerp() {
        let a = Position3::new(0.0, 0.0, 0.0);
        let b = Position3::new(10.0, 10.0, 10.0);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
        assert!((mid.z - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_joint_state_is_untracked() {
        let state = JointState::default();
        assert_eq!(state.tracking, TrackingState::NotTracked);
        assert!(!state.tracking.has_position());
    }
}
