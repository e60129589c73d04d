//! Pose composition for tests and scripted playback
//!
//! Frames start from a relaxed standing pose roughly 2.5 m in front of
//! the sensor, arms at the sides, every joint tracked. Scripts then move
//! individual joints to act out a motion.

use mudra_core::{BodyId, FrameTime, Joint, JointState, Position3, SkeletalFrame, TrackingState};

/// Builder over a fully tracked standing pose
pub struct PoseBuilder {
    frame: SkeletalFrame,
}

impl PoseBuilder {
    /// Relaxed standing pose for `body`, all twenty joints tracked
    pub fn standing(body: BodyId) -> Self {
        let mut frame = SkeletalFrame::new(body, FrameTime::ZERO);
        for &joint in Joint::all() {
            frame.set_joint(joint, JointState::new(standing_position(joint), TrackingState::Tracked));
        }
        Self { frame }
    }

    /// Stamp the frame with a timestamp
    pub fn at(mut self, timestamp: FrameTime) -> Self {
        self.frame.timestamp = timestamp;
        self
    }

    /// Move one joint, keeping it tracked
    pub fn joint(mut self, joint: Joint, x: f32, y: f32, z: f32) -> Self {
        self.frame
            .set_joint(joint, JointState::tracked(x, y, z));
        self
    }

    /// Move the right hand, keeping it tracked
    pub fn hand_right(self, x: f32, y: f32, z: f32) -> Self {
        self.joint(Joint::HandRight, x, y, z)
    }

    /// Move the left hand, keeping it tracked
    pub fn hand_left(self, x: f32, y: f32, z: f32) -> Self {
        self.joint(Joint::HandLeft, x, y, z)
    }

    /// Override one joint's tracking state, leaving its position alone
    pub fn tracking(mut self, joint: Joint, tracking: TrackingState) -> Self {
        self.frame.set_tracking(joint, tracking);
        self
    }

    pub fn build(self) -> SkeletalFrame {
        self.frame
    }
}

/// Standing-pose joint positions: X right, Y up, Z away from the sensor
fn standing_position(joint: Joint) -> Position3 {
    let (x, y, z) = match joint {
        Joint::HipCenter => (0.0, 0.9, 2.5),
        Joint::Spine => (0.0, 1.1, 2.5),
        Joint::ShoulderCenter => (0.0, 1.35, 2.5),
        Joint::Head => (0.0, 1.6, 2.5),
        Joint::ShoulderLeft => (-0.2, 1.3, 2.5),
        Joint::ElbowLeft => (-0.3, 1.05, 2.5),
        Joint::WristLeft => (-0.33, 0.85, 2.5),
        Joint::HandLeft => (-0.35, 0.78, 2.5),
        Joint::ShoulderRight => (0.2, 1.3, 2.5),
        Joint::ElbowRight => (0.3, 1.05, 2.5),
        Joint::WristRight => (0.33, 0.85, 2.5),
        Joint::HandRight => (0.35, 0.78, 2.5),
        Joint::HipLeft => (-0.12, 0.85, 2.5),
        Joint::KneeLeft => (-0.13, 0.45, 2.5),
        Joint::AnkleLeft => (-0.14, 0.08, 2.5),
        Joint::FootLeft => (-0.14, 0.0, 2.6),
        Joint::HipRight => (0.12, 0.85, 2.5),
        Joint::KneeRight => (0.13, 0.45, 2.5),
        Joint::AnkleRight => (0.14, 0.08, 2.5),
        Joint::FootRight => (0.14, 0.0, 2.6),
    };
    Position3::new(x, y, z)
}
