//! Choreographed motion scripts
//!
//! A script is a frame-by-frame performance of one gesture: lead-in
//! standing frames, the motion itself, and a short settle at the end.
//! Scripts drive a controller directly or a full session, and can be
//! perturbed with seeded sensor noise first.

use std::time::Duration;

use mudra_core::{
    BodyId, FrameTime, GestureError, GestureKind, GestureResult, GripState, HandEvent, HandSide,
    Recognition, SkeletalFrame,
};
use mudra_engine::{GestureController, HOLD_FRAMES, WAVE_CYCLES};
use mudra_session::InteractionSession;

use crate::jitter::{JitterConfig, Jitterer};
use crate::pose::PoseBuilder;

/// Sensor tick at 30 Hz
pub const FRAME_TICK: Duration = Duration::from_millis(33);

/// One scripted sensor tick
#[derive(Debug, Clone)]
pub struct ScriptStep {
    pub frame: SkeletalFrame,
    pub grip: GripState,
}

/// Frame-by-frame performance of one gesture
#[derive(Debug)]
pub struct MotionScript {
    kind: GestureKind,
    steps: Vec<ScriptStep>,
}

impl MotionScript {
    /// Choreography for one concrete gesture, performed by body 1
    pub fn perform(kind: GestureKind) -> GestureResult<MotionScript> {
        Self::perform_by(kind, BodyId::new(1))
    }

    /// Choreography for one concrete gesture, performed by `body`
    pub fn perform_by(kind: GestureKind, body: BodyId) -> GestureResult<MotionScript> {
        let open = GripState::released();
        let mut writer = ScriptWriter::new(body);
        writer.neutral(2);

        match kind {
            GestureKind::Menu => {
                // hands low, right hand held out past the hip
                for _ in 0..HOLD_FRAMES {
                    writer.push(open, PoseBuilder::standing(body).hand_right(0.57, 0.7, 2.5));
                }
            }
            GestureKind::WaveRight => {
                for _ in 0..WAVE_CYCLES {
                    writer.push(open, PoseBuilder::standing(body).hand_right(0.55, 1.25, 2.5));
                    writer.push(open, PoseBuilder::standing(body).hand_right(0.05, 1.25, 2.5));
                }
            }
            GestureKind::WaveLeft => {
                for _ in 0..WAVE_CYCLES {
                    writer.push(open, PoseBuilder::standing(body).hand_left(-0.55, 1.25, 2.5));
                    writer.push(open, PoseBuilder::standing(body).hand_left(-0.05, 1.25, 2.5));
                }
            }
            GestureKind::JoinedHands => {
                for _ in 0..HOLD_FRAMES {
                    writer.push(
                        open,
                        PoseBuilder::standing(body)
                            .hand_left(-0.025, 1.15, 2.4)
                            .hand_right(0.025, 1.15, 2.4),
                    );
                }
            }
            GestureKind::SwipeLeft => {
                for x in [0.35, 0.0, -0.35] {
                    writer.push(open, PoseBuilder::standing(body).hand_right(x, 1.0, 2.3));
                }
            }
            GestureKind::SwipeRight => {
                for x in [-0.35, 0.0, 0.35] {
                    writer.push(open, PoseBuilder::standing(body).hand_left(x, 1.0, 2.3));
                }
            }
            GestureKind::SwipeUp => {
                for y in [1.1, 1.45, 1.75] {
                    writer.push(open, PoseBuilder::standing(body).hand_right(0.3, y, 2.3));
                }
            }
            GestureKind::SwipeDown => {
                for y in [1.75, 1.45, 1.1] {
                    writer.push(open, PoseBuilder::standing(body).hand_right(0.3, y, 2.3));
                }
            }
            GestureKind::ZoomIn => {
                for span in [0.05, 0.22, 0.4] {
                    writer.push(open, chest_spread(body, span));
                }
            }
            GestureKind::ZoomOut => {
                for span in [0.4, 0.22, 0.05] {
                    writer.push(open, chest_spread(body, span));
                }
            }
            GestureKind::GripSwipeLeft => {
                let gripped = GripState::new(false, true);
                for x in [0.38, 0.0] {
                    writer.push(gripped, PoseBuilder::standing(body).hand_right(x, 0.7, 2.3));
                }
            }
            GestureKind::GripSwipeRight => {
                let gripped = GripState::new(true, false);
                for x in [-0.38, 0.0] {
                    writer.push(gripped, PoseBuilder::standing(body).hand_left(x, 0.7, 2.3));
                }
            }
            GestureKind::GripZoomIn => {
                for span in [0.1, 0.25, 0.45] {
                    writer.push(GripState::both(), raised_spread(body, span));
                }
            }
            GestureKind::GripZoomOut => {
                for span in [0.45, 0.25, 0.1] {
                    writer.push(GripState::both(), raised_spread(body, span));
                }
            }
            GestureKind::All | GestureKind::None => {
                return Err(GestureError::PseudoKind(kind));
            }
        }

        writer.neutral(2);
        Ok(MotionScript {
            kind,
            steps: writer.steps,
        })
    }

    /// The gesture this script performs
    #[inline]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Timestamp of the final scripted frame
    pub fn last_timestamp(&self) -> FrameTime {
        self.steps
            .last()
            .map(|step| step.frame.timestamp)
            .unwrap_or(FrameTime::ZERO)
    }

    /// Same script with seeded sensor noise on every joint
    pub fn with_jitter(mut self, config: &JitterConfig) -> Self {
        let mut jitterer = Jitterer::new(config);
        for step in &mut self.steps {
            step.frame = jitterer.perturb(&step.frame);
        }
        self
    }

    /// Drive a controller through the script, collecting recognitions
    pub fn run(&self, controller: &mut GestureController) -> Vec<Recognition> {
        let mut recognized = Vec::new();
        for step in &self.steps {
            recognized.extend(controller.update(&step.frame, step.grip));
        }
        recognized
    }

    /// Drive a session through the script
    ///
    /// Scripted grip changes become the hand events a sensor would have
    /// reported between ticks.
    pub fn run_session(&self, session: &mut InteractionSession) -> Vec<Recognition> {
        let mut recognized = Vec::new();
        let mut grip = session.grip();
        for step in &self.steps {
            for event in grip_transitions(grip, step.grip) {
                session.handle_hand_event(event);
            }
            grip = step.grip;
            recognized.extend(session.process(std::slice::from_ref(&step.frame)));
        }
        recognized
    }
}

/// Hand events that take the grip state from `from` to `to`
pub fn grip_transitions(from: GripState, to: GripState) -> Vec<HandEvent> {
    let mut events = Vec::new();
    if from.left != to.left {
        events.push(if to.left {
            HandEvent::grip(HandSide::Left)
        } else {
            HandEvent::release(HandSide::Left)
        });
    }
    if from.right != to.right {
        events.push(if to.right {
            HandEvent::grip(HandSide::Right)
        } else {
            HandEvent::release(HandSide::Right)
        });
    }
    events
}

/// Both hands at chest height, `span` out from center on each side
fn chest_spread(body: BodyId, span: f32) -> PoseBuilder {
    PoseBuilder::standing(body)
        .hand_left(-span, 1.15, 2.4)
        .hand_right(span, 1.15, 2.4)
}

/// Both hands raised above the shoulder line, `span` out on each side
fn raised_spread(body: BodyId, span: f32) -> PoseBuilder {
    PoseBuilder::standing(body)
        .hand_left(-span, 1.4, 2.3)
        .hand_right(span, 1.4, 2.3)
}

/// Accumulates steps with running 30 Hz timestamps
struct ScriptWriter {
    body: BodyId,
    at: FrameTime,
    steps: Vec<ScriptStep>,
}

impl ScriptWriter {
    fn new(body: BodyId) -> Self {
        ScriptWriter {
            body,
            at: FrameTime::ZERO,
            steps: Vec::new(),
        }
    }

    fn push(&mut self, grip: GripState, pose: PoseBuilder) {
        let frame = pose.at(self.at).build();
        self.at = self.at + FRAME_TICK;
        self.steps.push(ScriptStep { frame, grip });
    }

    fn neutral(&mut self, count: usize) {
        for _ in 0..count {
            self.push(GripState::released(), PoseBuilder::standing(self.body));
        }
    }
}
