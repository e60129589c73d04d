//! Randomized invariants over the fully registered catalog
//!
//! Arbitrary frames are unconstrained by anatomy on purpose: whatever
//! nonsense the sensor reports, machine indexes stay in bounds, resets
//! stay global, and identical input replays identically.

use proptest::prelude::*;

use mudra_core::{
    BodyId, FrameTime, GestureId, GestureKind, GripState, Joint, JointState, Position3,
    SkeletalFrame, TrackingState,
};

use crate::scenarios::catalog_controller;

prop_compose! {
    fn arb_joint_state()(
        x in -1.0f32..1.0,
        y in 0.0f32..2.0,
        z in 1.5f32..3.5,
        tracking in prop_oneof![
            Just(TrackingState::Tracked),
            Just(TrackingState::Inferred),
            Just(TrackingState::NotTracked),
        ],
    ) -> JointState {
        JointState::new(Position3::new(x, y, z), tracking)
    }
}

prop_compose! {
    fn arb_frame()(joints in prop::collection::vec(arb_joint_state(), Joint::count())) -> SkeletalFrame {
        let mut frame = SkeletalFrame::new(BodyId::new(1), FrameTime::ZERO);
        for (&joint, state) in Joint::all().iter().zip(joints) {
            frame.set_joint(joint, state);
        }
        frame
    }
}

prop_compose! {
    fn arb_grip()(left in any::<bool>(), right in any::<bool>()) -> GripState {
        GripState::new(left, right)
    }
}

proptest! {
    #[test]
    fn prop_stage_indexes_stay_in_bounds(
        steps in prop::collection::vec((arb_frame(), arb_grip()), 1..50)
    ) {
        let mut controller = catalog_controller();
        for (frame, grip) in &steps {
            controller.update(frame, *grip);
            for machine in controller.machines() {
                prop_assert!(machine.current_index() < machine.stage_count());
            }
        }
    }

    #[test]
    fn prop_any_recognition_resets_every_machine(
        steps in prop::collection::vec((arb_frame(), arb_grip()), 1..50)
    ) {
        let mut controller = catalog_controller();
        for (frame, grip) in &steps {
            if !controller.update(frame, *grip).is_empty() {
                prop_assert!(controller.machines().all(|m| m.is_idle()));
            }
        }
    }

    #[test]
    fn prop_recognized_ids_come_from_the_catalog(
        steps in prop::collection::vec((arb_frame(), arb_grip()), 1..50)
    ) {
        let mut controller = catalog_controller();
        for (frame, grip) in &steps {
            for recognition in controller.update(frame, *grip) {
                prop_assert!(matches!(
                    recognition.id,
                    GestureId::Builtin(kind) if GestureKind::concrete().contains(&kind)
                ));
            }
        }
    }

    #[test]
    fn prop_same_input_replays_identically(
        steps in prop::collection::vec((arb_frame(), arb_grip()), 1..50)
    ) {
        let mut first = catalog_controller();
        let mut second = catalog_controller();
        for (frame, grip) in &steps {
            let a = first.update(frame, *grip);
            let b = second.update(frame, *grip);
            prop_assert_eq!(a, b);
        }
    }
}
