use approx::assert_abs_diff_eq;
use core::f64::consts::FRAC_PI_2;
use hexapod_kinematics::robot::config::MechanismConfig;
use hexapod_kinematics::robot::leg::LEG_COUNT;
use hexapod_kinematics::tasks::{motion_task::MotionTask, render_task::RecordingRenderer};
use hexapod_kinematics::{gait_angles, GaitAngles, KinematicsError, LegId, LegModel, GAIT_PERIOD};
use nalgebra::Point3;

#[test]
fn unit_mechanism_examples() {
    let mut model = LegModel::new(1.0, 1.0);
    let points = model.segment_points_at(0).unwrap();
    assert_abs_diff_eq!(points[0], Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(points[1], Point3::new(1.5, 0.0, 2.0), epsilon = 1e-12);
    assert_abs_diff_eq!(points[2], Point3::new(2.0, 0.0, -2.0), epsilon = 1e-12);

    let mut hip = [0.0; LEG_COUNT];
    hip[LegId::MiddleRight] = FRAC_PI_2;
    model.apply_gait(&GaitAngles {
        hip,
        knee: [0.0; LEG_COUNT],
    });
    let foot = model.end_effector_positions()[LegId::MiddleRight];
    assert_abs_diff_eq!(foot, Point3::new(1.0, 1.0, -2.0), epsilon = 1e-12);
}

#[test]
fn every_index_outside_the_body_is_rejected() {
    let model = LegModel::default();
    for index in [6, 7, 100] {
        assert_eq!(
            model.segment_points_at(index),
            Err(KinematicsError::InvalidLegIndex { index })
        );
    }
    assert_eq!(
        KinematicsError::InvalidLegIndex { index: 9 }.to_string(),
        "Invalid leg index: 9 (must be < 6)"
    );
}

#[test]
fn feet_stay_within_reach_over_a_full_cycle() {
    let mut model = LegModel::new(1.5, 2.0);
    let steps = 500;
    for i in 0..=steps {
        model.tick(GAIT_PERIOD * f64::from(i) / f64::from(steps));
        for (leg, foot) in LegId::ALL.into_iter().zip(model.end_effector_positions()) {
            let mount = model.leg_mounts()[leg];
            let reach = (foot.xy() - mount.xy()).norm();
            assert!(reach <= model.leg_length() + 1e-9, "{leg} overreached: {reach}");
        }
    }
}

#[test]
fn full_animation_matches_direct_ticks() {
    let config = MechanismConfig::new(1.0, 1.0).with_num_frames(220);
    let mut task = MotionTask::new(&config, RecordingRenderer::default());
    task.run(220).unwrap();
    assert_eq!(task.clock().frame(), 0);

    let frames = task.into_renderer().frames;
    assert_eq!(frames.len(), 220);
    assert_eq!(frames[219].title, "Frame 220/220");

    let mut model = LegModel::new(1.0, 1.0);
    for (i, frame) in frames.iter().enumerate().step_by(37) {
        let phase = i as f64 / 220.0;
        model.tick(phase);
        assert_eq!(frame.phase, phase);
        assert_eq!(frame.end_effectors, model.end_effector_positions());
        assert_eq!(frame.jacobian, model.jacobian());
        let expected = gait_angles(phase);
        assert_eq!(model.hip_angles(), &expected.hip);
    }
}
