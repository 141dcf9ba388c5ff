//! Forward kinematics and hip Jacobian of the six legs.
//!
//! Each leg is a planar two-link chain hanging off a mount on the body circle.
//! The x/y coordinates follow true two-link forward kinematics; z only carries
//! the constant [`ELBOW_Z`] / [`FOOT_Z`] markers.
use core::f64::consts::FRAC_PI_3;

use log::debug;
use nalgebra::{Matrix2x6, Point3};

use super::gait_engine::{gait_angles, GaitAngles};
use crate::error::KinematicsError;
use crate::robot::{
    config::{MechanismConfig, ELBOW_Z, FOOT_Z, MOUNT_Z},
    joint::Joint,
    leg::{LegId, LEG_COUNT},
    snapshot::{BodyOutline, FrameSnapshot, LegPolyline},
};

/// Geometry and joint state of the whole mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct LegModel {
    body_radius: f64,
    leg_length: f64,
    leg_mounts: [Point3<f64>; LEG_COUNT],
    joint_angle1: [f64; LEG_COUNT], // hip, radians
    joint_angle2: [f64; LEG_COUNT], // knee, relative to the first segment
}

impl LegModel {
    /// Both lengths must be strictly positive. This is not checked.
    pub fn new(body_radius: f64, leg_length: f64) -> Self {
        let leg_mounts = LegId::ALL.map(|leg| {
            let angle = leg.index() as f64 * FRAC_PI_3;
            Point3::new(
                body_radius * angle.cos(),
                body_radius * angle.sin(),
                MOUNT_Z,
            )
        });

        Self {
            body_radius,
            leg_length,
            leg_mounts,
            joint_angle1: [0.0; LEG_COUNT],
            joint_angle2: [0.0; LEG_COUNT],
        }
    }

    pub fn from_config(config: &MechanismConfig) -> Self {
        Self::new(config.body_radius, config.leg_length)
    }

    pub fn body_radius(&self) -> f64 {
        self.body_radius
    }

    pub fn leg_length(&self) -> f64 {
        self.leg_length
    }

    fn segment_length(&self) -> f64 {
        self.leg_length / 2.0
    }

    pub fn leg_mounts(&self) -> &[Point3<f64>; LEG_COUNT] {
        &self.leg_mounts
    }

    pub fn hip_angles(&self) -> &[f64; LEG_COUNT] {
        &self.joint_angle1
    }

    pub fn knee_angles(&self) -> &[f64; LEG_COUNT] {
        &self.joint_angle2
    }

    pub fn joint_angle(&self, leg: LegId, joint: Joint) -> f64 {
        match joint {
            Joint::Hip => self.joint_angle1[leg],
            Joint::Knee => self.joint_angle2[leg],
        }
    }

    /// Write the angles of one gait sample into the joint state.
    pub fn apply_gait(&mut self, angles: &GaitAngles) {
        self.joint_angle1 = angles.hip;
        self.joint_angle2 = angles.knee;
    }

    /// Advance the mechanism to `phase`. This is the only per-tick writer of the
    /// joint state.
    pub fn tick(&mut self, phase: f64) {
        let angles = gait_angles(phase);
        debug!("[LEG_MODEL] tick phase={phase:.4} hip={:?}", angles.hip);
        self.apply_gait(&angles);
    }

    /// Elbow and end effector x/y offsets from the mount.
    fn leg_offsets(&self, leg: LegId) -> ((f64, f64), (f64, f64)) {
        let half = self.segment_length();
        let theta1 = self.joint_angle1[leg];
        let theta12 = theta1 + self.joint_angle2[leg];

        let elbow = (half * theta1.cos(), half * theta1.sin());
        let foot = (elbow.0 + half * theta12.cos(), elbow.1 + half * theta12.sin());
        (elbow, foot)
    }

    pub fn segment_points(&self, leg: LegId) -> LegPolyline {
        let mount = self.leg_mounts[leg];
        let (elbow, foot) = self.leg_offsets(leg);

        [
            mount,
            Point3::new(mount.x + elbow.0, mount.y + elbow.1, ELBOW_Z),
            Point3::new(mount.x + foot.0, mount.y + foot.1, FOOT_Z),
        ]
    }

    /// Index-based variant of [`LegModel::segment_points`] for hosts that iterate
    /// over raw indices.
    pub fn segment_points_at(&self, leg_index: usize) -> Result<LegPolyline, KinematicsError> {
        let leg = LegId::try_from(leg_index)?;
        Ok(self.segment_points(leg))
    }

    pub fn end_effector(&self, leg: LegId) -> Point3<f64> {
        let mount = self.leg_mounts[leg];
        let (_, foot) = self.leg_offsets(leg);
        Point3::new(mount.x + foot.0, mount.y + foot.1, FOOT_Z)
    }

    pub fn end_effector_positions(&self) -> [Point3<f64>; LEG_COUNT] {
        LegId::ALL.map(|leg| self.end_effector(leg))
    }

    /// Partial Jacobian of each end effector's (x, y) with respect to that leg's
    /// hip angle only. Column `i` belongs to leg `i`.
    pub fn jacobian(&self) -> Matrix2x6<f64> {
        let half = self.segment_length();
        let mut jacobian = Matrix2x6::zeros();

        for leg in LegId::ALL {
            let theta1 = self.joint_angle1[leg];
            let theta12 = theta1 + self.joint_angle2[leg];
            jacobian[(0, leg.index())] = -half * theta1.sin() - half * theta12.sin();
            jacobian[(1, leg.index())] = half * theta1.cos() + half * theta12.cos();
        }
        jacobian
    }

    pub fn body_outline(&self) -> BodyOutline {
        let mut outline = [self.leg_mounts[0]; LEG_COUNT + 1];
        outline[..LEG_COUNT].copy_from_slice(&self.leg_mounts);
        outline
    }

    pub fn snapshot(&self, title: impl Into<String>, phase: f64) -> FrameSnapshot {
        FrameSnapshot {
            title: title.into(),
            phase,
            body_outline: self.body_outline(),
            legs: LegId::ALL.map(|leg| self.segment_points(leg)),
            end_effectors: self.end_effector_positions(),
            jacobian: self.jacobian(),
        }
    }
}

impl Default for LegModel {
    fn default() -> Self {
        Self::from_config(&MechanismConfig::default())
    }
}
