//! Per-frame geometry handed to the renderer.
//!
//! A [`FrameSnapshot`] is a by-value copy of everything a host needs to draw one
//! frame. Holding one never borrows the model, so the renderer can keep it as long
//! as it likes.
use nalgebra::{Matrix2x6, Point3};

use super::leg::{LegId, LEG_COUNT};

/// Closed hexagon through the six mounts, first point repeated at the end.
pub type BodyOutline = [Point3<f64>; LEG_COUNT + 1];

/// Mount, elbow and end effector of one leg.
pub type LegPolyline = [Point3<f64>; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub title: String,
    pub phase: f64,
    pub body_outline: BodyOutline,
    pub legs: [LegPolyline; LEG_COUNT],
    pub end_effectors: [Point3<f64>; LEG_COUNT],
    pub jacobian: Matrix2x6<f64>,
}

impl FrameSnapshot {
    pub fn leg(&self, leg: LegId) -> &LegPolyline {
        &self.legs[leg]
    }
}
