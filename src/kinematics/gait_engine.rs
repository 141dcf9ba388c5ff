use core::f64::consts::{PI, TAU};

use crate::robot::{
    config::HIP_FREQUENCY,
    leg::{LegId, TripodGroup, LEG_COUNT},
};

/// Period of [`gait_angles`] in phase units. The hip oscillates 60 times per
/// knee cycle, so both repeat after one full knee turn.
pub const GAIT_PERIOD: f64 = TAU;

/// Joint angles of every leg for one gait sample, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitAngles {
    pub hip: [f64; LEG_COUNT],
    pub knee: [f64; LEG_COUNT],
}

impl GaitAngles {
    pub fn leg(&self, leg: LegId) -> (f64, f64) {
        (self.hip[leg], self.knee[leg])
    }

    /// Legs of `group` with their (hip, knee) pair.
    pub fn group(&self, group: TripodGroup) -> impl Iterator<Item = (LegId, f64, f64)> + '_ {
        LegId::ALL
            .into_iter()
            .filter(move |leg| leg.group() == group)
            .map(move |leg| (leg, self.hip[leg], self.knee[leg]))
    }
}

/// Tripod gait sample at `phase`.
///
/// `phase` is not normalised; callers pick the time scale. Group A (the right
/// middle and rear legs plus the left rear leg) leads and group B follows with
/// the mirrored sign convention. Left legs are reflected through π so both
/// sides sweep symmetrically.
pub fn gait_angles(phase: f64) -> GaitAngles {
    let (hip_sin, hip_cos) = (HIP_FREQUENCY * phase).sin_cos();
    let (knee_sin, knee_cos) = phase.sin_cos();

    let mut hip = [0.0; LEG_COUNT];
    let mut knee = [0.0; LEG_COUNT];

    for leg in LegId::ALL {
        let (h, k) = match leg {
            // group A
            LegId::MiddleRight => (hip_sin, knee_sin),
            LegId::RearRight => (hip_cos, knee_cos),
            LegId::RearLeft => (-hip_sin + PI, -knee_cos),
            // group B
            LegId::MiddleLeft => (-hip_cos + PI, -knee_sin),
            LegId::FrontLeft => (-hip_sin + PI, -knee_sin),
            LegId::FrontRight => (hip_cos, knee_cos),
        };
        hip[leg] = h;
        knee[leg] = k;
    }

    GaitAngles { hip, knee }
}
