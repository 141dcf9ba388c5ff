//! Library root for the hexapod kinematics model.
//!
//! Re-exports all main modules: [`kinematics`], [`robot`], and [`tasks`].
//! Used by the main binary and by hosts that draw the mechanism themselves.
pub mod error;
pub mod kinematics;
pub mod robot;
pub mod tasks;

pub use error::KinematicsError;
pub use kinematics::gait_engine::{gait_angles, GaitAngles, GAIT_PERIOD};
pub use kinematics::leg_model::LegModel;
pub use robot::leg::LegId;
