//! Kinematics of the hexapod legs and the tripod gait.
//!
//! This module provides the mathematical routines of the mechanism:
//!
//! - [`leg_model`] holds the mount layout and joint state, and computes leg
//!   polylines, end effector positions and the hip Jacobian.
//! - [`gait_engine`] turns a phase value into the joint angles of all six legs.
//!
//! Used by the motion task to advance and snapshot the mechanism every frame.
pub mod gait_engine;
pub mod leg_model;
