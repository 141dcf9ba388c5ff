//! Core robot types and configuration.
//!
//! This module defines the main types and constants for the hexapod, including:
//! - [`config`]: Physical and animation constants for the mechanism.
//! - [`leg`]: Leg enumeration, tripod groups and indexing helpers.
//! - [`joint`]: Joint enumeration and display helpers.
//! - [`snapshot`]: Frame geometry passed to the renderer by value.
//!
//! These types are used throughout the crate for kinematics, gait and rendering.
pub mod config;
pub mod joint;
pub mod leg;
pub mod snapshot;
