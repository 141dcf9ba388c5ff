use thiserror::Error;

use crate::robot::leg::LEG_COUNT;

/// Errors raised by the kinematic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KinematicsError {
    #[error("Invalid leg index: {index} (must be < {})", LEG_COUNT)]
    InvalidLegIndex { index: usize },
}
