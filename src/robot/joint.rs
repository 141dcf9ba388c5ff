//! Joint enumeration and display helpers.
//!
//! Defines the [`Joint`] enum for identifying the two joints of a leg (hip, knee),
//! and provides display formatting for debugging and logging.
use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    Hip = 0,
    Knee = 1,
}

impl Joint {
    pub const ALL: [Joint; 2] = [Joint::Hip, Joint::Knee];
}

impl Display for Joint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Joint::Hip => f.write_str("hip"),
            Joint::Knee => f.write_str("knee"),
        }
    }
}
