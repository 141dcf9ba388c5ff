use core::fmt::Display;
use core::ops::{Index, IndexMut};

use crate::error::KinematicsError;

pub const LEG_COUNT: usize = 6;

/// Stable leg index. Leg `i` is mounted at `i * 60°` around the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegId {
    MiddleRight = 0,
    RearRight = 1,
    RearLeft = 2,
    MiddleLeft = 3,
    FrontLeft = 4,
    FrontRight = 5,
}

/// The two alternating tripods. Each group swings while the other supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripodGroup {
    A,
    B,
}

impl LegId {
    pub const ALL: [LegId; LEG_COUNT] = [
        LegId::MiddleRight,
        LegId::RearRight,
        LegId::RearLeft,
        LegId::MiddleLeft,
        LegId::FrontLeft,
        LegId::FrontRight,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn group(self) -> TripodGroup {
        match self {
            LegId::MiddleRight | LegId::RearRight | LegId::RearLeft => TripodGroup::A,
            LegId::MiddleLeft | LegId::FrontLeft | LegId::FrontRight => TripodGroup::B,
        }
    }
}

impl Display for LegId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LegId::MiddleRight => f.write_str("Middle right"),
            LegId::RearRight => f.write_str("Rear right"),
            LegId::RearLeft => f.write_str("Rear left"),
            LegId::MiddleLeft => f.write_str("Middle left"),
            LegId::FrontLeft => f.write_str("Front left"),
            LegId::FrontRight => f.write_str("Front right"),
        }
    }
}

impl TryFrom<usize> for LegId {
    type Error = KinematicsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LegId::ALL
            .get(value)
            .copied()
            .ok_or(KinematicsError::InvalidLegIndex { index: value })
    }
}

impl<T> Index<LegId> for [T; LEG_COUNT] {
    type Output = T;

    fn index(&self, leg: LegId) -> &Self::Output {
        &self[leg as usize]
    }
}

impl<T> IndexMut<LegId> for [T; LEG_COUNT] {
    fn index_mut(&mut self, leg: LegId) -> &mut Self::Output {
        &mut self[leg as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_round_trips_every_index() {
        for (i, leg) in LegId::ALL.iter().enumerate() {
            assert_eq!(LegId::try_from(i), Ok(*leg));
            assert_eq!(leg.index(), i);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(
            LegId::try_from(6),
            Err(KinematicsError::InvalidLegIndex { index: 6 })
        );
        assert!(LegId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn tripods_split_three_and_three() {
        let a = LegId::ALL
            .iter()
            .filter(|leg| leg.group() == TripodGroup::A)
            .count();
        assert_eq!(a, 3);
        assert_eq!(LegId::MiddleRight.group(), TripodGroup::A);
        assert_eq!(LegId::FrontRight.group(), TripodGroup::B);
    }

    #[test]
    fn array_indexing_by_leg() {
        let mut angles = [0.0_f64; LEG_COUNT];
        angles[LegId::FrontLeft] = 1.5;
        assert_eq!(angles[4], 1.5);
        assert_eq!(angles[LegId::FrontLeft], 1.5);
    }

    #[test]
    fn display_names() {
        assert_eq!(LegId::RearLeft.to_string(), "Rear left");
    }
}
