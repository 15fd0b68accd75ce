//! Rotation state for the ruler view.
//!
//! The ruler only ever rotates in quarter turns; the host's toggle adds 90°
//! per activation. Degrees are kept as the external representation (they
//! persist across view recreation), while [`RotationAngle`] is the internal
//! quarter-turn type the geometry works with.

/// Normalize a rotation in degrees into `0..360`.
///
/// Euclidean remainder, so negative inputs normalize too:
/// `normalize_degrees(-90) == 270`.
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// A quarter-turn rotation of the view's canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationAngle {
    /// No rotation
    #[default]
    Deg0,
    /// Quarter turn clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three-quarter turn clockwise
    Deg270,
}

impl RotationAngle {
    /// Convert a degree value to a quarter turn, if it normalizes to one.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match normalize_degrees(degrees) {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// The normalized degree value of this rotation.
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether this rotation swaps the width/height roles of the view
    /// (odd multiples of 90°).
    pub const fn is_sideways(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// The rotation one further quarter turn clockwise.
    pub const fn plus_quarter_turn(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_matches_mod_360() {
        for r in [-720, -450, -360, -90, -1, 0, 1, 89, 360, 361, 719] {
            assert_eq!(normalize_degrees(r), r.rem_euclid(360));
            assert_eq!(normalize_degrees(r + 360), normalize_degrees(r));
        }
    }

    #[test]
    fn test_normalize_negative() {
        assert_eq!(normalize_degrees(-90), 270);
        assert_eq!(normalize_degrees(-360), 0);
    }

    #[test]
    fn test_from_degrees_quarter_turns() {
        assert_eq!(RotationAngle::from_degrees(0), Some(RotationAngle::Deg0));
        assert_eq!(RotationAngle::from_degrees(450), Some(RotationAngle::Deg90));
        assert_eq!(
            RotationAngle::from_degrees(-90),
            Some(RotationAngle::Deg270)
        );
        assert_eq!(RotationAngle::from_degrees(45), None);
    }

    #[test]
    fn test_quarter_turn_walk_from_zero() {
        let mut angle = RotationAngle::Deg0;
        let mut seen = [0; 4];
        for slot in seen.iter_mut() {
            angle = angle.plus_quarter_turn();
            *slot = angle.degrees();
        }
        assert_eq!(seen, [90, 180, 270, 0]);
    }

    #[test]
    fn test_sideways() {
        assert!(!RotationAngle::Deg0.is_sideways());
        assert!(RotationAngle::Deg90.is_sideways());
        assert!(!RotationAngle::Deg180.is_sideways());
        assert!(RotationAngle::Deg270.is_sideways());
    }
}
