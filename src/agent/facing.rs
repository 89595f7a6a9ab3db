//! 8-directional facing

use glam::Vec2;

/// Facing direction, bucketed into eight 45° sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// +X
    East,
    /// +X +Y
    NorthEast,
    /// +Y
    North,
    /// -X +Y
    NorthWest,
    /// -X
    West,
    /// -X -Y
    SouthWest,
    /// -Y
    #[default]
    South,
    /// +X -Y
    SouthEast,
}

impl Facing {
    /// Bucket a movement vector into a facing.
    ///
    /// Sectors are offset by half a sector (22.5°) so axis-aligned
    /// vectors land squarely inside a sector instead of on a boundary.
    /// Returns `None` for a (near-)zero vector so callers can keep the
    /// previous facing while standing still.
    #[must_use]
    pub fn from_vector(v: Vec2) -> Option<Facing> {
        if v.length_squared() < 1e-12 {
            return None;
        }
        let degrees = v.y.atan2(v.x).to_degrees();
        let sector = ((degrees + 22.5).rem_euclid(360.0) / 45.0) as usize;
        Some(match sector {
            0 => Facing::East,
            1 => Facing::NorthEast,
            2 => Facing::North,
            3 => Facing::NorthWest,
            4 => Facing::West,
            5 => Facing::SouthWest,
            6 => Facing::South,
            _ => Facing::SouthEast,
        })
    }

    /// Unit vector pointing along this facing
    #[must_use]
    pub fn as_vector(&self) -> Vec2 {
        const DIAGONAL: f32 = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Facing::East => Vec2::new(1.0, 0.0),
            Facing::NorthEast => Vec2::new(DIAGONAL, DIAGONAL),
            Facing::North => Vec2::new(0.0, 1.0),
            Facing::NorthWest => Vec2::new(-DIAGONAL, DIAGONAL),
            Facing::West => Vec2::new(-1.0, 0.0),
            Facing::SouthWest => Vec2::new(-DIAGONAL, -DIAGONAL),
            Facing::South => Vec2::new(0.0, -1.0),
            Facing::SouthEast => Vec2::new(DIAGONAL, -DIAGONAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_aligned_vectors() {
        assert_eq!(Facing::from_vector(Vec2::new(1.0, 0.0)), Some(Facing::East));
        assert_eq!(Facing::from_vector(Vec2::new(0.0, 1.0)), Some(Facing::North));
        assert_eq!(Facing::from_vector(Vec2::new(-1.0, 0.0)), Some(Facing::West));
        assert_eq!(Facing::from_vector(Vec2::new(0.0, -1.0)), Some(Facing::South));
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(
            Facing::from_vector(Vec2::new(1.0, 1.0)),
            Some(Facing::NorthEast)
        );
        assert_eq!(
            Facing::from_vector(Vec2::new(-1.0, -1.0)),
            Some(Facing::SouthWest)
        );
    }

    #[test]
    fn test_sector_boundaries() {
        // Just under and just over the 22.5° boundary between East and
        // NorthEast.
        let under = Vec2::new(22.4_f32.to_radians().cos(), 22.4_f32.to_radians().sin());
        let over = Vec2::new(22.6_f32.to_radians().cos(), 22.6_f32.to_radians().sin());

        assert_eq!(Facing::from_vector(under), Some(Facing::East));
        assert_eq!(Facing::from_vector(over), Some(Facing::NorthEast));
    }

    #[test]
    fn test_zero_vector_has_no_facing() {
        assert_eq!(Facing::from_vector(Vec2::ZERO), None);
    }

    #[test]
    fn test_round_trip_through_vector() {
        for facing in [
            Facing::East,
            Facing::NorthEast,
            Facing::North,
            Facing::NorthWest,
            Facing::West,
            Facing::SouthWest,
            Facing::South,
            Facing::SouthEast,
        ] {
            assert_eq!(Facing::from_vector(facing.as_vector()), Some(facing));
        }
    }
}
