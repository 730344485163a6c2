//! World axis helpers shared by the transform and radial tools.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// World X.
    X,
    /// World Y.
    Y,
    /// World Z.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in a vector (X = 0).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis for a vector index, `None` past Z.
    pub fn from_index(index: usize) -> Option<Axis> {
        Self::ALL.get(index).copied()
    }

    /// Unit vector along the axis.
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Component of `v` along the axis.
    pub fn component(self, v: DVec3) -> f64 {
        v[self.index()]
    }

    /// Vector with `value` on this axis and zero elsewhere.
    pub fn vector(self, value: f64) -> DVec3 {
        self.unit() * value
    }

    /// Axis carrying the largest absolute component of `v`.
    ///
    /// Ties resolve to the lowest axis, so a zero vector yields X.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use smart_mesh::Axis;
    /// assert_eq!(Axis::dominant(DVec3::new(0.1, -2.0, 1.5)), Axis::Y);
    /// assert_eq!(Axis::dominant(DVec3::ZERO), Axis::X);
    /// ```
    pub fn dominant(v: DVec3) -> Axis {
        let abs = v.abs();
        let mut best = Axis::X;
        for axis in [Axis::Y, Axis::Z] {
            if axis.component(abs) > best.component(abs) {
                best = axis;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
    }

    #[test]
    fn dominant_prefers_first_on_tie() {
        assert_eq!(Axis::dominant(DVec3::new(1.0, -1.0, 0.5)), Axis::X);
        assert_eq!(Axis::dominant(DVec3::new(0.0, 2.0, -2.0)), Axis::Y);
        assert_eq!(Axis::dominant(DVec3::new(0.0, 0.0, -0.1)), Axis::Z);
    }

    #[test]
    fn vector_isolates_component() {
        let v = Axis::Z.vector(3.0);
        assert_eq!(v, DVec3::new(0.0, 0.0, 3.0));
        assert_eq!(Axis::Z.component(v), 3.0);
        assert_eq!(Axis::X.component(v), 0.0);
    }
}
