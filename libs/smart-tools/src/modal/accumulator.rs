//! Dominant-axis accumulators.
//!
//! Both accumulators lock motion to the single axis along which the pointer
//! has travelled furthest from the gesture origin. Whatever was applied on
//! the other axes is unwound in the same step, so the cumulative total never
//! has more than one non-zero component.

use glam::DVec3;
use smart_mesh::Axis;

/// Turns pointer positions into translation increments.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use smart_tools::modal::TranslateAccumulator;
///
/// let mut acc = TranslateAccumulator::new(DVec3::ZERO, 1.0);
/// assert_eq!(acc.update(DVec3::new(0.2, 3.0, 0.0)), DVec3::new(0.0, 3.0, 0.0));
/// assert_eq!(acc.update(DVec3::new(5.0, 3.0, 0.0)), DVec3::new(5.0, -3.0, 0.0));
/// assert_eq!(acc.rollback(), DVec3::new(-5.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateAccumulator {
    origin: DVec3,
    applied: DVec3,
    sensitivity: f64,
}

impl TranslateAccumulator {
    /// Starts at `origin` with nothing applied.
    pub fn new(origin: DVec3, sensitivity: f64) -> Self {
        Self {
            origin,
            applied: DVec3::ZERO,
            sensitivity,
        }
    }

    /// Reads the pointer at `current` and returns the increment to apply.
    pub fn update(&mut self, current: DVec3) -> DVec3 {
        let raw = (current - self.origin) * self.sensitivity;
        let axis = Axis::dominant(raw);
        let target = axis.vector(axis.component(raw));
        let increment = target - self.applied;
        self.applied = target;
        increment
    }

    /// Total currently applied.
    pub fn cumulative(&self) -> DVec3 {
        self.applied
    }

    /// Returns the exact negation of the total and forgets it.
    pub fn rollback(&mut self) -> DVec3 {
        let undo = -self.applied;
        self.applied = DVec3::ZERO;
        undo
    }
}

/// Turns pointer positions into per-axis rotation increments.
///
/// The applied angles are kept per axis. When the dominant axis changes the
/// old axis is unwound before the new one turns, so at most one angle is
/// non-zero at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateAccumulator {
    origin: DVec3,
    applied: DVec3,
    sensitivity: f64,
}

impl RotateAccumulator {
    /// Starts at `origin`; `sensitivity` is radians per world unit.
    pub fn new(origin: DVec3, sensitivity: f64) -> Self {
        Self {
            origin,
            applied: DVec3::ZERO,
            sensitivity,
        }
    }

    /// Reads the pointer at `current` and returns the rotations to apply,
    /// in order: unwinding steps first, then the dominant axis.
    pub fn update(&mut self, current: DVec3) -> Vec<(Axis, f64)> {
        let raw = (current - self.origin) * self.sensitivity;
        let dominant = Axis::dominant(raw);
        let target = dominant.vector(dominant.component(raw));

        let mut steps: Vec<(Axis, f64)> = Axis::ALL
            .into_iter()
            .filter(|&a| a != dominant)
            .map(|a| (a, -a.component(self.applied)))
            .collect();
        steps.push((dominant, dominant.component(target) - dominant.component(self.applied)));
        steps.retain(|&(_, angle)| angle != 0.0);

        self.applied = target;
        steps
    }

    /// Angles currently applied, one per axis.
    pub fn cumulative(&self) -> DVec3 {
        self.applied
    }

    /// Returns the rotations undoing everything applied and forgets them.
    pub fn rollback(&mut self) -> Vec<(Axis, f64)> {
        let steps = Axis::ALL
            .into_iter()
            .map(|a| (a, -a.component(self.applied)))
            .filter(|&(_, angle)| angle != 0.0)
            .collect();
        self.applied = DVec3::ZERO;
        steps
    }
}
