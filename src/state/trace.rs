//! Trajectory of the arrow tip.

use glam::Vec3;

/// Append-only polyline of arrow-tip positions since the last reset.
///
/// Points are in sphere-group space, so the group deformation applies to the
/// trace exactly as it does to the arrow. One point is appended per animation
/// tick with no de-duplication.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePath {
    points: Vec<Vec3>,
}

impl TracePath {
    /// Path holding only the rest-pose tip.
    #[must_use]
    pub fn new(rest_tip: Vec3) -> Self {
        let mut points = Vec::with_capacity(256);
        points.push(rest_tip);
        Self { points }
    }

    /// Append a tip position.
    pub fn push(&mut self, tip: Vec3) {
        self.points.push(tip);
    }

    /// Drop every point and start again from `rest_tip`.
    pub fn reset(&mut self, rest_tip: Vec3) {
        self.points.clear();
        self.points.push(rest_tip);
    }

    /// All recorded points, oldest first.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of recorded points. Never zero.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a trace holds at least its starting point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point.
    pub fn last(&self) -> Option<Vec3> {
        self.points.last().copied()
    }

    /// Points flattened to `[x0, y0, z0, x1, ...]` for vertex upload.
    pub fn to_flat(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.to_array()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_one_point_per_push() {
        let mut trace = TracePath::new(Vec3::Y);
        trace.push(Vec3::X);
        trace.push(Vec3::X);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.last(), Some(Vec3::X));
    }

    #[test]
    fn reset_leaves_single_rest_point() {
        let mut trace = TracePath::new(Vec3::Y);
        for _ in 0..10 {
            trace.push(Vec3::Z);
        }
        trace.reset(Vec3::Y);
        assert_eq!(trace.points(), &[Vec3::Y]);
        assert!(!trace.is_empty());
    }

    #[test]
    fn flattens_in_order() {
        let mut trace = TracePath::new(Vec3::Y);
        trace.push(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(trace.to_flat(), vec![0.0, 1.0, 0.0, 1.0, 2.0, 3.0]);
    }
}
