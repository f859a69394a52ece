//! Gate rotations.

use glam::{Quat, Vec3};

use super::{BlochSphere, Motion, MotionKind};
use crate::state::Gate;

impl BlochSphere {
    /// Animate the rotation of a named gate.
    ///
    /// Returns `false` (and does nothing) while another rotation is in
    /// flight.
    pub fn apply_gate(&mut self, gate: Gate) -> bool {
        let (axis, angle) = gate.axis_angle();
        log::debug!("applying {gate} gate");
        self.apply_rotation(axis, angle)
    }

    /// Animate a rotation by `angle` radians about `axis`, pre-multiplied
    /// onto the current orientation.
    ///
    /// Gate controls are disabled until the rotation completes. A running
    /// drive is suspended for the duration and resumes from the rotated
    /// orientation; the paused interval is not compensated.
    pub fn apply_rotation(&mut self, axis: Vec3, angle: f32) -> bool {
        if self.rotation.is_some() {
            log::warn!("gate controls are disabled while a rotation is running");
            return false;
        }
        let Some(axis) = axis.try_normalize() else {
            log::warn!("ignoring rotation about degenerate axis {axis}");
            return false;
        };
        if !angle.is_finite() {
            log::warn!("ignoring rotation by non-finite angle {angle}");
            return false;
        }

        self.suspend_drive();

        let motion =
            Motion::new(MotionKind::Gate, self.orientation, axis, angle);
        let id = self.scheduler.start(
            self.options.animation.gate_duration(),
            self.options.animation.gate_easing,
            motion,
        );
        self.rotation = Some(id);
        true
    }

    /// Finish the in-flight rotation.
    pub(super) fn complete_rotation(&mut self, to: Quat) {
        self.orientation = to;
        self.rotation = None;
        if self.drive.enabled {
            self.resume_drive();
        }
    }
}
