//! Read-only views of the engine state.

use glam::{Quat, Vec3};
use web_time::Duration;

use super::BlochSphere;
use crate::animation::relaxation::RelaxationProcess;
use crate::camera::SceneContext;
use crate::challenge::ChallengeMode;
use crate::options::Options;
use crate::state::{Deformation, TracePath};

impl BlochSphere {
    /// Arrow rotation relative to the rest pose.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Sphere-group scale and vertical offset.
    pub fn deformation(&self) -> Deformation {
        self.deformation
    }

    /// Arrow tip in sphere-group space.
    pub fn arrow_tip(&self) -> Vec3 {
        let sphere = &self.options.sphere;
        sphere.point_at(self.orientation * Vec3::Y)
    }

    /// Arrow tip after the group deformation.
    pub fn arrow_tip_world(&self) -> Vec3 {
        self.deformation.transform_point(self.arrow_tip())
    }

    /// Recorded tip trajectory.
    pub fn trace(&self) -> &TracePath {
        &self.trace
    }

    /// Whether the dephasing drive is switched on.
    pub fn is_dephasing(&self) -> bool {
        self.drive.enabled
    }

    /// Current drive half-turn duration.
    pub fn drive_duration(&self) -> Duration {
        self.drive.duration
    }

    /// Whether a gate rotation is in flight.
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// Whether gate triggers are accepted right now.
    pub fn gate_controls_enabled(&self) -> bool {
        self.rotation.is_none()
    }

    /// Running relaxation process, if any.
    pub fn relaxation(&self) -> Option<&RelaxationProcess> {
        self.relaxation.as_ref()
    }

    /// Challenge-mode state.
    pub fn challenge(&self) -> &ChallengeMode {
        &self.challenge
    }

    /// Number of tweens on the scheduler.
    pub fn active_tweens(&self) -> usize {
        self.scheduler.len()
    }

    /// Runtime options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Camera and viewport.
    pub fn scene(&self) -> &SceneContext {
        &self.scene
    }

    /// Whether any animation would advance on the next tick.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty() || self.relaxation.is_some()
    }
}
