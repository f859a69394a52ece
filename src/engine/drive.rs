//! Continuous dephasing drive.
//!
//! The drive is an unbounded chain of half-turns about the vertical axis:
//! each half-turn tween re-arms the next one when it completes. Stopping
//! cancels the in-flight half-turn without forcing its end value, so the
//! arrow freezes mid-rotation.

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use web_time::Duration;

use super::{BlochSphere, Motion, MotionKind};
use crate::animation::Easing;

impl BlochSphere {
    /// Switch the drive on. No-op when already on.
    ///
    /// During a gate rotation the drive is only marked on; it starts when
    /// the rotation completes.
    pub fn start_dephasing(&mut self) {
        if self.drive.enabled {
            return;
        }
        self.drive.enabled = true;
        if self.rotation.is_none() {
            self.resume_drive();
        }
        log::debug!(
            "dephasing drive on ({:?} per half-turn)",
            self.drive.duration
        );
    }

    /// Switch the drive off, freezing the arrow where it is.
    pub fn stop_dephasing(&mut self) {
        self.suspend_drive();
        self.drive.enabled = false;
        log::debug!("dephasing drive off");
    }

    /// Flip the drive between on and off.
    pub fn toggle_dephasing(&mut self) {
        if self.drive.enabled {
            self.stop_dephasing();
        } else {
            self.start_dephasing();
        }
    }

    /// Set the drive frequency; the half-turn duration becomes
    /// `drive_frequency_offset_ms − frequency` (floored at
    /// `min_drive_duration_ms`). A running drive restarts at the new rate.
    pub fn set_drive_frequency(&mut self, frequency: f32) {
        self.drive.duration = Duration::from_millis(
            self.options
                .animation
                .drive_duration_for_frequency(frequency),
        );
        log::debug!(
            "drive frequency {frequency} -> {:?} per half-turn",
            self.drive.duration
        );
        if self.drive.tween.is_some() {
            self.suspend_drive();
            self.resume_drive();
        }
    }

    /// Cancel the in-flight half-turn, leaving `enabled` untouched.
    pub(super) fn suspend_drive(&mut self) {
        if let Some(id) = self.drive.tween.take() {
            let _ = self.scheduler.cancel(id);
        }
    }

    /// Start a half-turn from the current orientation.
    pub(super) fn resume_drive(&mut self) {
        self.suspend_drive();
        let motion =
            Motion::new(MotionKind::Drive, self.orientation, Vec3::Y, PI);
        let id = self.scheduler.start(
            self.drive.duration,
            Easing::Linear,
            motion,
        );
        self.drive.tween = Some(id);
    }

    /// Finish a half-turn and immediately re-arm the next.
    pub(super) fn complete_drive_half_turn(&mut self, to: Quat) {
        self.orientation = to;
        self.drive.tween = None;
        if self.drive.enabled {
            self.resume_drive();
        }
    }
}
