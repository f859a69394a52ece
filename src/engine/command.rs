//! The engine's complete interactive vocabulary.
//!
//! Every user-facing control (gate buttons, channel sliders, drive toggle,
//! relaxation buttons, challenge start, reset) is represented as a
//! `BlochCommand`. Hosts translate their widgets into commands, either
//! directly or by control name through [`BlochCommand::from_control`], and
//! pass them to [`BlochSphere::execute`](super::BlochSphere::execute).

use std::str::FromStr;

use glam::Vec3;

use super::BlochSphere;
use crate::animation::relaxation::RelaxationKind;
use crate::challenge::ChallengeLevel;
use crate::error::BlochError;
use crate::state::{Gate, NoiseChannel};

/// Full-scale value of the probability sliders.
pub const SLIDER_MAX: f32 = 100.0;

/// Map a raw probability-slider value in `[0, SLIDER_MAX]` to `p ∈ [0, 1]`.
#[must_use]
pub fn slider_probability(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    (raw / SLIDER_MAX).clamp(0.0, 1.0)
}

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(BlochCommand::ApplyGate(Gate::H));
/// engine.execute(BlochCommand::from_control("depolarizing", 30.0)?);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlochCommand {
    // ── Gates ───────────────────────────────────────────────────────
    /// Animate a named gate.
    ApplyGate(Gate),
    /// Animate an arbitrary rotation.
    Rotate {
        /// Rotation axis (normalized on use).
        axis: Vec3,
        /// Signed angle in radians.
        angle: f32,
    },

    // ── Drive ───────────────────────────────────────────────────────
    /// Switch the dephasing drive on.
    StartDephasing,
    /// Switch the dephasing drive off.
    StopDephasing,
    /// Flip the dephasing drive.
    ToggleDephasing,
    /// Set the drive frequency (raw slider value).
    SetDriveFrequency(f32),

    // ── Noise ───────────────────────────────────────────────────────
    /// Apply a noise-channel deformation.
    ApplyChannel(NoiseChannel),
    /// Animate a T1/T2 relaxation.
    Relax(RelaxationKind),

    // ── Session ─────────────────────────────────────────────────────
    /// Return to the rest pose.
    Reset,
    /// Start challenge mode at a difficulty tier.
    StartChallenge(ChallengeLevel),
    /// The render target changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

impl BlochCommand {
    /// Translate a named control and its raw value into a command.
    ///
    /// | control | value |
    /// |---|---|
    /// | gate names (`x`, `h`, `sdg`, …) | ignored |
    /// | `phase_flip`, `bit_flip`, `bit_phase_flip`, `depolarizing`, `amplitude_damping` | slider `0..=100` |
    /// | `dephasing` | ignored (toggles) |
    /// | `drive_frequency` | raw frequency |
    /// | `t1`, `t2` | time constant in seconds |
    /// | `reset` | ignored |
    /// | `challenge_easy`, `challenge_medium`, `challenge_hard` | ignored |
    pub fn from_control(name: &str, value: f32) -> Result<Self, BlochError> {
        let key = name.trim().to_ascii_lowercase();
        if let Ok(gate) = Gate::from_str(&key) {
            return Ok(Self::ApplyGate(gate));
        }
        if let Ok(channel) = NoiseChannel::from_str(&key) {
            return Ok(Self::ApplyChannel(
                channel.with_parameter(slider_probability(value)),
            ));
        }
        if let Some(level) = key.strip_prefix("challenge_") {
            return level.parse().map(Self::StartChallenge);
        }
        match key.as_str() {
            "dephasing" => Ok(Self::ToggleDephasing),
            "drive_frequency" => Ok(Self::SetDriveFrequency(value)),
            "t1" => Ok(Self::Relax(RelaxationKind::T1 { t1: value })),
            "t2" => Ok(Self::Relax(RelaxationKind::T2 { t2: value })),
            "reset" => Ok(Self::Reset),
            _ => Err(BlochError::UnknownControl(name.to_owned())),
        }
    }

    /// Run this command against `engine`. Returns `false` when the engine
    /// rejected it (for example a gate while a rotation is running).
    pub fn execute(self, engine: &mut BlochSphere) -> bool {
        match self {
            Self::ApplyGate(gate) => return engine.apply_gate(gate),
            Self::Rotate { axis, angle } => {
                return engine.apply_rotation(axis, angle)
            }
            Self::StartDephasing => engine.start_dephasing(),
            Self::StopDephasing => engine.stop_dephasing(),
            Self::ToggleDephasing => engine.toggle_dephasing(),
            Self::SetDriveFrequency(f) => engine.set_drive_frequency(f),
            Self::ApplyChannel(channel) => engine.apply_channel(channel),
            Self::Relax(kind) => return engine.animate_relaxation(kind),
            Self::Reset => engine.reset(),
            Self::StartChallenge(level) => engine.start_challenge(level),
            Self::Resize { width, height } => engine.resize(width, height),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_maps_to_probability() {
        assert_eq!(slider_probability(0.0), 0.0);
        assert!((slider_probability(30.0) - 0.3).abs() < 1e-6);
        assert_eq!(slider_probability(100.0), 1.0);
        assert_eq!(slider_probability(250.0), 1.0);
        assert_eq!(slider_probability(f32::NAN), 0.0);
    }

    #[test]
    fn gate_controls() {
        assert_eq!(
            BlochCommand::from_control("H", 0.0).unwrap(),
            BlochCommand::ApplyGate(Gate::H)
        );
        assert_eq!(
            BlochCommand::from_control("tdg", 0.0).unwrap(),
            BlochCommand::ApplyGate(Gate::Tdg)
        );
    }

    #[test]
    fn channel_sliders_scale_to_probability() {
        let cmd = BlochCommand::from_control("depolarizing", 30.0).unwrap();
        let BlochCommand::ApplyChannel(NoiseChannel::Depolarizing(p)) = cmd
        else {
            panic!("unexpected command {cmd:?}");
        };
        assert!((p - 0.3).abs() < 1e-6);
    }

    #[test]
    fn drive_and_relaxation_controls() {
        assert_eq!(
            BlochCommand::from_control("dephasing", 0.0).unwrap(),
            BlochCommand::ToggleDephasing
        );
        assert_eq!(
            BlochCommand::from_control("drive_frequency", 21000.0).unwrap(),
            BlochCommand::SetDriveFrequency(21000.0)
        );
        assert_eq!(
            BlochCommand::from_control("t1", 2.0).unwrap(),
            BlochCommand::Relax(RelaxationKind::T1 { t1: 2.0 })
        );
    }

    #[test]
    fn challenge_controls() {
        assert_eq!(
            BlochCommand::from_control("challenge_hard", 0.0).unwrap(),
            BlochCommand::StartChallenge(ChallengeLevel::Hard)
        );
        assert!(matches!(
            BlochCommand::from_control("challenge_insane", 0.0),
            Err(BlochError::UnknownLevel(_))
        ));
    }

    #[test]
    fn unknown_control_is_an_error() {
        assert!(matches!(
            BlochCommand::from_control("measure", 0.0),
            Err(BlochError::UnknownControl(name)) if name == "measure"
        ));
    }
}
