//! Noise channels and the sphere deformation they produce.
//!
//! A channel does not touch the state arrow; it reshapes the whole sphere
//! group into the image of the Bloch ball under the channel. Every formula
//! here is a pure function of its parameter, so applying the same channel
//! twice leaves the same deformation as applying it once.

use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Quat, Vec3};

use crate::error::BlochError;

/// Non-uniform scale plus vertical offset applied to the sphere group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deformation {
    /// Per-axis scale of the group.
    pub scale: Vec3,
    /// Translation of the group along +Y.
    pub offset_y: f32,
}

impl Deformation {
    /// Undeformed unit ball.
    pub const IDENTITY: Self = Self {
        scale: Vec3::ONE,
        offset_y: 0.0,
    };

    /// Deformation with no vertical offset.
    #[must_use]
    pub fn scaled(scale: Vec3) -> Self {
        Self {
            scale,
            offset_y: 0.0,
        }
    }

    /// Group transform matrix (scale, then translate).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::IDENTITY,
            Vec3::new(0.0, self.offset_y, 0.0),
        )
    }

    /// Map a group-local point into world space.
    #[must_use]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        local * self.scale + Vec3::new(0.0, self.offset_y, 0.0)
    }

    /// Whether this is the identity deformation.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Deformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Amplitude damping with decay probability `gamma`.
///
/// The ball shrinks toward |0⟩: the transverse axes by `√(1−γ)`, the
/// vertical axis by `1−γ`, and the center lifts by `γ`.
#[must_use]
pub fn amplitude_damping(gamma: f32) -> Deformation {
    let transverse = (1.0 - gamma).max(0.0).sqrt();
    Deformation {
        scale: Vec3::new(transverse, 1.0 - gamma, transverse),
        offset_y: gamma,
    }
}

/// Pure dephasing with transverse coherence factor `coherence`.
#[must_use]
pub fn phase_damping(coherence: f32) -> Deformation {
    Deformation::scaled(Vec3::new(coherence, 1.0, coherence))
}

/// Single-qubit noise channel with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseChannel {
    /// Z applied with probability `p`.
    PhaseFlip(f32),
    /// X applied with probability `p`.
    BitFlip(f32),
    /// Y applied with probability `p`.
    BitPhaseFlip(f32),
    /// Completely depolarized with probability `p`.
    Depolarizing(f32),
    /// Generalized amplitude damping with decay `γ`.
    AmplitudeDamping(f32),
}

impl NoiseChannel {
    /// Parameter of the channel, clamped to `[0, 1]`.
    #[must_use]
    pub fn parameter(self) -> f32 {
        let p = match self {
            Self::PhaseFlip(p)
            | Self::BitFlip(p)
            | Self::BitPhaseFlip(p)
            | Self::Depolarizing(p)
            | Self::AmplitudeDamping(p) => p,
        };
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }

    /// Same channel kind with a new parameter.
    #[must_use]
    pub fn with_parameter(self, p: f32) -> Self {
        match self {
            Self::PhaseFlip(_) => Self::PhaseFlip(p),
            Self::BitFlip(_) => Self::BitFlip(p),
            Self::BitPhaseFlip(_) => Self::BitPhaseFlip(p),
            Self::Depolarizing(_) => Self::Depolarizing(p),
            Self::AmplitudeDamping(_) => Self::AmplitudeDamping(p),
        }
    }

    /// The deformation this channel produces on the undeformed ball.
    #[must_use]
    pub fn deformation(self) -> Deformation {
        let p = self.parameter();
        let flip = 1.0 - 2.0 * p;
        match self {
            Self::PhaseFlip(_) => {
                Deformation::scaled(Vec3::new(flip, 1.0, flip))
            }
            Self::BitFlip(_) => Deformation::scaled(Vec3::new(1.0, flip, flip)),
            Self::BitPhaseFlip(_) => {
                Deformation::scaled(Vec3::new(flip, flip, 1.0))
            }
            Self::Depolarizing(_) => Deformation::scaled(Vec3::splat(1.0 - p)),
            Self::AmplitudeDamping(_) => amplitude_damping(p),
        }
    }

    /// Control name of the channel kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PhaseFlip(_) => "phase_flip",
            Self::BitFlip(_) => "bit_flip",
            Self::BitPhaseFlip(_) => "bit_phase_flip",
            Self::Depolarizing(_) => "depolarizing",
            Self::AmplitudeDamping(_) => "amplitude_damping",
        }
    }
}

impl fmt::Display for NoiseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.3})", self.name(), self.parameter())
    }
}

impl FromStr for NoiseChannel {
    type Err = BlochError;

    /// Parses a channel kind (`"depolarizing"`) with parameter 0, or a kind
    /// with an explicit parameter (`"depolarizing:0.3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, param) = match s.split_once(':') {
            Some((kind, param)) => {
                let p = param.trim().parse::<f32>().map_err(|e| {
                    BlochError::InvalidParameter(format!(
                        "channel parameter `{param}`: {e}"
                    ))
                })?;
                (kind, p)
            }
            None => (s, 0.0),
        };
        let kind = kind.trim().to_ascii_lowercase().replace('-', "_");
        match kind.as_str() {
            "phase_flip" | "phaseflip" => Ok(Self::PhaseFlip(param)),
            "bit_flip" | "bitflip" => Ok(Self::BitFlip(param)),
            "bit_phase_flip" | "bitphaseflip" => Ok(Self::BitPhaseFlip(param)),
            "depolarizing" | "depolarising" => Ok(Self::Depolarizing(param)),
            "amplitude_damping" | "gad" => Ok(Self::AmplitudeDamping(param)),
            _ => Err(BlochError::UnknownChannel(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-5
    }

    #[test]
    fn flip_channels_squash_the_right_axes() {
        let d = NoiseChannel::PhaseFlip(0.25).deformation();
        assert!(close(d.scale, Vec3::new(0.5, 1.0, 0.5)));
        let d = NoiseChannel::BitFlip(0.25).deformation();
        assert!(close(d.scale, Vec3::new(1.0, 0.5, 0.5)));
        let d = NoiseChannel::BitPhaseFlip(0.25).deformation();
        assert!(close(d.scale, Vec3::new(0.5, 0.5, 1.0)));
    }

    #[test]
    fn half_flip_collapses_to_a_line() {
        let d = NoiseChannel::PhaseFlip(0.5).deformation();
        assert!(close(d.scale, Vec3::new(0.0, 1.0, 0.0)));
        // p = 1 inverts the transverse axes.
        let d = NoiseChannel::PhaseFlip(1.0).deformation();
        assert!(close(d.scale, Vec3::new(-1.0, 1.0, -1.0)));
    }

    #[test]
    fn depolarizing_is_uniform_and_not_cumulative() {
        let once = NoiseChannel::Depolarizing(0.3).deformation();
        let twice = NoiseChannel::Depolarizing(0.3).deformation();
        assert_eq!(once, twice);
        assert!(close(once.scale, Vec3::splat(0.7)));
        assert_eq!(once.offset_y, 0.0);
    }

    #[test]
    fn amplitude_damping_half() {
        let d = NoiseChannel::AmplitudeDamping(0.5).deformation();
        let r = 0.5f32.sqrt();
        assert!(close(d.scale, Vec3::new(r, 0.5, r)));
        assert!((d.offset_y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn full_damping_lands_on_ground_state() {
        let d = amplitude_damping(1.0);
        // Any point of the ball maps to the north pole.
        assert!(close(d.transform_point(Vec3::NEG_Y), Vec3::Y));
        assert!(close(d.transform_point(Vec3::X), Vec3::Y));
    }

    #[test]
    fn parameter_is_clamped() {
        assert_eq!(NoiseChannel::Depolarizing(1.7).parameter(), 1.0);
        assert_eq!(NoiseChannel::BitFlip(-0.2).parameter(), 0.0);
        assert_eq!(NoiseChannel::BitFlip(f32::NAN).parameter(), 0.0);
    }

    #[test]
    fn matrix_matches_transform_point() {
        let d = amplitude_damping(0.36);
        let p = Vec3::new(0.3, -0.4, 0.5);
        assert!(close(d.matrix().transform_point3(p), d.transform_point(p)));
    }

    #[test]
    fn zero_parameter_is_identity() {
        for ch in [
            NoiseChannel::PhaseFlip(0.0),
            NoiseChannel::BitFlip(0.0),
            NoiseChannel::BitPhaseFlip(0.0),
            NoiseChannel::Depolarizing(0.0),
            NoiseChannel::AmplitudeDamping(0.0),
        ] {
            assert!(ch.deformation().is_identity(), "{ch}");
        }
    }

    #[test]
    fn parses_names_with_parameters() {
        assert_eq!(
            "depolarizing:0.3".parse::<NoiseChannel>().ok(),
            Some(NoiseChannel::Depolarizing(0.3))
        );
        assert_eq!(
            "Phase-Flip".parse::<NoiseChannel>().ok(),
            Some(NoiseChannel::PhaseFlip(0.0))
        );
        assert!(matches!(
            "thermal:0.1".parse::<NoiseChannel>(),
            Err(BlochError::UnknownChannel(_))
        ));
        assert!(matches!(
            "bit_flip:abc".parse::<NoiseChannel>(),
            Err(BlochError::InvalidParameter(_))
        ));
    }
}
