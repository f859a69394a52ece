//! Single-qubit gates as fixed rotations of the state arrow.
//!
//! The orientation frame is the rendering frame: +Y points at |0⟩, +X at
//! |+⟩ and +Z at |i⟩. A gate's rotation is pre-multiplied onto the current
//! orientation.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};

use crate::error::BlochError;

/// Named single-qubit gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Pauli X.
    X,
    /// Pauli Y.
    Y,
    /// Pauli Z.
    Z,
    /// Hadamard.
    H,
    /// Phase gate (quarter turn about Z).
    S,
    /// Inverse phase gate.
    Sdg,
    /// π/8 gate (eighth turn about Z).
    T,
    /// Inverse π/8 gate.
    Tdg,
}

impl Gate {
    /// Every gate, in trigger-surface order.
    pub const ALL: [Gate; 8] = [
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::Sdg,
        Gate::T,
        Gate::Tdg,
    ];

    /// Unit rotation axis and signed angle in radians.
    #[must_use]
    pub fn axis_angle(self) -> (Vec3, f32) {
        match self {
            Self::X => (Vec3::X, PI),
            Self::Y => (Vec3::Z, -PI),
            Self::Z => (Vec3::Y, PI),
            Self::H => (Vec3::new(1.0, 1.0, 0.0).normalize(), PI),
            Self::S => (Vec3::Y, FRAC_PI_2),
            Self::Sdg => (Vec3::Y, -FRAC_PI_2),
            Self::T => (Vec3::Y, FRAC_PI_4),
            Self::Tdg => (Vec3::Y, -FRAC_PI_4),
        }
    }

    /// The rotation this gate applies.
    #[must_use]
    pub fn rotation(self) -> Quat {
        let (axis, angle) = self.axis_angle();
        Quat::from_axis_angle(axis, angle)
    }

    /// The gate undoing this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::S => Self::Sdg,
            Self::Sdg => Self::S,
            Self::T => Self::Tdg,
            Self::Tdg => Self::T,
            other => other,
        }
    }

    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::Sdg => "S†",
            Self::T => "T",
            Self::Tdg => "T†",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gate {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "h" | "hadamard" => Ok(Self::H),
            "s" => Ok(Self::S),
            "sdg" | "s_inv" | "s-inverse" | "s†" => Ok(Self::Sdg),
            "t" => Ok(Self::T),
            "tdg" | "t_inv" | "t-inverse" | "t†" => Ok(Self::Tdg),
            _ => Err(BlochError::UnknownGate(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn pauli_gates_are_involutions() {
        for gate in [Gate::X, Gate::Y, Gate::Z, Gate::H] {
            let twice = gate.rotation() * gate.rotation();
            assert!(same_rotation(twice, Quat::IDENTITY), "{gate}");
        }
    }

    #[test]
    fn inverse_cancels() {
        for gate in Gate::ALL {
            let q = gate.inverse().rotation() * gate.rotation();
            assert!(same_rotation(q, Quat::IDENTITY), "{gate}");
        }
    }

    #[test]
    fn x_flips_ground_state_to_excited() {
        let tip = Gate::X.rotation() * Vec3::Y;
        assert!(tip.distance(Vec3::NEG_Y) < 1e-5);
    }

    #[test]
    fn hadamard_maps_ground_state_to_plus() {
        let tip = Gate::H.rotation() * Vec3::Y;
        assert!(tip.distance(Vec3::X) < 1e-5);
    }

    #[test]
    fn two_s_gates_make_a_z() {
        let ss = Gate::S.rotation() * Gate::S.rotation();
        assert!(same_rotation(ss, Gate::Z.rotation()));
        let tt = Gate::T.rotation() * Gate::T.rotation();
        assert!(same_rotation(tt, Gate::S.rotation()));
    }

    #[test]
    fn parses_button_names() {
        assert_eq!("X".parse::<Gate>().ok(), Some(Gate::X));
        assert_eq!("hadamard".parse::<Gate>().ok(), Some(Gate::H));
        assert_eq!(" s_inv ".parse::<Gate>().ok(), Some(Gate::Sdg));
        assert_eq!("tdg".parse::<Gate>().ok(), Some(Gate::Tdg));
        assert!(matches!(
            "cnot".parse::<Gate>(),
            Err(BlochError::UnknownGate(name)) if name == "cnot"
        ));
    }
}
