//! Named marker positions on the sphere surface.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;

use crate::error::BlochError;

/// A state at which a challenge marker can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerState {
    /// |1⟩, the south pole.
    One,
    /// |i⟩.
    PlusI,
    /// |+⟩.
    Plus,
    /// |−⟩.
    Minus,
    /// Midway between |0⟩ and |i⟩.
    Hanover,
    /// Midway between |+⟩ and |1⟩.
    Gpt,
    /// Midway between |−⟩ and |i⟩.
    TZone,
    /// Midway between |+⟩ and |−i⟩.
    TZone2,
    /// A random point on the sphere.
    Random,
}

impl MarkerState {
    /// Unit direction of the marker, drawing from `rng` for
    /// [`MarkerState::Random`].
    pub fn direction<R: Rng>(self, rng: &mut R) -> Vec3 {
        match self {
            Self::One => Vec3::NEG_Y,
            Self::PlusI => Vec3::Z,
            Self::Plus => Vec3::X,
            Self::Minus => Vec3::NEG_X,
            Self::Hanover => Vec3::new(0.0, 1.0, 1.0).normalize(),
            Self::Gpt => Vec3::new(1.0, -1.0, 0.0).normalize(),
            Self::TZone => Vec3::new(-1.0, 0.0, 1.0).normalize(),
            Self::TZone2 => Vec3::new(1.0, 0.0, -1.0).normalize(),
            Self::Random => random_direction(rng),
        }
    }

    /// Key used by the trigger surface.
    pub fn key(self) -> &'static str {
        match self {
            Self::One => "|1>",
            Self::PlusI => "|i>",
            Self::Plus => "|+>",
            Self::Minus => "|->",
            Self::Hanover => "hanover",
            Self::Gpt => "gpt",
            Self::TZone => "tzone",
            Self::TZone2 => "tzone2",
            Self::Random => "random",
        }
    }
}

/// Uniform cube sample projected onto the sphere; near-zero samples are
/// redrawn.
fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if let Some(dir) = v.try_normalize() {
            if v.length_squared() > 1e-4 {
                return dir;
            }
        }
    }
}

impl fmt::Display for MarkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MarkerState {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "|1>" => Ok(Self::One),
            "|i>" => Ok(Self::PlusI),
            "|+>" => Ok(Self::Plus),
            "|->" => Ok(Self::Minus),
            "hanover" => Ok(Self::Hanover),
            "gpt" => Ok(Self::Gpt),
            "tzone" => Ok(Self::TZone),
            "tzone2" => Ok(Self::TZone2),
            "random" | "idk" => Ok(Self::Random),
            other => Err(BlochError::UnknownMarker(other.to_owned())),
        }
    }
}

/// A placed marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Which state the marker stands for.
    pub state: MarkerState,
    /// Group-space position.
    pub position: Vec3,
}
