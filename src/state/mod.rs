//! Qubit-state geometry: gates, noise channels, and the tip trace.

pub mod channel;
pub mod gate;
pub mod trace;

pub use channel::{Deformation, NoiseChannel};
pub use gate::Gate;
pub use trace::TracePath;
