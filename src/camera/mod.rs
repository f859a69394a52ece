//! Camera and viewport for one visualization instance.
//!
//! Each [`SceneContext`] is constructed explicitly and owned by its engine,
//! so several spheres can be shown side by side without shared state.

/// Perspective camera and the per-instance scene context.
pub mod core;

pub use self::core::{Camera, SceneContext, Viewport};
