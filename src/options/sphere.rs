use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sphere", inline)]
#[serde(default)]
/// Sphere geometry shared by the arrow, trace and challenge markers.
pub struct SphereOptions {
    /// Sphere radius; also the state-arrow length.
    #[schemars(title = "Radius", range(min = 0.25, max = 4.0), extend("step" = 0.05))]
    pub radius: f32,
    /// Height of the arrow origin (sphere center) in group space.
    #[schemars(skip)]
    pub origin_y: f32,
}

impl SphereOptions {
    /// Arrow origin in group space.
    pub fn origin(&self) -> Vec3 {
        Vec3::new(0.0, self.origin_y, 0.0)
    }

    /// Arrow tip for a unit direction.
    pub fn point_at(&self, direction: Vec3) -> Vec3 {
        self.origin() + direction * self.radius
    }

    /// Arrow tip in the rest pose (pointing at |0⟩).
    pub fn rest_tip(&self) -> Vec3 {
        self.point_at(Vec3::Y)
    }
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            origin_y: 0.0,
        }
    }
}
