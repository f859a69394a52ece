use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the sphere center from the configured eye.
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// View matrix only.
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix only.
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Project a world-space point to normalized device coordinates.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.build_matrix().project_point3(point)
    }
}

/// Canvas size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Width over height.
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Camera plus render-target size for one visualization.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneContext {
    /// Scene camera.
    pub camera: Camera,
    /// Current canvas size.
    pub viewport: Viewport,
}

impl SceneContext {
    /// Context for a canvas of `width × height` pixels.
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let viewport = Viewport {
            width: width.max(1),
            height: height.max(1),
        };
        Self {
            camera: Camera::from_options(options, viewport.aspect()),
            viewport,
        }
    }

    /// Handle a window-resize notification.
    ///
    /// Zero-sized notifications (minimized windows, detached canvases) are
    /// ignored so the aspect ratio never degenerates.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring degenerate resize to {width}x{height}");
            return;
        }
        self.viewport = Viewport { width, height };
        self.camera.aspect = self.viewport.aspect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect_and_pixels() {
        let mut ctx = SceneContext::new(&CameraOptions::default(), 800, 600);
        assert!((ctx.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        ctx.resize(1920, 1080);
        assert_eq!(ctx.viewport, Viewport { width: 1920, height: 1080 });
        assert!((ctx.camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_resize_is_ignored() {
        let mut ctx = SceneContext::new(&CameraOptions::default(), 800, 600);
        ctx.resize(0, 600);
        assert_eq!(ctx.viewport, Viewport { width: 800, height: 600 });
    }

    #[test]
    fn sphere_center_projects_near_screen_center() {
        let ctx = SceneContext::new(&CameraOptions::default(), 800, 800);
        let ndc = ctx.camera.project(Vec3::ZERO);
        assert!(ndc.x.abs() < 0.1 && ndc.y.abs() < 0.1);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn poles_project_above_and_below_center() {
        let ctx = SceneContext::new(&CameraOptions::default(), 800, 800);
        let north = ctx.camera.project(Vec3::Y);
        let south = ctx.camera.project(Vec3::NEG_Y);
        assert!(north.y > 0.0);
        assert!(south.y < 0.0);
    }
}
