//! Shared 2D camera resource.
//!
//! Owns the world-space position, fixed viewport size, and clamped zoom
//! level, and derives the view/projection transforms from them. Controller
//! systems mutate it (follow, zoom), the render system reads it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Matrix, Vector2};

use crate::mathutils;

/// Zoom clamp bounds. [`Camera::set_zoom`] never lets the level escape them.
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 10.0;

/// Per-call interpolation factor used by the camera follow system.
pub const FOLLOW_FACTOR: f32 = 0.1;

/// 2D camera with smooth follow and clamped zoom.
///
/// Viewport dimensions are fixed at construction. Coordinates follow
/// raylib's Y-down convention; the projection covers
/// `[0, viewport_width] x [0, viewport_height]` with the origin at the
/// top-left of the view.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Camera {
    /// World position of the view's top-left corner.
    pub position: Vector2,
    pub viewport_width: f32,
    pub viewport_height: f32,
    zoom: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            viewport_width,
            viewport_height,
            zoom: 1.0,
        }
    }

    /// View transform: translate world space by the camera position, negated.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn view_matrix(&self) -> Matrix {
        Matrix::translate(-self.position.x, -self.position.y, 0.0)
    }

    /// Orthographic projection over the viewport with zoom applied in clip
    /// space.
    ///
    /// raymath multiplication composes in application order, so the point is
    /// projected first and the clip-space scale runs second. Scaling clip
    /// space rather than world space means zooming in shrinks the visible
    /// world extent around the screen center.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn projection_matrix(&self) -> Matrix {
        let projection = Matrix::ortho(
            0.0,
            self.viewport_width.into(),
            self.viewport_height.into(),
            0.0,
            -1.0,
            1.0,
        );
        projection * mathutils::zoom_matrix(self.zoom)
    }

    /// Move the camera toward centering `target` in the viewport.
    ///
    /// Interpolates by `factor` per call; the follow system calls this once
    /// per frame with [`FOLLOW_FACTOR`]. Not time-scaled.
    pub fn lerp_follow(&mut self, target: Vector2, factor: f32) {
        let centered = target
            - Vector2 {
                x: self.viewport_width / 2.0,
                y: self.viewport_height / 2.0,
            };
        self.position = mathutils::lerp(self.position, centered, factor);
    }

    /// Set the zoom level, silently clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Raylib `Camera2D` equivalent to the matrix pair, for the draw pass.
    ///
    /// Clip-space zoom scales around the screen center, so the raylib camera
    /// targets the viewport center with a matching offset.
    pub fn to_camera2d(&self) -> Camera2D {
        let half = Vector2 {
            x: self.viewport_width / 2.0,
            y: self.viewport_height / 2.0,
        };
        Camera2D {
            target: self.position + half,
            offset: half,
            rotation: 0.0,
            zoom: self.zoom,
        }
    }

    /// Convert a screen-space point (pixels) to world space.
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        let cam = self.to_camera2d();
        (screen - cam.offset).scale_by(1.0 / self.zoom) + cam.target
    }
}
