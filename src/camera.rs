use crate::{vector::Vector3, Ray};

pub const VIEWPORT_SIZE: f64 = 1.0;
pub const PROJECTION_PLANE_Z: f64 = 1.0;

/// Pinhole camera looking down +z from a fixed eye point.
///
/// Canvas pixels map onto a `viewport_size` square plane at
/// `z = projection_plane_z`. The y axis points up.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vector3,
    canvas_width: u32,
    canvas_height: u32,
    viewport_size: f64,
    projection_plane_z: f64,
}

impl Camera {
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        viewport_size: f64,
        projection_plane_z: f64,
    ) -> Self {
        Self {
            eye: Vector3::zeros(),
            canvas_width,
            canvas_height,
            viewport_size,
            projection_plane_z,
        }
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Maps a centered canvas offset onto the viewport plane.
    pub fn project(&self, px: f64, py: f64) -> Vector3 {
        Vector3::new(
            px * self.viewport_size / self.canvas_width as f64,
            py * self.viewport_size / self.canvas_height as f64,
            self.projection_plane_z,
        )
    }

    /// Ray through canvas pixel `(x, y)`, where `y` grows upwards from the bottom row.
    pub fn cast(&self, x: u32, y: u32) -> Ray {
        let px = x as f64 - (self.canvas_width / 2) as f64;
        let py = y as f64 - (self.canvas_height / 2) as f64;
        let point = self.project(px, py);
        Ray::new(self.eye, point - self.eye)
    }
}
