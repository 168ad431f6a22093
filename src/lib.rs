//! Casts one ray per pixel into a fixed scene of flat-colored spheres.

pub mod camera;
pub mod frame;
pub mod hit;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod vector;

pub use ray::Ray;
