use crate::{
    frame::Color,
    hit::{Hit, Intersection},
    vector::Vector3,
    Ray,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    pub color: Color,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

impl Hit for Sphere {
    // a*t^2 + b*t + c = 0, with a = |d|^2 so d may be any length.
    fn intersect(&self, ray: Ray) -> Intersection {
        let co = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * co.dot(&ray.direction);
        let c = co.dot(&co) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return Intersection::Miss;
        }

        let root = discriminant.sqrt();
        Intersection::Hit {
            t1: (-b + root) / (2.0 * a),
            t2: (-b - root) / (2.0 * a),
        }
    }
}
