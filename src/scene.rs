use core::ops::Range;

use crate::{frame::Color, hit::Hit, sphere::Sphere, vector::Vector3, Ray};

/// A fixed list of spheres in front of a flat background.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    background: Color,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, background: Color) -> Self {
        Self {
            spheres,
            background,
        }
    }

    /// Red, blue and green unit spheres on a white background.
    pub fn reference() -> Self {
        Self::new(
            vec![
                Sphere::new(Vector3::new(0.0, -1.0, 3.0), 1.0, Color::RED),
                Sphere::new(Vector3::new(2.0, 0.0, 4.0), 1.0, Color::BLUE),
                Sphere::new(Vector3::new(-2.0, 0.0, 4.0), 1.0, Color::GREEN),
            ],
            Color::WHITE,
        )
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Smallest ray parameter strictly inside `interval`, with the sphere it belongs to.
    ///
    /// On equal parameters the sphere listed first wins.
    pub fn closest_hit(&self, ray: Ray, interval: Range<f64>) -> Option<(f64, &Sphere)> {
        let mut closest: Option<(f64, &Sphere)> = None;
        for sphere in &self.spheres {
            for t in sphere.intersect(ray).roots() {
                if !(interval.start < t && t < interval.end) {
                    continue;
                }
                if closest.is_none_or(|(closest_t, _)| t < closest_t) {
                    closest = Some((t, sphere));
                }
            }
        }
        closest
    }

    pub fn trace(&self, ray: Ray, interval: Range<f64>) -> Color {
        self.closest_hit(ray, interval)
            .map_or(self.background, |(_, sphere)| sphere.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: Range<f64> = 0.0..f64::INFINITY;

    fn ray(direction: Vector3) -> Ray {
        Ray::new(Vector3::zeros(), direction)
    }

    #[test]
    fn missing_every_sphere_gives_background() {
        let scene = Scene::reference();
        let color = scene.trace(ray(Vector3::new(1.0, 0.0, 0.0)), FORWARD);
        assert_eq!(color, Color::new(255, 255, 255, 255));
        assert_eq!(color, scene.background());
    }

    #[test]
    fn ray_towards_red_center_is_red() {
        let scene = Scene::reference();
        let color = scene.trace(ray(Vector3::new(0.0, -1.0, 3.0)), FORWARD);
        assert_eq!(color, Color::new(255, 0, 0, 255));
    }

    #[test]
    fn rays_towards_side_spheres() {
        let scene = Scene::reference();
        assert_eq!(scene.trace(ray(Vector3::new(2.0, 0.0, 4.0)), FORWARD), Color::BLUE);
        assert_eq!(scene.trace(ray(Vector3::new(-2.0, 0.0, 4.0)), FORWARD), Color::GREEN);
    }

    #[test]
    fn nearest_sphere_wins_regardless_of_order() {
        let near = Sphere::new(Vector3::new(0.0, 0.0, 3.0), 1.0, Color::RED);
        let far = Sphere::new(Vector3::new(0.0, 0.0, 6.0), 1.0, Color::BLUE);
        let forward = ray(Vector3::new(0.0, 0.0, 1.0));

        let scene = Scene::new(vec![far, near], Color::WHITE);
        assert_eq!(scene.trace(forward, FORWARD), Color::RED);
        let (t, _) = scene.closest_hit(forward, FORWARD).unwrap();
        assert_eq!(t, 2.0);
    }

    #[test]
    fn equal_parameters_resolve_to_first_sphere() {
        // Both near surfaces sit at t = 2.
        let small = Sphere::new(Vector3::new(0.0, 0.0, 3.0), 1.0, Color::RED);
        let large = Sphere::new(Vector3::new(0.0, 0.0, 4.0), 2.0, Color::BLUE);
        let forward = ray(Vector3::new(0.0, 0.0, 1.0));

        let scene = Scene::new(vec![small, large], Color::WHITE);
        assert_eq!(scene.trace(forward, FORWARD), Color::RED);

        let scene = Scene::new(vec![large, small], Color::WHITE);
        assert_eq!(scene.trace(forward, FORWARD), Color::BLUE);
    }

    #[test]
    fn interval_bounds_are_exclusive() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 3.0), 1.0, Color::RED);
        let scene = Scene::new(vec![sphere], Color::WHITE);
        let forward = ray(Vector3::new(0.0, 0.0, 1.0));

        assert_eq!(scene.trace(forward, 0.0..2.0), Color::WHITE);
        assert_eq!(scene.closest_hit(forward, 2.0..f64::INFINITY).unwrap().0, 4.0);
        assert_eq!(scene.trace(forward, 4.0..f64::INFINITY), Color::WHITE);
    }

    #[test]
    fn eye_inside_sphere_sees_far_wall() {
        let sphere = Sphere::new(Vector3::zeros(), 1.0, Color::GREEN);
        let scene = Scene::new(vec![sphere], Color::WHITE);
        let hit = scene.closest_hit(ray(Vector3::new(0.0, 0.0, 1.0)), FORWARD);
        assert_eq!(hit.map(|(t, s)| (t, s.color)), Some((1.0, Color::GREEN)));
    }

    #[test]
    fn sphere_behind_eye_is_ignored() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -2.0), 1.0, Color::RED);
        let scene = Scene::new(vec![sphere], Color::WHITE);
        assert_eq!(scene.trace(ray(Vector3::new(0.0, 0.0, 1.0)), FORWARD), Color::WHITE);
    }

    #[test]
    fn empty_scene_is_background() {
        let scene = Scene::new(Vec::new(), Color::BLUE);
        assert_eq!(scene.trace(ray(Vector3::new(0.0, 0.0, 1.0)), FORWARD), Color::BLUE);
    }
}
