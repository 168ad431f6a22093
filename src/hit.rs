use crate::Ray;

pub trait Hit {
    fn intersect(&self, ray: Ray) -> Intersection;
}

/// Ray parameters where a ray crosses a surface.
///
/// `t1` and `t2` are not ordered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Hit { t1: f64, t2: f64 },
    Miss,
}

impl Intersection {
    pub fn roots(self) -> impl Iterator<Item = f64> {
        let roots = match self {
            Intersection::Hit { t1, t2 } => [Some(t1), Some(t2)],
            Intersection::Miss => [None, None],
        };
        roots.into_iter().flatten()
    }
}
