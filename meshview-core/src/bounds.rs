/// Axis-aligned bounding boxes and the spheres derived from them
use crate::vector::Vector3;

/// Closed range `[lower, upper]` along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    /// Starting value for min/max accumulation
    pub const EMPTY: Self = Self::new(f64::INFINITY, f64::NEG_INFINITY);

    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Grow to contain `value`
    pub fn include(&mut self, value: f64) {
        if value < self.lower {
            self.lower = value;
        }
        if value > self.upper {
            self.upper = value;
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.lower <= self.upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Box3 {
    pub const EMPTY: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Bounds of a flat `[x0, y0, z0, x1, y1, z1, ...]` array.
    ///
    /// An empty array leaves every axis at `(+inf, -inf)`.
    pub fn boundary_of(points: &[f32]) -> Self {
        let mut bounds = Self::EMPTY;
        for (i, &value) in points.iter().enumerate() {
            let axis = match i % 3 {
                0 => &mut bounds.x,
                1 => &mut bounds.y,
                _ => &mut bounds.z,
            };
            axis.include(f64::from(value));
        }
        bounds
    }

    pub fn upper(&self) -> Vector3 {
        Vector3::new(self.x.upper, self.y.upper, self.z.upper)
    }

    pub fn center(&self) -> Vector3 {
        Vector3::new(self.x.center(), self.y.center(), self.z.center())
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// Sphere through the box corners, centered on the box.
    ///
    /// Looser than the minimal enclosing sphere of the points; camera framing
    /// depends on this exact formula.
    pub fn bounding_sphere(&self) -> Sphere {
        let center = self.center();
        let radius = (self.upper() - center).length();
        Sphere::new(center, radius)
    }
}
