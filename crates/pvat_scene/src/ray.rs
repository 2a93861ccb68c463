//! Rays, planes and the intersection tests used for picking.

use glam::Vec3;

/// Below this magnitude a ray direction is treated as parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A ray in world space. `direction` is kept normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point along the ray at parameter `t`.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with a plane.
    ///
    /// A ray parallel to the plane only intersects when its origin already
    /// lies on the plane. Intersections behind the origin are rejected.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denominator = plane.normal.dot(self.direction);
        if denominator.abs() < PARALLEL_EPSILON {
            if plane.distance_to_point(self.origin).abs() < PARALLEL_EPSILON {
                return Some(self.origin);
            }
            return None;
        }

        let t = -(self.origin.dot(plane.normal) + plane.constant) / denominator;
        if t < 0.0 || !t.is_finite() {
            return None;
        }
        Some(self.point_at(t))
    }

    /// Distance along the ray to the first point inside a sphere.
    ///
    /// Returns 0 when the origin is already inside the sphere and `None` when
    /// the sphere lies entirely behind the origin or off the ray.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let offset = self.origin - center;
        let b = offset.dot(self.direction);
        let c = offset.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let far = -b + root;
        if far < 0.0 {
            return None;
        }
        Some((-b - root).max(0.0))
    }
}

/// A plane `normal · p + constant = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// The z = 0 working plane that pointer input is projected onto.
    pub const GROUND: Plane = Plane {
        normal: Vec3::Z,
        constant: 0.0,
    };

    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            constant,
        }
    }

    /// Signed distance from the plane to `point`.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
