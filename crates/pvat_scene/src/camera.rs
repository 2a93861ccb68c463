//! Camera model used to unproject pointer positions into world-space rays.
//!
//! Projection matrices follow the OpenGL clip-space convention (depth in
//! `[-1, 1]`), so the near and far planes sit at NDC z = -1 and z = 1.

use glam::{Mat4, Vec2, Vec3};

use crate::error::{Result, SceneError};
use crate::ray::Ray;

/// A camera defined by view and projection matrices.
///
/// The inverse view-projection is computed once at construction, which is
/// also where singular matrices are rejected.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    view: Mat4,
    projection: Mat4,
    inverse_view_projection: Mat4,
}

impl Camera {
    /// Build a camera from raw matrices.
    pub fn from_matrices(view: Mat4, projection: Mat4) -> Result<Self> {
        Self::build(view, projection)
    }

    /// Perspective camera at `eye` looking at `target`.
    pub fn perspective(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y_radians: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        if !(fov_y_radians > 0.0 && fov_y_radians < std::f32::consts::PI) {
            return Err(SceneError::InvalidCamera(format!(
                "vertical field of view must be in (0, pi), got {}",
                fov_y_radians
            )));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(SceneError::InvalidCamera(format!(
                "aspect ratio must be positive, got {}",
                aspect
            )));
        }
        check_depth_range(near, far)?;
        let view = look_at(eye, target, up)?;
        let projection = Mat4::perspective_rh_gl(fov_y_radians, aspect, near, far);
        Self::build(view, projection)
    }

    /// Orthographic camera at `eye` looking at `target`, seeing a
    /// `width` x `height` window of the world centred on the view axis.
    pub fn orthographic(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        width: f32,
        height: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(SceneError::InvalidCamera(format!(
                "orthographic window must have positive size, got {}x{}",
                width, height
            )));
        }
        check_depth_range(near, far)?;
        let view = look_at(eye, target, up)?;
        let (half_w, half_h) = (width * 0.5, height * 0.5);
        let projection = Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, near, far);
        Self::build(view, projection)
    }

    fn build(view: Mat4, projection: Mat4) -> Result<Self> {
        let view_projection = projection * view;
        let determinant = view_projection.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(SceneError::SingularProjection);
        }
        Ok(Self {
            view,
            projection,
            inverse_view_projection: view_projection.inverse(),
        })
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Cast a ray from the camera through a point in normalized device coordinates.
    ///
    /// The ray starts on the near plane and points towards the far plane, which
    /// covers perspective and orthographic projections alike.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let near = self
            .inverse_view_projection
            .project_point3(Vec3::new(ndc.x, ndc.y, -1.0));
        let far = self
            .inverse_view_projection
            .project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(near, far - near)
    }
}

fn check_depth_range(near: f32, far: f32) -> Result<()> {
    if near > 0.0 && far > near && far.is_finite() {
        Ok(())
    } else {
        Err(SceneError::InvalidCamera(format!(
            "depth range must satisfy 0 < near < far, got near={} far={}",
            near, far
        )))
    }
}

fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4> {
    let forward = target - eye;
    if forward.length_squared() == 0.0 || forward.cross(up).length_squared() == 0.0 {
        return Err(SceneError::InvalidCamera(
            "eye, target and up vector do not define an orientation".to_string(),
        ));
    }
    Ok(Mat4::look_at_rh(eye, target, up))
}
