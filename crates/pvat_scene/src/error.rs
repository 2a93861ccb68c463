use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Invalid camera parameters: {0}")]
    InvalidCamera(String),

    #[error("Camera view-projection matrix is not invertible")]
    SingularProjection,

    #[error("Viewport has no area ({width}x{height})")]
    DegenerateViewport { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, SceneError>;
