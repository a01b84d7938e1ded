use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image size must be between 1 and {}, got {0}", crate::options::MAX_SIZE)]
    InvalidSize(u32),

    #[error("unknown pass {0}, expected one of sphere, plane, perspective, shading")]
    UnknownPass(String),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
