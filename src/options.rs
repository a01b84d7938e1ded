use std::path::PathBuf;

use crate::error::RenderError;

/// Default edge length, in pixels, of every rendered image.
pub const DEFAULT_SIZE: u32 = 800;

/// Largest accepted edge length. Four f64 grids at this size already take 8 GiB.
pub const MAX_SIZE: u32 = 16384;

/// Render options shared by every pass. Defaults are provided.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Edge length of the square output images.
    pub size: u32,

    /// Directory the PNG files are written to.
    pub output_dir: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            output_dir: PathBuf::from("."),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(RenderError::InvalidSize(self.size));
        }
        Ok(())
    }
}
