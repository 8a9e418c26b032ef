//! Error types for icon rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum IconError {
    /// The requested icon size was zero.
    #[error("invalid icon size: {size}")]
    InvalidSize { size: u32 },

    /// The rasterizer could not allocate a pixmap of the requested size.
    #[error("failed to allocate a {size}x{size} pixmap")]
    PixmapAllocation { size: u32 },

    /// The generated SVG document could not be parsed.
    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// PNG encoding failed.
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    /// A filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A render profile could not be parsed or serialized.
    #[error("invalid render profile: {0}")]
    Profile(#[from] serde_json::Error),
}

impl IconError {
    /// Wraps an I/O error with the path it occurred at.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;
