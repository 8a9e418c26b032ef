//! Rendered icon rasters and PNG encoding.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::IconResult;

/// A fully rendered icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in straight-alpha RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Encodes the image as PNG.
    ///
    /// The encoder writes no timestamps or other ancillary chunks, so equal
    /// pixels always produce equal bytes.
    pub fn encode_png(&self) -> IconResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.data.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}
