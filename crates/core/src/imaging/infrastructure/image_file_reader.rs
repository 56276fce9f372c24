use std::path::Path;

use crate::imaging::domain::image_io_error::ImageIoError;
use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::pixel_buffer::PixelBuffer;

/// Decodes image files with the `image` crate, converting to 8-bit RGB.
///
/// Alpha is dropped and grayscale is expanded, so every buffer has three
/// channels regardless of the file's own layout.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<PixelBuffer, ImageIoError> {
        let img = image::open(path)
            .map_err(|source| ImageIoError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();

        let (width, height) = img.dimensions();
        Ok(PixelBuffer::new(
            img.into_raw(),
            height as usize,
            width as usize,
        ))
    }
}
