use std::fs;
use std::path::Path;

use crate::imaging::domain::image_io_error::ImageIoError;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::pixel_buffer::PixelBuffer;

/// Writes RGB buffers to image files using the `image` crate.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn ensure_dir(&self, dir: &Path) -> Result<bool, ImageIoError> {
        if dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(dir).map_err(|source| ImageIoError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), ImageIoError> {
        let too_large = || ImageIoError::TooLarge {
            rows: buffer.rows(),
            cols: buffer.cols(),
        };
        let width = u32::try_from(buffer.cols()).map_err(|_| too_large())?;
        let height = u32::try_from(buffer.rows()).map_err(|_| too_large())?;

        let img = image::RgbImage::from_raw(width, height, buffer.data().to_vec())
            .ok_or_else(too_large)?;

        img.save(path).map_err(|source| ImageIoError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}
