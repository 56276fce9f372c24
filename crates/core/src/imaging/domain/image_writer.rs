use std::path::Path;

use crate::imaging::domain::image_io_error::ImageIoError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Encodes [`PixelBuffer`]s to image files.
pub trait ImageWriter: Send {
    /// Makes sure `dir` exists. Returns `true` if it had to be created.
    fn ensure_dir(&self, dir: &Path) -> Result<bool, ImageIoError>;

    /// Writes `buffer` to `path`; the format follows the file extension.
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), ImageIoError>;
}
