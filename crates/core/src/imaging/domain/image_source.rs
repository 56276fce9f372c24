use std::path::{Path, PathBuf};

use crate::imaging::domain::image_io_error::ImageIoError;
use crate::shared::constants::IMAGE_EXTENSIONS;

/// Enumerates candidate files in an input directory.
pub trait ImageSource: Send {
    /// Lists regular files in `dir`, in a stable order.
    ///
    /// Fails with [`ImageIoError::MissingDirectory`] when `dir` does not exist.
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, ImageIoError>;
}

/// True when the extension is one of [`IMAGE_EXTENSIONS`], ignoring case.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
