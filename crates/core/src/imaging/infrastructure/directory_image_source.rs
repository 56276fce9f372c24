use std::fs;
use std::path::{Path, PathBuf};

use crate::imaging::domain::image_io_error::ImageIoError;
use crate::imaging::domain::image_source::ImageSource;

/// Lists the regular files of a directory (non-recursive), sorted by path.
pub struct DirectoryImageSource;

impl DirectoryImageSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectoryImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for DirectoryImageSource {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, ImageIoError> {
        if !dir.exists() {
            return Err(ImageIoError::MissingDirectory(dir.to_path_buf()));
        }

        let read_dir_error = |source| ImageIoError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_error)? {
            let path = entry.map_err(read_dir_error)?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
