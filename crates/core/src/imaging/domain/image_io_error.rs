use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("input folder doesn't exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create folder {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{rows}x{cols} image is too large to encode")]
    TooLarge { rows: usize, cols: usize },
}
