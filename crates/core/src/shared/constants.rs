/// Edge length of the square blur neighborhood.
pub const KERNEL_SIZE: usize = 7;

/// Color channels per pixel (RGB).
pub const CHANNELS: usize = 3;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const DEFAULT_INPUT_DIR: &str = "images";
pub const DEFAULT_OUTPUT_DIR: &str = "blurred";

/// Filename prefix for the single-worker result.
pub const SINGLE_PREFIX: &str = "single_";
/// Filename prefix for the multi-worker result.
pub const MULTI_PREFIX: &str = "multi_";
