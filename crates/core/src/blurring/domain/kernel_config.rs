use thiserror::Error;

use crate::shared::constants::KERNEL_SIZE;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KernelConfigError {
    #[error("kernel size must be a positive odd integer, got {0}")]
    InvalidSize(usize),
    #[error("kernel size {0} is too large: a full window of 255s overflows the channel sum")]
    TooLarge(usize),
}

/// Largest channel value summed over a window.
const MAX_CHANNEL: usize = u8::MAX as usize;

/// Square neighborhood geometry: an odd edge length and its radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
    size: usize,
}

impl KernelConfig {
    pub fn new(size: usize) -> Result<Self, KernelConfigError> {
        if size == 0 || size % 2 == 0 {
            return Err(KernelConfigError::InvalidSize(size));
        }
        let max_sum = size
            .checked_mul(size)
            .and_then(|area| area.checked_mul(MAX_CHANNEL));
        match max_sum {
            Some(sum) if u32::try_from(sum).is_ok() => Ok(Self { size }),
            _ => Err(KernelConfigError::TooLarge(size)),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Number of pixels in the neighborhood (`size * size`).
    pub fn area(&self) -> usize {
        self.size * self.size
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self { size: KERNEL_SIZE }
    }
}
