use ndarray::{s, ArrayView3, Axis};

use crate::blurring::domain::convolution_kernel::ConvolutionKernel;
use crate::blurring::domain::kernel_config::KernelConfig;
use crate::shared::constants::CHANNELS;
use crate::shared::pixel_buffer::Pixel;

/// Per-channel sum type. `KernelConfig::new` caps the size so that
/// `size² × 255` fits.
pub type Accumulator = u32;

/// Unweighted square mean filter with a copy-through border.
///
/// Pixels closer than `radius` to any edge are copied from the source
/// unchanged; every other pixel becomes the truncated mean of its
/// `size × size` neighborhood, per channel.
pub struct BoxKernel {
    config: KernelConfig,
    area: Accumulator,
}

impl BoxKernel {
    pub fn new(config: KernelConfig) -> Self {
        let area = Accumulator::try_from(config.area())
            .expect("kernel area must fit in the accumulator");
        Self { config, area }
    }
}

impl Default for BoxKernel {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}

impl ConvolutionKernel for BoxKernel {
    fn radius(&self) -> usize {
        self.config.radius()
    }

    fn blur_pixel(&self, src: &ArrayView3<'_, u8>, row: usize, col: usize) -> Pixel {
        let radius = self.radius();
        let rows = src.len_of(Axis(0));
        let cols = src.len_of(Axis(1));

        if is_border(row, col, rows, cols, radius) {
            return std::array::from_fn(|ch| src[[row, col, ch]]);
        }

        let window = src.slice(s![
            row - radius..=row + radius,
            col - radius..=col + radius,
            ..
        ]);
        let mut sums: [Accumulator; CHANNELS] = [0; CHANNELS];
        for ((_, _, ch), &value) in window.indexed_iter() {
            sums[ch] += Accumulator::from(value);
        }

        // The mean of u8 samples is at most 255.
        sums.map(|sum| (sum / self.area) as u8)
    }
}

fn is_border(row: usize, col: usize, rows: usize, cols: usize, radius: usize) -> bool {
    row < radius || row + radius >= rows || col < radius || col + radius >= cols
}
