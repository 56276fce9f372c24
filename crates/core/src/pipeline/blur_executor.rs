use thiserror::Error;

use crate::blurring::domain::convolution_kernel::ConvolutionKernel;
use crate::shared::pixel_buffer::PixelBuffer;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BlurError {
    #[error("destination is {actual_rows}x{actual_cols}, source is {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
    #[error("blur worker {index} panicked")]
    WorkerPanicked { index: usize },
}

impl BlurError {
    pub(crate) fn check_dimensions(src: &PixelBuffer, dst: &PixelBuffer) -> Result<(), Self> {
        if src.same_dimensions(dst) {
            return Ok(());
        }
        Err(Self::DimensionMismatch {
            expected_rows: src.rows(),
            expected_cols: src.cols(),
            actual_rows: dst.rows(),
            actual_cols: dst.cols(),
        })
    }
}

/// Runs one full blur pass of `src` into a pre-allocated `dst`.
///
/// This is a port: the orchestrator times whatever executor it is given,
/// and infrastructure decides how the rows are spread over workers.
pub trait BlurExecutor: Send {
    /// Number of workers a pass is split across.
    fn worker_count(&self) -> usize;

    fn execute(
        &self,
        src: &PixelBuffer,
        dst: &mut PixelBuffer,
        kernel: &dyn ConvolutionKernel,
    ) -> Result<(), BlurError>;
}
