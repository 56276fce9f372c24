use std::time::Instant;

use crate::blurring::domain::convolution_kernel::ConvolutionKernel;
use crate::pipeline::blur_executor::{BlurError, BlurExecutor};
use crate::shared::pixel_buffer::PixelBuffer;
use crate::shared::timing::{speedup, TimingResult};

/// Both blurred outputs of one image and what each pass cost.
#[derive(Debug)]
pub struct BlurComparison {
    pub sequential: PixelBuffer,
    pub parallel: PixelBuffer,
    pub sequential_timing: TimingResult,
    pub parallel_timing: TimingResult,
}

impl BlurComparison {
    /// `None` when the parallel pass took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        speedup(
            self.sequential_timing.elapsed,
            self.parallel_timing.elapsed,
        )
    }
}

/// Blurs an image twice, once per executor, and times each pass.
///
/// The sequential pass always runs first so repeated runs compare the same
/// way. Destination buffers are allocated before the clock starts.
pub struct ParallelBlurOrchestrator {
    kernel: Box<dyn ConvolutionKernel>,
    sequential: Box<dyn BlurExecutor>,
    parallel: Box<dyn BlurExecutor>,
}

impl ParallelBlurOrchestrator {
    pub fn new(
        kernel: Box<dyn ConvolutionKernel>,
        sequential: Box<dyn BlurExecutor>,
        parallel: Box<dyn BlurExecutor>,
    ) -> Self {
        Self {
            kernel,
            sequential,
            parallel,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.parallel.worker_count()
    }

    pub fn run_comparison(&self, image: &PixelBuffer) -> Result<BlurComparison, BlurError> {
        let (sequential, sequential_timing) = self.timed_pass(&*self.sequential, image)?;
        let (parallel, parallel_timing) = self.timed_pass(&*self.parallel, image)?;

        Ok(BlurComparison {
            sequential,
            parallel,
            sequential_timing,
            parallel_timing,
        })
    }

    fn timed_pass(
        &self,
        executor: &dyn BlurExecutor,
        image: &PixelBuffer,
    ) -> Result<(PixelBuffer, TimingResult), BlurError> {
        let mut dst = PixelBuffer::blank_like(image);

        let start = Instant::now();
        executor.execute(image, &mut dst, &*self.kernel)?;
        let elapsed = start.elapsed();

        Ok((dst, TimingResult::new(elapsed, executor.worker_count())))
    }
}
