use std::num::NonZeroUsize;
use std::thread::ScopedJoinHandle;

use ndarray::{ArrayViewMut3, Axis};

use crate::blurring::domain::convolution_kernel::ConvolutionKernel;
use crate::pipeline::blur_executor::{BlurError, BlurExecutor};
use crate::shared::pixel_buffer::PixelBuffer;
use crate::shared::row_range::RowRange;

/// Fork-join blur: one scoped thread per row range, all joined before
/// `execute` returns.
///
/// Layout: `src (shared, read-only) → [worker 0 .. worker N-1] → dst bands`
///
/// The destination is split into disjoint mutable row bands up front, so
/// workers never contend and no locking is needed. Threads are created and
/// torn down on every pass; with one worker the pass still runs on a
/// spawned thread so both paths pay the same startup cost.
pub struct ThreadedBlurExecutor {
    workers: NonZeroUsize,
}

impl ThreadedBlurExecutor {
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Single-worker executor for the sequential baseline.
    pub fn sequential() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}

impl BlurExecutor for ThreadedBlurExecutor {
    fn worker_count(&self) -> usize {
        self.workers.get()
    }

    fn execute(
        &self,
        src: &PixelBuffer,
        dst: &mut PixelBuffer,
        kernel: &dyn ConvolutionKernel,
    ) -> Result<(), BlurError> {
        BlurError::check_dimensions(src, dst)?;

        let ranges = RowRange::partition(src.rows(), self.workers);
        let src_view = src.as_ndarray();
        let src_view = &src_view;
        let bands = split_into_bands(dst.as_ndarray_mut(), &ranges);

        std::thread::scope(|scope| {
            let handles: Vec<_> = ranges
                .iter()
                .zip(bands)
                .map(move |(&range, mut band)| {
                    scope.spawn(move || kernel.blur_row_range(src_view, &mut band, range))
                })
                .collect();
            join_workers(handles)
        })
    }
}

/// Splits `dst` along the row axis into one band per range.
///
/// Ranges must be ordered and adjacent starting at row 0, which is what
/// [`RowRange::partition`] produces.
fn split_into_bands<'a>(
    mut rest: ArrayViewMut3<'a, u8>,
    ranges: &[RowRange],
) -> Vec<ArrayViewMut3<'a, u8>> {
    let mut bands = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (band, tail) = rest.split_at(Axis(0), range.len());
        bands.push(band);
        rest = tail;
    }
    bands
}

/// Joins every worker, even after a failure, and reports the first panic.
fn join_workers(handles: Vec<ScopedJoinHandle<'_, ()>>) -> Result<(), BlurError> {
    let mut first_error = None;
    for (index, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() && first_error.is_none() {
            log::error!("Blur worker {index} panicked");
            first_error = Some(BlurError::WorkerPanicked { index });
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blurring::infrastructure::box_kernel::BoxKernel;
    use crate::shared::pixel_buffer::Pixel;
    use ndarray::ArrayView3;
    use rstest::rstest;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn noisy(rows: usize, cols: usize) -> PixelBuffer {
        // xorshift keeps the fixture deterministic without a rand dependency
        let mut state: u32 = 0x9E37_79B9;
        let data = (0..rows * cols * 3)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect();
        PixelBuffer::new(data, rows, cols)
    }

    fn run(executor: &ThreadedBlurExecutor, src: &PixelBuffer) -> PixelBuffer {
        let mut dst = PixelBuffer::blank_like(src);
        executor
            .execute(src, &mut dst, &BoxKernel::default())
            .unwrap();
        dst
    }

    /// Kernel that panics on one row, to exercise join error handling.
    struct PanickingKernel {
        bad_row: usize,
    }

    impl ConvolutionKernel for PanickingKernel {
        fn radius(&self) -> usize {
            0
        }

        fn blur_pixel(&self, src: &ArrayView3<'_, u8>, row: usize, col: usize) -> Pixel {
            if row == self.bad_row {
                panic!("bad row");
            }
            std::array::from_fn(|ch| src[[row, col, ch]])
        }
    }

    #[test]
    fn test_sequential_has_one_worker() {
        assert_eq!(ThreadedBlurExecutor::sequential().worker_count(), 1);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(7)]
    #[case(16)]
    #[case(64)]
    fn test_parallel_matches_sequential(#[case] workers: usize) {
        let src = noisy(37, 23);
        let sequential = run(&ThreadedBlurExecutor::sequential(), &src);
        let parallel = run(&ThreadedBlurExecutor::new(nz(workers)), &src);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_black_image_four_workers() {
        let src = PixelBuffer::blank(10, 10);
        let sequential = run(&ThreadedBlurExecutor::sequential(), &src);
        let parallel = run(&ThreadedBlurExecutor::new(nz(4)), &src);
        assert_eq!(sequential, src);
        assert_eq!(parallel, src);
    }

    #[test]
    fn test_more_workers_than_rows() {
        let src = noisy(5, 12);
        let sequential = run(&ThreadedBlurExecutor::sequential(), &src);
        let parallel = run(&ThreadedBlurExecutor::new(nz(10)), &src);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_single_pixel_unchanged() {
        let src = PixelBuffer::filled(1, 1, [12, 34, 56]);
        assert_eq!(run(&ThreadedBlurExecutor::sequential(), &src), src);
        assert_eq!(run(&ThreadedBlurExecutor::new(nz(8)), &src), src);
    }

    #[test]
    fn test_empty_image() {
        let src = PixelBuffer::blank(0, 0);
        let dst = run(&ThreadedBlurExecutor::new(nz(4)), &src);
        assert_eq!(dst.rows(), 0);
    }

    #[test]
    fn test_source_is_not_modified() {
        let src = noisy(30, 30);
        let before = src.clone();
        run(&ThreadedBlurExecutor::new(nz(3)), &src);
        assert_eq!(src, before);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let src = PixelBuffer::blank(10, 10);
        let mut dst = PixelBuffer::blank(10, 9);
        let err = ThreadedBlurExecutor::new(nz(2))
            .execute(&src, &mut dst, &BoxKernel::default())
            .unwrap_err();
        assert_eq!(
            err,
            BlurError::DimensionMismatch {
                expected_rows: 10,
                expected_cols: 10,
                actual_rows: 10,
                actual_cols: 9,
            }
        );
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let src = noisy(8, 4);
        let mut dst = PixelBuffer::blank_like(&src);
        // rows 0-3 → worker 0, rows 4-7 → worker 1
        let err = ThreadedBlurExecutor::new(nz(2))
            .execute(&src, &mut dst, &PanickingKernel { bad_row: 5 })
            .unwrap_err();
        assert_eq!(err, BlurError::WorkerPanicked { index: 1 });
        // the healthy worker still finished its band
        for c in 0..4 {
            assert_eq!(dst.pixel(2, c), src.pixel(2, c));
        }
    }

    #[test]
    fn test_split_into_bands_sizes() {
        let mut buffer = PixelBuffer::blank(10, 3);
        let ranges = RowRange::partition(10, nz(4));
        let bands = split_into_bands(buffer.as_ndarray_mut(), &ranges);
        let lens: Vec<_> = bands.iter().map(|b| b.len_of(Axis(0))).collect();
        assert_eq!(lens, vec![2, 2, 2, 4]);
    }
}
