use ndarray::{ArrayView3, ArrayViewMut3, Axis};

use crate::shared::pixel_buffer::Pixel;
use crate::shared::row_range::RowRange;

/// Domain interface for computing one output pixel from a source image.
///
/// Implementations are pure: the same source and coordinate always give
/// the same pixel. `Sync` so a single kernel can be shared by every worker
/// of a parallel pass.
pub trait ConvolutionKernel: Send + Sync {
    /// Distance from the center pixel to the neighborhood edge.
    fn radius(&self) -> usize;

    /// Blurred value of the pixel at `(row, col)` in `src`.
    fn blur_pixel(&self, src: &ArrayView3<'_, u8>, row: usize, col: usize) -> Pixel;

    /// Writes `blur_pixel(src, r, c)` for every row `r` in `range` and every
    /// column `c`.
    ///
    /// `dst` is the band of destination rows owned by `range`: local row 0
    /// corresponds to `range.start`.
    fn blur_row_range(
        &self,
        src: &ArrayView3<'_, u8>,
        dst: &mut ArrayViewMut3<'_, u8>,
        range: RowRange,
    ) {
        debug_assert_eq!(dst.len_of(Axis(0)), range.len(), "band must match range");
        let cols = src.len_of(Axis(1));
        for (local, row) in range.rows().enumerate() {
            for col in 0..cols {
                let pixel = self.blur_pixel(src, row, col);
                for (ch, value) in pixel.into_iter().enumerate() {
                    dst[[local, col, ch]] = value;
                }
            }
        }
    }
}
