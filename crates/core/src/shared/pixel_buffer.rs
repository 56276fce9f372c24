use ndarray::{ArrayView3, ArrayViewMut3};

use crate::shared::constants::CHANNELS;

/// One RGB pixel.
pub type Pixel = [u8; CHANNELS];

/// A decoded image: contiguous RGB bytes in row-major order.
///
/// The blur never writes into its source buffer; every pass allocates a
/// destination of the same dimensions with [`PixelBuffer::blank_like`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl PixelBuffer {
    pub fn new(data: Vec<u8>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            rows * cols * CHANNELS,
            "data length must equal rows * cols * channels"
        );
        Self { data, rows, cols }
    }

    /// All-zero (black) buffer.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self::new(vec![0; rows * cols * CHANNELS], rows, cols)
    }

    /// Every pixel set to `pixel`.
    pub fn filled(rows: usize, cols: usize, pixel: Pixel) -> Self {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(rows * cols * CHANNELS)
            .collect();
        Self::new(data, rows, cols)
    }

    /// Blank buffer with the same dimensions as `other`.
    pub fn blank_like(other: &PixelBuffer) -> Self {
        Self::blank(other.rows, other.cols)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Pixel at `(row, col)`. Panics when out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        let offset = self.offset(row, col);
        std::array::from_fn(|ch| self.data[offset + ch])
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        let offset = self.offset(row, col);
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("PixelBuffer data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("PixelBuffer data length must match dimensions")
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "pixel ({row}, {col}) out of bounds for {}x{} buffer",
            self.rows,
            self.cols
        );
        (row * self.cols + col) * CHANNELS
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, CHANNELS)
    }
}
