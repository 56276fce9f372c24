use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open slice `[start, end)` of image rows owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "row range start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Splits `[0, rows)` into `workers` contiguous ranges.
    ///
    /// Every range but the last holds `rows / workers` rows; the last one
    /// absorbs the remainder. When `workers > rows` the leading ranges are
    /// empty. Ranges are ordered and adjacent, so their union is `[0, rows)`.
    pub fn partition(rows: usize, workers: NonZeroUsize) -> Vec<RowRange> {
        let workers = workers.get();
        let per_worker = rows / workers;
        (0..workers)
            .map(|i| {
                let start = i * per_worker;
                let end = if i == workers - 1 {
                    rows
                } else {
                    (i + 1) * per_worker
                };
                RowRange::new(start, end)
            })
            .collect()
    }
}
