use std::time::Duration;

use crate::shared::timing::{format_speedup, speedup, TimingResult};

/// Timings of one processed image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTiming {
    pub name: String,
    pub sequential: TimingResult,
    pub parallel: TimingResult,
}

impl ImageTiming {
    pub fn speedup(&self) -> Option<f64> {
        speedup(self.sequential.elapsed, self.parallel.elapsed)
    }

    /// Per-image report lines.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("  Single-thread: {:.3} ms", self.sequential.millis()),
            format!(
                "  Multi-thread:  {:.3} ms ({} threads)",
                self.parallel.millis(),
                self.parallel.workers
            ),
            format!("  Speed-up:      {}", format_speedup(self.speedup())),
        ]
    }
}

/// Accumulates per-image timings over a batch.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    images: Vec<ImageTiming>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timing: ImageTiming) {
        self.images.push(timing);
    }

    pub fn images(&self) -> &[ImageTiming] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn total_sequential(&self) -> Duration {
        self.images.iter().map(|i| i.sequential.elapsed).sum()
    }

    pub fn total_parallel(&self) -> Duration {
        self.images.iter().map(|i| i.parallel.elapsed).sum()
    }

    /// Mean single-worker time in milliseconds.
    pub fn average_sequential_ms(&self) -> Option<f64> {
        self.average_ms(self.total_sequential())
    }

    /// Mean multi-worker time in milliseconds.
    pub fn average_parallel_ms(&self) -> Option<f64> {
        self.average_ms(self.total_parallel())
    }

    /// Total sequential time over total parallel time.
    ///
    /// This is a ratio of sums, not the mean of the per-image ratios, so
    /// large images weigh more than small ones.
    pub fn average_speedup(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        speedup(self.total_sequential(), self.total_parallel())
    }

    /// Returns the formatted batch summary, or `None` if nothing was processed.
    pub fn summary_string(&self) -> Option<String> {
        let count = self.image_count();
        let sequential = self.average_sequential_ms()?;
        let parallel = self.average_parallel_ms()?;

        Some(
            [
                format!("Processed {count} images"),
                format!("Average single-thread time: {sequential:.3} ms"),
                format!("Average multi-thread time:  {parallel:.3} ms"),
                format!(
                    "Average speed-up:           {}",
                    format_speedup(self.average_speedup())
                ),
            ]
            .join("\n"),
        )
    }

    fn average_ms(&self, total: Duration) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(total.as_secs_f64() * 1000.0 / self.image_count() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn timing(name: &str, sequential_ms: u64, parallel_ms: u64) -> ImageTiming {
        ImageTiming {
            name: name.to_string(),
            sequential: TimingResult::new(Duration::from_millis(sequential_ms), 1),
            parallel: TimingResult::new(Duration::from_millis(parallel_ms), 4),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::new();
        assert!(report.is_empty());
        assert!(report.average_sequential_ms().is_none());
        assert!(report.average_speedup().is_none());
        assert!(report.summary_string().is_none());
    }

    #[test]
    fn test_averages() {
        let mut report = BatchReport::new();
        report.record(timing("a.png", 100, 50));
        report.record(timing("b.png", 300, 50));

        assert_eq!(report.image_count(), 2);
        assert_relative_eq!(report.average_sequential_ms().unwrap(), 200.0);
        assert_relative_eq!(report.average_parallel_ms().unwrap(), 50.0);
    }

    #[test]
    fn test_average_speedup_is_ratio_of_sums() {
        let mut report = BatchReport::new();
        report.record(timing("big.png", 900, 100)); // 9x
        report.record(timing("small.png", 10, 10)); // 1x

        // (900 + 10) / (100 + 10), not (9 + 1) / 2
        assert_relative_eq!(report.average_speedup().unwrap(), 910.0 / 110.0);
    }

    #[test]
    fn test_average_speedup_undefined_when_parallel_total_zero() {
        let mut report = BatchReport::new();
        report.record(timing("tiny.png", 0, 0));
        assert!(report.average_speedup().is_none());
        assert!(report.summary_string().unwrap().contains("N/A"));
    }

    #[test]
    fn test_summary_string() {
        let mut report = BatchReport::new();
        report.record(timing("a.png", 200, 100));

        let summary = report.summary_string().unwrap();
        assert!(summary.contains("Processed 1 images"));
        assert!(summary.contains("Average single-thread time: 200.000 ms"));
        assert!(summary.contains("Average multi-thread time:  100.000 ms"));
        assert!(summary.contains("2.00x"));
    }

    #[test]
    fn test_image_lines() {
        let lines = timing("a.png", 30, 10).lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("30.000 ms"));
        assert!(lines[1].contains("(4 threads)"));
        assert!(lines[2].ends_with("3.00x"));
    }

    #[test]
    fn test_image_lines_zero_parallel() {
        let lines = timing("a.png", 30, 0).lines();
        assert!(lines[2].ends_with("N/A"));
    }
}
