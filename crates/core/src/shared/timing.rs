use std::time::Duration;

/// Wall-clock cost of one full blur pass over one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingResult {
    pub elapsed: Duration,
    pub workers: usize,
}

impl TimingResult {
    pub fn new(elapsed: Duration, workers: usize) -> Self {
        Self { elapsed, workers }
    }

    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// `sequential / parallel`, or `None` when the parallel time is zero.
pub fn speedup(sequential: Duration, parallel: Duration) -> Option<f64> {
    if parallel.is_zero() {
        return None;
    }
    Some(sequential.as_secs_f64() / parallel.as_secs_f64())
}

/// Renders a speed-up as `2.35x`, or `N/A` when undefined.
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(ratio) => format!("{ratio:.2}x"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_millis() {
        let timing = TimingResult::new(Duration::from_micros(1500), 4);
        assert_relative_eq!(timing.millis(), 1.5);
        assert_eq!(timing.workers, 4);
    }

    #[test]
    fn test_speedup_ratio() {
        let ratio = speedup(Duration::from_millis(300), Duration::from_millis(100)).unwrap();
        assert_relative_eq!(ratio, 3.0);
    }

    #[test]
    fn test_speedup_zero_parallel_is_none() {
        assert!(speedup(Duration::from_millis(5), Duration::ZERO).is_none());
        assert!(speedup(Duration::ZERO, Duration::ZERO).is_none());
    }

    #[test]
    fn test_speedup_zero_sequential_is_zero() {
        let ratio = speedup(Duration::ZERO, Duration::from_millis(1)).unwrap();
        assert_relative_eq!(ratio, 0.0);
    }

    #[test]
    fn test_format_speedup() {
        assert_eq!(format_speedup(Some(2.345)), "2.35x");
        assert_eq!(format_speedup(None), "N/A");
    }
}
