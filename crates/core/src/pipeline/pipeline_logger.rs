/// Cross-cutting logger for batch orchestration events.
///
/// Decouples the batch use case from where its report goes (the `log`
/// crate or a test recorder).
pub trait PipelineLogger: Send {
    /// Report image-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Log a recoverable problem (e.g. a file that could not be decoded).
    fn warn(&mut self, message: &str);
}

/// CLI-oriented logger that forwards to the `log` facade.
///
/// Multi-line messages are split so each line gets its own log record.
#[derive(Default)]
pub struct LogPipelineLogger;

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        if total > 0 {
            log::debug!("Image {current}/{total}");
        }
    }

    fn info(&mut self, message: &str) {
        for line in message.lines() {
            log::info!("{line}");
        }
    }

    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }
}
