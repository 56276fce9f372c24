use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::imaging::domain::image_io_error::ImageIoError;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_source::{is_supported_image, ImageSource};
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::batch_report::{BatchReport, ImageTiming};
use crate::pipeline::blur_executor::BlurError;
use crate::pipeline::parallel_blur_orchestrator::ParallelBlurOrchestrator;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::constants::{IMAGE_EXTENSIONS, MULTI_PREFIX, SINGLE_PREFIX};
use crate::shared::pixel_buffer::PixelBuffer;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Input folder doesn't exist: {}", .0.display())]
    MissingInput(PathBuf),
    #[error(transparent)]
    Io(#[from] ImageIoError),
    #[error(transparent)]
    Blur(#[from] BlurError),
}

/// Where a batch reads from and writes to.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Directory blurring pipeline: list → filter → decode → compare → write.
///
/// Decode and encode failures only affect the file at hand; the batch
/// moves on to the next image.
pub struct BatchBlurUseCase {
    source: Box<dyn ImageSource>,
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    orchestrator: ParallelBlurOrchestrator,
    logger: Box<dyn PipelineLogger>,
}

impl BatchBlurUseCase {
    pub fn new(
        source: Box<dyn ImageSource>,
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        orchestrator: ParallelBlurOrchestrator,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            source,
            reader,
            writer,
            orchestrator,
            logger,
        }
    }

    /// Blurs every supported image in `config.input_dir` both ways and
    /// returns the collected timings.
    pub fn execute(&mut self, config: &BatchConfig) -> Result<BatchReport, BatchError> {
        if self.writer.ensure_dir(&config.output_dir)? {
            self.logger.info(&format!(
                "Created output folder: {}",
                config.output_dir.display()
            ));
        }

        let entries = match self.source.list(&config.input_dir) {
            Ok(entries) => entries,
            Err(ImageIoError::MissingDirectory(path)) => return Err(BatchError::MissingInput(path)),
            Err(e) => return Err(e.into()),
        };
        let input_dir =
            std::path::absolute(&config.input_dir).unwrap_or_else(|_| config.input_dir.clone());
        self.logger
            .info(&format!("Looking for images in: {}", input_dir.display()));

        let images: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| is_supported_image(path))
            .collect();
        let total = images.len();

        let mut report = BatchReport::new();
        for (i, path) in images.iter().enumerate() {
            self.logger.progress(i + 1, total);
            if let Some(timing) = self.process_image(path, &config.output_dir)? {
                self.logger.info(&timing.lines().join("\n"));
                report.record(timing);
            }
        }

        match report.summary_string() {
            Some(summary) => self.logger.info(&summary),
            None => {
                self.logger.info(&format!(
                    "No images found in {}",
                    config.input_dir.display()
                ));
                self.logger.info(&format!(
                    "Make sure to add some {} files to this directory.",
                    IMAGE_EXTENSIONS.join("/")
                ));
            }
        }

        Ok(report)
    }

    /// Returns `None` when the image could not be decoded.
    fn process_image(
        &mut self,
        path: &Path,
        output_dir: &Path,
    ) -> Result<Option<ImageTiming>, BlurError> {
        let name = file_name(path);
        self.logger.info(&format!("Processing: {name}"));

        let image = match self.reader.read(path) {
            Ok(image) => image,
            Err(e) => {
                self.logger.warn(&format!("  {e}"));
                return Ok(None);
            }
        };

        let comparison = self.orchestrator.run_comparison(&image)?;
        self.write_output(
            &output_dir.join(format!("{SINGLE_PREFIX}{name}")),
            &comparison.sequential,
        );
        self.write_output(
            &output_dir.join(format!("{MULTI_PREFIX}{name}")),
            &comparison.parallel,
        );

        Ok(Some(ImageTiming {
            name,
            sequential: comparison.sequential_timing,
            parallel: comparison.parallel_timing,
        }))
    }

    fn write_output(&mut self, path: &Path, buffer: &PixelBuffer) {
        if let Err(e) = self.writer.write(path, buffer) {
            self.logger.warn(&format!("  {e}"));
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
