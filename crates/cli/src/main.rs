use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use blur_bench_core::blurring::infrastructure::box_kernel::BoxKernel;
use blur_bench_core::imaging::infrastructure::directory_image_source::DirectoryImageSource;
use blur_bench_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use blur_bench_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use blur_bench_core::pipeline::batch_blur_use_case::{BatchBlurUseCase, BatchConfig, BatchError};
use blur_bench_core::pipeline::batch_report::BatchReport;
use blur_bench_core::pipeline::infrastructure::threaded_blur_executor::ThreadedBlurExecutor;
use blur_bench_core::pipeline::parallel_blur_orchestrator::ParallelBlurOrchestrator;
use blur_bench_core::pipeline::pipeline_logger::LogPipelineLogger;
use blur_bench_core::shared::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

/// Box-blur every image in a folder with one thread and with many, and
/// compare how long each took.
#[derive(Parser, Debug)]
#[command(name = "blur-bench")]
struct Cli {
    /// Folder containing .jpg/.jpeg/.png images.
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Folder to write single_* and multi_* results into.
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Threads for the multi-threaded pass (default: available parallelism).
    workers: Option<NonZeroUsize>,
}

impl Cli {
    fn workers(&self) -> NonZeroUsize {
        self.workers.unwrap_or_else(default_workers)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let workers = cli.workers();

    log::info!("Input folder: {}", cli.input.display());
    log::info!("Output folder: {}", cli.output.display());
    log::info!("Using {workers} threads for multi-threaded version");

    let orchestrator = ParallelBlurOrchestrator::new(
        Box::new(BoxKernel::default()),
        Box::new(ThreadedBlurExecutor::sequential()),
        Box::new(ThreadedBlurExecutor::new(workers)),
    );

    let mut use_case = BatchBlurUseCase::new(
        Box::new(DirectoryImageSource::new()),
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        orchestrator,
        Box::new(LogPipelineLogger::new()),
    );

    let config = BatchConfig {
        input_dir: cli.input,
        output_dir: cli.output,
    };

    exit_status(use_case.execute(&config))?;
    Ok(())
}

/// A missing input folder is reported but still exits normally.
fn exit_status(result: Result<BatchReport, BatchError>) -> Result<(), BatchError> {
    match result {
        Ok(_) => Ok(()),
        Err(e @ BatchError::MissingInput(_)) => {
            log::error!("{e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn default_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
