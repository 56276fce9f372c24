pub mod batch_blur_use_case;
pub mod batch_report;
pub mod blur_executor;
pub mod infrastructure;
pub mod parallel_blur_orchestrator;
pub mod pipeline_logger;
