pub mod threaded_blur_executor;
