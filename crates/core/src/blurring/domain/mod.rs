pub mod convolution_kernel;
pub mod kernel_config;
