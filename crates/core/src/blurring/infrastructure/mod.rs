pub mod box_kernel;
