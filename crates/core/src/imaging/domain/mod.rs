pub mod image_io_error;
pub mod image_reader;
pub mod image_source;
pub mod image_writer;
