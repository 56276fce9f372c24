pub mod directory_image_source;
pub mod image_file_reader;
pub mod image_file_writer;
