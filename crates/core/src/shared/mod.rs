pub mod constants;
pub mod pixel_buffer;
pub mod row_range;
pub mod timing;
