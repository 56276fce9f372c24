//! Box-blur convolution engine that times a single-worker pass against a
//! row-partitioned multi-worker pass over the same image.
//!
//! Layout follows a domain/infrastructure split per concern:
//! - [`blurring`]: the convolution kernel
//! - [`pipeline`]: fork-join execution, timing comparison, batch driver
//! - [`imaging`]: directory listing and image decode/encode
//! - [`shared`]: pixel buffers, row ranges, timings, constants

pub mod blurring;
pub mod imaging;
pub mod pipeline;
pub mod shared;
