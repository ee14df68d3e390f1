//! I/O layer: decoding source photographs into pixel buffers (`reader`) and
//! the `writers` for JPEG output and JSON batch reports.
pub mod reader;
pub use reader::load_image;

pub mod writers;
