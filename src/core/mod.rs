//! Core processing building blocks: the pixel buffer model, the four image
//! stages (crop, resize, overlay, vignette) and the pipeline that chains them.
//! These are internal primitives consumed by the high-level `api` module.
pub mod buffer;
pub mod params;
pub mod processing;
