pub mod crop;
pub mod overlay;
pub mod pipeline;
pub mod resize;
pub mod vignette;
