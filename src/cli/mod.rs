//! Command Line Interface (CLI) layer for photosquare.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! processing flows. It is also the reporter: per-image progress and the
//! final summary are printed here, never by the library.
//!
//! If you are embedding photosquare into another application, prefer using
//! the high-level `photosquare::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
