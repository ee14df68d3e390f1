pub mod jpeg;
pub mod report;
