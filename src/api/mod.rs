//! High-level, ergonomic library API: process one photograph to a file or an
//! in-memory buffer, capture per-image outcomes, and batch helpers for flat
//! directories of JPEGs. Prefer these entrypoints over the low-level
//! processing modules when integrating photosquare.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::buffer::PixelBuffer;
use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_pixels;
use crate::error::{Error, FailureKind, Result};
use crate::io::reader::load_image;
use crate::io::writers::jpeg::write_buffer_jpeg;

/// Extensions picked up by the directory lister. Matching is exact, so
/// mixed-case variants such as `.Jpg` are not selected.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "JPG", "JPEG"];

/// Result of running the pipeline on one input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessingOutcome {
    Success {
        input: PathBuf,
        output: PathBuf,
    },
    Failure {
        input: PathBuf,
        kind: FailureKind,
        reason: String,
    },
}

impl ProcessingOutcome {
    fn from_error(input: &Path, err: Error) -> Self {
        ProcessingOutcome::Failure {
            input: input.to_path_buf(),
            kind: err.failure_kind(),
            reason: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingOutcome::Success { .. })
    }

    pub fn input(&self) -> &Path {
        match self {
            ProcessingOutcome::Success { input, .. } | ProcessingOutcome::Failure { input, .. } => {
                input
            }
        }
    }
}

/// Batch processing report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub outcomes: Vec<ProcessingOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            processed: 0,
            skipped: 0,
            errors: 0,
            outcomes: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record(&mut self, outcome: ProcessingOutcome) {
        if outcome.is_success() {
            self.processed += 1;
        } else {
            self.errors += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// False when no image was written; callers decide whether that is fatal.
    pub fn produced_output(&self) -> bool {
        self.processed > 0
    }
}

pub fn is_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext))
}

/// Split the flat contents of `input_dir` into accepted JPEG paths (sorted)
/// and a count of everything else.
fn scan_input_dir(input_dir: &Path) -> Result<(Vec<PathBuf>, usize)> {
    if !input_dir.is_dir() {
        return Err(Error::MissingInputDir {
            path: input_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut skipped = 0;
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && is_accepted_extension(&path) {
            files.push(path);
        } else {
            info!("Skipping non-JPEG entry: {:?}", path);
            skipped += 1;
        }
    }
    files.sort();
    Ok((files, skipped))
}

/// Return an iterator over the JPEG files directly inside `input_dir`, in path order
pub fn iterate_jpeg_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let (files, _) = scan_input_dir(input_dir)?;
    Ok(files.into_iter())
}

/// Destination for `input` inside `output_dir`, keeping the source base name.
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: input.display().to_string(),
    })?;
    Ok(output_dir.join(name))
}

/// Load `input` and run the full pipeline in memory (no disk writes)
pub fn process_image_to_buffer(input: &Path, params: &ProcessingParams) -> Result<PixelBuffer> {
    params.validate()?;
    let loaded = load_image(input)?;
    process_pixels(loaded, params)
}

/// Process `input` and write the JPEG result to the exact file path `output`
pub fn process_image_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    let processed = process_image_to_buffer(input, params)?;
    write_buffer_jpeg(output, &processed, params.quality)?;
    info!("Wrote {:?} ({}x{})", output, processed.width(), processed.height());
    Ok(())
}

/// Process `input` into `output_dir/<base name>`. Never fails: every load,
/// processing or write error is captured in the returned outcome.
pub fn process_image_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> ProcessingOutcome {
    let output = match output_path_for(input, output_dir) {
        Ok(path) => path,
        Err(e) => return ProcessingOutcome::from_error(input, e),
    };

    match process_image_to_path(input, &output, params) {
        Ok(()) => ProcessingOutcome::Success {
            input: input.to_path_buf(),
            output,
        },
        Err(e) => {
            warn!("Error processing {:?}: {}", input, e);
            ProcessingOutcome::from_error(input, e)
        }
    }
}

/// Process every JPEG in `input_dir` into `output_dir`, calling `on_outcome`
/// with `(index, total, outcome)` after each image (index is 1-based).
/// The output directory is created if missing. Per-image failures never
/// abort the batch.
pub fn process_directory_with<F>(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    mut on_outcome: F,
) -> Result<BatchReport>
where
    F: FnMut(usize, usize, &ProcessingOutcome),
{
    params.validate()?;
    let (files, skipped) = scan_input_dir(input_dir)?;
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::new();
    report.skipped = skipped;

    let total = files.len();
    info!("Processing {} images from {:?}", total, input_dir);

    for (index, path) in files.iter().enumerate() {
        info!("Processing image {}/{}: {:?}", index + 1, total, path);
        let outcome = process_image_to_dir(path, output_dir, params);
        on_outcome(index + 1, total, &outcome);
        report.record(outcome);
    }

    report.finish();
    if !report.produced_output() {
        warn!("No output produced from {:?}", input_dir);
    }
    Ok(report)
}

/// Process every JPEG in `input_dir` into `output_dir` using `params`.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> Result<BatchReport> {
    process_directory_with(input_dir, output_dir, params, |_, _, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_is_case_variant_exact() {
        assert!(is_accepted_extension(Path::new("photo.jpg")));
        assert!(is_accepted_extension(Path::new("photo.JPG")));
        assert!(is_accepted_extension(Path::new("photo.jpeg")));
        assert!(is_accepted_extension(Path::new("photo.JPEG")));
        assert!(!is_accepted_extension(Path::new("photo.png")));
        assert!(!is_accepted_extension(Path::new("photo.Jpg")));
        assert!(!is_accepted_extension(Path::new("photo")));
    }

    #[test]
    fn output_keeps_base_name() {
        let out = output_path_for(Path::new("/in/dir/IMG_01.JPG"), Path::new("/out")).unwrap();
        assert_eq!(out, PathBuf::from("/out/IMG_01.JPG"));
        assert!(output_path_for(Path::new("/"), Path::new("/out")).is_err());
    }

    #[test]
    fn report_counts_outcomes() {
        let mut report = BatchReport::new();
        assert!(!report.produced_output());
        report.record(ProcessingOutcome::Failure {
            input: PathBuf::from("a.jpg"),
            kind: FailureKind::Write,
            reason: "denied".to_string(),
        });
        assert!(!report.produced_output());
        report.record(ProcessingOutcome::Success {
            input: PathBuf::from("b.jpg"),
            output: PathBuf::from("out/b.jpg"),
        });
        assert_eq!((report.processed, report.errors), (1, 1));
        assert!(report.produced_output());
        assert_eq!(report.outcomes[0].input(), Path::new("a.jpg"));
    }

    #[test]
    fn missing_input_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = process_directory_to_path(&missing, dir.path(), &ProcessingParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingInputDir { .. }));
    }

    #[test]
    fn corrupt_file_yields_load_failure_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.jpg");
        std::fs::write(&input, [0u8, 1, 2, 3]).unwrap();

        let outcome = process_image_to_dir(&input, dir.path(), &ProcessingParams::default());
        match outcome {
            ProcessingOutcome::Failure { kind, .. } => assert_eq!(kind, FailureKind::Load),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
