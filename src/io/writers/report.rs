use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::api::BatchReport;
use crate::error::Result;

/// Serialize a batch report as pretty-printed JSON to `output`.
pub fn write_batch_report(output: &Path, report: &BatchReport) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    info!("Batch report written to {:?}", output);
    Ok(())
}

/// Read back a report produced by [`write_batch_report`].
pub fn read_batch_report(input: &Path) -> Result<BatchReport> {
    let file = File::open(input)?;
    let report = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ProcessingOutcome;
    use crate::error::FailureKind;
    use std::path::PathBuf;

    #[test]
    fn report_sidecar_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut report = BatchReport::new();
        report.record(ProcessingOutcome::Success {
            input: PathBuf::from("in/a.jpg"),
            output: PathBuf::from("out/a.jpg"),
        });
        report.record(ProcessingOutcome::Failure {
            input: PathBuf::from("in/b.jpg"),
            kind: FailureKind::Load,
            reason: "truncated".to_string(),
        });
        report.finish();

        write_batch_report(&path, &report).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"kind\": \"load\""));

        let back = read_batch_report(&path).unwrap();
        assert_eq!(back.processed, 1);
        assert_eq!(back.errors, 1);
        assert_eq!(back.outcomes, report.outcomes);
    }
}
