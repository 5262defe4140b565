//! Batch report: what happened to every line of the cut sheet.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::pipeline::CutOutputs;

/// Outcome of a single cut-sheet line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineOutcome {
    Reset,
    Header { image: String },
    HeaderRejected { reason: String },
    Skipped { reason: String },
    Cut { outputs: CutOutputs },
    Failed { reason: String, partial: Vec<PathBuf> },
}

#[derive(Debug, Clone, Serialize)]
pub struct LineRecord {
    /// 1-based line number.
    pub line: usize,
    #[serde(flatten)]
    pub outcome: LineOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub headers: usize,
    pub cuts: usize,
    pub failed: usize,
    pub skipped: usize,
    pub rejected_headers: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub cuts_file: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<LineRecord>,
    pub pdfs: Vec<PathBuf>,
}

impl BatchReport {
    pub fn new(cuts_file: &Path) -> Self {
        Self {
            cuts_file: cuts_file.to_path_buf(),
            generated_at: Utc::now(),
            lines: Vec::new(),
            pdfs: Vec::new(),
        }
    }

    pub fn push(&mut self, line: usize, outcome: LineOutcome) {
        self.lines.push(LineRecord { line, outcome });
    }

    pub fn counts(&self) -> ReportCounts {
        let mut counts = ReportCounts::default();
        for record in &self.lines {
            match record.outcome {
                LineOutcome::Header { .. } => counts.headers += 1,
                LineOutcome::Cut { .. } => counts.cuts += 1,
                LineOutcome::Failed { .. } => counts.failed += 1,
                LineOutcome::Skipped { .. } => counts.skipped += 1,
                LineOutcome::HeaderRejected { .. } => counts.rejected_headers += 1,
                LineOutcome::Reset => {}
            }
        }
        counts
    }

    /// Lines whose cut failed.
    pub fn failures(&self) -> impl Iterator<Item = &LineRecord> {
        self.lines
            .iter()
            .filter(|r| matches!(r.outcome, LineOutcome::Failed { .. }))
    }

    pub fn log_summary(&self) {
        let c = self.counts();
        info!(
            headers = c.headers,
            cuts = c.cuts,
            failed = c.failed,
            skipped = c.skipped,
            rejected_headers = c.rejected_headers,
            pdfs = self.pdfs.len(),
            "Batch complete"
        );
        for record in self.failures() {
            if let LineOutcome::Failed { reason, .. } = &record.outcome {
                warn!(line = record.line, "Cut failed: {reason}");
            }
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), anyhow::Error> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "Wrote batch report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchReport {
        let mut report = BatchReport::new(Path::new("cuts.txt"));
        report.push(
            1,
            LineOutcome::Header {
                image: "a.png".into(),
            },
        );
        report.push(
            2,
            LineOutcome::Cut {
                outputs: CutOutputs {
                    tile: Some("output/a/1.png".into()),
                    ..CutOutputs::default()
                },
            },
        );
        report.push(
            3,
            LineOutcome::Failed {
                reason: "Image does not fit on page: 2700x3600 pixels".into(),
                partial: vec!["output/a/2.png".into()],
            },
        );
        report.push(
            4,
            LineOutcome::Skipped {
                reason: "expected 4 coordinates, got 3".into(),
            },
        );
        report.push(5, LineOutcome::Reset);
        report
    }

    #[test]
    fn test_counts() {
        let counts = sample().counts();
        assert_eq!(
            counts,
            ReportCounts {
                headers: 1,
                cuts: 1,
                failed: 1,
                skipped: 1,
                rejected_headers: 0,
            }
        );
    }

    #[test]
    fn test_failures_lists_failed_lines() {
        let report = sample();
        let lines: Vec<usize> = report.failures().map(|r| r.line).collect();
        assert_eq!(lines, vec![3]);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        let lines = value["lines"].as_array().unwrap();
        assert_eq!(lines[0]["status"], "header");
        assert_eq!(lines[0]["line"], 1);
        assert_eq!(lines[1]["outputs"]["tile"], "output/a/1.png");
        assert_eq!(lines[2]["status"], "failed");
        assert_eq!(lines[4]["status"], "reset");
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        sample().write_json(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"cuts_file\": \"cuts.txt\""));
    }
}
