//! Batch driver: feeds the cut sheet through the state machine and
//! dispatches each cut to the pipeline.

use anyhow::Context;
use cut_sheet::{LineEvent, SheetState};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::pdf::assemble_all;
use crate::pipeline::{CutError, CutPipeline};
use crate::report::{BatchReport, LineOutcome};

/// Run a complete batch: cut sheet, optional PDF pass, report.
///
/// Per-line problems are recorded in the report; only failures to read
/// the cut sheet, to write the output root or to assemble PDFs abort the
/// run. A PDF failure is returned after the report has been written.
pub fn run(config: &AppConfig) -> Result<BatchReport, anyhow::Error> {
    std::fs::create_dir_all(&config.output_root).with_context(|| {
        format!(
            "cannot create output root {}",
            config.output_root.display()
        )
    })?;

    let text = std::fs::read_to_string(&config.cuts_file)
        .with_context(|| format!("cannot read cut sheet {}", config.cuts_file.display()))?;
    info!(path = %config.cuts_file.display(), print = config.print, grid = config.grid, "Processing cut sheet");

    let mut report = process_text(&text, config);

    let pdf_result = if config.pdf {
        assemble_all(&config.output_root, config.grid).map(|pdfs| report.pdfs = pdfs)
    } else {
        Ok(())
    };

    report.log_summary();
    if let Some(path) = &config.report_path {
        report.write_json(path)?;
    }
    pdf_result.context("PDF assembly failed")?;
    Ok(report)
}

/// Process cut-sheet text line by line.
pub fn process_text(text: &str, config: &AppConfig) -> BatchReport {
    let mut report = BatchReport::new(&config.cuts_file);
    let mut state = SheetState::new();
    let mut pipeline = CutPipeline::new(config);

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let outcome = match state.feed(line) {
            LineEvent::Reset => LineOutcome::Reset,
            LineEvent::Header(header) => LineOutcome::Header {
                image: header.image,
            },
            LineEvent::HeaderRejected(e) => LineOutcome::HeaderRejected {
                reason: e.to_string(),
            },
            LineEvent::Skipped(e) => LineOutcome::Skipped {
                reason: e.to_string(),
            },
            LineEvent::CutRejected(e) => {
                let error = CutError::from(e);
                warn!(line = line_no, "Cut rejected: {error}");
                LineOutcome::Failed {
                    reason: error.to_string(),
                    partial: Vec::new(),
                }
            }
            LineEvent::Cut(header, cut) => match pipeline.run(&header, &cut) {
                Ok(outputs) => LineOutcome::Cut { outputs },
                Err(failure) => {
                    warn!(line = line_no, image = %header.image, "Cut failed: {}", failure.error);
                    LineOutcome::Failed {
                        reason: failure.error.to_string(),
                        partial: failure.partial.written(),
                    }
                }
            },
        };
        report.push(line_no, outcome);
    }

    report
}
