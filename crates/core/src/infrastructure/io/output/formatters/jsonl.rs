// crates/core/src/infrastructure/io/output/formatters/jsonl.rs
use std::io::Write;

use confdiff_domain::Findings;
use confdiff_usecase::AnalysisReport;
use serde_json::json;

use crate::{config::RunConfig, error::Result};

/// One JSON object per line: findings first, then comments and skipped inputs,
/// then a closing summary record.
pub fn output_jsonl(report: &AnalysisReport, config: &RunConfig, out: &mut impl Write) -> Result<()> {
    let outcome = &report.outcome;
    let documents = outcome.summary.documents;
    let mut emit = |item: serde_json::Value| -> Result<()> {
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
        Ok(())
    };

    let mode = match &outcome.findings {
        Findings::Common { stanzas, .. } => {
            for stanza in stanzas {
                emit(json!({
                    "type": "stanza",
                    "text": stanza.text,
                    "count": stanza.count,
                    "of": documents,
                }))?;
            }
            "common"
        }
        Findings::Diffs { residuals, unique_lines, .. } => {
            if config.show_residuals {
                for residual in residuals.iter().filter(|r| !r.is_empty()) {
                    emit(json!({ "type": "residual", "device": residual.device, "stanzas": residual.stanzas }))?;
                }
            }
            for line in unique_lines {
                emit(json!({ "type": "unique_line", "device": line.device, "line": line.line, "peers": line.peers }))?;
            }
            "diffs"
        }
    };

    if config.show_comments {
        for comment in &outcome.comments {
            emit(json!({ "type": "comment", "text": comment }))?;
        }
    }
    for failure in &report.skipped {
        emit(json!({ "type": "skipped", "input": failure.input, "reason": failure.reason }))?;
    }

    emit(json!({
        "type": "summary",
        "version": crate::VERSION,
        "mode": mode,
        "documents": documents,
        "stanzas": outcome.summary.stanzas,
        "distinct_stanzas": outcome.summary.distinct_stanzas,
        "skipped": report.skipped.len(),
    }))
}
