use std::io::Write;

use comfy_table::{ContentArrangement, Table, presets};
use confdiff_domain::{CommonStanza, Findings, ResolvedRange, Residual, UniqueLine};
use confdiff_usecase::AnalysisReport;

use crate::config::RunConfig;

/// Human-readable report. Every annotation line starts with `!` so the
/// stanza part of the output still reads as configuration.
pub fn output_text(report: &AnalysisReport, config: &RunConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let outcome = &report.outcome;
    match &outcome.findings {
        Findings::Common { range, stanzas } => write_common(stanzas, *range, outcome.summary.documents, out)?,
        Findings::Diffs { residuals, unique_lines, .. } => {
            if config.show_residuals {
                write_residuals(residuals, out)?;
            }
            write_unique_lines(unique_lines, out)?;
        }
    }
    if config.show_comments {
        write_comments(&outcome.comments, out)?;
    }
    writeln!(
        out,
        "! {} documents, {} stanzas ({} distinct)",
        outcome.summary.documents, outcome.summary.stanzas, outcome.summary.distinct_stanzas
    )?;
    Ok(())
}

fn format_range(range: ResolvedRange) -> String {
    match range.max {
        Some(max) => format!("{}..{max}", range.min),
        None => format!("{}..", range.min),
    }
}

fn write_common(
    stanzas: &[CommonStanza],
    range: ResolvedRange,
    documents: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if stanzas.is_empty() {
        writeln!(out, "! no stanza seen {} times", format_range(range))?;
        return Ok(());
    }
    for stanza in stanzas {
        writeln!(out, "{}", stanza.text)?;
        writeln!(out, "! seen {}/{documents}", stanza.count)?;
    }
    Ok(())
}

fn write_residuals(residuals: &[Residual], out: &mut impl Write) -> anyhow::Result<()> {
    for residual in residuals.iter().filter(|r| !r.is_empty()) {
        writeln!(out, "! ==== {} ====", residual.device)?;
        for stanza in &residual.stanzas {
            writeln!(out, "{stanza}")?;
            writeln!(out, "!")?;
        }
    }
    Ok(())
}

fn write_unique_lines(lines: &[UniqueLine], out: &mut impl Write) -> anyhow::Result<()> {
    if lines.is_empty() {
        writeln!(out, "! no device-specific lines")?;
        return Ok(());
    }
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["DEVICE", "LINE", "PEERS"]);
    for line in lines {
        let peers = line.peers.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ");
        table.add_row(vec![line.device.to_string(), line.line.trim_end().to_string(), peers]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

fn write_comments(comments: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "! ==== comments ('!!') found in corpus ====")?;
    for comment in comments {
        writeln!(out, "{comment}")?;
    }
    Ok(())
}
