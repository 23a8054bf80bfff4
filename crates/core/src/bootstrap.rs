use anyhow::{Context, Result};
use confdiff_infra::{FsDocumentSource, TracingProgress};
use confdiff_shared_kernel::ApplicationError;
use confdiff_usecase::{AnalysisReport, AnalyzeCorpus};

use crate::{
    config::RunConfig,
    infrastructure::io::output,
    presentation::cli::{self, Args},
};

/// How a run that produced output ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Complete,
    /// The report was written but some inputs were skipped.
    Partial,
}

pub fn run(args: Args) -> Result<RunStatus> {
    let config = cli::build_config(args)?;
    run_with_config(&config)
}

pub fn run_with_config(config: &RunConfig) -> Result<RunStatus> {
    let report = analyze(config)?;

    if config.strict && report.has_skipped() {
        let failure = &report.skipped[0];
        return Err(ApplicationError::DocumentLoadFailed {
            reason: format!(
                "{} input(s) could not be loaded, first: {}: {}",
                report.skipped.len(),
                failure.input.display(),
                failure.reason
            ),
            source: None,
        }
        .into());
    }

    output::emit(&report, config).context("failed to write report")?;

    if report.has_skipped() {
        eprintln!("confdiff: skipped {} input(s):", report.skipped.len());
        for failure in &report.skipped {
            eprintln!("  {}: {}", failure.input.display(), failure.reason);
        }
        return Ok(RunStatus::Partial);
    }
    Ok(RunStatus::Complete)
}

fn analyze(config: &RunConfig) -> Result<AnalysisReport> {
    let source = FsDocumentSource::new();
    let progress = TracingProgress::new();
    let usecase = AnalyzeCorpus::new(&source, &progress);
    let report = usecase.run(&config.load_plan(), &config.analysis)?;
    tracing::info!(
        documents = report.outcome.summary.documents,
        skipped = report.skipped.len(),
        format = config.format.name(),
        "analysis finished"
    );
    Ok(report)
}
