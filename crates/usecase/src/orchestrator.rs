use confdiff_domain::{AnalysisConfig, ConfigDocument, Corpus, analyze};
use confdiff_ports::{DocumentSource, LoadFailure, LoadPlan, ProgressSink};
use confdiff_shared_kernel::{ErrorContext, Result};

use crate::dto::AnalysisReport;

pub struct AnalyzeCorpus<'a> {
    source: &'a dyn DocumentSource,
    progress: &'a dyn ProgressSink,
}

impl<'a> AnalyzeCorpus<'a> {
    pub fn new(source: &'a dyn DocumentSource, progress: &'a dyn ProgressSink) -> Self {
        Self { source, progress }
    }

    /// Validate, load, analyze. Inputs that fail to load are reported in
    /// [`AnalysisReport::skipped`] and the run continues without them.
    pub fn run(&self, plan: &LoadPlan, config: &AnalysisConfig) -> Result<AnalysisReport> {
        config.validate()?;

        let (corpus, skipped) = self.assemble(plan)?;
        for failure in &skipped {
            tracing::warn!(input = %failure.input.display(), reason = %failure.reason, "skipping input");
        }

        tracing::info!(documents = corpus.len(), mode = config.mode.name(), "analyzing corpus");
        let outcome = analyze(&corpus, config)?;
        Ok(AnalysisReport { outcome, skipped })
    }

    fn assemble(&self, plan: &LoadPlan) -> Result<(Corpus, Vec<LoadFailure>)> {
        let loaded = self.source.load(plan).context("loading configuration documents")?;
        let mut skipped = loaded.failures;
        let mut corpus = Corpus::new();

        for document in loaded.documents {
            let device = document.device.clone();
            if let Err(err) = corpus.push(ConfigDocument::new(document.device, document.text)) {
                skipped.push(LoadFailure::new(document.path, err.to_string()));
                continue;
            }
            tracing::debug!(device = %device, "document loaded");
            self.progress.on_document(&device)?;
        }

        self.progress.on_complete(corpus.len())?;
        Ok((corpus, skipped))
    }
}
