//! Whole-corpus analysis: normalize, split, count, classify, attribute.

use std::collections::BTreeSet;

use confdiff_shared_kernel::{DeviceId, DomainResult};

use crate::{
    analytics::{Classifier, FrequencyTable, LineAttributor},
    config::{AnalysisConfig, AnalysisMode, ResolvedRange},
    model::{AnalysisOutcome, AnalysisSummary, Corpus, Findings, Stanza},
    normalize::Normalizer,
    split::split_stanzas,
};

/// Bounds after resolving symbolic values against the corpus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Common(ResolvedRange),
    Diffs(Option<usize>),
}

fn plan(mode: &AnalysisMode, corpus_size: usize) -> DomainResult<Plan> {
    match mode {
        AnalysisMode::Common(range) => {
            range.check()?;
            range.resolve(corpus_size).map(Plan::Common)
        }
        AnalysisMode::Diffs { threshold } => Ok(Plan::Diffs(threshold.resolve_upper(corpus_size))),
    }
}

/// Stanza sequences per device, plus the comments found along the way.
#[derive(Debug, Default)]
pub struct PreparedCorpus<'a> {
    pub sequences: Vec<(&'a DeviceId, Vec<Stanza>)>,
    pub comments: BTreeSet<String>,
}

/// Normalize and split every document in corpus order.
pub fn prepare<'a>(corpus: &'a Corpus, normalizer: &Normalizer) -> PreparedCorpus<'a> {
    let mut prepared = PreparedCorpus::default();
    for document in corpus {
        let normalized = normalizer.normalize(document.text());
        prepared.comments.extend(normalized.comments);
        prepared.sequences.push((document.device(), split_stanzas(&normalized.text)));
    }
    prepared
}

/// Run one analysis. Configuration errors are reported before any document
/// is touched; an empty corpus yields empty findings.
pub fn analyze(corpus: &Corpus, config: &AnalysisConfig) -> DomainResult<AnalysisOutcome> {
    let plan = plan(&config.mode, corpus.len())?;

    let normalizer = Normalizer::from_config(config);
    let prepared = prepare(corpus, &normalizer);
    let table = FrequencyTable::from_sequences(prepared.sequences.iter().map(|(_, seq)| seq.as_slice()));

    let devices = corpus.devices();
    let summary = AnalysisSummary {
        documents: corpus.len(),
        stanzas: table.total(),
        distinct_stanzas: table.len(),
    };

    let findings = match plan {
        Plan::Common(range) => Findings::Common { range, stanzas: Classifier::common(&table, range) },
        Plan::Diffs(threshold) => {
            let residuals = Classifier::residuals(
                &table,
                prepared.sequences.iter().map(|(device, seq)| (*device, seq.as_slice())),
                threshold,
            );
            let unique_lines = LineAttributor::attribute(&residuals, &devices);
            Findings::Diffs { threshold, residuals, unique_lines }
        }
    };

    Ok(AnalysisOutcome {
        devices,
        summary,
        comments: prepared.comments.into_iter().collect(),
        findings,
    })
}
