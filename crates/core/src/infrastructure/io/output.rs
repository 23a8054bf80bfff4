pub mod formatters;
mod writer;

use std::io::Write;

use confdiff_usecase::AnalysisReport;
use formatters::{output_json, output_jsonl, output_text};

use crate::config::{OutputFormat, RunConfig};

/// Emit the report in the configured format to stdout or `--output`.
pub fn emit(report: &AnalysisReport, config: &RunConfig) -> anyhow::Result<()> {
    let mut writer = writer::OutputWriter::create(config)?;
    render(report, config, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render into any writer; used by [`emit`] and by tests.
pub fn render(report: &AnalysisReport, config: &RunConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match config.format {
        OutputFormat::Text => output_text(report, config, out),
        OutputFormat::Json => Ok(output_json(report, out)?),
        OutputFormat::Jsonl => Ok(output_jsonl(report, config, out)?),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => Ok(formatters::output_yaml(report, out)?),
        #[cfg(not(feature = "yaml"))]
        OutputFormat::Yaml => {
            Err(confdiff_shared_kernel::PresentationError::UnsupportedFormat("yaml".to_string()).into())
        }
    }
}
