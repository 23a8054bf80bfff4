// crates/core/src/infrastructure/io/output/formatters/structured.rs
use std::io::Write;

use confdiff_usecase::AnalysisReport;
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct Envelope<'a> {
    version: &'static str,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

fn envelope(report: &AnalysisReport) -> Envelope<'_> {
    Envelope { version: crate::VERSION, report }
}

pub fn output_json(report: &AnalysisReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &envelope(report))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub fn output_yaml(report: &AnalysisReport, out: &mut impl Write) -> Result<()> {
    let yaml_str = serde_yaml::to_string(&envelope(report))?;
    write!(out, "{yaml_str}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use confdiff_domain::{AnalysisConfig, AnalysisMode, ConfigDocument, Corpus, analyze};
    use confdiff_ports::LoadFailure;
    use serde_json::Value;

    use super::*;

    fn report(mode: AnalysisMode) -> AnalysisReport {
        let corpus = Corpus::from_documents([
            ConfigDocument::new("R1", "hostname R1\n!\ninterface Eth1\n description uplink\n!\n"),
            ConfigDocument::new("R2", "hostname R2\n!\ninterface Eth1\n description uplink\n!\n"),
        ])
        .unwrap();
        let outcome = analyze(&corpus, &AnalysisConfig::new(mode)).unwrap();
        AnalysisReport { outcome, skipped: vec![LoadFailure::new("R3.cfg", "not found")] }
    }

    #[test]
    fn json_contains_findings_and_skipped_inputs() {
        let mut buffer = Vec::new();
        output_json(&report(AnalysisMode::common()), &mut buffer).unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["version"], crate::VERSION);
        assert_eq!(value["findings"]["mode"], "common");
        assert_eq!(value["findings"]["range"]["min"], 2);
        assert_eq!(value["findings"]["stanzas"][0]["text"], "interface Eth1\n description uplink");
        assert_eq!(value["findings"]["stanzas"][0]["count"], 2);
        assert_eq!(value["skipped"][0]["input"], "R3.cfg");
        assert_eq!(value["summary"]["documents"], 2);
    }

    #[test]
    fn json_diffs_lists_peers() {
        let mut buffer = Vec::new();
        output_json(&report(AnalysisMode::diffs()), &mut buffer).unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();

        let unique = &value["findings"]["unique_lines"];
        assert_eq!(unique[0]["device"], "R1");
        assert_eq!(unique[0]["line"], "hostname R1");
        assert_eq!(unique[0]["peers"], serde_json::json!(["R2"]));
        assert_eq!(value["findings"]["residuals"][1]["stanzas"], serde_json::json!(["hostname R2"]));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_renders_mode_tag() {
        let mut buffer = Vec::new();
        output_yaml(&report(AnalysisMode::diffs()), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("mode: diffs"));
        assert!(text.contains("hostname R1"));
    }
}
