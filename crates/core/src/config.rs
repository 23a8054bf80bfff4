use std::path::PathBuf;

use confdiff_domain::AnalysisConfig;
use confdiff_ports::LoadPlan;
use derive_builder::Builder;

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
    Yaml,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Yaml => "yaml",
        }
    }

    /// Whether this build can emit the format.
    pub fn is_available(self) -> bool {
        !matches!(self, Self::Yaml) || cfg!(feature = "yaml")
    }
}

/// Everything one invocation needs: where to read, what to compute, how to print.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RunConfig {
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default)]
    pub files_from: Option<PathBuf>,
    #[builder(default)]
    pub include: Vec<String>,
    #[builder(default)]
    pub include_hidden: bool,

    #[builder(default)]
    pub analysis: AnalysisConfig,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub show_residuals: bool,
    #[builder(default)]
    pub show_comments: bool,

    /// Fail the run when any input could not be loaded.
    #[builder(default)]
    pub strict: bool,
}

impl RunConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let no_inputs = self.inputs.as_ref().is_none_or(Vec::is_empty)
            && self.files_from.as_ref().is_none_or(Option::is_none);
        if no_inputs {
            return Err("no inputs given: pass files, directories or --files-from".to_string());
        }
        if let Some(analysis) = &self.analysis {
            analysis.validate().map_err(|err| err.to_string())?;
        }
        if let Some(format) = self.format
            && !format.is_available()
        {
            return Err(format!("output format '{}' is not available in this build", format.name()));
        }
        Ok(())
    }
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    pub fn load_plan(&self) -> LoadPlan {
        LoadPlan {
            inputs: self.inputs.clone(),
            include: self.include.clone(),
            files_from: self.files_from.clone(),
            include_hidden: self.include_hidden,
        }
    }
}
