mod args;
mod value_enum;

use clap::Parser;
use confdiff_domain::{AnalysisConfig, AnalysisMode, CountBound, CountRange, Mask};
use confdiff_shared_kernel::PresentationError;

pub use args::{Args, ModeArg};

use crate::config::RunConfig;

/// Parse process arguments.
pub fn parse_args() -> Args {
    Args::parse()
}

fn analysis_mode(args: &Args) -> Result<AnalysisMode, PresentationError> {
    match args.mode {
        ModeArg::Common => {
            let min = args.min.unwrap_or(CountBound::All);
            let max = args.max.unwrap_or(CountBound::All);
            Ok(AnalysisMode::Common(CountRange::new(min, max)))
        }
        ModeArg::Diffs => {
            if let Some(min) = args.min {
                return Err(PresentationError::InvalidValue {
                    flag: "--min".to_string(),
                    value: min.to_string(),
                    reason: "only meaningful with --mode common".to_string(),
                });
            }
            Ok(AnalysisMode::Diffs { threshold: args.max.unwrap_or(CountBound::Exact(1)) })
        }
    }
}

fn analysis_config(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let mut config = AnalysisConfig::new(analysis_mode(args)?);
    if let Some(keyword) = &args.mask {
        config = config.with_mask(Mask::new(keyword.as_str())?);
    }
    Ok(config)
}

/// Convert parsed CLI arguments into a run configuration.
pub fn build_config(args: Args) -> anyhow::Result<RunConfig> {
    let analysis = analysis_config(&args)?;
    RunConfig::builder()
        .inputs(args.inputs)
        .files_from(args.files_from)
        .include(args.include)
        .include_hidden(args.hidden)
        .analysis(analysis)
        .format(args.format)
        .output(args.output)
        .show_residuals(args.residuals)
        .show_comments(args.comments)
        .strict(args.strict)
        .build()
        .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
}
