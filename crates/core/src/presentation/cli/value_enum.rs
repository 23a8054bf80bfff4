use clap::{ValueEnum, builder::PossibleValue};

use crate::config::OutputFormat;

// Manual impl so `yaml` can be hidden from --help in builds without it.
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Jsonl, Self::Yaml]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.name());
        Some(match self {
            Self::Text => value.help("annotated stanzas and a table of device-specific lines"),
            Self::Json => value.help("one JSON document"),
            Self::Jsonl => value.help("one JSON record per finding"),
            Self::Yaml => value.help("one YAML document").hide(!self.is_available()),
        })
    }
}
