pub mod jsonl;
pub mod structured;
pub mod text;

pub use jsonl::output_jsonl;
pub use structured::output_json;
#[cfg(feature = "yaml")]
pub use structured::output_yaml;
pub use text::output_text;
