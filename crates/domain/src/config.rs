pub mod aggregates;
pub mod value_objects;

pub use aggregates::{AnalysisConfig, AnalysisMode};
pub use value_objects::{CountBound, CountRange, MASK_MARKER, Mask, ResolvedRange};
