pub mod attribution;
pub mod classify;
pub mod frequency;

pub use attribution::LineAttributor;
pub use classify::Classifier;
pub use frequency::FrequencyTable;
