pub mod document;
pub mod stanza;

pub use document::{ConfigDocument, Corpus};
pub use stanza::Stanza;
