pub mod extraction;
pub mod source;
pub mod unit;

pub use extraction::{Extraction, ExtractionStats};
pub use source::{concat_corpus, SourceDocument};
pub use unit::{KeyResolution, ResultEntry, SequenceKey, Unit};
