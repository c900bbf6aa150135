pub mod engine;
pub mod punctuation;
pub mod result;
pub mod words;

mod walk;

pub use engine::{CompareConfig, SequenceComparer};
pub use punctuation::compare_punctuation;
pub use result::*;
pub use words::compare_words;
