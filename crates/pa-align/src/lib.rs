pub mod aligner;
pub mod result;
pub mod retag;

pub use aligner::{AlignConfig, ParagraphAligner, PARAGRAPH_MARKER};
pub use result::*;
pub use retag::apply_tags;
