pub mod error;
pub mod extract;
pub mod hash;
pub mod line;
pub mod normalize;
pub mod source;

pub use error::*;
pub use extract::*;
pub use hash::*;
pub use line::*;
pub use normalize::*;
pub use source::Document;
