pub mod chunk;
pub mod error;
pub mod merge;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod source;
pub mod table;

pub use error::{Error, Result};
pub use pipeline::{aggregate, default_workers};
pub use report::render;
pub use source::ByteSource;
