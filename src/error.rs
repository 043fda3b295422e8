use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("usage: obrc <measurements-file>")]
    MissingPath,

    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed record at byte {offset}: {reason}")]
    Parse { offset: usize, reason: &'static str },

    #[error("aggregation invariant violated: {0}")]
    Invariant(&'static str),

    #[error("could not write result: {0}")]
    Write(#[from] io::Error),
}
