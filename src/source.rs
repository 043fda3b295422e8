use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// A contiguous read-only view of the whole input file. Tables borrow station
/// names out of this buffer, so the source must outlive every table built
/// from it.
#[derive(Debug)]
pub enum ByteSource {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl ByteSource {
    /// Maps the file read-only. Zero-length files get an owned empty buffer
    /// instead, since mapping them fails on some platforms.
    pub fn map_file(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        if file.metadata().map_err(io_err)?.len() == 0 {
            return Ok(Self::Owned(Vec::new()));
        }

        let map = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        Ok(Self::Mapped(map))
    }

    /// Reads the whole file into memory. Slower than mapping but has no
    /// platform requirements.
    pub fn read_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::Owned(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(map) => map,
            Self::Owned(buf) => buf,
        }
    }
}

impl Deref for ByteSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes()
    }
}
