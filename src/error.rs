//! Error types for buf_stream

use std::io::{self, ErrorKind, SeekFrom};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    /// The seek could not be served from the buffered window and cannot be
    /// delegated to the backend (`SeekFrom::End` without pending writes).
    #[error("cannot resolve {0:?} against the buffered window")]
    UnresolvedSeek(SeekFrom),

    /// The seek target lies before the start of the stream.
    #[error("invalid seek to negative position {0}")]
    InvalidSeek(i128),

    #[error("buffer capacity must not be 0")]
    ZeroCapacity,
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) => err,
            Error::UnresolvedSeek(_) => io::Error::new(ErrorKind::Unsupported, err),
            Error::InvalidSeek(_) | Error::ZeroCapacity => {
                io::Error::new(ErrorKind::InvalidInput, err)
            }
        }
    }
}
