use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot switch terminal to raw mode: {0}")]
    RawMode(#[source] io::Error),

    #[error("cannot install resize handler: {0}")]
    Signal(#[source] io::Error),

    #[error("cannot determine window size")]
    WindowSize,

    #[error("read from terminal failed: {0}")]
    Read(#[source] io::Error),

    #[error("write to terminal failed: {0}")]
    Write(#[source] io::Error),

    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
