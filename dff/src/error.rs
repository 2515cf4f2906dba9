use crate::types::ChunkId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DffError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0} chunk is truncated")]
    Truncated(&'static str),
    #[error("chunk size {0:#x} is out of range")]
    BadSize(u64),
    #[error("bad {0} signature")]
    BadSignature(&'static str),
    #[error("unrecognized chunk id {0}")]
    UnrecognizedChunk(ChunkId),
    #[error("missing {0} chunk")]
    MissingChunk(&'static str),
}

pub type Result<T> = std::result::Result<T, DffError>;
