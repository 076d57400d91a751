use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Position in the input at which an I/O failure happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum PairFilterError {
    #[error("cannot open input {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create output {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read error at {ctx:?}: {source}")]
    Read {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("write error at {ctx:?}: {source}")]
    Write {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
}

impl PairFilterError {
    pub(crate) fn read_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Read { source, ctx }
    }
    pub(crate) fn write_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Write { source, ctx }
    }
}
