use std::path::PathBuf;

/// Base error type for seqdiff-utils operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("unable to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stream shape: {0}")]
    StreamShape(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
