//! Domain-specific errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("The folder path doesn't exist ({})", .0.display())]
    PathNotFound(PathBuf),
    #[error("failed to traverse {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("failed to rewrite {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdaterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
