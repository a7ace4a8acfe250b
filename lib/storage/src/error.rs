use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Artifact file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON artifact {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed binary artifact {}: {source}", path.display())]
    Bincode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error(transparent)]
    Core(#[from] kuliner_core::Error),
}

impl LoadError {
    /// True when an artifact file is absent, the one load failure the
    /// services degrade on instead of refusing to start.
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Missing { .. })
    }

    pub(crate) fn io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing { path }
        } else {
            LoadError::Io { path, source }
        }
    }
}
