use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kuliner not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid recommendation count: {0} (must be a positive integer)")]
    InvalidCount(usize),

    #[error("Inconsistent artifacts: {0}")]
    InconsistentArtifacts(String),
}
