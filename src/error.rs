use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepocatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("not a directory or does not exist: {0}")]
    InvalidRoot(PathBuf),
    #[error("configuration error: {0}")]
    Config(String),
}
impl RepocatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepocatError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        RepocatError::Config(msg.into())
    }
}
