use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("unknown payload encoding: {0}")]
    UnknownEncoding(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint configuration: {0}")]
    InvalidConfig(String),

    #[error("endpoint invocation failed: {0}")]
    Invoke(String),

    #[error("endpoint describe failed: {0}")]
    Describe(String),
}

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("endpoint client not initialized")]
    ClientNotInitialized,

    #[error("failed to read audio file {path:?}: {source}")]
    LocalIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("endpoint invocation failed: {0}")]
    RemoteInvocation(String),

    #[error("malformed endpoint response: {0}")]
    MalformedResponse(String),
}

impl From<TransportError> for TranscribeError {
    fn from(err: TransportError) -> Self {
        TranscribeError::RemoteInvocation(err.to_string())
    }
}
