pub mod config;
pub mod error;
pub mod types;

pub use config::{EndpointConfig, EnvFile};
pub use error::{ConfigError, TranscribeError, TransportError};
pub use types::{EndpointInfo, PayloadEncoding};
