use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Wire encoding used for the audio bytes inside the request payload.
///
/// The two schemes carry different field names and are not interchangeable
/// with the remote contract; the deployment picks one and sticks with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadEncoding {
    #[default]
    Base64,
    Hex,
}

impl FromStr for PayloadEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" => Ok(PayloadEncoding::Base64),
            "hex" => Ok(PayloadEncoding::Hex),
            other => Err(ConfigError::UnknownEncoding(other.to_string())),
        }
    }
}

impl fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadEncoding::Base64 => write!(f, "base64"),
            PayloadEncoding::Hex => write!(f, "hex"),
        }
    }
}

/// Local view of the endpoint client state. No remote call involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointInfo {
    pub endpoint_name: String,
    pub region: String,
    pub available: bool,
}
