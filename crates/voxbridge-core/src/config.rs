use crate::error::ConfigError;
use crate::types::PayloadEncoding;
use std::path::Path;

pub const REGION_VAR: &str = "AWS_REGION";
pub const ENDPOINT_NAME_VAR: &str = "SAGEMAKER_ENDPOINT_NAME";
pub const PAYLOAD_ENCODING_VAR: &str = "SAGEMAKER_PAYLOAD_ENCODING";

fn default_region() -> String {
    "us-west-2".to_string()
}

fn default_endpoint_name() -> String {
    "whisper-inference".to_string()
}

/// Parsed contents of an optional `KEY=VALUE` environment file.
///
/// The loader never touches the process environment on its own; callers opt
/// in via [`EnvFile::apply_to_env`].
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Load an env file from disk. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::info!("loading configuration from {}", path.display());
                Ok(Self::parse(&content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "configuration file {} not found, using environment variables or defaults",
                    path.display(),
                );
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::FileRead(e)),
        }
    }

    /// Parse env-file text: one `KEY=VALUE` per line, `#` comments and blank
    /// lines skipped, whitespace around key and value trimmed. Lines without
    /// a `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            entries.push((key.trim().to_string(), value.trim().to_string()));
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge every entry into the process environment. Variables not named
    /// by the file are left untouched.
    pub fn apply_to_env(&self) {
        for (key, value) in &self.entries {
            std::env::set_var(key, value);
        }
    }
}

/// Immutable endpoint configuration, sourced from the environment with
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub region: String,
    pub endpoint_name: String,
    pub encoding: PayloadEncoding,
}

impl EndpointConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve with env-file entries taking precedence over the process
    /// environment.
    pub fn from_env_file(file: &EnvFile) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            file.get(key)
                .map(str::to_string)
                .or_else(|| std::env::var(key).ok())
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let region = lookup(REGION_VAR).unwrap_or_else(default_region);
        let endpoint_name = lookup(ENDPOINT_NAME_VAR).unwrap_or_else(default_endpoint_name);
        let encoding = match lookup(PAYLOAD_ENCODING_VAR) {
            Some(raw) => raw.parse()?,
            None => PayloadEncoding::default(),
        };
        Ok(Self {
            region,
            endpoint_name,
            encoding,
        })
    }
}
