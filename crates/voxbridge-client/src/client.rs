use crate::payload::{TranscriptionRequest, CONTENT_TYPE_JSON};
use crate::response::extract_transcript;
use crate::sagemaker::SageMakerTransport;
use crate::transport::InferenceTransport;
use std::path::Path;
use std::sync::Arc;
use voxbridge_core::{EndpointConfig, EndpointInfo, TranscribeError};

pub const STATUS_IN_SERVICE: &str = "InService";

/// Client for a named managed inference endpoint.
///
/// The transport handle is created once at construction and shared read-only
/// across concurrent calls; `None` means construction failed and every
/// transcription call will return [`TranscribeError::ClientNotInitialized`].
pub struct EndpointClient {
    config: EndpointConfig,
    transport: Option<Arc<dyn InferenceTransport>>,
}

impl EndpointClient {
    /// Construct against SageMaker. Transport failure is logged and leaves
    /// the client in the unavailable state; construction itself never fails.
    pub async fn connect(config: EndpointConfig) -> Self {
        let transport = match SageMakerTransport::connect(&config.region).await {
            Ok(t) => {
                tracing::info!(
                    endpoint_name = %config.endpoint_name,
                    region = %config.region,
                    encoding = %config.encoding,
                    "endpoint client initialized",
                );
                Some(Arc::new(t) as Arc<dyn InferenceTransport>)
            }
            Err(e) => {
                tracing::error!("error initializing endpoint client: {e}");
                None
            }
        };
        Self { config, transport }
    }

    /// Construct over an explicit transport (tests, alternative backends).
    pub fn with_transport(config: EndpointConfig, transport: Arc<dyn InferenceTransport>) -> Self {
        Self {
            config,
            transport: Some(transport),
        }
    }

    /// The absent-handle state a failed construction leaves behind.
    pub fn uninitialized(config: EndpointConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.transport.is_some()
    }

    /// Local view of the client state; performs no remote call.
    pub fn endpoint_info(&self) -> EndpointInfo {
        EndpointInfo {
            endpoint_name: self.config.endpoint_name.clone(),
            region: self.config.region.clone(),
            available: self.is_available(),
        }
    }

    /// Poll the remote endpoint status. Meant for health checks, so every
    /// failure class becomes `(false, message)` instead of an error.
    pub async fn describe_status(&self) -> (bool, String) {
        let Some(transport) = &self.transport else {
            return (false, "client not initialized".to_string());
        };

        match transport.endpoint_status(&self.config.endpoint_name).await {
            Ok(status) if status == STATUS_IN_SERVICE => (
                true,
                format!("endpoint {} is in service", self.config.endpoint_name),
            ),
            Ok(status) => (
                false,
                format!("endpoint {} status: {status}", self.config.endpoint_name),
            ),
            Err(e) => (false, e.to_string()),
        }
    }

    /// Transcribe the audio file at `path` via the remote endpoint.
    ///
    /// Single stateless exchange: read, encode, invoke, normalize. Failures
    /// are logged with the full remote error and returned to the caller; no
    /// retry, no fallback, no partial result.
    pub async fn transcribe_audio(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<String, TranscribeError> {
        let path = path.as_ref();
        match self.try_transcribe(path).await {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "transcription: {text}");
                Ok(text)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "error calling endpoint: {e}");
                Err(e)
            }
        }
    }

    /// Transcribe audio already held in memory.
    pub async fn transcribe_bytes(&self, audio: &[u8]) -> Result<String, TranscribeError> {
        let transport = self
            .transport
            .as_ref()
            .ok_or(TranscribeError::ClientNotInitialized)?;

        let request = TranscriptionRequest::new(self.config.encoding, audio);
        let response = transport
            .invoke(
                &self.config.endpoint_name,
                CONTENT_TYPE_JSON,
                request.to_body(),
            )
            .await?;

        extract_transcript(&response)
    }

    async fn try_transcribe(&self, path: &Path) -> Result<String, TranscribeError> {
        // Precondition check comes before any file read or network call.
        if self.transport.is_none() {
            return Err(TranscribeError::ClientNotInitialized);
        }

        let audio = tokio::fs::read(path)
            .await
            .map_err(|source| TranscribeError::LocalIo {
                path: path.to_path_buf(),
                source,
            })?;

        self.transcribe_bytes(&audio).await
    }
}
