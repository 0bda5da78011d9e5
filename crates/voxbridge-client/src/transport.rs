use async_trait::async_trait;
use voxbridge_core::TransportError;

/// Seam between the endpoint client and the managed inference service.
///
/// Implementations must be safe to share read-only across concurrent callers;
/// no method takes `&mut self`.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    /// Invoke the named endpoint with the serialized payload and return the
    /// raw response body. Blocks (as an awaited call) for the duration of
    /// remote inference; no timeout or retry is applied here.
    async fn invoke(
        &self,
        endpoint_name: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError>;

    /// Fetch the endpoint's deployment status string (e.g. `"InService"`).
    async fn endpoint_status(&self, endpoint_name: &str) -> Result<String, TransportError>;
}
