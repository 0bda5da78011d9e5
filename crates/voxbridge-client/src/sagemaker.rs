use crate::transport::InferenceTransport;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_smithy_types::error::display::DisplayErrorContext;
use voxbridge_core::TransportError;

/// SageMaker-backed transport: `InvokeEndpoint` on the runtime API and
/// `DescribeEndpoint` on the control-plane API.
///
/// Credentials come from the SDK's default provider chain; this crate never
/// reads them itself.
pub struct SageMakerTransport {
    runtime: aws_sdk_sagemakerruntime::Client,
    control: aws_sdk_sagemaker::Client,
}

impl SageMakerTransport {
    pub async fn connect(region: &str) -> Result<Self, TransportError> {
        if region.trim().is_empty() {
            return Err(TransportError::InvalidConfig(
                "region must not be empty".to_string(),
            ));
        }

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Ok(Self {
            runtime: aws_sdk_sagemakerruntime::Client::new(&sdk_config),
            control: aws_sdk_sagemaker::Client::new(&sdk_config),
        })
    }
}

#[async_trait]
impl InferenceTransport for SageMakerTransport {
    async fn invoke(
        &self,
        endpoint_name: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        tracing::trace!(
            endpoint_name,
            body_len = body.len(),
            "invoking SageMaker endpoint",
        );

        let output = self
            .runtime
            .invoke_endpoint()
            .endpoint_name(endpoint_name)
            .content_type(content_type)
            .body(aws_smithy_types::Blob::new(body))
            .send()
            .await
            .map_err(|e| TransportError::Invoke(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .body
            .map(|blob| blob.into_inner())
            .unwrap_or_default())
    }

    async fn endpoint_status(&self, endpoint_name: &str) -> Result<String, TransportError> {
        let output = self
            .control
            .describe_endpoint()
            .endpoint_name(endpoint_name)
            .send()
            .await
            .map_err(|e| TransportError::Describe(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .endpoint_status()
            .map(|status| status.as_str().to_string())
            .unwrap_or_else(|| "Unknown".to_string()))
    }
}
