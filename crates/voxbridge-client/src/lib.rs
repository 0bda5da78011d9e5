pub mod client;
pub mod payload;
pub mod response;
pub mod sagemaker;
pub mod transport;

pub use client::{EndpointClient, STATUS_IN_SERVICE};
pub use payload::{TranscriptionRequest, CONTENT_TYPE_JSON};
pub use response::extract_transcript;
pub use sagemaker::SageMakerTransport;
pub use transport::InferenceTransport;
