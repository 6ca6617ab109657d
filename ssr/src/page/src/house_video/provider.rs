use utils::videogen::{GenerationRequest, OperationHandle, VideoGenError, VideoGenProvider};

use super::server::{fetch_house_video, poll_house_video, start_house_video};

/// Reaches the provider through this app's server functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnProvider;

impl VideoGenProvider for ServerFnProvider {
    async fn start_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<OperationHandle, VideoGenError> {
        start_house_video(request.image.clone()).await
    }

    async fn poll_operation(&self, op: &OperationHandle) -> Result<OperationHandle, VideoGenError> {
        poll_house_video(op.clone()).await
    }

    async fn download_video(&self, uri: &str) -> Result<Vec<u8>, VideoGenError> {
        fetch_house_video(uri.to_string()).await?.into_bytes()
    }
}
