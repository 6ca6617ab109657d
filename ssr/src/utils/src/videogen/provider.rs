use super::{GenerationRequest, OperationHandle, VideoGenError};

/// The three remote calls a generation is made of.
///
/// Implemented by the direct REST client on the server and by the server
/// function proxy in the browser.
#[allow(async_fn_in_trait)]
pub trait VideoGenProvider {
    async fn start_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<OperationHandle, VideoGenError>;

    async fn poll_operation(&self, op: &OperationHandle) -> Result<OperationHandle, VideoGenError>;

    async fn download_video(&self, uri: &str) -> Result<Vec<u8>, VideoGenError>;
}

impl<P: VideoGenProvider> VideoGenProvider for &P {
    async fn start_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<OperationHandle, VideoGenError> {
        (**self).start_generation(request).await
    }

    async fn poll_operation(&self, op: &OperationHandle) -> Result<OperationHandle, VideoGenError> {
        (**self).poll_operation(op).await
    }

    async fn download_video(&self, uri: &str) -> Result<Vec<u8>, VideoGenError> {
        (**self).download_video(uri).await
    }
}
