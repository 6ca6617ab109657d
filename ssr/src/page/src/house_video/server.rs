use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use utils::videogen::{ImagePayload, OperationHandle, VideoGenError, VideoPayload};

#[cfg(feature = "ssr")]
fn veo_client() -> Result<utils::videogen::VeoClient, VideoGenError> {
    use_context().ok_or_else(|| {
        VideoGenError::ProviderCallFailed("video generation is not configured".into())
    })
}

#[server(endpoint = "start_house_video", input = Json)]
pub async fn start_house_video(image: ImagePayload) -> Result<OperationHandle, VideoGenError> {
    use utils::videogen::{GenerationRequest, VideoGenProvider};

    let request = GenerationRequest::from_payload(image)?;
    let op = veo_client()?.start_generation(&request).await?;
    log::info!("started operation {}", op.name);
    Ok(op)
}

#[server(endpoint = "poll_house_video", input = Json)]
pub async fn poll_house_video(op: OperationHandle) -> Result<OperationHandle, VideoGenError> {
    use utils::videogen::VideoGenProvider;

    veo_client()?.poll_operation(&op).await
}

#[server(endpoint = "fetch_house_video", input = Json)]
pub async fn fetch_house_video(uri: String) -> Result<VideoPayload, VideoGenError> {
    use utils::videogen::VideoGenProvider;

    let bytes = veo_client()?.download_video(&uri).await?;
    Ok(VideoPayload::from_bytes(&bytes))
}
