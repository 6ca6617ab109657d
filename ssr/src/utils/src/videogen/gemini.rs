//! Gemini API binding for Veo long-running video generation.

use consts::{messages, API_KEY_HEADER, API_KEY_QUERY_PARAM, MAX_VIDEO_DOWNLOAD_BYTES};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use super::{
    ApiKey, GenerationRequest, OperationHandle, VideoGenConfig, VideoGenError, VideoGenProvider,
};

#[derive(Serialize, Debug, PartialEq)]
pub struct PredictRequest<'a> {
    pub instances: [PredictInstance<'a>; 1],
    pub parameters: PredictParameters<'a>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PredictInstance<'a> {
    pub prompt: &'a str,
    pub image: InlineImage<'a>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage<'a> {
    pub bytes_base64_encoded: &'a str,
    pub mime_type: &'a str,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters<'a> {
    pub sample_count: u32,
    pub resolution: &'a str,
    pub aspect_ratio: &'a str,
}

impl<'a> From<&'a GenerationRequest> for PredictRequest<'a> {
    fn from(req: &'a GenerationRequest) -> Self {
        Self {
            instances: [PredictInstance {
                prompt: &req.prompt,
                image: InlineImage {
                    bytes_base64_encoded: &req.image.bytes_base64,
                    mime_type: &req.image.mime_type,
                },
            }],
            parameters: PredictParameters {
                sample_count: req.parameters.sample_count,
                resolution: &req.parameters.resolution,
                aspect_ratio: &req.parameters.aspect_ratio,
            },
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub response: Option<OperationResult>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GeneratedSample {
    #[serde(default)]
    pub video: Option<VideoRef>,
}

#[derive(Deserialize, Debug, Default)]
pub struct VideoRef {
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ApiError,
}

impl ApiError {
    fn into_message(self) -> String {
        match (self.message, self.status) {
            (Some(message), _) if !message.trim().is_empty() => message,
            (_, Some(status)) => status,
            _ => self.code.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

impl From<Operation> for OperationHandle {
    fn from(op: Operation) -> Self {
        let video_uri = op
            .response
            .and_then(|r| r.generate_video_response)
            .and_then(|r| r.generated_samples.into_iter().next())
            .and_then(|s| s.video)
            .and_then(|v| v.uri);
        Self {
            name: op.name,
            done: op.done,
            video_uri,
            error: op.error.map(ApiError::into_message),
        }
    }
}

pub fn predict_url(base: &Url, model: &str) -> Result<Url, VideoGenError> {
    join(base, &format!("models/{model}:predictLongRunning"))
}

/// Only names of the form `models/{model}/operations/{id}` are accepted.
pub fn operation_url(base: &Url, model: &str, name: &str) -> Result<Url, VideoGenError> {
    let id = name
        .strip_prefix("models/")
        .and_then(|rest| rest.strip_prefix(model))
        .and_then(|rest| rest.strip_prefix("/operations/"));
    match id {
        Some(id) if is_resource_id(id) => join(base, name),
        _ => Err(VideoGenError::ProviderCallFailed(format!(
            "unexpected operation name {name:?}"
        ))),
    }
}

fn is_resource_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn join(base: &Url, path: &str) -> Result<Url, VideoGenError> {
    let raw = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&raw).map_err(|e| VideoGenError::ProviderCallFailed(format!("bad url {raw}: {e}")))
}

/// The asset URL with the credential appended as `key=`.
///
/// Only `{api_base}/files/{id}:download` on the API host gets the credential.
pub fn authorized_download_url(
    base: &Url,
    uri: &str,
    key: &ApiKey,
) -> Result<Url, VideoGenError> {
    let mut url = Url::parse(uri)
        .map_err(|e| VideoGenError::ProviderCallFailed(format!("bad video uri: {e}")))?;
    if url.scheme() != base.scheme()
        || url.host_str() != base.host_str()
        || url.port_or_known_default() != base.port_or_known_default()
    {
        return Err(VideoGenError::ProviderCallFailed(format!(
            "refusing to send the credential to {}",
            url.host_str().unwrap_or("an unknown host")
        )));
    }

    let files = format!("{}/files/", base.path().trim_end_matches('/'));
    let file_id = url
        .path()
        .strip_prefix(files.as_str())
        .and_then(|rest| rest.strip_suffix(":download"));
    if !file_id.is_some_and(is_resource_id) {
        return Err(VideoGenError::ProviderCallFailed(format!(
            "not a generated file: {}",
            url.path()
        )));
    }

    let query: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != API_KEY_QUERY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .extend_pairs(query)
        .append_pair(API_KEY_QUERY_PARAM, key.expose());
    Ok(url)
}

fn ensure_download_size(bytes: u64) -> Result<(), VideoGenError> {
    if bytes > MAX_VIDEO_DOWNLOAD_BYTES {
        return Err(VideoGenError::ProviderCallFailed(
            messages::VIDEO_TOO_LARGE.to_string(),
        ));
    }
    Ok(())
}

/// Provider message for a non-success response body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => {
            let message = env.error.into_message();
            if message.trim().is_empty() {
                status.to_string()
            } else {
                message
            }
        }
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{status}: {}", body.trim()),
    }
}

/// Direct REST client. Lives on the server, where the credential is.
#[derive(Clone, Debug)]
pub struct VeoClient {
    http: reqwest::Client,
    config: VideoGenConfig,
}

impl VeoClient {
    pub fn new(config: VideoGenConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &VideoGenConfig {
        &self.config
    }

    fn key(&self) -> Result<&ApiKey, VideoGenError> {
        self.config
            .api_key
            .as_ref()
            .ok_or(VideoGenError::MissingCredential)
    }

    async fn read_operation(res: reqwest::Response) -> Result<OperationHandle, VideoGenError> {
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(VideoGenError::ProviderCallFailed(error_message(
                status, &body,
            )));
        }
        let op: Operation = serde_json::from_str(&body).map_err(|e| {
            VideoGenError::ProviderCallFailed(format!("unexpected operation response: {e}"))
        })?;
        Ok(op.into())
    }
}

impl VideoGenProvider for VeoClient {
    async fn start_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<OperationHandle, VideoGenError> {
        let key = self.key()?;
        let url = predict_url(&self.config.api_base, &self.config.model)?;
        log::info!("submitting generation to {}", self.config.model);

        let res = self
            .http
            .post(url)
            .header(API_KEY_HEADER, key.expose())
            .json(&PredictRequest::from(request))
            .send()
            .await?;
        let op = Self::read_operation(res).await?;
        if op.name.is_empty() {
            return Err(VideoGenError::ProviderCallFailed(
                "provider returned no operation name".into(),
            ));
        }
        Ok(op)
    }

    async fn poll_operation(&self, op: &OperationHandle) -> Result<OperationHandle, VideoGenError> {
        let key = self.key()?;
        let url = operation_url(&self.config.api_base, &self.config.model, &op.name)?;

        let res = self
            .http
            .get(url)
            .header(API_KEY_HEADER, key.expose())
            .send()
            .await?;
        let mut polled = Self::read_operation(res).await?;
        if polled.name.is_empty() {
            polled.name = op.name.clone();
        }
        Ok(polled)
    }

    async fn download_video(&self, uri: &str) -> Result<Vec<u8>, VideoGenError> {
        let key = self.key()?;
        let url = authorized_download_url(&self.config.api_base, uri, key)?;

        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(VideoGenError::DownloadFailed {
                status: status.as_u16(),
            });
        }

        if let Some(len) = res.content_length() {
            ensure_download_size(len)?;
        }

        let bytes = res.bytes().await?;
        ensure_download_size(bytes.len() as u64)?;
        log::info!("downloaded video: {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::videogen::UploadedImage;

    #[test]
    fn predict_body_matches_the_wire_shape() {
        let image = UploadedImage {
            name: "hus.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        };
        let req = GenerationRequest::house_party(&image);
        let body = serde_json::to_value(PredictRequest::from(&req)).unwrap();

        assert_eq!(
            body,
            json!({
                "instances": [{
                    "prompt": consts::HOUSE_PARTY_PROMPT,
                    "image": { "bytesBase64Encoded": "AQID", "mimeType": "image/png" }
                }],
                "parameters": { "sampleCount": 1, "resolution": "720p", "aspectRatio": "16:9" }
            })
        );
    }

    #[test]
    fn urls_are_built_under_the_base() {
        let base = Url::parse("https://generativelanguage.googleapis.com/v1beta").unwrap();
        assert_eq!(
            predict_url(&base, "veo-3.1-fast-generate-preview")
                .unwrap()
                .as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/veo-3.1-fast-generate-preview:predictLongRunning"
        );
        assert_eq!(
            operation_url(&base, "veo", "models/veo/operations/abc123")
                .unwrap()
                .as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/veo/operations/abc123"
        );

        let slashed = Url::parse("http://localhost:8080/v1beta/").unwrap();
        assert_eq!(
            operation_url(&slashed, "veo", "models/veo/operations/x")
                .unwrap()
                .as_str(),
            "http://localhost:8080/v1beta/models/veo/operations/x"
        );
    }

    #[test]
    fn only_operations_of_the_configured_model_are_polled() {
        let base = VideoGenConfig::default().api_base;
        for name in [
            "",
            "operations/abc",
            "models/veo/operations/",
            "models/other/operations/abc",
            "models/veo/operations/../../files",
            "models/veo/operations/..",
            "models/veo/operations/abc?alt=media",
            "models/veo",
            "files/abc",
            "/models/veo/operations/abc",
        ] {
            assert!(
                matches!(
                    operation_url(&base, "veo", name),
                    Err(VideoGenError::ProviderCallFailed(_))
                ),
                "{name}"
            );
        }
    }

    #[test]
    fn pending_operation_parses() {
        let op: Operation = serde_json::from_value(json!({ "name": "operations/abc" })).unwrap();
        let handle = OperationHandle::from(op);
        assert_eq!(handle, OperationHandle::pending("operations/abc"));
    }

    #[test]
    fn finished_operation_yields_the_first_sample_uri() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/abc",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.ai.generativelanguage.v1beta.PredictLongRunningResponse",
                "generateVideoResponse": {
                    "generatedSamples": [
                        { "video": { "uri": "https://files.example/v1.mp4" } },
                        { "video": { "uri": "https://files.example/v2.mp4" } }
                    ]
                }
            }
        }))
        .unwrap();
        let handle = OperationHandle::from(op);
        assert!(handle.done);
        assert_eq!(handle.result_uri(), Ok("https://files.example/v1.mp4"));
    }

    #[test]
    fn finished_operation_with_error_surfaces_its_message() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/abc",
            "done": true,
            "error": { "code": 3, "message": "Prompt was blocked", "status": "INVALID_ARGUMENT" }
        }))
        .unwrap();
        let handle = OperationHandle::from(op);
        assert_eq!(
            handle.result_uri(),
            Err(VideoGenError::ProviderCallFailed("Prompt was blocked".into()))
        );
    }

    #[test]
    fn finished_operation_without_samples_is_unknown() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/abc",
            "done": true,
            "response": { "generateVideoResponse": {} }
        }))
        .unwrap();
        assert_eq!(
            OperationHandle::from(op).result_uri(),
            Err(VideoGenError::UnknownResult)
        );
    }

    #[test]
    fn error_bodies_yield_the_provider_message() {
        let body = r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#;
        let message = error_message(StatusCode::NOT_FOUND, body);
        assert_eq!(message, "Requested entity was not found.");
        assert_eq!(
            VideoGenError::ProviderCallFailed(message).user_message(),
            consts::messages::CREDENTIAL_GUIDANCE
        );
    }

    #[test]
    fn non_json_error_bodies_keep_the_status() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "502 Bad Gateway: upstream down"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "500 Internal Server Error"
        );
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, r#"{"error":{"status":"PERMISSION_DENIED"}}"#),
            "PERMISSION_DENIED"
        );
    }

    #[test]
    fn download_url_carries_the_key() {
        let key = ApiKey::new("abc").unwrap();
        let url = authorized_download_url(
            &VideoGenConfig::default().api_base,
            "https://generativelanguage.googleapis.com/v1beta/files/xyz:download?alt=media",
            &key,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/files/xyz:download?alt=media&key=abc"
        );
    }

    #[test]
    fn credential_is_never_sent_to_foreign_hosts() {
        let key = ApiKey::new("abc").unwrap();
        let base = VideoGenConfig::default().api_base;
        for uri in [
            "https://attacker.example/steal",
            "http://generativelanguage.googleapis.com/v1beta/files/x",
            "https://generativelanguage.googleapis.com:8443/v1beta/files/x",
        ] {
            assert!(
                matches!(
                    authorized_download_url(&base, uri, &key),
                    Err(VideoGenError::ProviderCallFailed(_))
                ),
                "{uri}"
            );
        }
    }

    #[test]
    fn credential_is_only_attached_to_generated_files() {
        let key = ApiKey::new("abc").unwrap();
        let base = VideoGenConfig::default().api_base;
        for uri in [
            "https://generativelanguage.googleapis.com/v1beta/models",
            "https://generativelanguage.googleapis.com/v1beta/files",
            "https://generativelanguage.googleapis.com/v1beta/files/xyz",
            "https://generativelanguage.googleapis.com/v1beta/files/a/b:download",
            "https://generativelanguage.googleapis.com/v1beta/files/..:download",
            "https://generativelanguage.googleapis.com/v1/files/xyz:download",
            "https://generativelanguage.googleapis.com/v1beta/files/:download",
        ] {
            assert!(
                matches!(
                    authorized_download_url(&base, uri, &key),
                    Err(VideoGenError::ProviderCallFailed(_))
                ),
                "{uri}"
            );
        }
    }

    #[test]
    fn caller_supplied_keys_are_replaced() {
        let key = ApiKey::new("abc").unwrap();
        let url = authorized_download_url(
            &VideoGenConfig::default().api_base,
            "https://generativelanguage.googleapis.com/v1beta/files/xyz:download?key=other&alt=media#frag",
            &key,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/files/xyz:download?alt=media&key=abc"
        );
    }

    #[test]
    fn oversized_downloads_are_refused_in_danish() {
        assert_eq!(ensure_download_size(MAX_VIDEO_DOWNLOAD_BYTES), Ok(()));
        let err = ensure_download_size(MAX_VIDEO_DOWNLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err.user_message(), messages::VIDEO_TOO_LARGE);
    }

    #[tokio::test]
    async fn transport_errors_never_echo_the_credential() {
        // reqwest refuses the scheme before connecting and reports the full URL
        let client = VeoClient::new(VideoGenConfig {
            api_key: ApiKey::new("SECRETKEY123"),
            api_base: Url::parse("ftp://files.example/v1beta").unwrap(),
            ..VideoGenConfig::default()
        });
        let err = client
            .download_video("ftp://files.example/v1beta/files/x:download?alt=media")
            .await
            .unwrap_err();
        assert!(matches!(err, VideoGenError::ProviderCallFailed(_)));
        assert!(!err.to_string().contains("SECRETKEY123"), "{err}");
        assert!(!err.user_message().contains("SECRETKEY123"));
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_request() {
        let client = VeoClient::new(VideoGenConfig::default());
        let req = GenerationRequest::house_party(&UploadedImage {
            name: "hus.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![1],
        });
        assert_eq!(
            client.start_generation(&req).await,
            Err(VideoGenError::MissingCredential)
        );
        assert_eq!(
            client.download_video("https://files.example/v.mp4").await,
            Err(VideoGenError::MissingCredential)
        );
    }
}
