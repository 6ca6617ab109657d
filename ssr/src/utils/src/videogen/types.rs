use base64::{engine::general_purpose::STANDARD, Engine};
use consts::{
    ACCEPTED_IMAGE_MIME_PREFIX, GENERATED_VIDEO_FILE_PREFIX, GENERATED_VIDEO_MIME, HOUSE_PARTY_PROMPT, VIDEO_ASPECT_RATIO,
    VIDEO_RESOLUTION, VIDEO_SAMPLE_COUNT,
};
use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

use super::VideoGenError;

/// What the file picker hands over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A validated image selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn payload(&self) -> ImagePayload {
        ImagePayload {
            mime_type: self.mime_type.clone(),
            bytes_base64: STANDARD.encode(&self.bytes),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub bytes_base64: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub sample_count: u32,
    pub resolution: String,
    pub aspect_ratio: String,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            sample_count: VIDEO_SAMPLE_COUNT,
            resolution: VIDEO_RESOLUTION.to_string(),
            aspect_ratio: VIDEO_ASPECT_RATIO.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub image: ImagePayload,
    pub prompt: String,
    pub parameters: GenerationParameters,
}

impl GenerationRequest {
    /// The fixed "holiday resort on top of this house" request for `image`.
    pub fn house_party(image: &UploadedImage) -> Self {
        Self::fixed(image.payload())
    }

    /// Builds the request around an image received from a browser.
    ///
    /// Only the image comes from the caller; prompt and parameters are fixed.
    pub fn from_payload(image: ImagePayload) -> Result<Self, VideoGenError> {
        if !image.mime_type.starts_with(ACCEPTED_IMAGE_MIME_PREFIX) {
            return Err(VideoGenError::InvalidFileType {
                mime_type: image.mime_type,
            });
        }
        if image.bytes_base64.trim().is_empty() {
            return Err(VideoGenError::NoImageSelected);
        }
        Ok(Self::fixed(image))
    }

    fn fixed(image: ImagePayload) -> Self {
        Self {
            image,
            prompt: HOUSE_PARTY_PROMPT.to_string(),
            parameters: GenerationParameters::default(),
        }
    }
}

/// Provider-side handle of a running job, re-queried until `done`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationHandle {
    pub name: String,
    pub done: bool,
    pub video_uri: Option<String>,
    pub error: Option<String>,
}

impl OperationHandle {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Where to fetch the video from once the operation is done.
    pub fn result_uri(&self) -> Result<&str, VideoGenError> {
        match self.video_uri.as_deref().map(str::trim) {
            Some(uri) if !uri.is_empty() => Ok(uri),
            _ => match &self.error {
                Some(message) => Err(VideoGenError::ProviderCallFailed(message.clone())),
                None => Err(VideoGenError::UnknownResult),
            },
        }
    }
}

/// Video bytes as they cross the server function boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPayload {
    pub mime_type: String,
    pub bytes_base64: String,
}

impl VideoPayload {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mime_type: GENERATED_VIDEO_MIME.to_string(),
            bytes_base64: STANDARD.encode(bytes),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, VideoGenError> {
        STANDARD
            .decode(self.bytes_base64)
            .map_err(|e| VideoGenError::ProviderCallFailed(format!("invalid video payload: {e}")))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedVideo {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl GeneratedVideo {
    pub fn new(bytes: Vec<u8>) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self {
            file_name: suggested_file_name(millis),
            mime_type: GENERATED_VIDEO_MIME.to_string(),
            bytes,
        }
    }
}

pub fn suggested_file_name(unix_millis: u128) -> String {
    format!("{GENERATED_VIDEO_FILE_PREFIX}-{unix_millis}.mp4")
}
