use consts::{messages, ENTITY_NOT_FOUND_MARKER};
use leptos::server_fn::{
    codec::JsonEncoding,
    error::{FromServerFnError, ServerFnErrorErr},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong between picking a photo and holding a video.
///
/// Serializable so it can travel as the typed error of the page's server
/// functions.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum VideoGenError {
    #[error("unsupported file type: {mime_type:?}")]
    InvalidFileType { mime_type: String },
    #[error("image is {bytes} bytes, above the upload limit")]
    ImageTooLarge { bytes: usize },
    #[error("no image selected")]
    NoImageSelected,
    #[error("a generation is already in progress")]
    AlreadyInProgress,
    #[error("provider call failed: {0}")]
    ProviderCallFailed(String),
    #[error("video download failed with status {status}")]
    DownloadFailed { status: u16 },
    #[error("operation completed without a video uri")]
    UnknownResult,
    #[error("no access credential configured")]
    MissingCredential,
    #[error("preview unavailable: {0}")]
    PreviewUnavailable(String),
}

impl VideoGenError {
    /// The text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidFileType { .. } => messages::INVALID_FILE_TYPE.to_string(),
            Self::ImageTooLarge { .. } => messages::IMAGE_TOO_LARGE.to_string(),
            Self::NoImageSelected => messages::NO_IMAGE_SELECTED.to_string(),
            Self::AlreadyInProgress => messages::ALREADY_IN_PROGRESS.to_string(),
            Self::ProviderCallFailed(message) => provider_message(message),
            Self::DownloadFailed { status } => {
                format!("{}: {}", messages::DOWNLOAD_FAILED, status_text(*status))
            }
            Self::UnknownResult => messages::UNKNOWN_RESULT.to_string(),
            Self::MissingCredential => messages::MISSING_CREDENTIAL.to_string(),
            Self::PreviewUnavailable(reason) => {
                format!("{}: {reason}", messages::PREVIEW_UNAVAILABLE)
            }
        }
    }
}

fn provider_message(message: &str) -> String {
    if message.contains(ENTITY_NOT_FOUND_MARKER) {
        return messages::CREDENTIAL_GUIDANCE.to_string();
    }
    if message.trim().is_empty() {
        return messages::GENERIC_FAILURE.to_string();
    }
    message.to_string()
}

fn status_text(status: u16) -> String {
    match http::StatusCode::from_u16(status) {
        Ok(code) => code.to_string(),
        Err(_) => status.to_string(),
    }
}

// Download URLs carry the credential, so reqwest's URL is never kept.
impl From<reqwest::Error> for VideoGenError {
    fn from(e: reqwest::Error) -> Self {
        Self::ProviderCallFailed(e.without_url().to_string())
    }
}

impl FromServerFnError for VideoGenError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        Self::ProviderCallFailed(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_is_rewritten_to_credential_guidance() {
        let err = VideoGenError::ProviderCallFailed(
            "{\"error\":{\"code\":404,\"message\":\"Requested entity was not found.\"}}".into(),
        );
        assert_eq!(err.user_message(), messages::CREDENTIAL_GUIDANCE);
    }

    #[test]
    fn other_provider_messages_pass_through_verbatim() {
        let err = VideoGenError::ProviderCallFailed("Quota exceeded for model".into());
        assert_eq!(err.user_message(), "Quota exceeded for model");
    }

    #[test]
    fn empty_provider_message_falls_back_to_generic_text() {
        let err = VideoGenError::ProviderCallFailed("  ".into());
        assert_eq!(err.user_message(), messages::GENERIC_FAILURE);
    }

    #[test]
    fn download_failure_embeds_the_status() {
        let err = VideoGenError::DownloadFailed { status: 403 };
        let message = err.user_message();
        assert!(message.starts_with(messages::DOWNLOAD_FAILED));
        assert!(message.contains("403 Forbidden"), "{message}");
    }

    #[test]
    fn unknown_status_codes_still_render() {
        let err = VideoGenError::DownloadFailed { status: 1000 };
        assert!(err.user_message().contains("1000"));
    }

    #[test]
    fn unknown_result_uses_the_fixed_message() {
        assert_eq!(
            VideoGenError::UnknownResult.user_message(),
            messages::UNKNOWN_RESULT
        );
    }
}
