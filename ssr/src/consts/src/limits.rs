use web_time::Duration;

/// Cadence of provider re-queries while an operation is running.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Cadence of the decorative loading message rotation.
pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_secs(3);

// 100MB
pub const MAX_VIDEO_DOWNLOAD_BYTES: u64 = 100_000_000;

/// Largest accepted house photo. Base64 of this still fits the request body limit.
pub const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Upper bound for server function request bodies (base64 image + JSON framing).
pub const MAX_REQUEST_BODY_BYTES: usize = 32 * 1024 * 1024;
