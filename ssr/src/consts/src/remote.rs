use once_cell::sync::Lazy;
use reqwest::Url;

pub const DEFAULT_VEO_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub static VEO_API_BASE: Lazy<Url> = Lazy::new(|| Url::parse(DEFAULT_VEO_API_BASE).unwrap());

pub const DEFAULT_VEO_MODEL: &str = "veo-3.1-fast-generate-preview";

/// Header carrying the access credential on start/poll calls.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Query parameter carrying the access credential on the asset download.
pub const API_KEY_QUERY_PARAM: &str = "key";

pub mod env {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Older name, still honored when `GEMINI_API_KEY` is unset.
    pub const API_KEY: &str = "API_KEY";
    pub const VEO_API_BASE: &str = "VEO_API_BASE";
    pub const VEO_MODEL: &str = "VEO_MODEL";
}
