use std::fmt;

use consts::{env, DEFAULT_VEO_MODEL, VEO_API_BASE};
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Access credential for the generative video API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for blank input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Process-wide settings of the Veo client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoGenConfig {
    pub api_key: Option<ApiKey>,
    pub api_base: Url,
    pub model: String,
}

impl Default for VideoGenConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: VEO_API_BASE.clone(),
            model: DEFAULT_VEO_MODEL.to_string(),
        }
    }
}

impl VideoGenConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source.
    ///
    /// `GEMINI_API_KEY` wins over `API_KEY`; a missing key is not an error
    /// here and only surfaces when a call is made.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(env::GEMINI_API_KEY)
            .and_then(ApiKey::new)
            .or_else(|| lookup(env::API_KEY).and_then(ApiKey::new));

        let api_base = match lookup(env::VEO_API_BASE) {
            Some(raw) if !raw.trim().is_empty() => {
                Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
                    var: env::VEO_API_BASE,
                    reason: e.to_string(),
                })?
            }
            _ => VEO_API_BASE.clone(),
        };

        let model = match lookup(env::VEO_MODEL) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: env::VEO_MODEL,
                })
            }
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_VEO_MODEL.to_string(),
        };

        Ok(Self {
            api_key,
            api_base,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<_, _> = vars.iter().copied().collect();
        move |k: &str| map.get(k).map(|v| v.to_string())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = VideoGenConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, VideoGenConfig::default());
        assert_eq!(
            cfg.api_base.as_str(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(cfg.model, "veo-3.1-fast-generate-preview");
    }

    #[test]
    fn gemini_key_is_preferred() {
        let cfg = VideoGenConfig::from_lookup(lookup(&[
            ("API_KEY", "legacy"),
            ("GEMINI_API_KEY", "primary"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_key.unwrap().expose(), "primary");
    }

    #[test]
    fn blank_gemini_key_falls_back_to_api_key() {
        let cfg =
            VideoGenConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  "), ("API_KEY", "legacy")]))
                .unwrap();
        assert_eq!(cfg.api_key.unwrap().expose(), "legacy");
    }

    #[test]
    fn blank_keys_count_as_absent() {
        let cfg = VideoGenConfig::from_lookup(lookup(&[("GEMINI_API_KEY", ""), ("API_KEY", " ")]))
            .unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn overrides_are_honored() {
        let cfg = VideoGenConfig::from_lookup(lookup(&[
            ("VEO_API_BASE", "http://localhost:9000/v1"),
            ("VEO_MODEL", "veo-3.0-generate-001"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_base.as_str(), "http://localhost:9000/v1");
        assert_eq!(cfg.model, "veo-3.0-generate-001");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let err = VideoGenConfig::from_lookup(lookup(&[("VEO_API_BASE", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn empty_model_is_rejected() {
        let err = VideoGenConfig::from_lookup(lookup(&[("VEO_MODEL", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
    }
}
