use serde::{Deserialize, Serialize};
use tracing_log::{log_tracer::SetLoggerError, LogTracer};
use tracing_subscriber::{
    filter::ParseError, fmt, layer::SubscriberExt, EnvFilter, Registry,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Logging level in the env logger format. `RUST_LOG` wins when set.
    pub level: String,
    pub service_name: String,
    pub ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: default_level(),
            service_name: default_service_name(),
            ansi: true,
        }
    }
}

fn default_service_name() -> String {
    "feriecenter_ssr".to_string()
}

fn default_level() -> String {
    "info,feriecenter_web_leptos_ssr=debug,page=debug,utils=debug,tower_http=info".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Invalid log directive: {0}")]
    InvalidLogDirective(#[from] ParseError),
    #[error("Subscriber error: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("Log bridge error: {0}")]
    LogBridge(#[from] SetLoggerError),
}

fn env_filter(config: &Config, rust_log: Option<String>) -> Result<EnvFilter, ParseError> {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(&config.level),
    }
}

/// Installs the stdout subscriber and routes `log` records into it.
///
/// # Errors
/// If the level directives are invalid or a global logger is already set.
pub fn init_telemetry(config: &Config) -> Result<(), TelemetryError> {
    let filter = env_filter(config, std::env::var("RUST_LOG").ok())?;
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_ansi(config.ansi).with_target(true));

    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;
    tracing::info!(service = %config.service_name, "telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.level, default_level());
        assert_eq!(config.service_name, "feriecenter_ssr");
        assert!(config.ansi);
    }

    #[test]
    fn config_keys_are_kebab_case() {
        let config: Config =
            serde_json::from_str(r#"{"service-name":"x","level":"warn","ansi":false}"#).unwrap();
        assert_eq!(config.service_name, "x");
        assert!(!config.ansi);
        assert!(serde_json::from_str::<Config>(r#"{"service_name":"x"}"#).is_err());
    }

    #[test]
    fn default_directives_parse() {
        assert!(env_filter(&Config::default(), None).is_ok());
    }

    #[test]
    fn rust_log_overrides_the_config_level() {
        use tracing_subscriber::filter::LevelFilter;

        let config = Config {
            level: "warn".into(),
            ..Default::default()
        };
        let filter = env_filter(&config, Some("debug".into())).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = env_filter(&config, Some("  ".into())).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
