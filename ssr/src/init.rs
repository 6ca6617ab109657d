use leptos::prelude::LeptosOptions;
use leptos_axum::AxumRouteListing;
use state::server::AppState;
use utils::videogen::{ConfigError, VeoClient, VideoGenConfig};

pub struct AppStateBuilder {
    leptos_options: LeptosOptions,
    routes: Vec<AxumRouteListing>,
}

impl AppStateBuilder {
    pub fn new(leptos_options: LeptosOptions, routes: Vec<AxumRouteListing>) -> Self {
        Self {
            leptos_options,
            routes,
        }
    }

    pub fn build(self) -> Result<AppState, ConfigError> {
        let veo = VeoClient::new(VideoGenConfig::from_env()?);
        let config = veo.config();
        if config.api_key.is_none() {
            log::warn!("neither GEMINI_API_KEY nor API_KEY is set, generation requests will fail");
        }
        log::info!(
            "video generation via {} at {}",
            config.model,
            config.api_base
        );

        Ok(AppState {
            leptos_options: self.leptos_options,
            routes: self.routes,
            veo,
        })
    }
}
