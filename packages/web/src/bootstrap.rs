//! Startup wiring: embedded configuration and the API client built from it.

use api::HttpRecipeService;
use store::{RecipeShareConfig, ServiceError};
use ui::AppServices;

const EMBEDDED_CONFIG: &str = include_str!("../recipeshare.toml");

/// Origin used outside the browser (`dx serve` default).
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Parse `raw`, falling back to defaults when it is malformed.
pub fn load_config(raw: &str) -> RecipeShareConfig {
    match RecipeShareConfig::from_toml(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {e}",
                RecipeShareConfig::filename()
            );
            RecipeShareConfig::default()
        }
    }
}

/// Origin of the page the app is served from.
pub fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    FALLBACK_ORIGIN.to_string()
}

pub fn build_services(config: RecipeShareConfig, origin: &str) -> Result<AppServices, ServiceError> {
    let api = HttpRecipeService::from_config(&config, origin)?;
    tracing::info!("Using recipe API at {}", api.base_url());
    Ok(AppServices { api, config })
}

/// Services for this build's embedded configuration.
pub fn app_services() -> Result<AppServices, ServiceError> {
    build_services(load_config(EMBEDDED_CONFIG), &page_origin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = RecipeShareConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.listing.page_size, 12);
        assert_eq!(config.listing.skeleton_count, 12);
        assert_eq!(config.images.anonymous_avatar, "/anonymous-user.jpg");
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        assert_eq!(load_config("[listing\npage_size = "), RecipeShareConfig::default());
    }

    #[test]
    fn test_services_use_page_origin_without_base_url() {
        let services = build_services(RecipeShareConfig::default(), "https://recipes.example.com").unwrap();
        assert_eq!(services.api.base_url().as_str(), "https://recipes.example.com/");

        let err = build_services(RecipeShareConfig::default(), "not a url").unwrap_err();
        assert!(matches!(err, ServiceError::Network(_)));
    }
}
