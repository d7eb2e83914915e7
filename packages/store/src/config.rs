//! # Client configuration (`recipeshare.toml`)
//!
//! The web client embeds this file at build time (filename:
//! [`RecipeShareConfig::filename`] = `"recipeshare.toml"`). It tells the client
//! where the API lives, how large listing pages are, and which fallback images
//! to show.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                  # empty = same origin as the page
//!
//! [listing]
//! page_size = 12
//! skeleton_count = 12
//!
//! [images]
//! recipe_placeholder = "/recipe-placeholder.jpg"
//! anonymous_avatar = "/anonymous-user.jpg"
//! ```
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to [`RecipeShareConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `recipeshare.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeShareConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the recipe API. Empty means the page's own origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Placeholder cards rendered while a page is loading.
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
}

fn default_page_size() -> u32 {
    12
}

fn default_skeleton_count() -> usize {
    12
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            skeleton_count: default_skeleton_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_recipe_placeholder")]
    pub recipe_placeholder: String,
    #[serde(default = "default_anonymous_avatar")]
    pub anonymous_avatar: String,
}

fn default_recipe_placeholder() -> String {
    "/recipe-placeholder.jpg".to_string()
}

fn default_anonymous_avatar() -> String {
    "/anonymous-user.jpg".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            recipe_placeholder: default_recipe_placeholder(),
            anonymous_avatar: default_anonymous_avatar(),
        }
    }
}

impl RecipeShareConfig {
    /// Builder method to point the client at another API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the listing page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.listing.page_size = page_size.max(1);
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "recipeshare.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.listing.page_size = config.listing.page_size.max(1);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
