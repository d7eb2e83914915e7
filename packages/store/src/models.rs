//! # Domain models for recipes and listings
//!
//! Defines the data structures exchanged between the [`crate::RecipeService`]
//! implementations and the list/card logic. These types are
//! `Serialize + Deserialize` so they can be cached, logged, or handed to the UI
//! as component props without conversion.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Recipe`] | A single recipe summary: id, title, description, image URLs, an optional author reference and the anonymity flag. |
//! | [`Author`] | The denormalised author record looked up per card. Never embedded in a [`Recipe`]. |
//! | [`RecipeFilters`] | Search text and sort order chosen in the filter bar. |
//! | [`RecipeQuery`] | The parameters of one listing request (page, limit, filters). |
//! | [`RecipePage`] | One page of results plus pagination metadata. |
//! | [`RecipeDraft`] | The editable fields submitted on create/edit, with local validation. |

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Maximum number of images a draft may carry.
pub const MAX_DRAFT_IMAGES: usize = 10;

/// A recipe summary as listed by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image URLs in display order; the first one is the cover.
    pub images: Vec<String>,
    /// Id of the authoring user, absent for recipes created without an account.
    pub author_id: Option<String>,
    pub is_anonymous: bool,
}

impl Recipe {
    /// The cover image, or `placeholder` when the recipe has none.
    pub fn cover_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }

    /// Author id worth resolving for display. Anonymous recipes never resolve.
    pub fn resolvable_author_id(&self) -> Option<&str> {
        if self.is_anonymous {
            return None;
        }
        self.author_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Public profile of a recipe author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Sort order for the recipe listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl RecipeSort {
    pub const ALL: [RecipeSort; 3] = [RecipeSort::Newest, RecipeSort::Oldest, RecipeSort::Title];

    /// Query-string value understood by the listing endpoint.
    pub fn as_param(&self) -> &'static str {
        match self {
            RecipeSort::Newest => "newest",
            RecipeSort::Oldest => "oldest",
            RecipeSort::Title => "title",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "oldest" => RecipeSort::Oldest,
            "title" => RecipeSort::Title,
            _ => RecipeSort::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipeSort::Newest => "Newest first",
            RecipeSort::Oldest => "Oldest first",
            RecipeSort::Title => "Title (A-Z)",
        }
    }
}

/// Filters applied to the recipe listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFilters {
    pub search: String,
    pub sort: RecipeSort,
}

impl RecipeFilters {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: RecipeSort) -> Self {
        self.sort = sort;
        self
    }

    /// Trimmed search text, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn is_default(&self) -> bool {
        self.search_term().is_none() && self.sort == RecipeSort::default()
    }
}

/// Parameters for a single listing request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeQuery {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub sort: RecipeSort,
}

impl RecipeQuery {
    pub fn new(page: u32, limit: u32, filters: &RecipeFilters) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: filters.search_term().map(str::to_string),
            sort: filters.sort,
        }
    }
}

/// One page of listing results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipePage {
    pub items: Vec<Recipe>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: Option<u64>,
}

impl RecipePage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_items: Some(0),
        }
    }
}

/// Fields submitted when creating or editing a recipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub is_anonymous: bool,
}

impl RecipeDraft {
    /// Start an edit from an existing recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            images: recipe.images.clone(),
            is_anonymous: recipe.is_anonymous,
        }
    }

    /// Trim fields, drop blank image entries and check required fields.
    pub fn validated(&self) -> Result<RecipeDraft, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let images: Vec<String> = self
            .images
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
        if images.len() > MAX_DRAFT_IMAGES {
            return Err(DraftError::TooManyImages {
                count: images.len(),
                max: MAX_DRAFT_IMAGES,
            });
        }
        Ok(RecipeDraft {
            title: title.to_string(),
            description: description.to_string(),
            images,
            is_anonymous: self.is_anonymous,
        })
    }
}
