//! # Wire formats of the recipe API
//!
//! Every endpoint response is decoded into an explicit wire struct and then
//! validated into the domain types from the `store` crate. Anything that does
//! not fit (bad JSON, missing fields, inconsistent pagination) becomes a
//! [`ServiceError::ShapeMismatch`] naming the endpoint.
//!
//! | Endpoint | Body |
//! |----------|------|
//! | `GET /api/recipes` | `{ items, currentPage, totalPages, totalItems? }` |
//! | `GET/POST/PUT /api/recipes/...` | `{ recipe }` |
//! | `GET /api/user/{id}` | `{ user: { _id, name, image } }` |
//! | `GET /api/auth/session` | `{}` or `{ user: { id, name, email, image } }` |
//!
//! The recipe `author` field arrives either populated (`{ "_id": ... }`) or as
//! a bare id string; both are accepted.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use store::{Author, Recipe, RecipePage, ServiceError, SessionUser};

/// Decode `body` as `T`, reporting failures against `endpoint`.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::shape(endpoint, e.to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthorField {
    Populated {
        #[serde(rename = "_id")]
        id: String,
    },
    Id(String),
}

impl AuthorField {
    fn into_id(self) -> String {
        match self {
            AuthorField::Populated { id } | AuthorField::Id(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeWire {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    author: Option<AuthorField>,
    #[serde(default)]
    is_anonymous: bool,
}

impl RecipeWire {
    pub fn validate(self, endpoint: &str) -> Result<Recipe, ServiceError> {
        if self.id.trim().is_empty() {
            return Err(ServiceError::shape(endpoint, "recipe without an id"));
        }
        Ok(Recipe {
            id: self.id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            author_id: self
                .author
                .map(AuthorField::into_id)
                .filter(|id| !id.is_empty()),
            is_anonymous: self.is_anonymous,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListWire {
    items: Vec<RecipeWire>,
    current_page: u32,
    total_pages: u32,
    #[serde(default)]
    total_items: Option<u64>,
}

impl RecipeListWire {
    pub fn validate(self, endpoint: &str) -> Result<RecipePage, ServiceError> {
        if self.total_pages == 0 && !self.items.is_empty() {
            return Err(ServiceError::shape(endpoint, "items present but totalPages is 0"));
        }
        // A page past the end is normal after deleting the last item on the
        // last page; the list store clamps it and reloads.
        let items = self
            .items
            .into_iter()
            .map(|item| item.validate(endpoint))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecipePage {
            items,
            current_page: self.current_page.max(1),
            total_pages: self.total_pages,
            total_items: self.total_items,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RecipeEnvelope {
    recipe: RecipeWire,
}

impl RecipeEnvelope {
    pub fn validate(self, endpoint: &str) -> Result<Recipe, ServiceError> {
        self.recipe.validate(endpoint)
    }
}

#[derive(Debug, Deserialize)]
struct UserWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    user: UserWire,
}

impl UserEnvelope {
    pub fn validate(self, endpoint: &str) -> Result<Author, ServiceError> {
        if self.user.id.is_empty() {
            return Err(ServiceError::shape(endpoint, "user without an id"));
        }
        Ok(Author {
            id: self.user.id,
            name: self.user.name,
            image: self.user.image,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SessionUserWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SessionWire {
    #[serde(default)]
    user: Option<SessionUserWire>,
}

impl SessionWire {
    /// A session user without an id is still signed in, but can never match
    /// a recipe author.
    pub fn into_user(self) -> Option<SessionUser> {
        self.user.map(|user| SessionUser {
            id: user.id.unwrap_or_default(),
            name: user.name,
            email: user.email,
            image: user.image,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Best-effort human message from an error response body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_default()
}
