//! # Service traits
//!
//! Async interfaces for the external collaborators. The list store, author
//! lookup and delete flow are generic over these, so tests inject
//! [`crate::MemoryRecipeService`] and the UI injects the HTTP client from the
//! `api` crate.
//!
//! Futures are not required to be `Send`: everything runs on the single UI
//! thread (or a current-thread runtime in tests).

use std::future::Future;

use crate::error::ServiceError;
use crate::models::{Author, Recipe, RecipeDraft, RecipePage, RecipeQuery};
use crate::session::SessionUser;

/// Recipe listing, lookup and mutation endpoints plus the per-user lookup.
pub trait RecipeService {
    fn list_recipes(
        &self,
        query: &RecipeQuery,
    ) -> impl Future<Output = Result<RecipePage, ServiceError>>;

    fn get_recipe(&self, id: &str) -> impl Future<Output = Result<Recipe, ServiceError>>;

    fn create_recipe(
        &self,
        draft: &RecipeDraft,
    ) -> impl Future<Output = Result<Recipe, ServiceError>>;

    fn update_recipe(
        &self,
        id: &str,
        draft: &RecipeDraft,
    ) -> impl Future<Output = Result<Recipe, ServiceError>>;

    /// Resolves only once the server confirmed the removal.
    fn delete_recipe(&self, id: &str) -> impl Future<Output = Result<(), ServiceError>>;

    fn get_user(&self, id: &str) -> impl Future<Output = Result<Author, ServiceError>>;
}

/// Source of the current session identity.
pub trait SessionProvider {
    /// `Ok(None)` when nobody is signed in.
    fn current_session(&self) -> impl Future<Output = Result<Option<SessionUser>, ServiceError>>;
}
