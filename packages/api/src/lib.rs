//! # API crate: HTTP access to the RecipeShare backend
//!
//! The backend (recipe listing, per-user lookup, session provider) is an
//! external service. This crate is the client side of it: it implements the
//! `store` crate's [`store::RecipeService`] and [`store::SessionProvider`]
//! traits over HTTP so the UI can drive the list store, author lookup and
//! delete flow against the real endpoints.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpRecipeService`]: request building, status mapping, endpoint paths |
//! | [`wire`] | Explicit response shapes and their validation into domain types |
//!
//! Works natively (tests, tooling) and on `wasm32`, where `reqwest` uses the
//! browser's `fetch`.

pub mod client;
pub mod wire;

pub use client::HttpRecipeService;
pub use store::{
    Author, Recipe, RecipeDraft, RecipeFilters, RecipePage, RecipeQuery, RecipeShareConfig,
    ServiceError, SessionUser,
};
