//! This crate contains all shared UI for the RecipeShare app.
//!
//! Components read and drive state from the `store` crate through the
//! contexts set up by [`ServicesProvider`], [`AuthProvider`] and
//! [`ToastProvider`]; platform packages only add routing around the views.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const RECIPES_CSS: Asset = asset!("/assets/recipes.css");

mod platform;
pub use platform::navigate_external;

mod state;
pub use state::{use_recipe_list, use_services, AppServices, RecipeList, ServicesProvider, SignalCell};

mod auth;
pub use auth::{use_session, AuthProvider, SignInButton, SignOutButton};

pub mod toast;
pub use toast::{show_toast, use_toasts, ToastLevel, ToastProvider, Toasts};

pub mod theme;
pub use theme::{apply_theme, use_theme, Theme, ThemeProvider, ThemeSignal, ThemeToggle};

mod navigation;
pub use navigation::Navigation;

mod pagination;
pub use pagination::PaginationBar;

mod recipe_filters;
pub use recipe_filters::RecipeFilterBar;

mod delete_dialog;
pub use delete_dialog::DeleteRecipeDialog;

mod recipe_card;
pub use recipe_card::{RecipeCard, RecipeCardSkeleton};
