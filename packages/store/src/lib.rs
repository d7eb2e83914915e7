pub mod author;
pub mod cell;
pub mod config;
pub mod delete;
pub mod error;
pub mod list;
pub mod models;
pub mod pagination;
pub mod service;
pub mod session;

mod memory;
pub use memory::MemoryRecipeService;

pub use author::{author_badge, load_author, AuthorBadge, AuthorSlot};
pub use cell::StateCell;
pub use config::RecipeShareConfig;
pub use delete::{confirm_delete, DeleteDialog, DeleteOutcome, DeletePhase};
pub use error::{DraftError, ServiceError};
pub use list::{FetchOutcome, ListView, RecipeListState, RecipeListStore};
pub use models::{Author, Recipe, RecipeDraft, RecipeFilters, RecipePage, RecipeQuery, RecipeSort};
pub use pagination::{pagination_window, PageItem, PaginationControls};
pub use service::{RecipeService, SessionProvider};
pub use session::{is_author, SessionState, SessionUser};
