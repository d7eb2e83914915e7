mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod recipes;
pub use recipes::RecipesView;

mod recipe_detail;
pub use recipe_detail::RecipeDetailView;

mod recipe_form;
pub use recipe_form::RecipeFormView;

mod profile;
pub use profile::ProfileView;
