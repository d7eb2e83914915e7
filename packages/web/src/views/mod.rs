mod shell;
pub use shell::Shell;

mod recipes;
pub use recipes::{Recipes, Search};

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod recipe_form;
pub use recipe_form::{RecipeCreate, RecipeEdit};

mod profile;
pub use profile::Profile;
