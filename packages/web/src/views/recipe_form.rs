use dioxus::prelude::*;
use ui::views::RecipeFormView;

use crate::Route;

#[component]
pub fn RecipeCreate() -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeFormView {
            on_saved: move |id: String| {
                nav.replace(Route::RecipeDetail { id });
            },
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}

#[component]
pub fn RecipeEdit(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeFormView {
            // Remount when navigating between two edit pages
            key: "{id}",
            recipe_id: id.clone(),
            on_saved: move |id: String| {
                nav.replace(Route::RecipeDetail { id });
            },
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}
