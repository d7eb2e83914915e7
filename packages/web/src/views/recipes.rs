use dioxus::prelude::*;
use ui::views::RecipesView;

use crate::Route;

#[component]
pub fn Recipes() -> Element {
    let nav = use_navigator();

    rsx! {
        RecipesView {
            on_open_recipe: move |id: String| {
                nav.push(Route::RecipeDetail { id });
            },
            on_edit_recipe: move |id: String| {
                nav.push(Route::RecipeEdit { id });
            },
            on_create: move |_| {
                nav.push(Route::RecipeCreate {});
            },
        }
    }
}

#[component]
pub fn Search() -> Element {
    let nav = use_navigator();

    rsx! {
        RecipesView {
            search_mode: true,
            on_open_recipe: move |id: String| {
                nav.push(Route::RecipeDetail { id });
            },
            on_edit_recipe: move |id: String| {
                nav.push(Route::RecipeEdit { id });
            },
            on_create: move |_| {
                nav.push(Route::RecipeCreate {});
            },
        }
    }
}
