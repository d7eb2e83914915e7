use dioxus::prelude::*;
use ui::views::RecipeDetailView;

use crate::Route;

#[component]
pub fn RecipeDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeDetailView {
            recipe_id: id,
            on_back: move |_| {
                nav.push(Route::Recipes {});
            },
            on_edit: move |id: String| {
                nav.push(Route::RecipeEdit { id });
            },
            on_deleted: move |_| {
                nav.replace(Route::Recipes {});
            },
        }
    }
}
