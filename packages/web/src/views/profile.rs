use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_my_recipes: move |_| {
                nav.push(Route::Recipes {});
            },
        }
    }
}
