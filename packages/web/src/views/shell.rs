use dioxus::prelude::*;
use ui::Navigation;

use crate::Route;

/// Layout shared by every page: navigation bar above the routed content.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navigation {
            on_home: move |_| {
                nav.push(Route::Recipes {});
            },
            on_recipes: move |_| {
                nav.push(Route::Recipes {});
            },
            on_search: move |_| {
                nav.push(Route::Search {});
            },
            on_profile: move |_| {
                nav.push(Route::Profile {});
            },
        }
        main {
            class: "app-content",
            Outlet::<Route> {}
        }
    }
}
