use dioxus::prelude::*;
use store::{ListView, RecipeFilters};

use crate::auth::use_session;
use crate::icons::FaPlus;
use crate::pagination::PaginationBar;
use crate::recipe_card::{RecipeCard, RecipeCardSkeleton};
use crate::recipe_filters::RecipeFilterBar;
use crate::state::use_recipe_list;
use crate::Icon;

/// Shared recipe listing view, used by both the Recipes and Search pages.
///
/// The grid shows skeletons while loading, the error message on failure,
/// "No recipes found." for an empty page and the cards otherwise. Pagination
/// is only shown alongside cards.
#[component]
pub fn RecipesView(
    on_open_recipe: EventHandler<String>,
    on_edit_recipe: EventHandler<String>,
    on_create: EventHandler<()>,
    /// Search page layout: heading reflects the query, the search box takes
    /// focus and the create button is hidden.
    #[props(default)]
    search_mode: bool,
) -> Element {
    let list = use_recipe_list();
    let session = use_session();

    // Load the current page on mount
    let loader = list.clone();
    let _loader = use_resource(move || {
        let list = loader.clone();
        async move {
            list.fetch_recipes().await;
        }
    });

    let state = list.state().signal().cloned();
    let view = state.view();
    let filters = state.filters.clone();

    let heading = listing_heading(search_mode, filters.search_term());
    let summary = state
        .pagination
        .total_items
        .filter(|_| view.shows_pagination())
        .map(|total| match total {
            1 => "1 recipe".to_string(),
            n => format!("{n} recipes"),
        });

    let grid = match view {
        ListView::Loading { skeletons } => rsx! {
            for index in 0..skeletons {
                RecipeCardSkeleton { key: "{index}" }
            }
        },
        ListView::Error(message) => rsx! {
            p { class: "recipes-message recipes-message--error", "{message}" }
        },
        ListView::Empty => rsx! {
            p { class: "recipes-message", "No recipes found." }
        },
        ListView::Recipes(recipes) => rsx! {
            for recipe in recipes.iter().cloned() {
                RecipeCard {
                    key: "{recipe.id}",
                    recipe,
                    on_open: on_open_recipe,
                    on_edit: on_edit_recipe,
                }
            }
        },
    };

    let can_create = !search_mode && session.read().user().is_some();
    let filter_list = list.clone();
    let clear_list = list.clone();
    let page_list = list.clone();

    rsx! {
        section {
            class: "recipes-page",
            header {
                class: "recipes-header",
                div {
                    h1 { class: "recipes-heading", "{heading}" }
                    if !search_mode {
                        p {
                            class: "recipes-subtitle",
                            "Discover new, delicious recipes created by chefs and cooking enthusiasts from around the world."
                        }
                    }
                    if let Some(summary) = summary {
                        p { class: "recipes-summary", "{summary}" }
                    }
                }
                if can_create {
                    button {
                        class: "button button--primary",
                        onclick: move |_| on_create.call(()),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Add Recipe" }
                    }
                }
            }
            RecipeFilterBar {
                filters: filters.clone(),
                autofocus: search_mode,
                on_change: move |filters: RecipeFilters| {
                    let list = filter_list.clone();
                    spawn(async move {
                        list.set_filters(filters).await;
                    });
                },
                on_clear: move |_| {
                    let list = clear_list.clone();
                    spawn(async move {
                        list.clear_filters().await;
                    });
                },
            }
            div { class: "recipes-grid", {grid} }
            if view.shows_pagination() {
                PaginationBar {
                    current_page: state.pagination.current_page,
                    total_pages: state.pagination.total_pages,
                    on_select: move |page: u32| {
                        let list = page_list.clone();
                        spawn(async move {
                            list.set_page(page).await;
                        });
                    },
                }
            }
        }
    }
}

fn listing_heading(search_mode: bool, term: Option<&str>) -> String {
    match (search_mode, term) {
        (true, Some(term)) => format!("Results for \"{term}\""),
        (true, None) => "Search Recipes".to_string(),
        (false, _) => "Latest Recipes".to_string(),
    }
}
