//! Recipe card for the listing grid, and its loading skeleton.
//!
//! Each card resolves its own author through [`load_author`]. The lookup
//! re-runs when the card is handed a recipe with a different author, and a
//! late answer for the previous author is dropped by the [`AuthorSlot`].
//! Edit and delete are only offered to the recipe's author.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use store::{author_badge, is_author, load_author, AuthorSlot, DeleteDialog, Recipe};

use crate::auth::use_session;
use crate::delete_dialog::DeleteRecipeDialog;
use crate::icons::{FaPenToSquare, FaTrash};
use crate::state::{use_recipe_list, use_services, SignalCell};
use crate::Icon;

#[component]
pub fn RecipeCard(
    recipe: Recipe,
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
) -> Element {
    let services = use_services();
    let list = use_recipe_list();
    let session = use_session();
    let author_slot = use_signal(AuthorSlot::default);
    let mut dialog = use_signal(DeleteDialog::default);

    // Track the recipe prop in a signal so the author lookup re-runs on change
    let mut current = use_signal(|| recipe.clone());
    if *current.peek() != recipe {
        current.set(recipe.clone());
    }

    let api = services.api.clone();
    let _author = use_resource(move || {
        let recipe = current();
        let api = api.clone();
        async move { load_author(&api, &SignalCell(author_slot), &recipe).await }
    });

    let session_state = session();
    let user = session_state.user();
    let badge = author_badge(
        &recipe,
        author_slot.read().author.as_ref(),
        user,
        &services.config.images,
    );
    let owner = is_author(user, &recipe);
    let cover = recipe.cover_image(&services.config.images.recipe_placeholder).to_string();

    let open_id = recipe.id.clone();
    let edit_id = recipe.id.clone();

    rsx! {
        article {
            class: "recipe-card",
            onclick: move |_| on_open.call(open_id.clone()),
            div {
                class: "recipe-card-media",
                img { src: "{cover}", alt: "{recipe.title}", loading: "lazy" }
            }
            div {
                class: "recipe-card-body",
                h3 { class: "recipe-card-title", "{recipe.title}" }
                p { class: "recipe-card-description", "{recipe.description}" }
            }
            footer {
                class: "recipe-card-footer",
                div {
                    class: "recipe-card-author",
                    img { class: "avatar", src: "{badge.image}", alt: "{badge.label}" }
                    span { "{badge.label}" }
                }
                if owner {
                    div {
                        class: "recipe-card-actions",
                        button {
                            class: "icon-button",
                            title: "Edit recipe",
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                on_edit.call(edit_id.clone());
                            },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        }
                        button {
                            class: "icon-button icon-button--danger",
                            title: "Delete recipe",
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                dialog.write().open();
                            },
                            Icon { icon: FaTrash, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
        DeleteRecipeDialog {
            recipe_id: recipe.id.clone(),
            recipe_title: recipe.title.clone(),
            dialog,
            on_deleted: move |_| {
                let list = list.clone();
                // The grid drops every card while reloading, so this cannot
                // be tied to the card's scope.
                spawn_forever(async move {
                    list.fetch_recipes().await;
                });
            },
        }
    }
}

/// Placeholder card shown while a page is loading.
#[component]
pub fn RecipeCardSkeleton() -> Element {
    rsx! {
        div {
            class: "recipe-card recipe-card--skeleton",
            "aria-hidden": "true",
            div { class: "recipe-card-media skeleton" }
            div {
                class: "recipe-card-body",
                div { class: "skeleton skeleton-line skeleton-line--title" }
                div { class: "skeleton skeleton-line" }
                div { class: "skeleton skeleton-line skeleton-line--short" }
            }
            footer {
                class: "recipe-card-footer",
                div { class: "skeleton skeleton-avatar" }
                div { class: "skeleton skeleton-line skeleton-line--short" }
            }
        }
    }
}
