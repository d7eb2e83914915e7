use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use store::{
    author_badge, is_author, load_author, AuthorSlot, DeleteDialog, Recipe, RecipeService,
    ServiceError,
};

use crate::auth::use_session;
use crate::delete_dialog::DeleteRecipeDialog;
use crate::icons::{FaArrowLeft, FaPenToSquare, FaTrash};
use crate::state::{use_recipe_list, use_services, SignalCell};
use crate::Icon;

/// Full view of one recipe with its image gallery.
#[component]
pub fn RecipeDetailView(
    recipe_id: String,
    on_back: EventHandler<()>,
    on_edit: EventHandler<String>,
    on_deleted: EventHandler<()>,
) -> Element {
    let services = use_services();
    let list = use_recipe_list();
    let session = use_session();
    let author_slot = use_signal(AuthorSlot::default);
    let mut dialog = use_signal(DeleteDialog::default);

    // Track recipe_id in a signal so the resource re-runs when the prop changes
    let mut id_signal = use_signal(|| recipe_id.clone());
    if *id_signal.peek() != recipe_id {
        id_signal.set(recipe_id.clone());
    }

    let api = services.api.clone();
    let recipe = use_resource(move || {
        let id = id_signal();
        let api = api.clone();
        async move {
            let recipe = api.get_recipe(&id).await?;
            load_author(&api, &SignalCell(author_slot), &recipe).await;
            Ok::<Recipe, ServiceError>(recipe)
        }
    });

    let loaded = recipe.read().clone();
    let recipe = match loaded {
        None => {
            return rsx! {
                section { class: "recipe-detail", p { class: "recipes-message", "Loading recipe..." } }
            }
        }
        Some(Err(ServiceError::NotFound(_))) => {
            return rsx! {
                section {
                    class: "recipe-detail",
                    p { class: "recipes-message", "Recipe not found." }
                    button { class: "button", onclick: move |_| on_back.call(()), "Back to recipes" }
                }
            }
        }
        Some(Err(err)) => {
            tracing::error!("Failed to load recipe {recipe_id}: {err}");
            let message = err.user_message();
            return rsx! {
                section {
                    class: "recipe-detail",
                    p { class: "recipes-message recipes-message--error", "{message}" }
                    button { class: "button", onclick: move |_| on_back.call(()), "Back to recipes" }
                }
            };
        }
        Some(Ok(recipe)) => recipe,
    };

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
    let gallery: Vec<String> = recipe.images.iter().skip(1).cloned().collect();
    let edit_id = recipe.id.clone();

    rsx! {
        article {
            class: "recipe-detail",
            button {
                class: "button button--ghost",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                span { "Back" }
            }
            img { class: "recipe-detail-cover", src: "{cover}", alt: "{recipe.title}" }
            header {
                class: "recipe-detail-header",
                h1 { "{recipe.title}" }
                if owner {
                    div {
                        class: "recipe-card-actions",
                        button {
                            class: "button",
                            onclick: move |_| on_edit.call(edit_id.clone()),
                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                            span { "Edit" }
                        }
                        button {
                            class: "button button--danger",
                            onclick: move |_| dialog.write().open(),
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            span { "Delete" }
                        }
                    }
                }
            }
            div {
                class: "recipe-card-author",
                img { class: "avatar", src: "{badge.image}", alt: "{badge.label}" }
                span { "{badge.label}" }
            }
            p { class: "recipe-detail-description", "{recipe.description}" }
            if !gallery.is_empty() {
                div {
                    class: "recipe-detail-gallery",
                    for (index, url) in gallery.into_iter().enumerate() {
                        img { key: "{index}", src: "{url}", alt: "{recipe.title}", loading: "lazy" }
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
                spawn_forever(async move {
                    list.fetch_recipes().await;
                });
                on_deleted.call(());
            },
        }
    }
}
