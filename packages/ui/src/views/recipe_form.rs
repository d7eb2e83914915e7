use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use store::models::MAX_DRAFT_IMAGES;
use store::{is_author, Recipe, RecipeDraft, RecipeService, SessionState};

use crate::auth::{use_session, SignInButton};
use crate::state::{use_recipe_list, use_services};
use crate::toast::{show_toast, use_toasts, ToastLevel};

/// Create a recipe, or edit the one named by `recipe_id`.
///
/// Images are entered one URL per line; the first one becomes the cover.
#[component]
pub fn RecipeFormView(
    recipe_id: Option<String>,
    on_saved: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let services = use_services();
    let list = use_recipe_list();
    let session = use_session();
    let mut toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut images = use_signal(String::new);
    let mut anonymous = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut original = use_signal(|| Option::<Recipe>::None);
    let mut loading = use_signal(|| recipe_id.is_some());

    // Prefill from the stored recipe when editing
    let edit_id = recipe_id.clone();
    let api = services.api.clone();
    let _loader = use_resource(move || {
        let edit_id = edit_id.clone();
        let api = api.clone();
        async move {
            let Some(id) = edit_id else {
                return;
            };
            match api.get_recipe(&id).await {
                Ok(recipe) => {
                    let draft = RecipeDraft::from_recipe(&recipe);
                    title.set(draft.title);
                    description.set(draft.description);
                    images.set(draft.images.join("\n"));
                    anonymous.set(draft.is_anonymous);
                    original.set(Some(recipe));
                }
                Err(e) => {
                    tracing::error!("Failed to load recipe {id} for editing: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        }
    });

    let session_state = session();
    match &session_state {
        SessionState::Loading => {
            return rsx! { section { class: "recipe-form", p { class: "recipes-message", "Loading..." } } };
        }
        SessionState::Unauthenticated => {
            return rsx! {
                section {
                    class: "recipe-form",
                    p { class: "recipes-message", "Sign in to share your recipes." }
                    SignInButton { class: "button button--primary" }
                }
            };
        }
        SessionState::Authenticated(_) => {}
    }

    let not_owner = original
        .read()
        .as_ref()
        .is_some_and(|recipe| !is_author(session_state.user(), recipe));
    if not_owner {
        return rsx! {
            section {
                class: "recipe-form",
                p { class: "recipes-message", "You can only edit your own recipes." }
                button { class: "button", onclick: move |_| on_cancel.call(()), "Back" }
            }
        };
    }

    let heading = if recipe_id.is_some() { "Edit Recipe" } else { "New Recipe" };
    let save_id = recipe_id.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let draft = RecipeDraft {
            title: title(),
            description: description(),
            images: images().lines().map(str::to_string).collect(),
            is_anonymous: anonymous(),
        };
        let draft = match draft.validated() {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        saving.set(true);
        let api = services.api.clone();
        let list = list.clone();
        let save_id = save_id.clone();
        spawn(async move {
            let result = match &save_id {
                Some(id) => api.update_recipe(id, &draft).await,
                None => api.create_recipe(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(recipe) => {
                    let (toast_title, toast_description) = if save_id.is_some() {
                        ("Recipe updated", "Your changes have been saved.")
                    } else {
                        ("Recipe created", "Your recipe has been shared.")
                    };
                    show_toast(&mut toasts, ToastLevel::Success, toast_title, toast_description);
                    spawn_forever(async move {
                        list.fetch_recipes().await;
                    });
                    on_saved.call(recipe.id);
                }
                Err(e) => {
                    let message = e.user_message();
                    show_toast(&mut toasts, ToastLevel::Error, "Error", &message);
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        section {
            class: "recipe-form",
            h1 { "{heading}" }
            if loading() {
                p { class: "recipes-message", "Loading recipe..." }
            } else {
                form {
                    onsubmit: on_submit,
                    label { r#for: "recipe-title", "Title" }
                    input {
                        id: "recipe-title",
                        value: "{title}",
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                    label { r#for: "recipe-description", "Description" }
                    textarea {
                        id: "recipe-description",
                        rows: 6,
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                    label { r#for: "recipe-images", "Image URLs (one per line, up to {MAX_DRAFT_IMAGES})" }
                    textarea {
                        id: "recipe-images",
                        rows: 4,
                        value: "{images}",
                        oninput: move |evt: FormEvent| images.set(evt.value()),
                    }
                    label {
                        class: "recipe-form-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: anonymous(),
                            oninput: move |evt: FormEvent| anonymous.set(evt.checked()),
                        }
                        span { "Post anonymously" }
                    }
                    if let Some(message) = error() {
                        p { class: "dialog-error", "{message}" }
                    }
                    div {
                        class: "dialog-actions",
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            disabled: saving(),
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary",
                            disabled: saving(),
                            if saving() {
                                "Saving..."
                            } else {
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    }
}
