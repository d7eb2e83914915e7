use dioxus::prelude::*;
use store::{confirm_delete, DeleteDialog, DeleteOutcome};

use crate::state::{use_recipe_list, SignalCell};
use crate::toast::{show_toast, use_toasts, ToastLevel};
use crate::views::ModalOverlay;

/// Confirmation dialog for deleting one recipe.
///
/// `dialog` is owned by the caller, which opens it. `on_deleted` is the
/// refresh step: it runs once, only after the server confirmed the delete.
#[component]
pub fn DeleteRecipeDialog(
    recipe_id: String,
    recipe_title: String,
    dialog: Signal<DeleteDialog>,
    on_deleted: EventHandler<()>,
) -> Element {
    let list = use_recipe_list();
    let mut toasts = use_toasts();
    let mut dialog = dialog;
    let state = dialog.read().clone();

    if !state.is_open() {
        return rsx! {};
    }
    let deleting = state.is_deleting();

    let on_confirm = move |_| {
        let list = list.clone();
        let recipe_id = recipe_id.clone();
        spawn(async move {
            let outcome = confirm_delete(&list, &SignalCell(dialog), &recipe_id, || {
                on_deleted.call(())
            })
            .await;
            if let Some((title, description)) = outcome.success_toast() {
                show_toast(&mut toasts, ToastLevel::Success, title, description);
            } else if let DeleteOutcome::Failed(message) = outcome {
                show_toast(&mut toasts, ToastLevel::Error, "Error", &message);
            }
        });
    };

    rsx! {
        ModalOverlay {
            labelled_by: "delete-recipe-title",
            on_close: move |_| {
                dialog.write().cancel();
            },
            div {
                class: "dialog",
                h2 { id: "delete-recipe-title", class: "dialog-title", "Delete Recipe" }
                p {
                    class: "dialog-description",
                    "Are you sure you want to delete \"{recipe_title}\"? This action cannot be undone."
                }
                if let Some(error) = state.error.as_ref() {
                    p { class: "dialog-error", "{error}" }
                }
                div {
                    class: "dialog-actions",
                    button {
                        class: "button button--ghost",
                        disabled: deleting,
                        onclick: move |_| {
                            dialog.write().cancel();
                        },
                        "Cancel"
                    }
                    button {
                        class: "button button--danger",
                        disabled: deleting,
                        onclick: on_confirm,
                        if deleting {
                            "Deleting..."
                        } else {
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
