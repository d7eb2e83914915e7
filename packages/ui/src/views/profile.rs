use dioxus::prelude::*;
use store::SessionState;

use crate::auth::{use_session, SignInButton, SignOutButton};
use crate::state::use_services;

#[component]
pub fn ProfileView(on_my_recipes: EventHandler<()>) -> Element {
    let services = use_services();
    let session = use_session();

    let user = match session() {
        SessionState::Loading => {
            return rsx! { section { class: "profile", p { class: "recipes-message", "Loading..." } } };
        }
        SessionState::Unauthenticated => {
            return rsx! {
                section {
                    class: "profile",
                    p { class: "recipes-message", "You are not signed in." }
                    SignInButton { class: "button button--primary" }
                }
            };
        }
        SessionState::Authenticated(user) => user,
    };

    let avatar = user
        .image
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| services.config.images.anonymous_avatar.clone());
    let name = user.display_name().to_string();

    rsx! {
        section {
            class: "profile",
            img { class: "profile-avatar", src: "{avatar}", alt: "{name}" }
            h1 { "{name}" }
            if let Some(email) = user.email.clone() {
                p { class: "profile-email", "{email}" }
            }
            div {
                class: "dialog-actions",
                button {
                    class: "button",
                    onclick: move |_| on_my_recipes.call(()),
                    "Browse recipes"
                }
                SignOutButton { class: "button button--ghost" }
            }
        }
    }
}
