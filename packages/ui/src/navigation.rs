//! Top navigation bar: brand, section links, the theme toggle and the
//! session area.
//!
//! The session area reflects [`SessionState`]:
//!
//! - **Loading**: a disabled placeholder button
//! - **Authenticated**: avatar (image or initial) opening a Profile / Sign out menu
//! - **Unauthenticated**: a Sign in button

use dioxus::prelude::*;
use store::SessionState;

use crate::auth::{use_session, SignInButton, SignOutButton};
use crate::icons::{FaBookOpen, FaMagnifyingGlass, FaUtensils};
use crate::theme::ThemeToggle;
use crate::Icon;

#[component]
pub fn Navigation(
    on_home: EventHandler<()>,
    on_recipes: EventHandler<()>,
    on_search: EventHandler<()>,
    on_profile: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut menu_open = use_signal(|| false);

    let session_area = match session() {
        SessionState::Loading => rsx! {
            button { class: "nav-button", disabled: true, "Loading..." }
        },
        SessionState::Unauthenticated => rsx! {
            SignInButton { class: "nav-button nav-button--primary" }
        },
        SessionState::Authenticated(user) => {
            let label = user.display_name().to_string();
            let initial = user.initial();
            let avatar = match user.image.clone().filter(|url| !url.is_empty()) {
                Some(url) => rsx! {
                    img { class: "nav-avatar-image", src: "{url}", alt: "{label}" }
                },
                None => rsx! {
                    span { class: "nav-avatar-initial", "{initial}" }
                },
            };
            rsx! {
                div {
                    class: "nav-user",
                    button {
                        class: "nav-avatar",
                        title: "{label}",
                        onclick: move |_| menu_open.toggle(),
                        {avatar}
                    }
                    if menu_open() {
                        div {
                            class: "nav-menu",
                            onclick: move |_| menu_open.set(false),
                            p { class: "nav-menu-label", "{label}" }
                            if let Some(email) = user.email.clone() {
                                p { class: "nav-menu-email", "{email}" }
                            }
                            button {
                                class: "nav-menu-item",
                                onclick: move |_| on_profile.call(()),
                                "Profile"
                            }
                            SignOutButton { class: "nav-menu-item" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        nav {
            class: "navigation",
            button {
                class: "nav-brand",
                onclick: move |_| on_home.call(()),
                Icon { icon: FaUtensils, width: 18, height: 18 }
                span { "RecipeShare" }
            }
            div {
                class: "nav-links",
                button {
                    class: "nav-link",
                    onclick: move |_| on_recipes.call(()),
                    Icon { icon: FaBookOpen, width: 14, height: 14 }
                    span { "Recipes" }
                }
                button {
                    class: "nav-link",
                    onclick: move |_| on_search.call(()),
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    span { "Search" }
                }
            }
            div {
                class: "nav-session",
                ThemeToggle {}
                {session_area}
            }
        }
    }
}
