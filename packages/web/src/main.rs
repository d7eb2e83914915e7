use dioxus::prelude::*;

use ui::{AuthProvider, ServicesProvider, ThemeProvider, ToastProvider};
use views::{Profile, RecipeCreate, RecipeDetail, RecipeEdit, Recipes, Search, Shell};

mod bootstrap;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(Shell)]
        #[route("/recipes")]
        Recipes {},
        #[route("/recipes/create")]
        RecipeCreate {},
        #[route("/recipes/:id")]
        RecipeDetail { id: String },
        #[route("/recipes/:id/edit")]
        RecipeEdit { id: String },
        #[route("/search")]
        Search {},
        #[route("/profile")]
        Profile {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_hook(bootstrap::app_services);

    let services = match services {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Failed to configure the recipe API: {e}");
            return rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                p { class: "startup-error", "RecipeShare is misconfigured: {e}" }
            };
        }
    };

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::RECIPES_CSS }

        ThemeProvider {
            ServicesProvider {
                services,
                AuthProvider {
                    ToastProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Redirect `/` to `/recipes`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Recipes {});
    rsx! {}
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");
    rsx! {
        section {
            class: "recipes-page",
            h1 { "Page not found" }
            p { class: "recipes-message", "Nothing lives at /{path}." }
            button {
                class: "button",
                onclick: move |_| {
                    nav.push(Route::Recipes {});
                },
                "Back to recipes"
            }
        }
    }
}
