//! Reactive state shared across the app.
//!
//! The `store` crate's list store, author lookup and delete dialog are written
//! against [`StateCell`]. [`SignalCell`] adapts a Dioxus [`Signal`] to it, so the
//! same logic that is unit tested over `Rc<RefCell<_>>` drives the rendered UI.
//!
//! | Context | Provided by | Hook |
//! |---------|-------------|------|
//! | [`AppServices`] | [`ServicesProvider`] | [`use_services`] |
//! | [`RecipeList`] | [`ServicesProvider`] | [`use_recipe_list`] |

use api::HttpRecipeService;
use dioxus::prelude::*;
use store::{RecipeListState, RecipeListStore, RecipeShareConfig, StateCell};

/// A [`Signal`] usable wherever the store expects a [`StateCell`].
///
/// Reads go through `peek`, so store logic never subscribes the calling
/// component; components read the signal directly when they render.
pub struct SignalCell<T: 'static>(pub Signal<T>);

impl<T: 'static> SignalCell<T> {
    pub fn signal(&self) -> Signal<T> {
        self.0
    }
}

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: 'static> PartialEq for SignalCell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: 'static> StateCell<T> for SignalCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.0.peek();
        f(&value)
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.0;
        let mut value = signal.write();
        f(&mut value)
    }
}

/// The listing store as the UI holds it.
pub type RecipeList = RecipeListStore<HttpRecipeService, SignalCell<RecipeListState>>;

/// API client plus the loaded configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppServices {
    pub api: HttpRecipeService,
    pub config: RecipeShareConfig,
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

pub fn use_recipe_list() -> RecipeList {
    use_context::<RecipeList>()
}

/// Provides [`AppServices`] and the single [`RecipeList`] every page shares.
#[component]
pub fn ServicesProvider(services: AppServices, children: Element) -> Element {
    let services = use_context_provider(|| services);
    let list_state = use_signal(|| RecipeListState::from_config(&services.config.listing));
    use_context_provider(|| RecipeListStore::new(services.api.clone(), SignalCell(list_state)));

    rsx! {
        {children}
    }
}
