use dioxus::prelude::*;
use store::{RecipeFilters, RecipeSort};

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Search box and sort selector.
///
/// The search term is applied on submit; the sort applies as soon as it
/// changes. Clear resets both and is only shown when something is set.
#[component]
pub fn RecipeFilterBar(
    filters: RecipeFilters,
    on_change: EventHandler<RecipeFilters>,
    on_clear: EventHandler<()>,
    #[props(default = "Search recipes...".to_string())] placeholder: String,
    #[props(default)] autofocus: bool,
) -> Element {
    let mut search = use_signal(|| filters.search.clone());

    // Follow external changes (e.g. clear from elsewhere)
    let mut applied = use_signal(|| filters.clone());
    if *applied.peek() != filters {
        applied.set(filters.clone());
        search.set(filters.search.clone());
    }

    let submit_filters = filters.clone();
    let sort_filters = filters.clone();
    let show_clear = !filters.is_default();

    rsx! {
        form {
            class: "recipe-filters",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_change.call(submit_filters.clone().with_search(search()));
            },
            div {
                class: "recipe-filters-search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "{placeholder}",
                    autofocus,
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }
            select {
                class: "recipe-filters-sort",
                value: filters.sort.as_param(),
                onchange: move |evt: FormEvent| {
                    let sort = RecipeSort::from_param(&evt.value());
                    on_change.call(sort_filters.clone().with_search(search()).with_sort(sort));
                },
                for sort in RecipeSort::ALL {
                    option {
                        key: "{sort:?}",
                        value: sort.as_param(),
                        selected: sort == filters.sort,
                        {sort.label()}
                    }
                }
            }
            button { r#type: "submit", class: "button", "Search" }
            if show_clear {
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_clear.call(()),
                    "Clear"
                }
            }
        }
    }
}
