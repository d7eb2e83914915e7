use dioxus::prelude::*;
use store::{PageItem, PaginationControls};

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Previous / numbered pages / Next, built from [`PaginationControls`].
///
/// Selecting the active page or a page outside `1..=total_pages` does nothing.
#[component]
pub fn PaginationBar(current_page: u32, total_pages: u32, on_select: EventHandler<u32>) -> Element {
    let controls = PaginationControls::new(current_page, total_pages);
    if controls.items.is_empty() {
        return rsx! {};
    }
    let previous = controls.previous;
    let next = controls.next;

    rsx! {
        nav {
            class: "pagination",
            "aria-label": "Pagination",
            button {
                class: "pagination-step",
                disabled: previous.is_none(),
                onclick: move |_| {
                    if let Some(page) = previous {
                        on_select.call(page);
                    }
                },
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
                span { "Previous" }
            }
            for (index, item) in controls.items.into_iter().enumerate() {
                if let PageItem::Page { number, active } = item {
                    button {
                        key: "page-{number}",
                        class: if active { "pagination-page pagination-page--active" } else { "pagination-page" },
                        "aria-current": if active { "page" } else { "false" },
                        onclick: move |_| {
                            if !active {
                                on_select.call(number);
                            }
                        },
                        "{number}"
                    }
                } else {
                    span { key: "gap-{index}", class: "pagination-ellipsis", "…" }
                }
            }
            button {
                class: "pagination-step",
                disabled: next.is_none(),
                onclick: move |_| {
                    if let Some(page) = next {
                        on_select.call(page);
                    }
                },
                span { "Next" }
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}
