use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::platform::sleep;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            level,
            title: title.to_string(),
            description: description.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and schedule its removal.
pub fn show_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, description: &str) {
    match level {
        ToastLevel::Error => tracing::error!("{title}: {description}"),
        _ => tracing::info!("{title}: {description}"),
    }
    let id = toasts.write().push(level, title, description);
    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep(TOAST_LIFETIME).await;
        toasts.write().dismiss(id);
    });
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let entries = toasts.read().entries.clone();

    rsx! {
        {children}
        div {
            class: "toast-viewport",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    role: "status",
                    div {
                        class: "toast-body",
                        p { class: "toast-title", "{toast.title}" }
                        if !toast.description.is_empty() {
                            p { class: "toast-description", "{toast.description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        "aria-label": "Dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Success, "Recipe deleted", "Gone");
        let second = toasts.push(ToastLevel::Error, "Error", "Nope");
        assert!(second > first);
        assert_eq!(toasts.entries.len(), 2);
        assert_eq!(toasts.entries[0].title, "Recipe deleted");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Info, "a", "");
        toasts.push(ToastLevel::Info, "b", "");
        toasts.dismiss(first);
        toasts.dismiss(99);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].title, "b");
    }
}
