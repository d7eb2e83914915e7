//! Light / dark theme switch.
//!
//! The choice lives in a [`ThemeSignal`] context. It is mirrored to
//! `localStorage` and to a `data-theme` attribute on `<html>`, which the
//! stylesheet keys its colour overrides on. With no attribute the page
//! follows `prefers-color-scheme`.

use dioxus::prelude::*;

use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::Icon;

const STORAGE_KEY: &str = "recipeshare-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    /// Anything unrecognised (including nothing stored) means System.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Value for `data-theme` and storage; `None` for System.
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Theme::System => None,
            Theme::Light => Some("light"),
            Theme::Dark => Some("dark"),
        }
    }

    /// Order the toggle button steps through.
    pub fn next(self) -> Self {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::System => "System theme",
            Theme::Light => "Light theme",
            Theme::Dark => "Dark theme",
        }
    }
}

pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Push `theme` to the document and remember it.
pub fn apply_theme(theme: Theme) {
    let js = match theme.as_attr() {
        Some(value) => format!(
            "document.documentElement.setAttribute('data-theme', '{value}');
             try {{ localStorage.setItem('{STORAGE_KEY}', '{value}'); }} catch (e) {{}}"
        ),
        None => format!(
            "document.documentElement.removeAttribute('data-theme');
             try {{ localStorage.removeItem('{STORAGE_KEY}'); }} catch (e) {{}}"
        ),
    };
    document::eval(&js);
}

/// Restore the stored choice into `theme`.
pub async fn load_theme_from_storage(mut theme: ThemeSignal) {
    let js = format!(
        "var stored = null;
         try {{ stored = localStorage.getItem('{STORAGE_KEY}'); }} catch (e) {{}}
         dioxus.send(stored || '');"
    );
    let mut eval = document::eval(&js);
    match eval.recv::<String>().await {
        Ok(stored) => {
            let stored = Theme::from_stored(&stored);
            apply_theme(stored);
            theme.set(stored);
        }
        Err(e) => tracing::debug!("No stored theme: {e:?}"),
    }
}

/// Provides the [`ThemeSignal`] and loads the stored choice on mount.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme: ThemeSignal = use_context_provider(|| Signal::new(Theme::System));
    use_effect(move || {
        spawn(load_theme_from_storage(theme));
    });

    rsx! {
        {children}
    }
}

/// Navigation button cycling System, Light and Dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();
    let upcoming = current.next();
    let title = format!("{} (switch to {})", current.label(), upcoming.label());

    let icon = match current {
        Theme::System => rsx! { Icon { icon: FaCircleHalfStroke, width: 14, height: 14 } },
        Theme::Light => rsx! { Icon { icon: FaSun, width: 14, height: 14 } },
        Theme::Dark => rsx! { Icon { icon: FaMoon, width: 14, height: 14 } },
    };

    rsx! {
        button {
            class: "nav-button nav-theme",
            title: "{title}",
            aria_label: "Toggle theme",
            onclick: move |_| {
                apply_theme(upcoming);
                theme.set(upcoming);
            },
            {icon}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_through_every_theme() {
        let mut theme = Theme::default();
        let mut seen = vec![theme];
        for _ in 0..3 {
            theme = theme.next();
            seen.push(theme);
        }
        assert_eq!(seen, vec![Theme::System, Theme::Light, Theme::Dark, Theme::System]);
    }

    #[test]
    fn test_stored_value_round_trips_through_attr() {
        for theme in [Theme::Light, Theme::Dark] {
            let attr = theme.as_attr().unwrap();
            assert_eq!(Theme::from_stored(attr), theme);
        }
        assert_eq!(Theme::System.as_attr(), None);
    }

    #[test]
    fn test_unknown_stored_value_follows_system() {
        assert_eq!(Theme::from_stored(""), Theme::System);
        assert_eq!(Theme::from_stored("sepia"), Theme::System);
        assert_eq!(Theme::from_stored("Dark"), Theme::System);
    }
}
