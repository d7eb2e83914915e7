//! Session context and hooks for the UI.

use std::time::Duration;

use dioxus::prelude::*;
use store::{SessionProvider, SessionState};

use crate::platform::{navigate_external, sleep};
use crate::state::use_services;

/// How often the session is re-read so an expired sign-in is noticed.
const SESSION_REFRESH: Duration = Duration::from_secs(300);

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that tracks the signed-in user.
/// Must sit inside [`crate::ServicesProvider`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_services();
    let mut session = use_signal(SessionState::default);

    let api = services.api.clone();
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.current_session().await {
                Ok(user) => session.set(SessionState::from_user(user)),
                Err(e) => {
                    tracing::warn!("Failed to load session: {e}");
                    session.set(SessionState::Unauthenticated);
                }
            }
        }
    });

    let api = services.api.clone();
    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            loop {
                sleep(SESSION_REFRESH).await;
                if session.peek().is_loading() {
                    continue;
                }
                // Keep the last known state when the check itself fails.
                if let Ok(user) = api.current_session().await {
                    let next = SessionState::from_user(user);
                    if *session.peek() != next {
                        session.set(next);
                    }
                }
            }
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that sends the browser to the session provider's sign-in page.
#[component]
pub fn SignInButton(
    #[props(default = "Sign in".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut redirecting = use_signal(|| false);

    let onclick = move |_| {
        redirecting.set(true);
        navigate_external(&services.api.sign_in_url());
    };

    rsx! {
        button {
            class: "{class}",
            disabled: redirecting(),
            onclick: onclick,
            if redirecting() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button that signs the current user out.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut session = use_session();

    let onclick = move |_| {
        session.set(SessionState::Unauthenticated);
        navigate_external(&services.api.sign_out_url());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
