//! Session identity as seen by the client, and the author display gate.

use serde::{Deserialize, Serialize};

use crate::models::Recipe;

/// The signed-in user as reported by the session provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl SessionUser {
    /// Name, then email, then a generic label.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Account")
    }

    /// Single-character avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Where the session provider currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl SessionState {
    pub fn from_user(user: Option<SessionUser>) -> Self {
        match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Whether edit/delete affordances should be shown for `recipe`.
///
/// Display only: the server re-checks ownership on every mutation.
pub fn is_author(session: Option<&SessionUser>, recipe: &Recipe) -> bool {
    match (session, recipe.author_id.as_deref()) {
        (Some(user), Some(author_id)) => !user.id.is_empty() && user.id == author_id,
        _ => false,
    }
}
