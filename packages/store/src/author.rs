//! Per-card author lookup and the badge shown in the card footer.
//!
//! Each card owns an [`AuthorSlot`]. [`load_author`] fetches the author once per
//! author id; a response for an id the card no longer shows is dropped via the
//! slot's generation counter. Lookup failures are logged and degrade to the
//! anonymous identity.

use tracing::warn;

use crate::cell::StateCell;
use crate::config::ImagesConfig;
use crate::models::{Author, Recipe};
use crate::service::RecipeService;
use crate::session::SessionUser;

pub const ANONYMOUS_LABEL: &str = "Anonymous";
pub const YOU_LABEL: &str = "You";

/// Lookup state for one card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthorSlot {
    started: bool,
    author_id: Option<String>,
    generation: u64,
    pub author: Option<Author>,
}

impl AuthorSlot {
    /// Start tracking `author_id`. Returns the generation to fetch under, or
    /// `None` when there is nothing to fetch (no id, or this id is already
    /// resolved or in flight).
    pub fn begin(&mut self, author_id: Option<&str>) -> Option<u64> {
        if self.started && self.author_id.as_deref() == author_id {
            return None;
        }
        self.started = true;
        self.generation += 1;
        self.author_id = author_id.map(str::to_string);
        self.author = None;
        author_id.map(|_| self.generation)
    }

    /// Store a lookup result. Ignored when the card moved on to another id.
    pub fn complete(&mut self, generation: u64, author: Option<Author>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.author = author;
        true
    }
}

/// Resolve the author of `recipe` into `slot`.
pub async fn load_author<S, C>(service: &S, slot: &C, recipe: &Recipe)
where
    S: RecipeService,
    C: StateCell<AuthorSlot>,
{
    let author_id = recipe.resolvable_author_id();
    let Some(generation) = slot.with_mut(|s| s.begin(author_id)) else {
        return;
    };
    let Some(author_id) = author_id else {
        return;
    };

    let author = match service.get_user(author_id).await {
        Ok(author) => Some(author),
        Err(err) => {
            warn!(recipe = %recipe.id, author = author_id, "error fetching recipe author: {err}");
            None
        }
    };
    slot.with_mut(|s| s.complete(generation, author));
}

/// Name and avatar rendered in a card footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorBadge {
    pub label: String,
    pub image: String,
}

/// Decide what a card shows for its author.
///
/// Anonymous recipes always show the anonymous identity. A resolved author
/// whose name matches the session user's name is shown as "You"; this compares
/// display names only, so two accounts with the same name both see "You".
pub fn author_badge(
    recipe: &Recipe,
    resolved: Option<&Author>,
    session: Option<&SessionUser>,
    images: &ImagesConfig,
) -> AuthorBadge {
    let anonymous = || AuthorBadge {
        label: ANONYMOUS_LABEL.to_string(),
        image: images.anonymous_avatar.clone(),
    };
    if recipe.is_anonymous {
        return anonymous();
    }
    let Some(author) = resolved else {
        return anonymous();
    };

    let image = author
        .image
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| images.anonymous_avatar.clone());
    let name = author.name.as_deref().filter(|name| !name.is_empty());
    let session_name = session.and_then(|user| user.name.as_deref());

    let label = match (name, session_name) {
        (Some(name), Some(mine)) if name == mine => YOU_LABEL.to_string(),
        (Some(name), _) => name.to_string(),
        (None, _) => ANONYMOUS_LABEL.to_string(),
    };
    AuthorBadge { label, image }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ServiceError;
    use crate::memory::MemoryRecipeService;

    fn recipe(author: Option<&str>, anonymous: bool) -> Recipe {
        Recipe {
            id: "r1".into(),
            title: "Ramen".into(),
            description: "Noodles".into(),
            images: vec![],
            author_id: author.map(str::to_string),
            is_anonymous: anonymous,
        }
    }

    fn ada() -> Author {
        Author {
            id: "u1".into(),
            name: Some("Ada".into()),
            image: Some("/ada.png".into()),
        }
    }

    fn session(name: Option<&str>) -> SessionUser {
        SessionUser {
            id: "u7".into(),
            name: name.map(str::to_string),
            email: None,
            image: None,
        }
    }

    fn slot() -> Rc<RefCell<AuthorSlot>> {
        Rc::new(RefCell::new(AuthorSlot::default()))
    }

    #[tokio::test]
    async fn test_resolves_author_once_per_id() {
        let service = MemoryRecipeService::new().with_user(ada());
        let slot = slot();
        let r = recipe(Some("u1"), false);

        load_author(&service, &slot, &r).await;
        load_author(&service, &slot, &r).await;

        assert_eq!(service.user_calls(), 1);
        assert_eq!(slot.borrow().author, Some(ada()));

        let badge = author_badge(&r, slot.borrow().author.as_ref(), None, &ImagesConfig::default());
        assert_eq!(badge.label, "Ada");
        assert_eq!(badge.image, "/ada.png");
    }

    #[tokio::test]
    async fn test_anonymous_recipe_never_fetches() {
        let service = MemoryRecipeService::new().with_user(ada());
        let slot = slot();
        let r = recipe(Some("u1"), true);

        load_author(&service, &slot, &r).await;
        assert_eq!(service.user_calls(), 0);

        // Even with a resolved author at hand the badge stays anonymous.
        let badge = author_badge(&r, Some(&ada()), Some(&session(Some("Ada"))), &ImagesConfig::default());
        assert_eq!(badge.label, "Anonymous");
        assert_eq!(badge.image, "/anonymous-user.jpg");
    }

    #[tokio::test]
    async fn test_failed_lookup_degrades_to_anonymous() {
        let service = MemoryRecipeService::new().with_user(ada());
        service.fail_users(Some(ServiceError::Status {
            status: 500,
            message: "boom".into(),
        }));
        let slot = slot();
        let r = recipe(Some("u1"), false);

        load_author(&service, &slot, &r).await;

        assert_eq!(service.user_calls(), 1);
        assert_eq!(slot.borrow().author, None);
        let badge = author_badge(&r, None, None, &ImagesConfig::default());
        assert_eq!(badge.label, "Anonymous");
    }

    #[tokio::test]
    async fn test_author_change_refetches() {
        let other = Author {
            id: "u2".into(),
            name: Some("Grace".into()),
            image: None,
        };
        let service = MemoryRecipeService::new().with_user(ada()).with_user(other.clone());
        let slot = slot();

        load_author(&service, &slot, &recipe(Some("u1"), false)).await;
        load_author(&service, &slot, &recipe(Some("u2"), false)).await;

        assert_eq!(service.user_calls(), 2);
        assert_eq!(slot.borrow().author, Some(other));
    }

    #[test]
    fn test_late_response_for_previous_id_is_dropped() {
        let mut slot = AuthorSlot::default();
        let first = slot.begin(Some("u1")).unwrap();
        let second = slot.begin(Some("u2")).unwrap();
        assert!(!slot.complete(first, Some(ada())));
        assert_eq!(slot.author, None);
        assert!(slot.complete(second, None));
        assert_eq!(slot.begin(Some("u2")), None);
        assert_eq!(AuthorSlot::default().begin(None), None);
    }

    #[test]
    fn test_you_substitution_needs_both_names() {
        let r = recipe(Some("u1"), false);
        let images = ImagesConfig::default();

        let badge = author_badge(&r, Some(&ada()), Some(&session(Some("Ada"))), &images);
        assert_eq!(badge.label, "You");

        let badge = author_badge(&r, Some(&ada()), Some(&session(Some("Bob"))), &images);
        assert_eq!(badge.label, "Ada");

        let nameless = Author {
            name: None,
            image: None,
            ..ada()
        };
        let badge = author_badge(&r, Some(&nameless), Some(&session(None)), &images);
        assert_eq!(badge.label, "Anonymous");
        assert_eq!(badge.image, "/anonymous-user.jpg");
    }
}
