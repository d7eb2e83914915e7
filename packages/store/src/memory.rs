use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ServiceError;
use crate::models::{Author, Recipe, RecipeDraft, RecipePage, RecipeQuery, RecipeSort};
use crate::service::{RecipeService, SessionProvider};
use crate::session::SessionUser;

/// In-memory recipe backend the store tests run against.
///
/// Behaves like the real listing endpoint (search, sort, paging, ownership
/// checks) and records how often each endpoint was hit. Failures can be
/// injected per endpoint.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecipeService {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order, oldest first.
    recipes: Vec<Recipe>,
    users: HashMap<String, Author>,
    session: Option<SessionUser>,
    next_id: u64,
    list_error: Option<ServiceError>,
    delete_error: Option<ServiceError>,
    user_error: Option<ServiceError>,
    list_calls: usize,
    delete_calls: usize,
    user_calls: usize,
}

impl MemoryRecipeService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_recipes(self, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        self.lock().recipes.extend(recipes);
        self
    }

    pub fn with_user(self, author: Author) -> Self {
        self.lock().users.insert(author.id.clone(), author);
        self
    }

    pub fn with_session(self, user: SessionUser) -> Self {
        self.lock().session = Some(user);
        self
    }

    pub fn set_session(&self, user: Option<SessionUser>) {
        self.lock().session = user;
    }

    /// Make every subsequent listing fail with `error` (`None` restores it).
    pub fn fail_list(&self, error: Option<ServiceError>) {
        self.lock().list_error = error;
    }

    pub fn fail_delete(&self, error: Option<ServiceError>) {
        self.lock().delete_error = error;
    }

    pub fn fail_users(&self, error: Option<ServiceError>) {
        self.lock().user_error = error;
    }

    pub fn list_calls(&self) -> usize {
        self.lock().list_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.lock().delete_calls
    }

    pub fn user_calls(&self) -> usize {
        self.lock().user_calls
    }

    pub fn recipe_ids(&self) -> Vec<String> {
        self.lock().recipes.iter().map(|r| r.id.clone()).collect()
    }
}

impl Inner {
    fn require_session(&self) -> Result<&SessionUser, ServiceError> {
        self.session.as_ref().ok_or(ServiceError::Status {
            status: 401,
            message: "You must be signed in".to_string(),
        })
    }

    fn position_owned(&self, id: &str) -> Result<usize, ServiceError> {
        let user_id = self.require_session()?.id.clone();
        let idx = self
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        if self.recipes[idx].author_id.as_deref() != Some(user_id.as_str()) {
            return Err(ServiceError::Status {
                status: 403,
                message: "You can only change your own recipes".to_string(),
            });
        }
        Ok(idx)
    }
}

fn matches_search(recipe: &Recipe, term: &str) -> bool {
    let term = term.to_lowercase();
    recipe.title.to_lowercase().contains(&term) || recipe.description.to_lowercase().contains(&term)
}

impl RecipeService for MemoryRecipeService {
    async fn list_recipes(&self, query: &RecipeQuery) -> Result<RecipePage, ServiceError> {
        let mut inner = self.lock();
        inner.list_calls += 1;
        if let Some(err) = inner.list_error.clone() {
            return Err(err);
        }

        let mut matching: Vec<Recipe> = inner
            .recipes
            .iter()
            .filter(|r| query.search.as_deref().map_or(true, |term| matches_search(r, term)))
            .cloned()
            .collect();
        match query.sort {
            RecipeSort::Newest => matching.reverse(),
            RecipeSort::Oldest => {}
            RecipeSort::Title => matching.sort_by_key(|r| r.title.to_lowercase()),
        }

        let limit = query.limit.max(1);
        let total_items = matching.len() as u64;
        let total_pages = total_items.div_ceil(u64::from(limit)) as u32;
        let current_page = query.page.clamp(1, total_pages.max(1));
        let items = matching
            .into_iter()
            .skip(((current_page - 1) * limit) as usize)
            .take(limit as usize)
            .collect();

        Ok(RecipePage {
            items,
            current_page,
            total_pages,
            total_items: Some(total_items),
        })
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ServiceError> {
        self.lock()
            .recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
        let draft = draft.validated()?;
        let mut inner = self.lock();
        let author_id = inner.require_session()?.id.clone();
        inner.next_id += 1;
        let recipe = Recipe {
            id: format!("recipe-{}", inner.next_id),
            title: draft.title,
            description: draft.description,
            images: draft.images,
            author_id: Some(author_id),
            is_anonymous: draft.is_anonymous,
        };
        inner.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, id: &str, draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
        let draft = draft.validated()?;
        let mut inner = self.lock();
        let idx = inner.position_owned(id)?;
        let recipe = &mut inner.recipes[idx];
        recipe.title = draft.title;
        recipe.description = draft.description;
        recipe.images = draft.images;
        recipe.is_anonymous = draft.is_anonymous;
        Ok(recipe.clone())
    }

    async fn delete_recipe(&self, id: &str) -> Result<(), ServiceError> {
        let mut inner = self.lock();
        inner.delete_calls += 1;
        if let Some(err) = inner.delete_error.clone() {
            return Err(err);
        }
        let idx = inner.position_owned(id)?;
        inner.recipes.remove(idx);
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Author, ServiceError> {
        let mut inner = self.lock();
        inner.user_calls += 1;
        if let Some(err) = inner.user_error.clone() {
            return Err(err);
        }
        inner
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}

impl SessionProvider for MemoryRecipeService {
    async fn current_session(&self) -> Result<Option<SessionUser>, ServiceError> {
        Ok(self.lock().session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeFilters;

    fn recipe(id: &str, title: &str, author: &str) -> Recipe {
        Recipe {
            id: id.into(),
            title: title.into(),
            description: format!("{title} description"),
            images: vec![],
            author_id: Some(author.into()),
            is_anonymous: false,
        }
    }

    fn cook(id: &str) -> SessionUser {
        SessionUser {
            id: id.into(),
            name: Some(id.into()),
            email: None,
            image: None,
        }
    }

    fn seeded() -> MemoryRecipeService {
        MemoryRecipeService::new().with_recipes([
            recipe("a", "Borscht", "u1"),
            recipe("b", "Apple pie", "u2"),
            recipe("c", "Curry", "u1"),
        ])
    }

    #[tokio::test]
    async fn test_list_pages_newest_first() {
        let service = seeded();
        let query = RecipeQuery::new(1, 2, &RecipeFilters::default());
        let page = service.list_recipes(&query).await.unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, Some(3));
        let ids: Vec<_> = page.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "b"]);

        let page = service
            .list_recipes(&RecipeQuery::new(2, 2, &RecipeFilters::default()))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "a");
        assert_eq!(service.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_list_search_and_title_sort() {
        let service = seeded();
        let filters = RecipeFilters::default().with_search("CURRY");
        let page = service.list_recipes(&RecipeQuery::new(1, 10, &filters)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Curry");

        let filters = RecipeFilters::default().with_sort(RecipeSort::Title);
        let page = service.list_recipes(&RecipeQuery::new(1, 10, &filters)).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Apple pie", "Borscht", "Curry"]);
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let service = MemoryRecipeService::new();
        let page = service
            .list_recipes(&RecipeQuery::new(3, 12, &RecipeFilters::default()))
            .await
            .unwrap();
        assert_eq!(page, RecipePage::empty());
    }

    #[tokio::test]
    async fn test_create_requires_session() {
        let service = MemoryRecipeService::new();
        let draft = RecipeDraft {
            title: "Tea".into(),
            description: "Hot".into(),
            ..Default::default()
        };
        assert!(matches!(
            service.create_recipe(&draft).await,
            Err(ServiceError::Status { status: 401, .. })
        ));

        service.set_session(Some(cook("u9")));
        let created = service.create_recipe(&draft).await.unwrap();
        assert_eq!(created.author_id.as_deref(), Some("u9"));
        assert_eq!(service.get_recipe(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_only_owner_can_update_or_delete() {
        let service = seeded().with_session(cook("u2"));
        let draft = RecipeDraft {
            title: "Better borscht".into(),
            description: "Beets".into(),
            ..Default::default()
        };
        assert!(matches!(
            service.update_recipe("a", &draft).await,
            Err(ServiceError::Status { status: 403, .. })
        ));
        assert!(matches!(
            service.delete_recipe("a").await,
            Err(ServiceError::Status { status: 403, .. })
        ));
        assert_eq!(
            service.delete_recipe("zzz").await,
            Err(ServiceError::NotFound("zzz".into()))
        );

        service.delete_recipe("b").await.unwrap();
        assert_eq!(service.recipe_ids(), ["a", "c"]);
        assert_eq!(service.delete_calls(), 3);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let service = seeded().with_user(Author {
            id: "u1".into(),
            name: Some("Ada".into()),
            image: None,
        });
        service.fail_users(Some(ServiceError::Network("offline".into())));
        assert!(service.get_user("u1").await.is_err());
        service.fail_users(None);
        assert_eq!(service.get_user("u1").await.unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(service.user_calls(), 2);
    }
}
