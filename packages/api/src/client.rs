//! HTTP implementation of the recipe and session services.
//!
//! Wraps a `reqwest::Client` (browser `fetch` on WASM) and an API origin.
//! Every call funnels through [`HttpRecipeService::send`], which maps transport
//! failures to [`ServiceError::Network`], 404 to [`ServiceError::NotFound`] and
//! any other non-2xx status to [`ServiceError::Status`] with the server's
//! message when it sent one.

use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::debug;

use store::{
    Author, Recipe, RecipeDraft, RecipePage, RecipeQuery, RecipeService, RecipeShareConfig,
    ServiceError, SessionProvider, SessionUser,
};

use crate::wire::{self, RecipeEnvelope, RecipeListWire, SessionWire, UserEnvelope};

pub const RECIPES_PATH: &str = "/api/recipes";
pub const SESSION_PATH: &str = "/api/auth/session";
pub const SIGN_IN_PATH: &str = "/api/auth/signin";
pub const SIGN_OUT_PATH: &str = "/api/auth/signout";

/// Recipe API client. Cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpRecipeService {
    client: Client,
    base: Url,
}

impl PartialEq for HttpRecipeService {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl HttpRecipeService {
    /// Client for the API served at `base_url` (scheme + host, optional port).
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let base = Url::parse(base_url)
            .map_err(|e| ServiceError::Network(format!("invalid API base URL {base_url:?}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Client for the configured API origin, or `page_origin` when none is set.
    pub fn from_config(config: &RecipeShareConfig, page_origin: &str) -> Result<Self, ServiceError> {
        let base_url = config.api.base_url.trim();
        if base_url.is_empty() {
            Self::new(page_origin)
        } else {
            Self::new(base_url)
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for an API path such as `/api/recipes/abc`.
    pub fn url(&self, path: &str) -> Result<Url, ServiceError> {
        self.base
            .join(path)
            .map_err(|e| ServiceError::Network(format!("invalid request path {path:?}: {e}")))
    }

    /// Where the browser is sent to sign in or out.
    pub fn sign_in_url(&self) -> String {
        self.url(SIGN_IN_PATH)
            .map(String::from)
            .unwrap_or_else(|_| SIGN_IN_PATH.to_string())
    }

    pub fn sign_out_url(&self) -> String {
        self.url(SIGN_OUT_PATH)
            .map(String::from)
            .unwrap_or_else(|_| SIGN_OUT_PATH.to_string())
    }

    /// Absolute URL for a path built from `segments`. Each segment is
    /// percent-encoded, so an id can never escape its endpoint.
    pub fn segment_url(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        // Dot segments are dropped by the encoder rather than escaped
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ServiceError::NotFound(format!("invalid id {bad:?}")));
        }
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ServiceError::Network(format!("API base URL {} cannot take a path", self.base)))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ServiceError> {
        Ok(self.client.request(method, self.url(path)?))
    }

    fn request_to(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send `request` and return the body of a successful response.
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<String, ServiceError> {
        debug!(endpoint, "api request");
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(endpoint.to_string()));
        }
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message: wire::error_message(&body),
            });
        }
        Ok(body)
    }
}

/// Query-string pairs for a listing request.
pub fn list_params(query: &RecipeQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
        ("sort", query.sort.as_param().to_string()),
    ];
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    params
}

fn recipe_segments(id: &str) -> [&str; 3] {
    ["api", "recipes", id]
}

fn user_segments(id: &str) -> [&str; 3] {
    ["api", "user", id]
}

impl RecipeService for HttpRecipeService {
    async fn list_recipes(&self, query: &RecipeQuery) -> Result<RecipePage, ServiceError> {
        let request = self.request(Method::GET, RECIPES_PATH)?.query(&list_params(query));
        let body = self.send(RECIPES_PATH, request).await?;
        wire::decode::<RecipeListWire>(RECIPES_PATH, &body)?.validate(RECIPES_PATH)
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ServiceError> {
        let url = self.segment_url(&recipe_segments(id))?;
        let path = url.path().to_string();
        let body = self.send(&path, self.request_to(Method::GET, url)).await?;
        wire::decode::<RecipeEnvelope>(&path, &body)?.validate(&path)
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
        let draft = draft.validated()?;
        let request = self.request(Method::POST, RECIPES_PATH)?.json(&draft);
        let body = self.send(RECIPES_PATH, request).await?;
        wire::decode::<RecipeEnvelope>(RECIPES_PATH, &body)?.validate(RECIPES_PATH)
    }

    async fn update_recipe(&self, id: &str, draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
        let draft = draft.validated()?;
        let url = self.segment_url(&recipe_segments(id))?;
        let path = url.path().to_string();
        let request = self.request_to(Method::PUT, url).json(&draft);
        let body = self.send(&path, request).await?;
        wire::decode::<RecipeEnvelope>(&path, &body)?.validate(&path)
    }

    async fn delete_recipe(&self, id: &str) -> Result<(), ServiceError> {
        let url = self.segment_url(&recipe_segments(id))?;
        let path = url.path().to_string();
        self.send(&path, self.request_to(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Author, ServiceError> {
        let url = self.segment_url(&user_segments(id))?;
        let path = url.path().to_string();
        let body = self.send(&path, self.request_to(Method::GET, url)).await?;
        wire::decode::<UserEnvelope>(&path, &body)?.validate(&path)
    }
}

impl SessionProvider for HttpRecipeService {
    async fn current_session(&self) -> Result<Option<SessionUser>, ServiceError> {
        let body = self
            .send(SESSION_PATH, self.request(Method::GET, SESSION_PATH)?)
            .await?;
        // next-auth style providers answer `null` or `{}` when signed out.
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }
        Ok(wire::decode::<SessionWire>(SESSION_PATH, &body)?.into_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{RecipeFilters, RecipeSort};

    #[test]
    fn test_urls_resolve_against_origin() {
        let service = HttpRecipeService::new("https://recipes.example.com/app/").unwrap();
        assert_eq!(
            service.segment_url(&recipe_segments("abc")).unwrap().as_str(),
            "https://recipes.example.com/api/recipes/abc"
        );
        assert_eq!(
            service.segment_url(&user_segments("u1")).unwrap().as_str(),
            "https://recipes.example.com/api/user/u1"
        );
        assert_eq!(
            service.url(RECIPES_PATH).unwrap().as_str(),
            "https://recipes.example.com/api/recipes"
        );
        assert_eq!(service.sign_in_url(), "https://recipes.example.com/api/auth/signin");
    }

    #[test]
    fn test_ids_cannot_escape_their_endpoint() {
        let service = HttpRecipeService::new("https://recipes.example.com").unwrap();

        let url = service.segment_url(&recipe_segments("../user/u1")).unwrap();
        assert_eq!(url.path(), "/api/recipes/..%2Fuser%2Fu1");

        let url = service.segment_url(&recipe_segments("abc?x=1#frag")).unwrap();
        assert_eq!(url.path(), "/api/recipes/abc%3Fx=1%23frag");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);

        assert!(matches!(
            service.segment_url(&user_segments("..")),
            Err(ServiceError::NotFound(_))
        ));
        assert!(service.segment_url(&recipe_segments("")).is_err());
    }

    #[test]
    fn test_rejects_relative_base() {
        assert!(matches!(
            HttpRecipeService::new("/api"),
            Err(ServiceError::Network(_))
        ));
    }

    #[test]
    fn test_config_base_url_wins_over_page_origin() {
        let config = RecipeShareConfig::default();
        let service = HttpRecipeService::from_config(&config, "http://localhost:8080").unwrap();
        assert_eq!(service.base_url().as_str(), "http://localhost:8080/");

        let config = config.with_base_url("https://api.example.com");
        let service = HttpRecipeService::from_config(&config, "http://localhost:8080").unwrap();
        assert_eq!(service.base_url().as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_list_params() {
        let query = RecipeQuery::new(3, 12, &RecipeFilters::default());
        assert_eq!(
            list_params(&query),
            vec![
                ("page", "3".to_string()),
                ("limit", "12".to_string()),
                ("sort", "newest".to_string()),
            ]
        );

        let filters = RecipeFilters::default()
            .with_search(" tacos ")
            .with_sort(RecipeSort::Title);
        let params = list_params(&RecipeQuery::new(1, 6, &filters));
        assert!(params.contains(&("search", "tacos".to_string())));
        assert!(params.contains(&("sort", "title".to_string())));
    }
}
