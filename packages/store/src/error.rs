//! Error types shared by every service implementation.

use thiserror::Error;

/// Local validation failures for a [`crate::RecipeDraft`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("A title is required")]
    MissingTitle,

    #[error("A description is required")]
    MissingDescription,

    #[error("Too many images ({count}); at most {max} are allowed")]
    TooManyImages { count: usize, max: usize },
}

/// Failures reported by a [`crate::RecipeService`] or [`crate::SessionProvider`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body did not match the expected shape for the endpoint.
    #[error("Unexpected response from {endpoint}: {reason}")]
    ShapeMismatch { endpoint: String, reason: String },

    #[error(transparent)]
    InvalidDraft(#[from] DraftError),
}

impl ServiceError {
    pub fn shape(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ServiceError::ShapeMismatch {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Message suitable for showing in place of the recipe grid.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ServiceError::Status { message, .. } if !message.is_empty() => message.clone(),
            ServiceError::Status { status, .. } => format!("The server returned an error ({status})."),
            ServiceError::NotFound(_) => "The requested recipe could not be found.".to_string(),
            ServiceError::ShapeMismatch { .. } => {
                "The server sent a response we could not understand.".to_string()
            }
            ServiceError::InvalidDraft(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ServiceError::Status {
                status: 500,
                message: "Failed to fetch recipes".into()
            }
            .user_message(),
            "Failed to fetch recipes"
        );
        assert_eq!(
            ServiceError::Status {
                status: 502,
                message: String::new()
            }
            .user_message(),
            "The server returned an error (502)."
        );
        assert_eq!(
            ServiceError::from(DraftError::MissingTitle).user_message(),
            "A title is required"
        );
    }

    #[test]
    fn test_shape_display_names_endpoint() {
        let err = ServiceError::shape("/api/recipes", "missing field `items`");
        assert_eq!(
            err.to_string(),
            "Unexpected response from /api/recipes: missing field `items`"
        );
    }
}
