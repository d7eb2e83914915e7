//! Delete confirmation flow shared by the recipe card and the detail page.
//!
//! ```text
//! Closed --open--> Confirming --confirm--> Deleting --ok--> Closed   (refresh once, success toast)
//!                      ^                       |
//!                      +--------error----------+                     (no refresh, no success toast)
//! ```
//!
//! While `Deleting`, further confirms are ignored and cancel does nothing, so a
//! double click can never issue two delete requests.

use tracing::debug;

use crate::cell::StateCell;
use crate::list::{RecipeListState, RecipeListStore};
use crate::service::RecipeService;

pub const DELETED_TITLE: &str = "Recipe deleted";
pub const DELETED_DESCRIPTION: &str = "Your recipe has been deleted successfully.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePhase {
    #[default]
    Closed,
    Confirming,
    Deleting,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteDialog {
    pub phase: DeletePhase,
    /// Message from the last failed attempt.
    pub error: Option<String>,
}

impl DeleteDialog {
    pub fn is_open(&self) -> bool {
        self.phase != DeletePhase::Closed
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == DeletePhase::Deleting
    }

    pub fn open(&mut self) {
        if self.phase == DeletePhase::Closed {
            self.phase = DeletePhase::Confirming;
            self.error = None;
        }
    }

    /// Close the dialog unless a delete is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.is_deleting() {
            return false;
        }
        self.phase = DeletePhase::Closed;
        self.error = None;
        true
    }

    /// Claim the in-flight slot. False when not confirming.
    pub fn begin(&mut self) -> bool {
        if self.phase != DeletePhase::Confirming {
            return false;
        }
        self.phase = DeletePhase::Deleting;
        self.error = None;
        true
    }

    fn finish(&mut self, error: Option<String>) {
        match error {
            None => {
                self.phase = DeletePhase::Closed;
                self.error = None;
            }
            Some(message) => {
                self.phase = DeletePhase::Confirming;
                self.error = Some(message);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(String),
    /// The dialog was not awaiting confirmation (closed, or already deleting).
    Ignored,
}

impl DeleteOutcome {
    /// Title and description of the success toast, only for a confirmed delete.
    pub fn success_toast(&self) -> Option<(&'static str, &'static str)> {
        match self {
            DeleteOutcome::Deleted => Some((DELETED_TITLE, DELETED_DESCRIPTION)),
            _ => None,
        }
    }
}

/// Run the confirmed delete of `recipe_id`.
///
/// `refresh` runs exactly once, and only after the server confirmed the delete.
pub async fn confirm_delete<S, C, D>(
    list: &RecipeListStore<S, C>,
    dialog: &D,
    recipe_id: &str,
    refresh: impl FnOnce(),
) -> DeleteOutcome
where
    S: RecipeService,
    C: StateCell<RecipeListState>,
    D: StateCell<DeleteDialog>,
{
    if !dialog.with_mut(DeleteDialog::begin) {
        debug!(recipe = recipe_id, "ignoring delete confirmation");
        return DeleteOutcome::Ignored;
    }

    match list.delete_recipe(recipe_id).await {
        Ok(()) => {
            dialog.with_mut(|d| d.finish(None));
            refresh();
            DeleteOutcome::Deleted
        }
        Err(err) => {
            let message = err.user_message();
            dialog.with_mut(|d| d.finish(Some(message.clone())));
            DeleteOutcome::Failed(message)
        }
    }
}
