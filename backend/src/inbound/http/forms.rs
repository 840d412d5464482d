//! Form bodies accepted by the mutating routes.
//!
//! Both forms keep every field optional so a missing `title` reaches
//! [`TodoForm::validate`] and is reported with the same message as an empty
//! or oversized one, rather than being rejected by the extractor.

use serde::Deserialize;

use crate::domain::{TitleValidationError, TodoTitle};

/// Marker a checked HTML checkbox submits when it has no explicit `value`.
const CHECKBOX_ON: &str = "on";

/// Body of `POST /add`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TodoForm {
    pub title: Option<String>,
}

impl TodoForm {
    /// Check that `title` is present and between 1 and 255 characters.
    ///
    /// # Examples
    /// ```
    /// use todo_backend::inbound::http::forms::TodoForm;
    ///
    /// let form = TodoForm { title: Some("buy milk".into()) };
    /// assert_eq!(form.validate().expect("valid").as_ref(), "buy milk");
    /// assert!(TodoForm::default().validate().is_err());
    /// ```
    pub fn validate(self) -> Result<TodoTitle, TitleValidationError> {
        validate_title(self.title)
    }
}

/// Body of `POST /update/{id}`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateTodoForm {
    pub title: Option<String>,
    pub finished: Option<String>,
}

impl UpdateTodoForm {
    /// Whether the `finished` checkbox was ticked.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished.as_deref() == Some(CHECKBOX_ON)
    }

    /// Validate the submitted title with the same rules as [`TodoForm`].
    pub fn title(&self) -> Result<TodoTitle, TitleValidationError> {
        validate_title(self.title.clone())
    }
}

fn validate_title(title: Option<String>) -> Result<TodoTitle, TitleValidationError> {
    title
        .ok_or(TitleValidationError::Missing)
        .and_then(TodoTitle::new)
}
