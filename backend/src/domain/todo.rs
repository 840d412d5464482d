//! Task record model.
//!
//! A [`Todo`] is the only entity the application stores. Its title is only
//! ever built through [`TodoTitle`], which enforces the 1–255 character bound
//! at the boundary instead of relying on the table definition.

use std::fmt;

use chrono::{DateTime, Utc};

/// Maximum number of characters allowed in a title.
pub const TITLE_MAX: usize = 255;

/// Reasons a submitted title is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleValidationError {
    Missing,
    Empty,
    TooLong { max: usize },
}

impl fmt::Display for TitleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "title field is missing"),
            Self::Empty => write!(f, "title must not be empty"),
            Self::TooLong { max } => write!(f, "title must be at most {max} characters"),
        }
    }
}

impl std::error::Error for TitleValidationError {}

/// Validated task title.
///
/// Length is counted in Unicode scalar values, so `"þú"` is two characters
/// even though it occupies four bytes.
///
/// # Examples
/// ```
/// use todo_backend::domain::{TitleValidationError, TodoTitle};
///
/// let title = TodoTitle::new("buy milk").expect("valid title");
/// assert_eq!(title.as_ref(), "buy milk");
/// assert_eq!(TodoTitle::new(""), Err(TitleValidationError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and construct a title.
    pub fn new(title: impl Into<String>) -> Result<Self, TitleValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(TitleValidationError::Empty);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(TitleValidationError::TooLong { max: TITLE_MAX });
        }
        Ok(Self(title))
    }

    /// Consume the title, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = TitleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Store-assigned identifier of a task. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i32);

impl TodoId {
    /// Wrap a raw identifier, rejecting zero and negative values.
    #[must_use]
    pub fn new(raw: i32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// The raw integer used as the table key.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Surrogate key assigned on insert; never changes.
    pub id: TodoId,
    /// Current title. Always satisfies the [`TodoTitle`] bounds when written
    /// through this application.
    pub title: String,
    /// Whether the task has been ticked off.
    pub finished: bool,
    /// Insert timestamp, used only for ordering.
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a")]
    #[case("buy milk")]
    #[case("   ")]
    #[case("kaupa mjólk og brauð")]
    fn accepts_titles_within_bounds(#[case] raw: &str) {
        let title = TodoTitle::new(raw).expect("title within bounds");
        assert_eq!(title.as_ref(), raw);
    }

    #[rstest]
    fn accepts_title_at_maximum_length() {
        let raw = "x".repeat(TITLE_MAX);
        assert!(TodoTitle::new(raw).is_ok());
    }

    #[rstest]
    fn rejects_empty_title() {
        assert_eq!(TodoTitle::new(""), Err(TitleValidationError::Empty));
    }

    #[rstest]
    fn rejects_title_over_maximum_length() {
        let raw = "x".repeat(TITLE_MAX + 1);
        assert_eq!(
            TodoTitle::new(raw),
            Err(TitleValidationError::TooLong { max: TITLE_MAX })
        );
    }

    #[rstest]
    fn counts_characters_not_bytes() {
        let raw = "þ".repeat(TITLE_MAX);
        assert!(raw.len() > TITLE_MAX);
        assert!(TodoTitle::new(raw).is_ok());
    }

    #[rstest]
    #[case(1, true)]
    #[case(42, true)]
    #[case(0, false)]
    #[case(-3, false)]
    fn todo_id_requires_positive_values(#[case] raw: i32, #[case] valid: bool) {
        assert_eq!(TodoId::new(raw).is_some(), valid);
    }

    #[rstest]
    fn validation_errors_describe_the_constraint() {
        let message = TitleValidationError::TooLong { max: TITLE_MAX }.to_string();
        assert!(message.contains("255"));
    }
}
