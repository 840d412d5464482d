//! Port for task persistence.
//!
//! The [`TodoRepository`] trait is the only way handlers reach the store.
//! Every method runs a single statement. Results are tagged so callers can
//! tell the three outcomes apart:
//!
//! - `Ok(Some(_))`, `Ok(true)`, `Ok(n)`: the statement did its work;
//! - `Ok(None)`, `Ok(false)`: no row matched;
//! - `Err(_)`: the store could not be reached or rejected the statement.
//!
//! Adapters log failures before returning them, so callers that choose to
//! ignore an error do not lose it.

use async_trait::async_trait;

use crate::domain::{Todo, TodoId, TodoTitle};

use super::define_port_error;

define_port_error! {
    /// Errors raised by task repository adapters.
    pub enum TodoRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "todo repository query failed: {message}",
    }
}

/// Port for task storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create the backing table when it does not exist yet.
    ///
    /// Safe to call repeatedly; startup calls it once.
    async fn ensure_schema(&self) -> Result<(), TodoRepositoryError>;

    /// Fetch every task, unfinished first, newest first within each group.
    async fn list_all(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Insert a task with `finished = false`.
    ///
    /// Returns `None` if the insert produced no row.
    async fn create(&self, title: &TodoTitle) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Overwrite both the title and the finished flag of a task.
    ///
    /// Returns `None` when no task has the given id; nothing is created in
    /// that case.
    async fn update(
        &self,
        id: TodoId,
        title: &TodoTitle,
        finished: bool,
    ) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Delete a single task.
    ///
    /// Returns `true` only when exactly one row was removed.
    async fn delete_one(&self, id: TodoId) -> Result<bool, TodoRepositoryError>;

    /// Delete every finished task, returning how many were removed.
    async fn delete_finished(&self) -> Result<usize, TodoRepositoryError>;
}
