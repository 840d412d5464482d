//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Each method checks a connection out of the shared [`DbPool`], runs one
//! statement, and lets the pooled connection drop back into the pool. Every
//! failure is logged here with the operation name before it is handed to the
//! caller as a [`TodoRepositoryError`]; the request span opened by the
//! tracing middleware supplies the trace identifier.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, error};

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoId, TodoTitle};

use super::models::{NewTodoRow, TodoRow, TodoUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{CREATE_TODOS_TABLE, todos};

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn log_failure(operation: &'static str, error: &TodoRepositoryError) {
    error!(operation, %error, "todo store operation failed");
}

/// Map pool errors to domain repository errors.
fn map_pool_error(operation: &'static str) -> impl FnOnce(PoolError) -> TodoRepositoryError {
    move |error| {
        let mapped = TodoRepositoryError::connection(error.message());
        log_failure(operation, &mapped);
        mapped
    }
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(
    operation: &'static str,
) -> impl FnOnce(diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    move |error| {
        if let DieselError::DatabaseError(kind, info) = &error {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }

        let mapped = match error {
            DieselError::NotFound => TodoRepositoryError::query("record not found"),
            DieselError::QueryBuilderError(_) => {
                TodoRepositoryError::query("database query error")
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
                TodoRepositoryError::connection("database connection error")
            }
            DieselError::DatabaseError(_, info) => {
                TodoRepositoryError::query(format!("database error: {}", info.message()))
            }
            other => TodoRepositoryError::query(other.to_string()),
        };
        log_failure(operation, &mapped);
        mapped
    }
}

fn row_to_todo(operation: &'static str, row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    Todo::try_from(row).map_err(|message| {
        let mapped = TodoRepositoryError::query(message);
        log_failure(operation, &mapped);
        mapped
    })
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn ensure_schema(&self) -> Result<(), TodoRepositoryError> {
        const OP: &str = "ensure_schema";
        let mut conn = self.pool.get().await.map_err(map_pool_error(OP))?;

        diesel::sql_query(CREATE_TODOS_TABLE)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error(OP))
    }

    async fn list_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        const OP: &str = "list_all";
        let mut conn = self.pool.get().await.map_err(map_pool_error(OP))?;

        let rows: Vec<TodoRow> = todos::table
            .select(TodoRow::as_select())
            .order_by((todos::finished.asc(), todos::created.desc(), todos::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error(OP))?;

        rows.into_iter().map(|row| row_to_todo(OP, row)).collect()
    }

    async fn create(&self, title: &TodoTitle) -> Result<Option<Todo>, TodoRepositoryError> {
        const OP: &str = "create";
        let mut conn = self.pool.get().await.map_err(map_pool_error(OP))?;

        let row: Option<TodoRow> = diesel::insert_into(todos::table)
            .values(&NewTodoRow {
                title: title.as_ref(),
            })
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error(OP))?;

        row.map(|row| row_to_todo(OP, row)).transpose()
    }

    async fn update(
        &self,
        id: TodoId,
        title: &TodoTitle,
        finished: bool,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        const OP: &str = "update";
        let mut conn = self.pool.get().await.map_err(map_pool_error(OP))?;

        let row: Option<TodoRow> = diesel::update(todos::table.find(id.get()))
            .set(&TodoUpdate {
                title: title.as_ref(),
                finished,
            })
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error(OP))?;

        row.map(|row| row_to_todo(OP, row)).transpose()
    }

    async fn delete_one(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        const OP: &str = "delete_one";
        let mut conn = self.pool.get().await.map_err(map_pool_error(OP))?;

        let removed = diesel::delete(todos::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error(OP))?;

        Ok(removed == 1)
    }

    async fn delete_finished(&self) -> Result<usize, TodoRepositoryError> {
        const OP: &str = "delete_finished";
        let mut conn = self.pool.get().await.map_err(map_pool_error(OP))?;

        diesel::delete(todos::table.filter(todos::finished.eq(true)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error(OP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let mapped = map_pool_error("list_all")(PoolError::checkout("timed out"));
        assert_eq!(mapped, TodoRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn missing_rows_map_to_query_errors() {
        let mapped = map_diesel_error("update")(DieselError::NotFound);
        assert_eq!(mapped, TodoRepositoryError::query("record not found"));
    }

    #[rstest]
    fn closed_connections_map_to_connection_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        let mapped = map_diesel_error("create")(error);
        assert!(matches!(mapped, TodoRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn database_errors_keep_the_server_message() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("value too long for type character varying(255)".to_owned()),
        );
        let mapped = map_diesel_error("create")(error);
        assert!(mapped.to_string().contains("value too long"));
    }

    #[rstest]
    fn invalid_rows_surface_as_query_errors() {
        let row = TodoRow {
            id: -1,
            title: "x".to_owned(),
            finished: false,
            created: chrono::Utc::now(),
        };
        let error = row_to_todo("list_all", row).expect_err("negative id");
        assert!(matches!(error, TodoRepositoryError::Query { .. }));
    }
}
