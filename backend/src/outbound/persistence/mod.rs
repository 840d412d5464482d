//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the concrete implementation of the domain's `TodoRepository`
//! port, backed by PostgreSQL via `diesel-async` with `bb8` pooling.
//!
//! - Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//!   private to this module.
//! - One pool per process, shared by cloning.
//! - Store failures are logged and mapped to `TodoRepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todo")).await?;
//! let repository = DieselTodoRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_todo_repository;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
