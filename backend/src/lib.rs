//! Server-rendered todo list backed by PostgreSQL.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the task model and
//! the persistence port, [`outbound`] the Diesel adapter, and [`inbound`] the
//! Actix handlers and HTML views.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use middleware::Trace;
