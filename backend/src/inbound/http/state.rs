//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the persistence port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::TodoRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoRepository>,
}

impl HttpState {
    /// Construct state around a repository implementation.
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}
