//! Test utilities for the backend crate.
//!
//! Compiled only with the `test-support` feature so integration tests can
//! drive the HTTP layer without a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoId, TodoTitle};

#[derive(Default)]
struct Store {
    last_id: i32,
    todos: Vec<Todo>,
}

/// Process-local `TodoRepository` holding tasks in a vector.
///
/// Ordering matches the database adapter: unfinished first, then newest
/// first, with the id breaking ties.
/// [`InMemoryTodoRepository::fail_with_connection_errors`]
/// makes every later call return a connection error.
///
/// # Examples
/// ```
/// use todo_backend::domain::TodoTitle;
/// use todo_backend::domain::ports::TodoRepository;
/// use todo_backend::test_support::InMemoryTodoRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryTodoRepository::default();
/// let title = TodoTitle::new("buy milk").expect("valid title");
/// let created = repo.create(&title).await.expect("store up").expect("row");
/// assert!(!created.finished);
/// assert_eq!(repo.snapshot().len(), 1);
/// # });
/// ```
#[derive(Default)]
pub struct InMemoryTodoRepository {
    store: Mutex<Store>,
    failing: AtomicBool,
}

impl InMemoryTodoRepository {
    /// Make every subsequent operation fail as if the store were down.
    pub fn fail_with_connection_errors(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Current contents in list order, bypassing the failure switch.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Todo> {
        let mut todos = self.lock().todos.clone();
        sort_for_listing(&mut todos);
        todos
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), TodoRepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(TodoRepositoryError::connection("in-memory store marked unavailable"))
        } else {
            Ok(())
        }
    }
}

fn sort_for_listing(todos: &mut [Todo]) {
    todos.sort_by(|a, b| {
        a.finished
            .cmp(&b.finished)
            .then_with(|| b.created.cmp(&a.created))
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn ensure_schema(&self) -> Result<(), TodoRepositoryError> {
        self.check_available()
    }

    async fn list_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        self.check_available()?;
        Ok(self.snapshot())
    }

    async fn create(&self, title: &TodoTitle) -> Result<Option<Todo>, TodoRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();
        let Some(id) = store.last_id.checked_add(1).and_then(TodoId::new) else {
            return Ok(None);
        };
        store.last_id = id.get();
        let todo = Todo {
            id,
            title: title.as_ref().to_owned(),
            finished: false,
            created: Utc::now(),
        };
        store.todos.push(todo.clone());
        Ok(Some(todo))
    }

    async fn update(
        &self,
        id: TodoId,
        title: &TodoTitle,
        finished: bool,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();
        Ok(store.todos.iter_mut().find(|todo| todo.id == id).map(|todo| {
            todo.title = title.as_ref().to_owned();
            todo.finished = finished;
            todo.clone()
        }))
    }

    async fn delete_one(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();
        let before = store.todos.len();
        store.todos.retain(|todo| todo.id != id);
        Ok(before - store.todos.len() == 1)
    }

    async fn delete_finished(&self) -> Result<usize, TodoRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();
        let before = store.todos.len();
        store.todos.retain(|todo| !todo.finished);
        Ok(before - store.todos.len())
    }
}
