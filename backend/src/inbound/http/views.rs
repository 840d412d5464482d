//! HTML rendering for the todo pages.
//!
//! Templates live in `backend/templates` and are compiled into the binary.
//! Rendering is a pure function of the data passed in; the only failure mode
//! is a template engine error, which [`html_response`] turns into a bare
//! plain-text 500.

use std::sync::LazyLock;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use minijinja::{Environment, context};
use serde::Serialize;
use tracing::error;

use crate::domain::{TITLE_MAX, Todo};

const LIST_TITLE: &str = "TodoListinn";
const ERROR_TITLE: &str = "villa kom upp";

const TEMPLATES: [(&str, &str); 3] = [
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("todos.html", include_str!("../../../templates/todos.html")),
    ("error.html", include_str!("../../../templates/error.html")),
];

static VIEWS: LazyLock<TodoViews> = LazyLock::new(TodoViews::new);

/// Error raised when a template fails to render.
#[derive(Debug, thiserror::Error)]
#[error("failed to render {template}: {source}")]
pub struct RenderError {
    template: &'static str,
    #[source]
    source: minijinja::Error,
}

#[derive(Serialize)]
struct TodoView<'a> {
    id: i32,
    title: &'a str,
    finished: bool,
}

impl<'a> From<&'a Todo> for TodoView<'a> {
    fn from(todo: &'a Todo) -> Self {
        Self {
            id: todo.id.get(),
            title: todo.title.as_str(),
            finished: todo.finished,
        }
    }
}

/// Compiled page templates.
pub struct TodoViews {
    env: Environment<'static>,
}

impl TodoViews {
    fn new() -> Self {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            if let Err(error) = env.add_template(name, source) {
                error!(template = name, %error, "failed to compile template");
            }
        }
        Self { env }
    }

    /// The process-wide renderer.
    #[must_use]
    pub fn shared() -> &'static Self {
        &VIEWS
    }

    /// Render the list page with its add/delete forms and one row per task.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the template engine fails.
    pub fn render_list(&self, todos: &[Todo]) -> Result<String, RenderError> {
        let todos: Vec<TodoView<'_>> = todos.iter().map(TodoView::from).collect();
        self.render(
            "todos.html",
            context! {
                page_title => LIST_TITLE,
                title_max => TITLE_MAX,
                todos => todos,
            },
        )
    }

    /// Render the error page around `message`.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the template engine fails.
    pub fn render_error(&self, message: &str) -> Result<String, RenderError> {
        self.render(
            "error.html",
            context! {
                page_title => ERROR_TITLE,
                message => message,
            },
        )
    }

    fn render(
        &self,
        template: &'static str,
        ctx: minijinja::Value,
    ) -> Result<String, RenderError> {
        self.env
            .get_template(template)
            .and_then(|tpl| tpl.render(ctx))
            .map_err(|source| RenderError { template, source })
    }
}

/// Build an HTML response from a rendered page.
///
/// A render failure is logged and answered with a plain-text 500 so the
/// client always gets a response.
pub fn html_response(status: StatusCode, page: Result<String, RenderError>) -> HttpResponse {
    match page {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(error) => {
            error!(%error, "page rendering failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("villa")
        }
    }
}
