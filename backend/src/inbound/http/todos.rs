//! Task page handlers.
//!
//! ```text
//! GET  /
//! POST /add
//! POST /update/{id}
//! POST /delete/finished
//! POST /delete/{id}
//! ```
//!
//! Every mutating route answers with `303 See Other` back to `/`. Only
//! `/add` reports store failures to the user; update and delete log them and
//! redirect regardless.

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::error::{PathError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::{info, warn};

use crate::domain::{Error, TitleValidationError, TodoId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{
    INVALID_TITLE_MESSAGE, LIST_FAILED_MESSAGE, NOT_FOUND_MESSAGE, SAVE_FAILED_MESSAGE,
};
use crate::inbound::http::forms::{TodoForm, UpdateTodoForm};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{TodoViews, html_response};

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .finish()
}

fn invalid_title(error: TitleValidationError) -> Error {
    warn!(%error, "rejected task title");
    Error::invalid_request(INVALID_TITLE_MESSAGE)
}

fn todo_id(raw: i32) -> Result<TodoId, Error> {
    TodoId::new(raw).ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))
}

/// Render every task, or the error page when the store cannot be read.
///
/// A store failure still answers 200 so the page stays reachable.
#[get("/")]
pub async fn list_todos(state: web::Data<HttpState>) -> HttpResponse {
    let views = TodoViews::shared();
    let page = match state.todos.list_all().await {
        Ok(todos) => views.render_list(&todos),
        Err(_) => views.render_error(LIST_FAILED_MESSAGE),
    };
    html_response(StatusCode::OK, page)
}

/// Create a task from the submitted title.
#[post("/add")]
pub async fn add_todo(
    state: web::Data<HttpState>,
    form: web::Form<TodoForm>,
) -> ApiResult<HttpResponse> {
    let title = form.into_inner().validate().map_err(invalid_title)?;

    match state.todos.create(&title).await {
        Ok(Some(todo)) => {
            info!(id = %todo.id, "task created");
            Ok(redirect_home())
        }
        Ok(None) => {
            warn!("insert returned no row");
            Err(Error::internal(SAVE_FAILED_MESSAGE))
        }
        Err(_) => Err(Error::internal(SAVE_FAILED_MESSAGE)),
    }
}

/// Overwrite a task's title and finished flag.
#[post("/update/{id:\\d+}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    form: web::Form<UpdateTodoForm>,
) -> ApiResult<HttpResponse> {
    let id = todo_id(path.into_inner())?;
    let title = form.title().map_err(invalid_title)?;

    match state.todos.update(id, &title, form.finished()).await {
        Ok(Some(_)) => info!(%id, "task updated"),
        Ok(None) => warn!(%id, "update matched no task"),
        Err(_) => warn!(%id, "update failed; redirecting anyway"),
    }
    Ok(redirect_home())
}

/// Remove every finished task.
#[post("/delete/finished")]
pub async fn delete_finished(state: web::Data<HttpState>) -> HttpResponse {
    match state.todos.delete_finished().await {
        Ok(removed) => info!(removed, "finished tasks deleted"),
        Err(_) => warn!("deleting finished tasks failed; redirecting anyway"),
    }
    redirect_home()
}

/// Remove a single task.
#[post("/delete/{id:\\d+}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = todo_id(path.into_inner())?;

    match state.todos.delete_one(id).await {
        Ok(true) => info!(%id, "task deleted"),
        Ok(false) => warn!(%id, "delete matched no task"),
        Err(_) => warn!(%id, "delete failed; redirecting anyway"),
    }
    Ok(redirect_home())
}

/// Fallback for every unmatched request.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(NOT_FOUND_MESSAGE))
}

fn path_error(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    warn!(%error, "unusable task id in path");
    Error::not_found(NOT_FOUND_MESSAGE).into()
}

fn form_error(error: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    warn!(%error, "unreadable form body");
    Error::invalid_request(INVALID_TITLE_MESSAGE).into()
}

/// Register the task routes and their extractor error handlers.
///
/// `/delete/finished` is registered ahead of `/delete/{id}` so the literal
/// segment always wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::FormConfig::default().error_handler(form_error))
        .service(list_todos)
        .service(add_todo)
        .service(update_todo)
        .service(delete_finished)
        .service(delete_todo);
}
