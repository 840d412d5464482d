//! Server construction and middleware wiring.

mod config;

pub use config::AppSettings;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use actix_files::Files;
use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use todo_backend::Trace;
use todo_backend::domain::ports::TodoRepository;
use todo_backend::inbound::http::health::{HealthState, live, ready};
use todo_backend::inbound::http::state::HttpState;
use todo_backend::inbound::http::todos::{configure, not_found};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    static_dir: PathBuf,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        static_dir,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .service(Files::new("/static", static_dir).default_handler(web::to(not_found)))
        .configure(configure)
        .default_service(web::to(not_found))
}

/// Construct an Actix HTTP server serving the task pages.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &AppSettings,
    todos: Arc<dyn TodoRepository>,
) -> std::io::Result<Server> {
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: web::Data::new(HttpState::new(todos)),
        static_dir: settings.static_dir.clone(),
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(settings.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Wait for `signal`, fail liveness probes, then stop the server gracefully.
pub async fn drain_on(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    signal: impl Future<Output = ()>,
) {
    signal.await;
    info!("shutdown requested; draining");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}
