//! Backend entry-point: loads settings, prepares the store, and serves the
//! task pages.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, create_server, drain_on};
use todo_backend::domain::ports::TodoRepository;
use todo_backend::inbound::http::health::HealthState;
use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env(&DefaultEnv::new()).map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;

    let pool = DbPool::new(
        PoolConfig::new(settings.database_url.as_str()).with_max_size(settings.pool_size),
    )
    .await
    .map_err(|e| {
        error!(error = %e, "database pool construction failed");
        std::io::Error::other(e)
    })?;

    let repository = DieselTodoRepository::new(pool);
    repository.ensure_schema().await.map_err(|e| {
        error!(error = %e, "could not create the todos table");
        std::io::Error::other(e)
    })?;

    settings.check_static_dir();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings, Arc::new(repository))?;
    tokio::spawn(drain_on(health_state, server.handle(), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "could not listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }));
    info!(bind_addr = %settings.bind_addr, "serving task pages");
    server.await
}
