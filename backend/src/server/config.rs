//! Application settings loaded from the environment.
//!
//! Only `DATABASE_URL` is required; everything else falls back to a default
//! suitable for running the service locally. The default static directory
//! is relative to the working directory, so either start the binary from
//! `backend/` or point `TODO_STATIC_DIR` at `backend/static`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::path::PathBuf;

use mockable::Env;
use tracing::{debug, warn};

pub(crate) const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub(crate) const BIND_ADDR_ENV: &str = "TODO_BIND_ADDR";
pub(crate) const STATIC_DIR_ENV: &str = "TODO_STATIC_DIR";
pub(crate) const POOL_SIZE_ENV: &str = "TODO_DB_POOL_SIZE";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading settings.
#[derive(thiserror::Error, Debug)]
pub enum AppConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the binary needs before it can start serving.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub pool_size: u32,
}

impl AppSettings {
    /// Read settings through `env`.
    ///
    /// # Errors
    /// Returns [`AppConfigError::MissingEnv`] when `DATABASE_URL` is unset or
    /// blank, and [`AppConfigError::InvalidEnv`] for unparsable optional
    /// values.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, AppConfigError> {
        let database_url = env
            .string(DATABASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or(AppConfigError::MissingEnv {
                name: DATABASE_URL_ENV,
            })?;

        Ok(Self {
            database_url,
            bind_addr: bind_addr_from_env(env)?,
            static_dir: env
                .string(STATIC_DIR_ENV)
                .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
            pool_size: pool_size_from_env(env)?,
        })
    }
}

impl AppSettings {
    /// Warn when the static directory does not exist. Returns whether it does.
    pub fn check_static_dir(&self) -> bool {
        let present = self.static_dir.is_dir();
        if !present {
            warn!(
                static_dir = %self.static_dir.display(),
                "static directory not found; set TODO_STATIC_DIR or start from backend/"
            );
        }
        present
    }
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, AppConfigError> {
    let Some(value) = env.string(BIND_ADDR_ENV) else {
        debug!(default = %DEFAULT_BIND_ADDR, "TODO_BIND_ADDR not set");
        return Ok(DEFAULT_BIND_ADDR);
    };
    value.parse().map_err(|_| AppConfigError::InvalidEnv {
        name: BIND_ADDR_ENV,
        value,
        expected: "host:port",
    })
}

fn pool_size_from_env<E: Env>(env: &E) -> Result<u32, AppConfigError> {
    let Some(value) = env.string(POOL_SIZE_ENV) else {
        return Ok(DEFAULT_POOL_SIZE);
    };
    value
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .map_err(|_| AppConfigError::InvalidEnv {
            name: POOL_SIZE_ENV,
            value,
            expected: "a positive integer",
        })
}
