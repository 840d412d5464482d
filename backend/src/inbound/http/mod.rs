//! HTTP inbound adapter serving the task pages.

pub mod error;
pub mod forms;
pub mod health;
pub mod state;
pub mod todos;
pub mod views;

pub use error::ApiResult;
