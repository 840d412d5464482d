//! Domain primitives and ports.
//!
//! Purpose: define the task record, the title validator, the transport
//! agnostic error type, and the persistence port. Nothing here depends on
//! Actix or Diesel.
//!
//! Public surface:
//! - Todo, TodoId, TodoTitle — the task record and its validated parts.
//! - TitleValidationError — why a submitted title was rejected.
//! - Error, ErrorCode — error payload rendered by the HTTP adapter.
//! - TraceId — request correlation identifier.
//! - ports — the `TodoRepository` port.

pub mod error;
pub mod ports;
pub mod todo;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::todo::{TITLE_MAX, TitleValidationError, Todo, TodoId, TodoTitle};
pub use self::trace_id::TraceId;
