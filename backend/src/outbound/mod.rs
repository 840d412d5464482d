//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed task storage using Diesel ORM
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no request handling logic.

pub mod persistence;
