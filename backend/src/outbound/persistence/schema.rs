//! Diesel table definition for the `todos` table.
//!
//! Must stay in step with [`CREATE_TODOS_TABLE`], which is what actually
//! creates the table at startup.

diesel::table! {
    /// Task records.
    todos (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Task title (max 255 characters).
        #[max_length = 255]
        title -> Varchar,
        /// Whether the task is done.
        finished -> Bool,
        /// Insert timestamp.
        created -> Timestamptz,
    }
}

/// Idempotent DDL for the `todos` table.
pub const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    finished BOOLEAN NOT NULL DEFAULT false,
    created TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP
)";
