//! Internal Diesel row structs for the `todos` table.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Todo, TodoId};

use super::schema::todos;

/// Row struct for reading from the todos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: i32,
    pub title: String,
    pub finished: bool,
    pub created: DateTime<Utc>,
}

/// Insertable struct for creating new task records.
///
/// `finished` and `created` are left to the column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub title: &'a str,
}

/// Changeset overwriting both mutable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub(crate) struct TodoUpdate<'a> {
    pub title: &'a str,
    pub finished: bool,
}

impl TryFrom<TodoRow> for Todo {
    type Error = String;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let TodoRow {
            id,
            title,
            finished,
            created,
        } = row;
        let id = TodoId::new(id).ok_or_else(|| format!("todo row has non-positive id {id}"))?;
        Ok(Self {
            id,
            title,
            finished,
            created,
        })
    }
}
