//! Row struct that maps 1-to-1 onto the `persons` table.
//!
//! This is a *persistence* model and carries no domain behaviour.
//! Domain types live in the `domain` crate.

use domain::{Person, PersonId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted person row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonRow {
    pub id: PersonId,
    pub fname: String,
    pub lname: String,
    pub age: u32,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            fname: row.fname,
            lname: row.lname,
            age: row.age,
        }
    }
}
