//! Person CRUD operations.

use domain::{NewPerson, Person, PersonId};
use tracing::{debug, info};

use crate::{models::PersonRow, DbError, DbPool};

/// Return every person. No ordering is guaranteed; sorting is up to the caller.
pub async fn list_persons(pool: &DbPool) -> Result<Vec<PersonRow>, DbError> {
    let rows = sqlx::query_as::<_, PersonRow>("SELECT id, fname, lname, age FROM persons")
        .fetch_all(pool)
        .await?;

    debug!("fetched {} persons", rows.len());
    Ok(rows)
}

/// Fetch a single person by primary key.
///
/// Returns `DbError::NotFound` if no row matches.
pub async fn get_person(pool: &DbPool, id: PersonId) -> Result<PersonRow, DbError> {
    let row = sqlx::query_as::<_, PersonRow>(
        "SELECT id, fname, lname, age FROM persons WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    debug!("found person {:?}", row);
    Ok(row)
}

/// Insert a new person. The database assigns the id.
pub async fn insert_person(pool: &DbPool, person: &NewPerson) -> Result<Person, DbError> {
    let result = sqlx::query("INSERT INTO persons (fname, lname, age) VALUES (?, ?, ?)")
        .bind(&person.fname)
        .bind(&person.lname)
        .bind(person.age)
        .execute(pool)
        .await?;

    let created = Person::from_new(result.last_insert_rowid(), person.clone());
    info!("created person {}", created.id);
    Ok(created)
}

/// Overwrite every field of an existing person.
///
/// The returned record echoes the submitted fields; storage is not re-read.
/// Returns `DbError::NotFound` if no row was updated.
pub async fn update_person(
    pool: &DbPool,
    id: PersonId,
    person: &NewPerson,
) -> Result<Person, DbError> {
    let result = sqlx::query("UPDATE persons SET fname = ?, lname = ?, age = ? WHERE id = ?")
        .bind(&person.fname)
        .bind(&person.lname)
        .bind(person.age)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        debug!("no person with id {}", id);
        return Err(DbError::NotFound);
    }

    info!("updated person {}", id);
    Ok(Person::from_new(id, person.clone()))
}

/// Permanently delete a person by primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_person(pool: &DbPool, id: PersonId) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM persons WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    info!("deleted person {}", id);
    Ok(())
}
