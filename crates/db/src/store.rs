//! The `PersonStore` trait the HTTP layer is written against.

use async_trait::async_trait;
use domain::{NewPerson, Person, PersonId};

use crate::{repository::persons as repo, DbError, DbPool};

/// The five record operations.
///
/// `Err(DbError::NotFound)` is the only classified failure: it is returned
/// when the id matches no row. Any other error is opaque.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, DbError>;

    async fn get(&self, id: PersonId) -> Result<Person, DbError>;

    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, person: &NewPerson) -> Result<Person, DbError>;

    /// Overwrite a record and echo the submitted fields back.
    async fn update(&self, id: PersonId, person: &NewPerson) -> Result<Person, DbError>;

    async fn delete(&self, id: PersonId) -> Result<(), DbError>;
}

/// `PersonStore` backed by the SQL repository functions.
#[derive(Debug, Clone)]
pub struct SqlPersonStore {
    pool: DbPool,
}

impl SqlPersonStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl PersonStore for SqlPersonStore {
    async fn list(&self) -> Result<Vec<Person>, DbError> {
        let rows = repo::list_persons(&self.pool).await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get(&self, id: PersonId) -> Result<Person, DbError> {
        repo::get_person(&self.pool, id).await.map(Person::from)
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, DbError> {
        repo::insert_person(&self.pool, person).await
    }

    async fn update(&self, id: PersonId, person: &NewPerson) -> Result<Person, DbError> {
        repo::update_person(&self.pool, id, person).await
    }

    async fn delete(&self, id: PersonId) -> Result<(), DbError> {
        repo::delete_person(&self.pool, id).await
    }
}
