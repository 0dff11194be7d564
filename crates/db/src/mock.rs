//! `MemoryPersonStore`: an in-memory test double for `PersonStore`.
//!
//! Keeps records in a map, hands out ids that are never reused, and can be
//! switched into a mode where every call fails like an unreachable database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domain::{NewPerson, Person, PersonId};

use crate::{DbError, PersonStore};

/// Behaviour injected into `MemoryPersonStore` at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehaviour {
    /// Serve requests from the in-memory table.
    Serve,
    /// Fail every call with a pool timeout.
    FailAll,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<PersonId, Person>,
    last_id: PersonId,
}

/// In-memory store that records the name of every operation it receives.
#[derive(Debug, Clone)]
pub struct MemoryPersonStore {
    behaviour: MockBehaviour,
    table: Arc<Mutex<Table>>,
    /// Operation names seen by this store (in call order).
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MemoryPersonStore {
    /// Create an empty store that serves requests.
    pub fn new() -> Self {
        Self {
            behaviour: MockBehaviour::Serve,
            table: Arc::new(Mutex::new(Table::default())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with `persons`, keeping their ids.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> Self {
        let store = Self::new();
        {
            let mut table = store.table.lock().unwrap();
            for person in persons {
                table.last_id = table.last_id.max(person.id);
                table.rows.insert(person.id, person);
            }
        }
        store
    }

    /// Create a store whose every call fails with a storage error.
    pub fn failing() -> Self {
        Self {
            behaviour: MockBehaviour::FailAll,
            ..Self::new()
        }
    }

    /// Number of operations this store has handled.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of the stored records ordered by id.
    pub fn snapshot(&self) -> Vec<Person> {
        self.table.lock().unwrap().rows.values().cloned().collect()
    }

    fn enter(&self, op: &'static str) -> Result<std::sync::MutexGuard<'_, Table>, DbError> {
        self.calls.lock().unwrap().push(op);
        match self.behaviour {
            MockBehaviour::Serve => Ok(self.table.lock().unwrap()),
            MockBehaviour::FailAll => Err(DbError::Sqlx(sqlx::Error::PoolTimedOut)),
        }
    }
}

impl Default for MemoryPersonStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, DbError> {
        let table = self.enter("list")?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: PersonId) -> Result<Person, DbError> {
        let table = self.enter("get")?;
        table.rows.get(&id).cloned().ok_or(DbError::NotFound)
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, DbError> {
        let mut table = self.enter("insert")?;
        table.last_id += 1;
        let created = Person::from_new(table.last_id, person.clone());
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: PersonId, person: &NewPerson) -> Result<Person, DbError> {
        let mut table = self.enter("update")?;
        let row = table.rows.get_mut(&id).ok_or(DbError::NotFound)?;
        *row = Person::from_new(id, person.clone());
        Ok(row.clone())
    }

    async fn delete(&self, id: PersonId) -> Result<(), DbError> {
        let mut table = self.enter("delete")?;
        table.rows.remove(&id).map(|_| ()).ok_or(DbError::NotFound)
    }
}
