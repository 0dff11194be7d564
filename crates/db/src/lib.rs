//! `db` crate — persistence layer for person records.
//!
//! Provides a connection pool, the row struct for the `persons` table,
//! repository functions, and the [`PersonStore`] seam the API is built on.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;
pub mod store;
pub mod mock;

pub use pool::DbPool;
pub use error::DbError;
pub use store::{PersonStore, SqlPersonStore};
