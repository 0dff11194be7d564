//! `client` crate — typed access to the persons REST API and the table model
//! that drives it.
//!
//! [`PersonsClient`] mirrors the five routes one-to-one and folds every
//! response, including transport failures, into a [`Results`] value.
//! [`TableView`] keeps a sortable local copy of the records and applies the
//! outcome of its own add/edit/delete calls to it.

pub mod results;
pub mod persons;
pub mod sort;
pub mod view;

pub use results::Results;
pub use persons::PersonsClient;
pub use sort::{sort_persons, SortKey, SortOrder};
pub use view::{Alert, PersonDraft, TableView, ViewState};
