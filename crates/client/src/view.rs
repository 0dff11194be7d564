//! Table model for the persons list.
//!
//! The view starts in [`ViewState::Loading`] and becomes
//! [`ViewState::Loaded`] once [`TableView::refresh`] has run. After that the
//! local records change only when one of the view's own requests succeeds;
//! a refresh is the only way to pick up changes made elsewhere.
//!
//! Mutating calls take `&mut self`, so a view never has more than one
//! request in flight.

use std::collections::HashMap;
use std::fmt::Write as _;

use domain::{sanitize_age_input, validate_new_person, AgeInput, Person, PersonId, PersonInput};
use tracing::debug;

use crate::{sort_persons, PersonsClient, Results, SortKey, SortOrder};

/// Receives the outcome of every action.
pub trait Alert {
    fn alert(&mut self, success: bool, message: &str, errors: &[String]);
}

impl<F> Alert for F
where
    F: FnMut(bool, &str, &[String]),
{
    fn alert(&mut self, success: bool, message: &str, errors: &[String]) {
        self(success, message, errors)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(Vec<Person>),
}

/// Text typed into a row's inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub fname: String,
    pub lname: String,
    age: String,
}

impl PersonDraft {
    pub fn new(fname: impl Into<String>, lname: impl Into<String>, age: &str) -> Self {
        let mut draft = Self { fname: fname.into(), lname: lname.into(), age: String::new() };
        draft.set_age(age);
        draft
    }

    /// Only the first run of digits is kept.
    pub fn set_age(&mut self, raw: &str) {
        self.age = sanitize_age_input(raw);
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    fn input(&self) -> PersonInput {
        PersonInput {
            fname: Some(self.fname.clone()),
            lname: Some(self.lname.clone()),
            age: Some(AgeInput::Text(self.age.clone())),
        }
    }
}

impl From<&Person> for PersonDraft {
    fn from(person: &Person) -> Self {
        Self::new(person.fname.clone(), person.lname.clone(), &person.age.to_string())
    }
}

/// Sortable, editable mirror of the server's records.
#[derive(Debug, Clone)]
pub struct TableView {
    state: ViewState,
    order: SortOrder,
    new_person: PersonDraft,
    edits: HashMap<PersonId, PersonDraft>,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            order: SortOrder::default(),
            new_person: PersonDraft::default(),
            edits: HashMap::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// Records in the current sort order. Empty while loading.
    pub fn rows(&self) -> Vec<Person> {
        let mut rows = match &self.state {
            ViewState::Loading => Vec::new(),
            ViewState::Loaded(persons) => persons.clone(),
        };
        sort_persons(&mut rows, self.order);
        rows
    }

    pub fn sort_by_column(&mut self, key: SortKey) {
        self.order.toggle(key);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Replace the local records with the server's.
    pub async fn refresh(&mut self, client: &PersonsClient, alert: &mut impl Alert) {
        self.state = ViewState::Loading;
        let results = client.fetch_persons().await;
        let persons = results.data.clone().unwrap_or_default();
        debug!("loaded {} persons", persons.len());
        self.state = ViewState::Loaded(persons);
        report(alert, &results);
    }

    // -----------------------------------------------------------------------
    // Add row
    // -----------------------------------------------------------------------

    pub fn new_person(&self) -> &PersonDraft {
        &self.new_person
    }

    pub fn new_person_mut(&mut self) -> &mut PersonDraft {
        &mut self.new_person
    }

    /// Validate the add-row inputs and create the record. The returned record
    /// is appended locally only on success.
    pub async fn add(&mut self, client: &PersonsClient, alert: &mut impl Alert) {
        let person = match validate_new_person(&self.new_person.input()) {
            Ok(person) => person,
            Err(e) => {
                alert.alert(false, "Invalid input!", e.messages());
                return;
            }
        };

        let results = client.add_person(&person).await;
        if let (true, Some(created)) = (results.is_success(), results.data.clone()) {
            if let Some(persons) = self.persons_mut() {
                persons.push(created);
            }
            self.new_person = PersonDraft::default();
        }
        report(alert, &results);
    }

    // -----------------------------------------------------------------------
    // Per-row edit / delete
    // -----------------------------------------------------------------------

    /// Put a row into edit mode, seeding its inputs from the record.
    pub fn start_edit(&mut self, id: PersonId) -> bool {
        match self.find(id).map(PersonDraft::from) {
            Some(draft) => {
                self.edits.insert(id, draft);
                true
            }
            None => false,
        }
    }

    pub fn is_editing(&self, id: PersonId) -> bool {
        self.edits.contains_key(&id)
    }

    pub fn draft_mut(&mut self, id: PersonId) -> Option<&mut PersonDraft> {
        self.edits.get_mut(&id)
    }

    pub fn cancel_edit(&mut self, id: PersonId) {
        self.edits.remove(&id);
    }

    /// Send the row's draft. Edit mode ends whatever the outcome; the local
    /// row is replaced only on success.
    pub async fn save_edit(&mut self, id: PersonId, client: &PersonsClient, alert: &mut impl Alert) {
        let Some(draft) = self.edits.remove(&id) else {
            return;
        };
        let fields = match validate_new_person(&draft.input()) {
            Ok(fields) => fields,
            Err(e) => {
                alert.alert(false, "Invalid input!", e.messages());
                return;
            }
        };

        let results = client.edit_person(&Person::from_new(id, fields)).await;
        if let (true, Some(updated)) = (results.is_success(), results.data.clone()) {
            if let Some(row) = self.persons_mut().and_then(|ps| ps.iter_mut().find(|p| p.id == id)) {
                *row = updated;
            }
        }
        report(alert, &results);
    }

    /// Delete a row on the server, then locally if that succeeded.
    pub async fn delete(&mut self, id: PersonId, client: &PersonsClient, alert: &mut impl Alert) {
        let results = client.delete_person(id).await;
        if results.is_success() {
            if let Some(persons) = self.persons_mut() {
                persons.retain(|p| p.id != id);
            }
            self.edits.remove(&id);
        }
        report(alert, &results);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Plain-text table; the active column carries `^` or `v`.
    pub fn render(&self) -> String {
        if self.state == ViewState::Loading {
            return "Loading...\n".to_owned();
        }

        let header: Vec<String> = SortKey::ALL
            .iter()
            .map(|&key| {
                let arrow = match (key == self.order.key, self.order.ascending) {
                    (true, true) => " ^",
                    (true, false) => " v",
                    (false, _) => "",
                };
                format!("{}{}", key.title(), arrow)
            })
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "{:<8} {:<20} {:<20} {:<6}", header[0], header[1], header[2], header[3]);
        for p in self.rows() {
            let _ = writeln!(out, "{:<8} {:<20} {:<20} {:<6}", p.id, p.fname, p.lname, p.age);
        }
        out
    }

    fn find(&self, id: PersonId) -> Option<&Person> {
        match &self.state {
            ViewState::Loaded(persons) => persons.iter().find(|p| p.id == id),
            ViewState::Loading => None,
        }
    }

    /// Local records; `None` until the first refresh has landed.
    fn persons_mut(&mut self) -> Option<&mut Vec<Person>> {
        match &mut self.state {
            ViewState::Loaded(persons) => Some(persons),
            ViewState::Loading => None,
        }
    }
}

fn report<T>(alert: &mut impl Alert, results: &Results<T>) {
    alert.alert(results.is_success(), &results.message, &results.errors);
}
