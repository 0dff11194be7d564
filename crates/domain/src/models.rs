//! Core domain models for person records.
//!
//! `Person` is what the database hands back; `NewPerson` is a validated
//! payload that has not been assigned an id yet; `PersonInput` is the
//! loosely-typed shape accepted from request bodies and form fields.

use serde::{Deserialize, Serialize};

/// Database-assigned primary key.
pub type PersonId = i64;

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A persisted person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub fname: String,
    pub lname: String,
    pub age: u32,
}

impl Person {
    /// Attach an id to a validated payload.
    pub fn from_new(id: PersonId, new: NewPerson) -> Self {
        Self {
            id,
            fname: new.fname,
            lname: new.lname,
            age: new.age,
        }
    }

    /// The editable fields of this record.
    pub fn fields(&self) -> NewPerson {
        NewPerson {
            fname: self.fname.clone(),
            lname: self.lname.clone(),
            age: self.age,
        }
    }
}

// ---------------------------------------------------------------------------
// NewPerson
// ---------------------------------------------------------------------------

/// Validated field payload for inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub fname: String,
    pub lname: String,
    pub age: u32,
}

// ---------------------------------------------------------------------------
// PersonInput
// ---------------------------------------------------------------------------

/// Raw age value: JSON number or text typed into a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(serde_json::Number),
    Text(String),
}

impl From<u32> for AgeInput {
    fn from(age: u32) -> Self {
        AgeInput::Number(age.into())
    }
}

impl From<&str> for AgeInput {
    fn from(age: &str) -> Self {
        AgeInput::Text(age.to_owned())
    }
}

/// Unvalidated person payload.
///
/// Missing and `null` fields both deserialize to `None`; anything that is
/// not a string (names) or a number/string (age) fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub age: Option<AgeInput>,
}

impl PersonInput {
    pub fn new(
        fname: impl Into<String>,
        lname: impl Into<String>,
        age: impl Into<AgeInput>,
    ) -> Self {
        Self {
            fname: Some(fname.into()),
            lname: Some(lname.into()),
            age: Some(age.into()),
        }
    }
}

impl From<&NewPerson> for PersonInput {
    fn from(p: &NewPerson) -> Self {
        Self::new(p.fname.clone(), p.lname.clone(), p.age)
    }
}
