//! Column sorting for the persons table.

use std::cmp::Ordering;

use domain::Person;

/// Sortable table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Id,
    FirstName,
    LastName,
    Age,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Id, SortKey::FirstName, SortKey::LastName, SortKey::Age];

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            SortKey::Id => "#",
            SortKey::FirstName => "Firstname",
            SortKey::LastName => "Lastname",
            SortKey::Age => "Age",
        }
    }

    fn compare(self, a: &Person, b: &Person) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::FirstName => a.fname.cmp(&b.fname),
            SortKey::LastName => a.lname.cmp(&b.lname),
            SortKey::Age => a.age.cmp(&b.age),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id"    => Ok(Self::Id),
            "fname" => Ok(Self::FirstName),
            "lname" => Ok(Self::LastName),
            "age"   => Ok(Self::Age),
            other   => Err(format!("unknown sort column: {other}")),
        }
    }
}

/// Active column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self { key: SortKey::Id, ascending: true }
    }
}

impl SortOrder {
    /// Header click: flip direction on the active column, otherwise switch
    /// column and keep the direction.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.ascending = !self.ascending;
        } else {
            self.key = key;
        }
    }
}

/// Stable sort; rows with equal keys keep their relative order in both
/// directions.
pub fn sort_persons(persons: &mut [Person], order: SortOrder) {
    if order.ascending {
        persons.sort_by(|a, b| order.key.compare(a, b));
    } else {
        persons.sort_by(|a, b| order.key.compare(b, a));
    }
}
