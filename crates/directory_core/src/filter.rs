use serde::{Deserialize, Serialize};

use crate::Program;

/// Current query and selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub state: String,
    pub city: String,
}

/// Program fields the free-text query can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Website,
    AddressLine,
    /// The joined display address.
    Address,
    City,
    State,
    Zip,
    Email,
    Phone,
}

impl SearchField {
    fn read(self, program: &Program) -> &str {
        match self {
            SearchField::Name => &program.name,
            SearchField::Website => &program.website,
            SearchField::AddressLine => &program.address_line,
            SearchField::Address => &program.address,
            SearchField::City => &program.city,
            SearchField::State => &program.state,
            SearchField::Zip => &program.zip,
            SearchField::Email => &program.email,
            SearchField::Phone => &program.phone,
        }
    }
}

pub fn default_search_fields() -> Vec<SearchField> {
    vec![
        SearchField::Name,
        SearchField::AddressLine,
        SearchField::City,
        SearchField::State,
        SearchField::Zip,
    ]
}

/// Comparison form used by every filter: trimmed and lowercased.
pub(crate) fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEngine {
    match_fields: Vec<SearchField>,
}

impl FilterEngine {
    /// `Name` is always searched, whether or not it is listed.
    pub fn new(mut match_fields: Vec<SearchField>) -> Self {
        if !match_fields.contains(&SearchField::Name) {
            match_fields.insert(0, SearchField::Name);
        }
        Self { match_fields }
    }

    pub fn match_fields(&self) -> &[SearchField] {
        &self.match_fields
    }

    /// Indices into `catalog` of every matching program, in catalog order.
    pub fn apply(&self, catalog: &[Program], filter: &FilterState) -> Vec<usize> {
        let predicate = Predicate::new(filter);
        catalog
            .iter()
            .enumerate()
            .filter(|(_, program)| self.matches(&predicate, program))
            .map(|(index, _)| index)
            .collect()
    }

    /// Matching programs themselves, in catalog order.
    pub fn filter<'a>(&self, catalog: &'a [Program], filter: &FilterState) -> Vec<&'a Program> {
        let predicate = Predicate::new(filter);
        catalog
            .iter()
            .filter(|program| self.matches(&predicate, program))
            .collect()
    }

    fn matches(&self, predicate: &Predicate, program: &Program) -> bool {
        let state_ok = predicate.state.is_empty() || fold(&program.state) == predicate.state;
        let city_ok = predicate.city.is_empty() || fold(&program.city) == predicate.city;
        let query_ok = predicate.query.is_empty()
            || self
                .match_fields
                .iter()
                .any(|field| fold(field.read(program)).contains(&predicate.query));
        state_ok && city_ok && query_ok
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(default_search_fields())
    }
}

struct Predicate {
    query: String,
    state: String,
    city: String,
}

impl Predicate {
    fn new(filter: &FilterState) -> Self {
        Self {
            query: fold(&filter.query),
            state: fold(&filter.state),
            city: fold(&filter.city),
        }
    }
}
