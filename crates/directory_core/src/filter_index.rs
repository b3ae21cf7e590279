use std::collections::BTreeMap;

use crate::filter::fold;
use crate::Program;

/// Selectable values for the state and city filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

impl FilterOptions {
    pub fn compute(catalog: &[Program], selected_state: &str) -> Self {
        Self {
            states: distinct_states(catalog),
            cities: distinct_cities(catalog, selected_state),
        }
    }

    pub fn has_city(&self, city: &str) -> bool {
        let wanted = fold(city);
        self.cities.iter().any(|c| fold(c) == wanted)
    }
}

/// Distinct non-blank states, ordered case-insensitively.
pub fn distinct_states(catalog: &[Program]) -> Vec<String> {
    distinct(catalog.iter().map(|p| p.state.as_str()))
}

/// Distinct non-blank cities of programs in `selected_state`, or of all
/// programs when no state is selected.
pub fn distinct_cities(catalog: &[Program], selected_state: &str) -> Vec<String> {
    let state = fold(selected_state);
    distinct(
        catalog
            .iter()
            .filter(|p| state.is_empty() || fold(&p.state) == state)
            .map(|p| p.city.as_str()),
    )
}

// Keyed by folded value: duplicates differing only in case collapse to the
// first spelling seen.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique = BTreeMap::new();
    for value in values.filter(|v| !v.is_empty()) {
        unique.entry(fold(value)).or_insert_with(|| value.to_string());
    }
    unique.into_values().collect()
}
