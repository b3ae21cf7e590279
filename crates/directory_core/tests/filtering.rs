use directory_core::{
    distinct_cities, distinct_states, FilterEngine, FilterState, Program, SearchField,
};
use pretty_assertions::assert_eq;

fn program(name: &str, city: &str, state: &str, zip: &str) -> Program {
    Program {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
        address_line: format!("{} Main St", name.len()),
        ..Program::default()
    }
}

fn catalog() -> Vec<Program> {
    vec![
        program("Bay Food Bank", "Oakland", "CA", "94607"),
        program("Harbor Shelter", "New York", "NY", "10001"),
        program("Valley Clinic", "Fresno", "CA", "93701"),
        program("Legal Aid", "Albany", "NY", "12207"),
        program("Coastal Housing", "oakland", "ca", "94610"),
    ]
}

fn filter(query: &str, state: &str, city: &str) -> FilterState {
    FilterState {
        query: query.to_string(),
        state: state.to_string(),
        city: city.to_string(),
    }
}

fn names(programs: &[&Program]) -> Vec<String> {
    programs.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn empty_filter_keeps_catalog_order() {
    let catalog = catalog();
    let engine = FilterEngine::default();
    assert_eq!(
        engine.apply(&catalog, &FilterState::default()),
        vec![0, 1, 2, 3, 4]
    );
}

#[test]
fn state_filter_selects_ca_and_narrows_cities() {
    let catalog = catalog();
    let engine = FilterEngine::default();
    let matched = engine.filter(&catalog, &filter("", "CA", ""));
    assert_eq!(
        names(&matched),
        vec!["Bay Food Bank", "Valley Clinic", "Coastal Housing"]
    );
    assert_eq!(distinct_cities(&catalog, "CA"), vec!["Fresno", "Oakland"]);
}

#[test]
fn predicates_combine_with_and() {
    let catalog = catalog();
    let engine = FilterEngine::default();
    let matched = engine.filter(&catalog, &filter("housing", "ca", "OAKLAND"));
    assert_eq!(names(&matched), vec!["Coastal Housing"]);
    assert!(engine.filter(&catalog, &filter("clinic", "NY", "")).is_empty());
}

#[test]
fn query_fields_are_configurable() {
    let catalog = catalog();
    let by_zip = filter("1000", "", "");

    let name_only = FilterEngine::new(vec![SearchField::Name]);
    assert!(name_only.filter(&catalog, &by_zip).is_empty());

    let with_zip = FilterEngine::new(vec![SearchField::Name, SearchField::Zip]);
    assert_eq!(names(&with_zip.filter(&catalog, &by_zip)), vec!["Harbor Shelter"]);
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let catalog = catalog();
    let engine = FilterEngine::default();
    let matched = engine.filter(&catalog, &filter("  LEGAL ", "", ""));
    assert_eq!(names(&matched), vec!["Legal Aid"]);
}

#[test]
fn filtering_is_idempotent_and_leaves_catalog_alone() {
    let catalog = catalog();
    let before = catalog.clone();
    let engine = FilterEngine::default();
    let state = filter("a", "NY", "");
    let first = engine.apply(&catalog, &state);
    let second = engine.apply(&catalog, &state);
    assert_eq!(first, second);
    assert_eq!(catalog, before);
}

#[test]
fn cities_never_leak_from_other_states() {
    let catalog = catalog();
    for state in distinct_states(&catalog) {
        let allowed: Vec<String> = catalog
            .iter()
            .filter(|p| p.state.eq_ignore_ascii_case(&state))
            .map(|p| p.city.to_lowercase())
            .collect();
        for city in distinct_cities(&catalog, &state) {
            assert!(allowed.contains(&city.to_lowercase()), "{city} not in {state}");
        }
    }
}

#[test]
fn distinct_values_skip_blanks_and_sort() {
    let mut catalog = catalog();
    catalog.push(program("No Location", "", "", ""));
    assert_eq!(distinct_states(&catalog), vec!["CA", "NY"]);
    assert_eq!(
        distinct_cities(&catalog, ""),
        vec!["Albany", "Fresno", "New York", "Oakland"]
    );
}
