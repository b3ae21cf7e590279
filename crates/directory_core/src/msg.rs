use crate::{LoadError, Program};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Startup (or explicit reload) asked for the catalog at `url`.
    LoadRequested { url: String },
    /// Engine finished a load.
    LoadFinished(Result<Vec<Program>, LoadError>),
    /// User edited the search box.
    QueryChanged(String),
    /// User picked a state; empty means all states.
    StateSelected(String),
    /// User picked a city; empty means all cities.
    CitySelected(String),
    /// User reset query, state and city at once.
    FiltersCleared,
    /// User clicked a page number.
    PageSelected(usize),
    NextPage,
    PrevPage,
    /// Fallback for placeholder wiring.
    NoOp,
}
