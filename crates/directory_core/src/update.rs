use directory_logging::{directory_debug, directory_info, directory_warn};

use crate::{AppState, Effect, LoadError, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested { url } => {
            if state.is_loading() {
                directory_info!("load already in flight; ignoring request for {url}");
                return (state, Vec::new());
            }
            state.begin_load();
            vec![Effect::LoadCatalog {
                url,
                options: state.options().clone(),
            }]
        }
        Msg::LoadFinished(result) => {
            if !state.is_loading() {
                directory_warn!("load result arrived with no load in flight; dropped");
                return (state, Vec::new());
            }
            match result {
                Ok(catalog) if catalog.is_empty() => state.fail_load(LoadError::EmptyCatalog),
                Ok(catalog) => {
                    directory_info!("catalog loaded with {} programs", catalog.len());
                    state.finish_load(catalog);
                }
                Err(err) => {
                    directory_warn!("catalog load failed ({}): {err}", err.kind());
                    state.fail_load(err);
                }
            }
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::StateSelected(selected) => {
            if state.set_state(selected) {
                directory_debug!(
                    "state filter now {:?}, city {:?}",
                    state.filter().state,
                    state.filter().city
                );
            }
            Vec::new()
        }
        Msg::CitySelected(city) => {
            state.set_city(city);
            Vec::new()
        }
        Msg::FiltersCleared => {
            state.clear_filters();
            Vec::new()
        }
        Msg::PageSelected(page) => {
            state.select_page(page);
            Vec::new()
        }
        Msg::NextPage => {
            state.next_page();
            Vec::new()
        }
        Msg::PrevPage => {
            state.prev_page();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
