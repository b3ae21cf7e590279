use crate::state::Notice;
use crate::view_model::{PageView, StatusView};
use crate::{update, AppState, DirectoryOptions, Effect, FilterOptions, LoadError, Msg, Program};

/// Presentation side of the directory. Receives data only.
pub trait ViewRenderer {
    fn on_status(&mut self, _status: &StatusView) {}
    fn on_catalog_loaded(&mut self, catalog: &[Program]);
    fn on_load_failed(&mut self, error: &LoadError);
    fn on_filter_options_changed(&mut self, options: &FilterOptions);
    fn on_page_ready(&mut self, page: &PageView);
}

/// Owns the session state and runs each message to completion, rendering
/// included, before returning.
pub struct Controller<R> {
    state: AppState,
    renderer: R,
}

impl<R: ViewRenderer> Controller<R> {
    pub fn new(options: DirectoryOptions, renderer: R) -> Self {
        Self {
            state: AppState::new(options),
            renderer,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.flush();
        effects
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn flush(&mut self) {
        for notice in self.state.consume_notices() {
            match notice {
                Notice::Status => self.renderer.on_status(&self.state.status()),
                Notice::CatalogLoaded => self.renderer.on_catalog_loaded(self.state.catalog()),
                Notice::LoadFailed => {
                    if let crate::LoadStatus::Failed(err) = self.state.load_status() {
                        self.renderer.on_load_failed(err);
                    }
                }
                Notice::FilterOptionsChanged => self
                    .renderer
                    .on_filter_options_changed(self.state.filter_options()),
                Notice::PageReady => self.renderer.on_page_ready(&self.state.page_view()),
            }
        }
    }
}
