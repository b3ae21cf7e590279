use std::collections::BTreeSet;

use crate::view_model::{PageView, StatusKind, StatusView, NO_MATCHES_MESSAGE};
use crate::{
    DirectoryOptions, FilterEngine, FilterOptions, FilterState, LoadError, PageCursor, Paginator,
    Program,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(LoadError),
}

/// Renderer callbacks owed after an update, delivered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Notice {
    Status,
    CatalogLoaded,
    LoadFailed,
    FilterOptionsChanged,
    PageReady,
}

/// Everything one directory session knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    options: DirectoryOptions,
    engine: FilterEngine,
    paginator: Paginator,
    load: LoadStatus,
    catalog: Vec<Program>,
    filter: FilterState,
    filter_options: FilterOptions,
    filtered: Vec<usize>,
    cursor: PageCursor,
    notices: BTreeSet<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DirectoryOptions::default())
    }
}

impl AppState {
    pub fn new(options: DirectoryOptions) -> Self {
        Self {
            engine: options.filter_engine(),
            paginator: options.paginator(),
            cursor: options.cursor(),
            options,
            load: LoadStatus::Idle,
            catalog: Vec::new(),
            filter: FilterState::default(),
            filter_options: FilterOptions::default(),
            filtered: Vec::new(),
            notices: BTreeSet::new(),
        }
    }

    pub fn options(&self) -> &DirectoryOptions {
        &self.options
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Loading
    }

    pub fn catalog(&self) -> &[Program] {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    pub fn filtered(&self) -> Vec<&Program> {
        self.filtered.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current_page()
    }

    pub fn status(&self) -> StatusView {
        StatusView::of(match &self.load {
            LoadStatus::Idle => StatusKind::Idle,
            LoadStatus::Loading => StatusKind::Loading,
            LoadStatus::Loaded => StatusKind::Ready,
            LoadStatus::Failed(err) if err.is_no_data() => StatusKind::NoData,
            LoadStatus::Failed(_) => StatusKind::Error,
        })
    }

    pub fn page_view(&self) -> PageView {
        let mut cursor = self.cursor;
        let window = self.paginator.paginate(self.filtered.len(), &mut cursor);
        let programs = self.filtered[window.range.clone()]
            .iter()
            .map(|&i| self.catalog[i].clone())
            .collect();
        PageView {
            programs,
            total_matches: self.filtered.len(),
            empty_message: self
                .filtered
                .is_empty()
                .then(|| NO_MATCHES_MESSAGE.to_string()),
            window,
        }
    }

    /// Drains owed renderer callbacks in delivery order.
    pub fn consume_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices).into_iter().collect()
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.insert(notice);
    }

    pub(crate) fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
        self.notify(Notice::Status);
    }

    pub(crate) fn finish_load(&mut self, catalog: Vec<Program>) {
        self.catalog = catalog;
        self.load = LoadStatus::Loaded;
        self.notify(Notice::Status);
        self.notify(Notice::CatalogLoaded);
        self.refresh_options();
        self.refilter();
    }

    /// Hard failures keep the previous catalog. An empty source replaces it.
    pub(crate) fn fail_load(&mut self, error: LoadError) {
        let no_data = error.is_no_data();
        self.load = LoadStatus::Failed(error);
        self.notify(Notice::Status);
        self.notify(Notice::LoadFailed);
        if no_data {
            self.catalog.clear();
            self.refresh_options();
            self.refilter();
        } else {
            self.notify(Notice::FilterOptionsChanged);
        }
    }

    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.filter.query == query {
            return false;
        }
        self.filter.query = query;
        self.refilter();
        true
    }

    pub(crate) fn set_state(&mut self, state: String) -> bool {
        if self.filter.state == state {
            return false;
        }
        self.filter.state = state;
        self.refresh_options();
        self.refilter();
        true
    }

    pub(crate) fn set_city(&mut self, city: String) -> bool {
        if self.filter.city == city {
            return false;
        }
        self.filter.city = city;
        self.refilter();
        true
    }

    pub(crate) fn clear_filters(&mut self) -> bool {
        if self.filter == FilterState::default() {
            return false;
        }
        self.filter = FilterState::default();
        self.refresh_options();
        self.refilter();
        true
    }

    pub(crate) fn select_page(&mut self, page: usize) {
        self.move_cursor(|cursor, count| cursor.set(page, count));
    }

    pub(crate) fn next_page(&mut self) {
        self.move_cursor(PageCursor::next);
    }

    pub(crate) fn prev_page(&mut self) {
        self.move_cursor(PageCursor::prev);
    }

    fn move_cursor(&mut self, step: impl FnOnce(&mut PageCursor, usize)) {
        let before = self.cursor.current_page();
        step(&mut self.cursor, self.filtered.len());
        if self.cursor.current_page() != before {
            self.notify(Notice::PageReady);
        }
    }

    // A selected city that the new state no longer offers is dropped.
    fn refresh_options(&mut self) {
        self.filter_options = FilterOptions::compute(&self.catalog, &self.filter.state);
        if !self.filter.city.trim().is_empty() && !self.filter_options.has_city(&self.filter.city) {
            self.filter.city.clear();
        }
        self.notify(Notice::FilterOptionsChanged);
    }

    fn refilter(&mut self) {
        self.filtered = self.engine.apply(&self.catalog, &self.filter);
        self.cursor.reset();
        self.notify(Notice::PageReady);
    }
}
