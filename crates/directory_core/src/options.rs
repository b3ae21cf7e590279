use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::filter::default_search_fields;
use crate::paginate::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_WIDTH};
use crate::{ColumnSchema, FilterEngine, PageCursor, Paginator, RecordMapper, SearchField};

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Policy knobs for one directory session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryOptions {
    pub schema: ColumnSchema,
    /// Drop rows whose name cell is blank.
    pub drop_blank_name: bool,
    /// Fields the free-text query is matched against.
    pub match_fields: Vec<SearchField>,
    pub page_size: usize,
    pub window_width: usize,
    pub timeout_ms: u64,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            schema: ColumnSchema::default(),
            drop_blank_name: true,
            match_fields: default_search_fields(),
            page_size: DEFAULT_PAGE_SIZE,
            window_width: DEFAULT_WINDOW_WIDTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl DirectoryOptions {
    pub fn mapper(&self) -> RecordMapper {
        RecordMapper::new(self.schema.clone(), self.drop_blank_name)
    }

    pub fn filter_engine(&self) -> FilterEngine {
        FilterEngine::new(self.match_fields.clone())
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.window_width)
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(self.page_size)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
