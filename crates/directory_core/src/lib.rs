//! Directory core: response parsing, record mapping, filtering, pagination
//! and the pure session state machine that ties them together.
mod catalog;
mod effect;
mod error;
mod filter;
mod filter_index;
mod msg;
mod options;
mod paginate;
mod record;
mod render;
mod response;
mod source;
mod state;
mod update;
mod view_model;

pub use catalog::build_catalog;
pub use effect::Effect;
pub use error::{LoadError, MalformedResponseError};
pub use filter::{default_search_fields, FilterEngine, FilterState, SearchField};
pub use filter_index::{distinct_cities, distinct_states, FilterOptions};
pub use msg::Msg;
pub use options::{DirectoryOptions, DEFAULT_TIMEOUT_MS};
pub use paginate::{
    ControlKind, PageControl, PageCursor, PageWindow, Paginator, DEFAULT_PAGE_SIZE,
    DEFAULT_WINDOW_WIDTH,
};
pub use record::{display_address, ColumnSchema, Field, Program, RecordMapper, ADDRESS_SEPARATOR};
pub use render::{Controller, ViewRenderer};
pub use response::{parse_response, Cell, Row, Table};
pub use source::{gviz_url, Source, SourceError};
pub use state::{AppState, LoadStatus, Notice};
pub use update::update;
pub use view_model::{
    PageView, StatusKind, StatusView, LOADING_MESSAGE, LOAD_ERROR_MESSAGE, NO_DATA_MESSAGE,
    NO_MATCHES_MESSAGE,
};
