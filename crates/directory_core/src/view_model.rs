use crate::{PageWindow, Program};

pub const LOADING_MESSAGE: &str = "Loading programs…";
pub const NO_DATA_MESSAGE: &str = "No programs found. Check: (1) Sheet sharing is 'Anyone with link can view', (2) Column order matches, (3) Correct sheet tab (gid).";
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading programs. Make sure the Google Sheet is public and the column order is correct.";
pub const NO_MATCHES_MESSAGE: &str = "No matching programs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Idle,
    Loading,
    Ready,
    NoData,
    Error,
}

/// Persistent status line. `message` is `None` once programs are showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusView {
    pub kind: StatusKind,
    pub message: Option<String>,
}

impl StatusView {
    pub(crate) fn of(kind: StatusKind) -> Self {
        let message = match kind {
            StatusKind::Idle | StatusKind::Ready => None,
            StatusKind::Loading => Some(LOADING_MESSAGE),
            StatusKind::NoData => Some(NO_DATA_MESSAGE),
            StatusKind::Error => Some(LOAD_ERROR_MESSAGE),
        };
        Self {
            kind,
            message: message.map(str::to_string),
        }
    }
}

/// One rendered page: the records on it and the navigation around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub programs: Vec<Program>,
    pub window: PageWindow,
    pub total_matches: usize,
    /// Set when the filters match nothing.
    pub empty_message: Option<String>,
}
