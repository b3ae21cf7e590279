use std::sync::LazyLock;

use directory_logging::{directory_debug, directory_warn};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::MalformedResponseError;

/// The gviz JSONP call, with optional trailing `;` and whitespace.
static GVIZ_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((.*)\);?\s*$")
        .expect("gviz wrapper pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "c", default, deserialize_with = "null_as_empty")]
    pub cells: Vec<Option<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "v", default)]
    pub value: Value,
    /// Display string the source formatted for the value, if any.
    #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl Row {
    /// Text of the cell at `index`; missing, null and out-of-range cells read as "".
    pub fn cell_text(&self, index: usize) -> String {
        self.cells
            .get(index)
            .and_then(Option::as_ref)
            .map(Cell::text)
            .unwrap_or_default()
    }
}

impl Cell {
    pub fn text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Number(n) => number_text(n),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self {
            value: Value::String(value.to_string()),
            formatted: None,
        }
    }
}

impl FromIterator<Option<Cell>> for Row {
    fn from_iter<I: IntoIterator<Item = Option<Cell>>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Parse a raw response body into a [`Table`].
///
/// Tries the gviz function-call wrapper first, then falls back to the
/// substring between the first `{` and the last `}`.
pub fn parse_response(text: &str) -> Result<Table, MalformedResponseError> {
    let document = extract_json(text)?;
    table_from_document(document)
}

fn extract_json(text: &str) -> Result<Value, MalformedResponseError> {
    if let Some(payload) = GVIZ_WRAPPER.captures(text).and_then(|caps| caps.get(1)) {
        match serde_json::from_str(payload.as_str()) {
            Ok(value) => return Ok(value),
            Err(err) => directory_debug!("wrapped payload did not parse ({err}); trying brace scan"),
        }
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&text[start..=end])
            .map_err(|err| MalformedResponseError::InvalidJson(err.to_string())),
        _ => Err(MalformedResponseError::NoJson),
    }
}

fn table_from_document(document: Value) -> Result<Table, MalformedResponseError> {
    if document.get("status").and_then(Value::as_str) == Some("error") {
        let message = source_error_message(&document);
        directory_warn!("source reported an error: {message}");
        return Err(MalformedResponseError::SourceError(message));
    }

    let Value::Object(mut root) = document else {
        return Err(MalformedResponseError::MissingTable);
    };
    let table = root
        .remove("table")
        .filter(Value::is_object)
        .ok_or(MalformedResponseError::MissingTable)?;
    if !table.get("rows").is_some_and(Value::is_array) {
        return Err(MalformedResponseError::MissingRows);
    }

    serde_json::from_value(table).map_err(|err| MalformedResponseError::InvalidJson(err.to_string()))
}

fn source_error_message(document: &Value) -> String {
    let first = document
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first());
    ["detailed_message", "message", "reason"]
        .iter()
        .find_map(|key| first.and_then(|e| e.get(*key)).and_then(Value::as_str))
        .unwrap_or("unknown error")
        .to_string()
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Option<Cell>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Option<Cell>>>::deserialize(deserializer)?.unwrap_or_default())
}
